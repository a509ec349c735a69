use crate::types::records::EventRecord;
use reqwest::blocking::Client;
use std::path::Path;
use thiserror::Error;

/// Why an events feed could not be loaded. `load_events` logs these and
/// degrades to an empty feed.
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("events feed returned HTTP {status}")]
    Status { status: u16 },

    #[error("invalid events JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Loads the events feed from an HTTP(S) URL or a local path (relative
/// paths resolve against `root`). Any failure degrades to an empty feed.
pub fn load_events(root: &Path, location: &str) -> Vec<EventRecord> {
    let loaded = if is_remote(location) {
        fetch_remote(&Client::new(), location)
    } else {
        read_local(&root.join(location))
    };

    match loaded {
        Ok(events) => {
            tracing::info!(count = events.len(), source = location, "events loaded");
            events
        }
        Err(err) => {
            tracing::warn!(source = location, "events unavailable, using empty feed: {err}");
            Vec::new()
        }
    }
}

fn read_local(path: &Path) -> Result<Vec<EventRecord>, EventsError> {
    let content = std::fs::read_to_string(path).map_err(|source| EventsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_events(&content)
}

fn fetch_remote(http: &Client, url: &str) -> Result<Vec<EventRecord>, EventsError> {
    let response = http.get(url).send()?;
    if !response.status().is_success() {
        return Err(EventsError::Status {
            status: response.status().as_u16(),
        });
    }
    let body = response.text()?;
    parse_events(&body)
}

/// Elements that are not event objects are dropped individually.
pub fn parse_events(content: &str) -> Result<Vec<EventRecord>, EventsError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(content)?;
    Ok(values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

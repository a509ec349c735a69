use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A pull request as the aggregator sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    pub author: Option<String>,
    pub merged_at: Option<DateTime<Utc>>,
    pub labels: Vec<String>,
}

#[cfg(test)]
impl PullRequestRecord {
    pub fn merged(author: &str, merged_at: DateTime<Utc>, labels: &[&str]) -> Self {
        Self {
            author: Some(author.to_string()),
            merged_at: Some(merged_at),
            labels: labels.iter().map(|label| label.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireUser {
    login: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireLabel {
    name: Option<String>,
}

/// Wire shape of one element of `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Deserialize)]
struct WirePullRequest {
    #[serde(default)]
    user: Option<WireUser>,
    #[serde(default)]
    merged_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    labels: Vec<WireLabel>,
}

impl From<WirePullRequest> for PullRequestRecord {
    fn from(wire: WirePullRequest) -> Self {
        let merged_at = wire.merged_at.as_deref().and_then(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|ts| ts.with_timezone(&Utc))
        });
        Self {
            author: wire
                .user
                .and_then(|user| user.login)
                .filter(|login| !login.trim().is_empty()),
            merged_at,
            labels: wire
                .labels
                .into_iter()
                .filter_map(|label| label.name)
                .collect(),
        }
    }
}

/// Converts a page of API items, skipping elements that are not pull
/// request objects at all. Missing fields inside an object are kept as
/// absent so the aggregator can decide what to drop.
pub fn pull_requests_from_values(values: Vec<serde_json::Value>) -> Vec<PullRequestRecord> {
    values
        .into_iter()
        .filter_map(
            |value| match serde_json::from_value::<WirePullRequest>(value) {
                Ok(wire) => Some(PullRequestRecord::from(wire)),
                Err(err) => {
                    tracing::debug!("skipping malformed pull request record: {err}");
                    None
                }
            },
        )
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub registration_open: bool,
    #[serde(default)]
    pub registration_link: Option<String>,
}

impl EventRecord {
    /// Calendar day of the event; `None` when the date is missing or
    /// unparseable.
    pub fn day(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|ts| ts.date_naive())
        })
    }

    /// Registration is only actionable when it is open and has a link.
    pub fn accepts_registration(&self) -> bool {
        self.registration_open
            && self
                .registration_link
                .as_deref()
                .is_some_and(|link| !link.trim().is_empty())
    }
}

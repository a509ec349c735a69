pub mod events;
pub mod github;

use crate::types::records::PullRequestRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("rate limited by API (HTTP {status})")]
    RateLimited { status: u16 },

    #[error("repository not found or access denied: {0}")]
    NotFound(String),

    #[error("API error: HTTP {status}")]
    Api { status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// One page-addressable feed of pull requests.
pub trait PullRequestSource {
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<PullRequestRecord>, SourceError>;
}

/// Walks pages `1..=max_pages` in order. An empty page ends the walk. A
/// failure on the first page is returned; a failure on a later page ends
/// the walk and keeps what was already gathered.
pub fn fetch_all<S: PullRequestSource + ?Sized>(
    source: &S,
    max_pages: u32,
    per_page: u32,
) -> Result<Vec<PullRequestRecord>, SourceError> {
    let mut pulls = Vec::new();
    for page in 1..=max_pages {
        match source.fetch_page(page, per_page) {
            Ok(records) if records.is_empty() => {
                tracing::debug!(page, "empty page, stopping pagination");
                break;
            }
            Ok(records) => {
                tracing::debug!(page, count = records.len(), "fetched pull request page");
                pulls.extend(records);
            }
            Err(err) if page == 1 => return Err(err),
            Err(err) => {
                tracing::warn!(page, "stopping pagination early: {err}");
                break;
            }
        }
    }
    tracing::info!(total = pulls.len(), "pull requests fetched");
    Ok(pulls)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers exactly one HTTP request with `status` (e.g. `"404 Not Found"`)
    /// and `body`, then closes. Returns the base URL and a handle that yields
    /// the request line the server received.
    pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
        let addr = listener.local_addr().expect("listener should have an address");
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("client should connect");
            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            reader
                .read_line(&mut request_line)
                .expect("request line should read");
            let mut header = String::new();
            loop {
                header.clear();
                let read = reader.read_line(&mut header).expect("header should read");
                if read == 0 || header == "\r\n" {
                    break;
                }
            }
            reader
                .into_inner()
                .write_all(response.as_bytes())
                .expect("response should write");
            request_line.trim_end().to_string()
        });

        (format!("http://{addr}"), handle)
    }

    /// Serves canned pages and records which pages were requested.
    pub struct StaticPages {
        pages: Vec<Result<Vec<PullRequestRecord>, u16>>,
        pub requested: RefCell<Vec<u32>>,
    }

    impl StaticPages {
        pub fn new(pages: Vec<Result<Vec<PullRequestRecord>, u16>>) -> Self {
            Self {
                pages,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl PullRequestSource for StaticPages {
        fn fetch_page(
            &self,
            page: u32,
            _per_page: u32,
        ) -> Result<Vec<PullRequestRecord>, SourceError> {
            self.requested.borrow_mut().push(page);
            match self.pages.get(page as usize - 1) {
                Some(Ok(records)) => Ok(records.clone()),
                Some(Err(status)) => Err(SourceError::Api { status: *status }),
                None => Ok(Vec::new()),
            }
        }
    }
}

use crate::cache::{CachedBoard, ResultCache};
use crate::scoring;
use crate::source::{fetch_all, PullRequestSource};
use crate::types::config::FetchLimits;
use crate::types::records::EventRecord;
use crate::types::rules::ScoringRules;
use crate::types::score::Leaderboard;
use chrono::{DateTime, Utc};

/// What a refresh produced: a fresh board, the last cached board, or
/// nothing at all.
#[derive(Debug)]
pub enum Outcome {
    Live(Leaderboard),
    Cached { entry: CachedBoard, reason: String },
    Unavailable { reason: String },
}

pub struct RefreshRequest<'a> {
    pub repository_owner: &'a str,
    pub events: &'a [EventRecord],
    pub limits: FetchLimits,
    pub rules: &'a ScoringRules,
    pub now: DateTime<Utc>,
}

/// Live path first; the cache is only consulted when the live fetch fails.
pub fn refresh<S: PullRequestSource + ?Sized>(
    source: &S,
    request: &RefreshRequest<'_>,
    cache: &ResultCache,
) -> Outcome {
    match fetch_all(source, request.limits.max_pages, request.limits.per_page) {
        Ok(pulls) => {
            let board = scoring::aggregate(
                &pulls,
                request.events,
                request.repository_owner,
                request.now,
                request.rules,
            );
            tracing::info!(contributors = board.contributors.len(), "leaderboard built");
            cache.store(&board);
            Outcome::Live(board)
        }
        Err(err) => {
            let reason = err.to_string();
            tracing::warn!("live fetch failed: {reason}");
            match cache.load() {
                Some(entry) => {
                    tracing::info!(saved_at = %entry.saved_at, "serving cached leaderboard");
                    Outcome::Cached { entry, reason }
                }
                None => Outcome::Unavailable { reason },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::StaticPages;
    use crate::types::records::PullRequestRecord;
    use tempfile::TempDir;

    fn request<'a>(rules: &'a ScoringRules) -> RefreshRequest<'a> {
        RefreshRequest {
            repository_owner: "owner",
            events: &[],
            limits: FetchLimits::default(),
            rules,
            now: Utc::now(),
        }
    }

    #[test]
    fn live_success_writes_cache() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cache = ResultCache::new(dir.path().join("cache.json"));
        let rules = ScoringRules::default();
        let source = StaticPages::new(vec![Ok(vec![PullRequestRecord::merged(
            "alice",
            Utc::now(),
            &["level 1"],
        )])]);

        let board = match refresh(&source, &request(&rules), &cache) {
            Outcome::Live(board) => board,
            other => panic!("expected a live board, got {other:?}"),
        };
        assert_eq!(board.contributors.len(), 1);
        let cached = cache.load().expect("live result should be cached");
        assert_eq!(cached.leaderboard, board);
    }

    #[test]
    fn failure_falls_back_to_cache() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cache = ResultCache::new(dir.path().join("cache.json"));
        let rules = ScoringRules::default();
        let seeded = Leaderboard {
            generated_at: Utc::now(),
            contributors: Vec::new(),
        };
        cache.store(&seeded);

        let (entry, reason) =
            match refresh(&StaticPages::new(vec![Err(403)]), &request(&rules), &cache) {
                Outcome::Cached { entry, reason } => (entry, reason),
                other => panic!("expected cached board, got {other:?}"),
            };
        assert_eq!(entry.leaderboard, seeded);
        assert!(reason.contains("403"));
    }

    #[test]
    fn failure_without_cache_is_unavailable() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cache = ResultCache::new(dir.path().join("cache.json"));
        let rules = ScoringRules::default();

        let outcome = refresh(&StaticPages::new(vec![Err(500)]), &request(&rules), &cache);
        assert!(matches!(outcome, Outcome::Unavailable { .. }));
        assert!(cache.load().is_none());
    }

    #[test]
    fn empty_live_result_is_not_a_failure() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cache = ResultCache::new(dir.path().join("cache.json"));
        let rules = ScoringRules::default();

        let outcome = refresh(&StaticPages::new(Vec::new()), &request(&rules), &cache);
        assert!(matches!(outcome, Outcome::Live(ref board) if board.is_empty()));
    }
}

pub mod achievements;
pub mod labels;

use crate::types::records::{EventRecord, PullRequestRecord};
use crate::types::rules::{ClassThresholds, LeagueThresholds, ScoringRules};
use crate::types::score::{ContributorScore, Leaderboard, League, Status, Tier};
use chrono::{DateTime, Duration, Utc};
use labels::Complexity;
use std::collections::HashMap;

#[derive(Debug)]
struct Tally {
    login: String,
    experience_points: u64,
    mass_score: u64,
    velocity_score: u64,
    pull_request_count: u32,
    has_level3: bool,
}

impl Tally {
    fn new(login: &str) -> Self {
        Self {
            login: login.to_string(),
            experience_points: 0,
            mass_score: 0,
            velocity_score: 0,
            pull_request_count: 0,
            has_level3: false,
        }
    }
}

/// The author and merge time of a pull request that counts: merged, with an
/// author, and not authored by the repository owner.
fn counted_fields<'a>(
    pull: &'a PullRequestRecord,
    repository_owner: &str,
) -> Option<(&'a str, DateTime<Utc>)> {
    let author = pull.author.as_deref()?;
    let merged_at = pull.merged_at?;
    (author.to_lowercase() != repository_owner.to_lowercase()).then_some((author, merged_at))
}

pub fn qualifies(pull: &PullRequestRecord, repository_owner: &str) -> bool {
    counted_fields(pull, repository_owner).is_some()
}

/// Ranks every qualifying author. `now` anchors the recency window so the
/// same input always yields the same board for the same instant.
/// Accumulators saturate at `u64::MAX` rather than overflow.
pub fn aggregate(
    pulls: &[PullRequestRecord],
    events: &[EventRecord],
    repository_owner: &str,
    now: DateTime<Utc>,
    rules: &ScoringRules,
) -> Leaderboard {
    let cutoff = now
        .checked_sub_signed(Duration::days(i64::from(rules.recency_window_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut positions = HashMap::<String, usize>::new();
    let mut tallies = Vec::<Tally>::new();
    let mut counted = 0usize;

    let counted_pulls = pulls.iter().filter_map(|pull| {
        counted_fields(pull, repository_owner)
            .map(|(author, merged_at)| (pull, author, merged_at))
    });
    for (pull, author, merged_at) in counted_pulls {
        let position = *positions.entry(author.to_string()).or_insert_with(|| {
            tallies.push(Tally::new(author));
            tallies.len() - 1
        });
        let tally = &mut tallies[position];
        counted += 1;

        let complexity = labels::classify(pull.labels.as_slice());
        tally.experience_points = tally
            .experience_points
            .saturating_add(complexity.points(rules));
        tally.mass_score = tally.mass_score.saturating_add(complexity.mass(rules));
        tally.pull_request_count = tally.pull_request_count.saturating_add(1);
        tally.has_level3 |= complexity == Complexity::Level3;

        if merged_at > cutoff {
            tally.velocity_score = tally.velocity_score.saturating_add(rules.recency_velocity);
        }
    }

    let dated_events = events.iter().filter(|event| event.day().is_some()).count();
    let dated_events = u32::try_from(dated_events).unwrap_or(u32::MAX);
    let skipped_pulls = pulls.len() - counted;
    tracing::debug!(
        contributors = tallies.len(),
        skipped_pulls,
        dated_events,
        "accumulated pull request scores"
    );

    let mut scored = tallies
        .into_iter()
        .map(|mut tally| {
            let event_count = (tally.pull_request_count / rules.prs_per_event).min(dated_events);
            let events = u64::from(event_count);
            tally.experience_points = tally
                .experience_points
                .saturating_add(events.saturating_mul(rules.event_points));
            tally.mass_score = tally
                .mass_score
                .saturating_add(events.saturating_mul(rules.event_mass));
            tally.velocity_score = tally
                .velocity_score
                .saturating_add(events.saturating_mul(rules.event_velocity));

            let badges =
                achievements::unlocked(tally.pull_request_count, event_count, tally.has_level3);
            if rules.achievement_bonus {
                tally.experience_points =
                    tally.experience_points.saturating_add(achievements::bonus_xp(&badges));
            }
            (tally, event_count, badges)
        })
        .collect::<Vec<_>>();

    // stable: equal XP keeps first-seen order
    scored.sort_by(|(a, _, _), (b, _, _)| b.experience_points.cmp(&a.experience_points));

    let contributors = scored
        .into_iter()
        .enumerate()
        .map(|(index, (tally, event_count, badges))| ContributorScore {
            rank: index + 1,
            tier: tier_for(
                tally.mass_score,
                tally.velocity_score,
                event_count,
                &rules.classes,
            ),
            status: status_for(tally.velocity_score, &rules.classes),
            league: league_for(tally.experience_points, &rules.leagues),
            login: tally.login,
            experience_points: tally.experience_points,
            mass_score: tally.mass_score,
            velocity_score: tally.velocity_score,
            pull_request_count: tally.pull_request_count,
            event_count,
            achievements: badges,
        })
        .collect();

    Leaderboard {
        generated_at: now,
        contributors,
    }
}

pub fn tier_for(mass: u64, velocity: u64, events: u32, thresholds: &ClassThresholds) -> Tier {
    if mass > thresholds.titan_mass {
        Tier::Titan
    } else if velocity > thresholds.striker_velocity {
        Tier::Striker
    } else if events > thresholds.scout_events {
        Tier::Scout
    } else {
        Tier::Rookie
    }
}

pub fn status_for(velocity: u64, thresholds: &ClassThresholds) -> Status {
    if velocity > thresholds.overdrive_velocity {
        Status::Overdrive
    } else if velocity > thresholds.online_velocity {
        Status::Online
    } else {
        Status::Idle
    }
}

pub fn league_for(experience_points: u64, thresholds: &LeagueThresholds) -> League {
    if experience_points >= thresholds.gold {
        League::Gold
    } else if experience_points >= thresholds.silver {
        League::Silver
    } else if experience_points >= thresholds.bronze {
        League::Bronze
    } else {
        League::Rookie
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Titan,
    Striker,
    Scout,
    Rookie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Overdrive,
    Online,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Gold,
    Silver,
    Bronze,
    Rookie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstPr,
    TenPrs,
    HighComplexity,
    TeamPlayer,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Titan => "TITAN",
            Tier::Striker => "STRIKER",
            Tier::Scout => "SCOUT",
            Tier::Rookie => "ROOKIE",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Overdrive => "OVERDRIVE",
            Status::Online => "ONLINE",
            Status::Idle => "IDLE",
        };
        f.write_str(label)
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            League::Gold => "Gold Class",
            League::Silver => "Silver Class",
            League::Bronze => "Bronze Class",
            League::Rookie => "Rookie Agent",
        };
        f.write_str(label)
    }
}

impl Achievement {
    pub fn bonus_xp(self) -> u64 {
        match self {
            Achievement::FirstPr => 100,
            Achievement::TenPrs => 500,
            Achievement::HighComplexity => 300,
            Achievement::TeamPlayer => 250,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstPr => "First PR",
            Achievement::TenPrs => "PR Master",
            Achievement::HighComplexity => "Complex Solver",
            Achievement::TeamPlayer => "Team Player",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorScore {
    pub login: String,
    pub experience_points: u64,
    pub mass_score: u64,
    pub velocity_score: u64,
    pub pull_request_count: u32,
    pub event_count: u32,
    pub rank: usize,
    pub tier: Tier,
    pub status: Status,
    pub league: League,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Result of one aggregation run. Replaced wholesale on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub generated_at: DateTime<Utc>,
    pub contributors: Vec<ContributorScore>,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    /// Keeps the first `limit` ranks.
    pub fn truncated(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.contributors.truncate(limit);
        }
        self
    }
}

/// Thresholds that turn accumulated scores into a tier and a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassThresholds {
    pub titan_mass: u64,
    pub striker_velocity: u64,
    pub scout_events: u32,
    pub overdrive_velocity: u64,
    pub online_velocity: u64,
}

impl Default for ClassThresholds {
    fn default() -> Self {
        Self {
            titan_mass: 100,
            striker_velocity: 50,
            scout_events: 3,
            overdrive_velocity: 80,
            online_velocity: 20,
        }
    }
}

/// Minimum experience points for each league bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueThresholds {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

impl Default for LeagueThresholds {
    fn default() -> Self {
        Self {
            gold: 15_000,
            silver: 7_500,
            bronze: 3_000,
        }
    }
}

/// Every constant the aggregator uses. Built from `[scoring]`, `[classes]`
/// and `[leagues]` in the config, falling back to these defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub level3_points: u64,
    pub level2_points: u64,
    pub level1_points: u64,
    pub default_points: u64,
    pub level3_mass: u64,
    pub level2_mass: u64,
    pub level1_mass: u64,
    pub default_mass: u64,
    pub recency_window_days: u32,
    pub recency_velocity: u64,
    pub prs_per_event: u32,
    pub event_points: u64,
    pub event_mass: u64,
    pub event_velocity: u64,
    pub achievement_bonus: bool,
    pub classes: ClassThresholds,
    pub leagues: LeagueThresholds,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            level3_points: 1_100,
            level2_points: 500,
            level1_points: 200,
            default_points: 100,
            level3_mass: 30,
            level2_mass: 15,
            level1_mass: 10,
            default_mass: 5,
            recency_window_days: 60,
            recency_velocity: 10,
            prs_per_event: 2,
            event_points: 250,
            event_mass: 2,
            event_velocity: 5,
            achievement_bonus: false,
            classes: ClassThresholds::default(),
            leagues: LeagueThresholds::default(),
        }
    }
}

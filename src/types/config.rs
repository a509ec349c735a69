use crate::error::BoardError;
use crate::types::rules::{ClassThresholds, LeagueThresholds, ScoringRules};
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_EVENTS_SOURCE: &str = "data/events.json";
pub const DEFAULT_CACHE_FILE: &str = ".contrib-board/cache.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardConfig {
    pub repository: Option<RepositoryConfig>,
    pub fetch: Option<FetchConfig>,
    pub events: Option<EventsConfig>,
    pub scoring: Option<ScoringConfig>,
    pub classes: Option<ClassesConfig>,
    pub leagues: Option<LeaguesConfig>,
    pub cache: Option<CacheConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    pub owner: Option<String>,
    pub name: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub token: Option<String>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    pub max_pages: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub level3_points: Option<u64>,
    pub level2_points: Option<u64>,
    pub level1_points: Option<u64>,
    pub default_points: Option<u64>,
    pub level3_mass: Option<u64>,
    pub level2_mass: Option<u64>,
    pub level1_mass: Option<u64>,
    pub default_mass: Option<u64>,
    pub recency_window_days: Option<u32>,
    pub recency_velocity: Option<u64>,
    pub prs_per_event: Option<u32>,
    pub event_points: Option<u64>,
    pub event_mass: Option<u64>,
    pub event_velocity: Option<u64>,
    #[serde(default)]
    pub achievement_bonus: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassesConfig {
    pub titan_mass: Option<u64>,
    pub striker_velocity: Option<u64>,
    pub scout_events: Option<u32>,
    pub overdrive_velocity: Option<u64>,
    pub online_velocity: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaguesConfig {
    pub gold: Option<u64>,
    pub silver: Option<u64>,
    pub bronze: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    pub max_pages: u32,
    pub per_page: u32,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            max_pages: 3,
            per_page: 100,
        }
    }
}

impl BoardConfig {
    pub fn owner(&self) -> Option<&str> {
        self.repository
            .as_ref()
            .and_then(|repository| repository.owner.as_deref())
    }

    pub fn repo_name(&self) -> Option<&str> {
        self.repository
            .as_ref()
            .and_then(|repository| repository.name.as_deref())
    }

    pub fn api_base(&self) -> &str {
        self.repository
            .as_ref()
            .map(|repository| repository.api_base.as_str())
            .unwrap_or(DEFAULT_API_BASE)
    }

    pub fn token(&self) -> Option<&str> {
        self.repository
            .as_ref()
            .and_then(|repository| repository.token.as_deref())
    }

    pub fn events_source(&self) -> &str {
        self.events
            .as_ref()
            .and_then(|events| events.source.as_deref())
            .unwrap_or(DEFAULT_EVENTS_SOURCE)
    }

    pub fn cache_path(&self) -> &str {
        self.cache
            .as_ref()
            .and_then(|cache| cache.path.as_deref())
            .unwrap_or(DEFAULT_CACHE_FILE)
    }

    pub fn fetch_limits(&self) -> FetchLimits {
        let defaults = FetchLimits::default();
        match &self.fetch {
            Some(fetch) => FetchLimits {
                max_pages: fetch.max_pages.unwrap_or(defaults.max_pages),
                per_page: fetch.per_page.unwrap_or(defaults.per_page),
            },
            None => defaults,
        }
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        let defaults = ScoringRules::default();
        let mut rules = match &self.scoring {
            Some(scoring) => ScoringRules {
                level3_points: scoring.level3_points.unwrap_or(defaults.level3_points),
                level2_points: scoring.level2_points.unwrap_or(defaults.level2_points),
                level1_points: scoring.level1_points.unwrap_or(defaults.level1_points),
                default_points: scoring.default_points.unwrap_or(defaults.default_points),
                level3_mass: scoring.level3_mass.unwrap_or(defaults.level3_mass),
                level2_mass: scoring.level2_mass.unwrap_or(defaults.level2_mass),
                level1_mass: scoring.level1_mass.unwrap_or(defaults.level1_mass),
                default_mass: scoring.default_mass.unwrap_or(defaults.default_mass),
                recency_window_days: scoring
                    .recency_window_days
                    .unwrap_or(defaults.recency_window_days),
                recency_velocity: scoring.recency_velocity.unwrap_or(defaults.recency_velocity),
                prs_per_event: scoring.prs_per_event.unwrap_or(defaults.prs_per_event),
                event_points: scoring.event_points.unwrap_or(defaults.event_points),
                event_mass: scoring.event_mass.unwrap_or(defaults.event_mass),
                event_velocity: scoring.event_velocity.unwrap_or(defaults.event_velocity),
                achievement_bonus: scoring.achievement_bonus,
                ..defaults
            },
            None => defaults,
        };

        if let Some(classes) = &self.classes {
            let base = rules.classes;
            rules.classes = ClassThresholds {
                titan_mass: classes.titan_mass.unwrap_or(base.titan_mass),
                striker_velocity: classes.striker_velocity.unwrap_or(base.striker_velocity),
                scout_events: classes.scout_events.unwrap_or(base.scout_events),
                overdrive_velocity: classes.overdrive_velocity.unwrap_or(base.overdrive_velocity),
                online_velocity: classes.online_velocity.unwrap_or(base.online_velocity),
            };
        }

        if let Some(leagues) = &self.leagues {
            let base = rules.leagues;
            rules.leagues = LeagueThresholds {
                gold: leagues.gold.unwrap_or(base.gold),
                silver: leagues.silver.unwrap_or(base.silver),
                bronze: leagues.bronze.unwrap_or(base.bronze),
            };
        }

        rules
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        let limits = self.fetch_limits();
        if limits.max_pages == 0 {
            return Err(BoardError::ConfigParse(
                "fetch.max_pages must be greater than 0".to_string(),
            ));
        }
        if !(1..=100).contains(&limits.per_page) {
            return Err(BoardError::ConfigParse(format!(
                "fetch.per_page must be between 1 and 100 (found {})",
                limits.per_page
            )));
        }

        let rules = self.scoring_rules();
        if rules.recency_window_days == 0 {
            return Err(BoardError::ConfigParse(
                "scoring.recency_window_days must be greater than 0".to_string(),
            ));
        }
        if rules.prs_per_event == 0 {
            return Err(BoardError::ConfigParse(
                "scoring.prs_per_event must be greater than 0".to_string(),
            ));
        }
        if rules.classes.online_velocity > rules.classes.overdrive_velocity {
            return Err(BoardError::ConfigParse(
                "classes.online_velocity cannot exceed classes.overdrive_velocity".to_string(),
            ));
        }
        let leagues = rules.leagues;
        if !(leagues.gold > leagues.silver && leagues.silver > leagues.bronze) {
            return Err(BoardError::ConfigParse(format!(
                "leagues must be strictly descending gold > silver > bronze (found {} / {} / {})",
                leagues.gold, leagues.silver, leagues.bronze
            )));
        }

        if let Some(repository) = &self.repository {
            for (key, value) in [
                ("owner", repository.owner.as_deref()),
                ("name", repository.name.as_deref()),
            ] {
                if value.is_some_and(|value| value.trim().is_empty()) {
                    return Err(BoardError::ConfigParse(format!(
                        "repository.{key} must not be empty"
                    )));
                }
            }
        }

        Ok(())
    }
}

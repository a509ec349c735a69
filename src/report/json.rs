use crate::types::score::Leaderboard;

pub fn to_json(board: &Leaderboard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::score::{ContributorScore, League, Status, Tier};
    use chrono::Utc;

    #[test]
    fn json_report_uses_camel_case_fields() {
        let board = Leaderboard {
            generated_at: Utc::now(),
            contributors: vec![ContributorScore {
                login: "alice".to_string(),
                experience_points: 500,
                mass_score: 15,
                velocity_score: 10,
                pull_request_count: 1,
                event_count: 0,
                rank: 1,
                tier: Tier::Rookie,
                status: Status::Idle,
                league: League::Rookie,
                achievements: Vec::new(),
            }],
        };

        let rendered = to_json(&board).expect("json should serialize");
        assert!(rendered.contains("\"experiencePoints\": 500"));
        assert!(rendered.contains("\"pullRequestCount\": 1"));
        assert!(rendered.contains("\"tier\": \"ROOKIE\""));
    }
}

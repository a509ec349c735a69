use crate::types::score::Achievement;

const TEN_PRS: u32 = 10;
const TEAM_PLAYER_EVENTS: u32 = 3;

/// Badges unlocked by one contributor's totals, in display order.
pub fn unlocked(pull_request_count: u32, event_count: u32, has_level3: bool) -> Vec<Achievement> {
    let mut badges = Vec::new();
    if pull_request_count >= 1 {
        badges.push(Achievement::FirstPr);
    }
    if pull_request_count >= TEN_PRS {
        badges.push(Achievement::TenPrs);
    }
    if has_level3 {
        badges.push(Achievement::HighComplexity);
    }
    if event_count >= TEAM_PLAYER_EVENTS {
        badges.push(Achievement::TeamPlayer);
    }
    badges
}

pub fn bonus_xp(badges: &[Achievement]) -> u64 {
    badges
        .iter()
        .fold(0u64, |total, badge| total.saturating_add(badge.bonus_xp()))
}

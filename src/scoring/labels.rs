use crate::types::rules::ScoringRules;

/// Complexity tier of a single pull request, from its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Complexity {
    Untagged,
    Level1,
    Level2,
    Level3,
}

const MARKERS: [(Complexity, &str); 3] = [
    (Complexity::Level3, "level 3"),
    (Complexity::Level2, "level 2"),
    (Complexity::Level1, "level 1"),
];

fn normalize(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}

/// Highest tier named by any label wins; label order does not matter.
pub fn classify<S: AsRef<str>>(labels: &[S]) -> Complexity {
    let normalized = labels
        .iter()
        .map(|label| normalize(label.as_ref()))
        .collect::<Vec<_>>();

    MARKERS
        .iter()
        .find(|(_, marker)| normalized.iter().any(|label| label.contains(marker)))
        .map(|(complexity, _)| *complexity)
        .unwrap_or(Complexity::Untagged)
}

impl Complexity {
    pub fn points(self, rules: &ScoringRules) -> u64 {
        match self {
            Complexity::Level3 => rules.level3_points,
            Complexity::Level2 => rules.level2_points,
            Complexity::Level1 => rules.level1_points,
            Complexity::Untagged => rules.default_points,
        }
    }

    pub fn mass(self, rules: &ScoringRules) -> u64 {
        match self {
            Complexity::Level3 => rules.level3_mass,
            Complexity::Level2 => rules.level2_mass,
            Complexity::Level1 => rules.level1_mass,
            Complexity::Untagged => rules.default_mass,
        }
    }
}

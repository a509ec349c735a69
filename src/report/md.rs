use crate::agenda::Agenda;
use crate::types::score::Leaderboard;

pub fn to_markdown(board: &Leaderboard) -> String {
    let mut output = String::new();
    output.push_str("# Contributor Leaderboard\n\n");
    output.push_str(&format!(
        "Generated: {}\n\n",
        board.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if board.is_empty() {
        output.push_str("No active contributors found. Be the first!\n");
        return output;
    }

    let total_mass: u64 = board.contributors.iter().map(|c| c.mass_score).sum();
    let total_velocity: u64 = board.contributors.iter().map(|c| c.velocity_score).sum();
    output.push_str(&format!(
        "Contributors: {} | Total mass: {} | Average velocity: {:.1}\n\n",
        board.contributors.len(),
        total_mass,
        total_velocity as f64 / board.contributors.len() as f64
    ));

    output.push_str("| Rank | Contributor | XP | Class | Status | League | PRs | Events | Mass | Velocity |\n");
    output.push_str("|---:|---|---:|---|---|---|---:|---:|---:|---:|\n");
    for contributor in &board.contributors {
        output.push_str(&format!(
            "| #{:02} | {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            contributor.rank,
            contributor.login,
            contributor.experience_points,
            contributor.tier,
            contributor.status,
            contributor.league,
            contributor.pull_request_count,
            contributor.event_count,
            contributor.mass_score,
            contributor.velocity_score
        ));
    }

    let with_badges = board
        .contributors
        .iter()
        .filter(|contributor| !contributor.achievements.is_empty())
        .collect::<Vec<_>>();
    if !with_badges.is_empty() {
        output.push_str("\n## Achievements\n\n");
        for contributor in with_badges {
            let titles = contributor
                .achievements
                .iter()
                .map(|badge| badge.title())
                .collect::<Vec<_>>();
            output.push_str(&format!("- {}: {}\n", contributor.login, titles.join(", ")));
        }
    }

    output
}

pub fn agenda_to_markdown(agenda: &Agenda) -> String {
    let mut output = String::new();
    output.push_str("# Events\n\n");

    for (heading, events) in [("Upcoming", &agenda.upcoming), ("Past", &agenda.past)] {
        output.push_str(&format!("## {heading}\n\n"));
        if events.is_empty() {
            output.push_str("- none\n\n");
            continue;
        }
        for dated in events {
            let event = &dated.event;
            let title = if event.title.is_empty() {
                "Untitled"
            } else {
                event.title.as_str()
            };
            output.push_str(&format!("- {} {}", dated.day.format("%Y-%m-%d"), title));
            if !event.location.is_empty() {
                output.push_str(&format!(" @ {}", event.location));
            }
            match event.registration_link.as_deref() {
                Some(link) if event.accepts_registration() => {
                    output.push_str(&format!(" (register: {link})"))
                }
                _ => output.push_str(" (registration closed)"),
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

//! Plain-text rendering of the deck, applications and profile screens.
//!
//! Every function turns a view model into a `String`; the caller decides where
//! to print it. The output uses no ANSI styling so it reads the same in logs,
//! pipes and tests.
//!
//! # Example
//!
//! ```rust
//! use directapply::app::AppState;
//! use directapply::ui::render_deck;
//!
//! let state = AppState::default();
//! let text = render_deck(&state.compute_viewmodel());
//! assert!(text.contains("No More Jobs!"));
//! ```

use crate::ui::helpers::{gauge, mark_highlights, truncate};
use crate::ui::viewmodel::{
    ApplicationsViewModel, BackgroundCard, CardView, DeckViewModel, EmptyState, ProfileStats,
};

/// Width of the overlay gauges.
const GAUGE_WIDTH: usize = 10;

/// Longest title shown on a background card.
const BACKGROUND_TITLE_WIDTH: usize = 32;

/// Renders the swipe deck.
#[must_use]
pub fn render_deck(vm: &DeckViewModel) -> String {
    let mut lines = vec![
        format!("{} | {}", vm.header.title, vm.header.subtitle),
        "=".repeat(40),
    ];

    if let Some(empty) = &vm.empty_state {
        lines.extend(render_empty_state(empty));
    } else if let Some(card) = &vm.card {
        lines.extend(render_card(card));
        lines.extend(vm.background.iter().map(render_background_card));
    }

    lines.push("-".repeat(40));
    lines.push(format!(
        "Applied: {} ({} this batch)",
        vm.applied_count, vm.batch_applied_count
    ));
    join_lines(&lines)
}

fn render_card(card: &CardView) -> Vec<String> {
    let mut where_line = card.location.clone();
    if card.remote {
        where_line.push_str(" | Remote");
    }
    if let Some(salary) = &card.salary {
        where_line.push_str(" | ");
        where_line.push_str(salary);
    }

    let mut lines = vec![
        format!("{} {}", card.logo, card.title),
        format!("   {} ({})", card.company, card.verification),
        format!("   {where_line}"),
        format!("   {}% Match", card.match_score),
    ];
    if !card.skills.is_empty() {
        lines.push(format!("   Skills: {}", card.skills.join(", ")));
    }

    let t = &card.transform;
    lines.push(format!(
        "   offset ({:.0}, {:.0})  tilt {:.1}°  scale {:.2}  opacity {:.2}",
        t.dx, t.dy, t.rotation_degrees, t.scale, t.opacity
    ));
    lines.push(format!(
        "   PASS {}  APPLY {}",
        gauge(t.pass_overlay, GAUGE_WIDTH),
        gauge(t.apply_overlay, GAUGE_WIDTH)
    ));

    lines.push(format!("   [{}]", card.details_label));
    if let Some(details) = &card.details {
        lines.push(format!("   {details}"));
    }
    lines
}

fn render_background_card(card: &BackgroundCard) -> String {
    format!(
        "   behind: {} {} @ {} (scale {:.2}, opacity {:.2})",
        card.logo,
        truncate(&card.title, BACKGROUND_TITLE_WIDTH),
        card.company,
        card.scale,
        card.opacity
    )
}

fn render_empty_state(empty: &EmptyState) -> [String; 3] {
    [
        empty.message.clone(),
        empty.subtitle.clone(),
        format!("[{}]", empty.action_label),
    ]
}

/// Renders the applications list, marking fuzzy-matched title characters.
#[must_use]
pub fn render_applications(vm: &ApplicationsViewModel) -> String {
    let header = match &vm.query {
        Some(query) => format!("Applications ({} of {}) matching \"{query}\"", vm.rows.len(), vm.total),
        None => format!("Applications ({})", vm.total),
    };
    let mut lines = vec![header];

    if vm.rows.is_empty() {
        lines.push("No applications yet. Swipe right on a job to apply.".to_string());
        return join_lines(&lines);
    }

    lines.extend(vm.rows.iter().map(|row| {
        let verified = if row.is_verified { " ✓" } else { "" };
        format!(
            "{} {}{verified} | {} | {} | {} | {}",
            row.logo,
            mark_highlights(&row.title, &row.highlight_ranges),
            row.company,
            row.match_label,
            row.status_label,
            row.applied_date
        )
    }));
    join_lines(&lines)
}

/// Joins lines with a trailing newline after each.
fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders the profile statistics.
#[must_use]
pub fn render_profile(stats: &ProfileStats) -> String {
    let average = stats
        .average_match
        .map_or_else(|| "-".to_string(), |score| format!("{score}%"));
    format!(
        "Applications: {}\nPassed: {}\nRemaining: {}\nAverage match: {average}\n",
        stats.applied, stats.passed, stats.remaining
    )
}

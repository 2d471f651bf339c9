//! Terminal rendering of a week view.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use walkplan_core::session::is_current_week;
use walkplan_core::{Assignment, Slot, WeekView};

const MIN_COLUMN_WIDTH: usize = 10;
const SLOT_COLUMN_WIDTH: usize = 10;

/// Colors a label by the assignment it shows.
pub fn paint(assignment: Assignment, label: &str) -> ColoredString {
    match assignment {
        Assignment::Unassigned => label.dimmed(),
        Assignment::UserA => label.blue(),
        Assignment::UserB => label.red(),
        Assignment::Both => label.purple(),
    }
}

/// Renders the title, the 7-day grid and the totals line.
pub fn render_week(view: &WeekView, today: NaiveDate) -> String {
    let width = column_width(view);
    let mut out = String::new();

    let title = view.window.title();
    if is_current_week(&view.window, today) {
        out.push_str(&format!("{}\n\n", title.bold().green()));
    } else {
        out.push_str(&format!("{}\n\n", title.bold()));
    }

    out.push_str(&" ".repeat(SLOT_COLUMN_WIDTH));
    for (key, _) in &view.days {
        let date = key.date();
        let marker = if date == today { "*" } else { "" };
        let header = format!("{} {}{}", date.format("%a"), date.format("%d/%m"), marker);
        let padded = format!(" {:<width$}", header, width = width);
        if date == today {
            out.push_str(&padded.bold().to_string());
        } else {
            out.push_str(&padded);
        }
    }
    out.push('\n');

    for slot in Slot::all() {
        out.push_str(&format!("{:<w$}", slot.to_string(), w = SLOT_COLUMN_WIDTH));
        for (_, record) in &view.days {
            let assignment = record.get(slot);
            // Pad before coloring so escape codes don't skew the columns
            let cell = format!("{:<width$}", view.config.label(assignment), width = width);
            out.push(' ');
            out.push_str(&paint(assignment, &cell).to_string());
        }
        out.push('\n');
    }

    out.push_str(&"-".repeat(SLOT_COLUMN_WIDTH + view.days.len() * (width + 1)));
    out.push('\n');
    out.push_str(&view.totals.summary(&view.config));
    out.push('\n');
    out
}

fn column_width(view: &WeekView) -> usize {
    [view.config.user_a(), view.config.user_b()]
        .iter()
        .map(|name| name.chars().count())
        .chain(std::iter::once(MIN_COLUMN_WIDTH))
        .max()
        .unwrap_or(MIN_COLUMN_WIDTH)
}

//! Plain-text rendering of a pace table.

use owo_colors::OwoColorize;

use crate::metrics::{Color, TimeCalculator};
use crate::storage::Theme;
use crate::table::{PaceTable, TableStatus};

use super::theme::{palette, Palette};

const PACE_HEADER: &str = "Pace (min/km)";

/// How to draw a table.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Emit ANSI escape codes
    pub ansi: bool,
    /// Minimum width of a time column
    pub column_width: usize,
    /// VMA shown above the table, if any
    pub vma: Option<f64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            ansi: true,
            column_width: 8,
            vma: None,
        }
    }
}

/// Message explaining why a table has no cells.
pub fn status_message(status: &TableStatus) -> Option<String> {
    match status {
        TableStatus::Ready => None,
        TableStatus::AwaitingSelection => {
            Some("Select a race (--race KEY) to see intermediate times.".to_string())
        }
        TableStatus::InvalidPaceConfig(issue) => Some(format!(
            "Invalid pace configuration: {issue}. The slow pace must not be faster than the fast pace, within 2:00-9:00/km."
        )),
        TableStatus::UnknownRace(key) => Some(format!(
            "Unknown race '{key}'. Run `rustpace distances` to list race keys."
        )),
        TableStatus::NoDistances => Some("No distances to display for the selected mode.".to_string()),
    }
}

/// Render `table` as text lines joined by newlines.
pub fn render_table(table: &PaceTable, options: &RenderOptions) -> String {
    let colors = palette(options.theme);
    let mut lines = vec![paint(&table.title, colors.header, None, options.ansi)];

    if let Some(vma) = options.vma {
        if let Some(pace) = TimeCalculator::vma_pace_seconds(vma) {
            let info = format!(
                "VMA {vma} km/h (VMA pace {}/km)",
                TimeCalculator::format_duration(pace)
            );
            lines.push(paint(&info, colors.muted, None, options.ansi));
        }
    }

    if let Some(message) = status_message(&table.status) {
        lines.push(String::new());
        lines.push(paint(&message, colors.warning, None, options.ansi));
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.extend(grid_lines(table, options, &colors));

    if table.cells.iter().flatten().any(|c| c.color.is_some()) {
        lines.push(String::new());
        lines.push(paint(
            "Shaded cells fall inside the sustainable pace range: green at the fast end, red at the slow end.",
            colors.muted,
            None,
            options.ansi,
        ));
    }

    lines.join("\n")
}

fn grid_lines(table: &PaceTable, options: &RenderOptions, colors: &Palette) -> Vec<String> {
    let pace_width = table
        .rows
        .iter()
        .map(|r| r.label.len())
        .chain(std::iter::once(PACE_HEADER.len()))
        .max()
        .unwrap_or(PACE_HEADER.len());

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(j, column)| {
            table
                .cells
                .iter()
                .filter_map(|row| row.get(j))
                .map(|c| c.text.len())
                .chain([column.label.len(), options.column_width])
                .max()
                .unwrap_or(options.column_width)
        })
        .collect();

    let mut header = format!("{PACE_HEADER:<pace_width$}");
    for (column, width) in table.columns.iter().zip(&widths) {
        header.push_str(&format!("  {:>width$}", column.label, width = *width));
    }

    let rule_len = pace_width + widths.iter().map(|w| w + 2).sum::<usize>();

    let mut lines = vec![
        paint(&header, colors.header, None, options.ansi),
        paint(&"-".repeat(rule_len), colors.muted, None, options.ansi),
    ];

    for (pace, cells) in table.rows.iter().zip(&table.cells) {
        let mut line = paint(
            &format!("{:<pace_width$}", pace.label),
            colors.muted,
            None,
            options.ansi,
        );
        for (cell, width) in cells.iter().zip(&widths) {
            let text = format!("{:>width$}", cell.text, width = *width);
            let fg = if cell.color.is_some() {
                colors.on_effort
            } else {
                colors.text
            };
            line.push_str("  ");
            line.push_str(&paint(&text, fg, cell.color, options.ansi));
        }
        lines.push(line);
    }

    lines
}

fn paint(text: &str, fg: Color, bg: Option<Color>, ansi: bool) -> String {
    if !ansi {
        return text.to_string();
    }
    match bg {
        Some(bg) => text
            .truecolor(fg.r, fg.g, fg.b)
            .on_truecolor(bg.r, bg.g, bg.b)
            .to_string(),
        None => text.truecolor(fg.r, fg.g, fg.b).to_string(),
    }
}

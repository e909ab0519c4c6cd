//! Arsenal comparison panel view.
//!
//! Shows both pitchers' mixes side by side; `p` flips which arsenal the row
//! selection follows.

use fo_core::panels::arsenal::{velo_tone, whiff_tone, PitcherArsenal};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{panel_block, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.arsenal;

    let block = panel_block("Arsenal Comparison");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (ix, (pitcher, half)) in data.pitchers.iter().zip(halves.iter()).enumerate() {
        let focused = ix == app.pitcher_ix;
        draw_arsenal(f, *half, pitcher, focused, app.selected_row());
    }
}

fn draw_arsenal(f: &mut Frame, area: Rect, pitcher: &PitcherArsenal, focused: bool, selected: usize) {
    let marker = if focused { "▶ " } else { "  " };
    let title = format!("{}{} ({})", marker, pitcher.name, hand_label(pitcher.throws));

    let rows: Vec<Row> = pitcher
        .pitches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let row = Row::new(vec![
                Cell::from(m.pitch.label()),
                Cell::from(toned(format!("{:.1}", m.velocity), velo_tone(m.velocity))),
                Cell::from(format!("{:.1}%", m.usage)),
                Cell::from(theme::gauge_bar(m.usage, 10)),
                Cell::from(toned(format!("{:.1}%", m.whiff_pct), whiff_tone(m.whiff_pct))),
            ]);
            if focused && i == selected {
                row.style(theme::selected_style())
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(6),
        ],
    )
    .header(Row::new(vec!["PITCH", "VELO", "USE", "", "WHIFF"]).style(theme::header_style()))
    .block(panel_block(&title));
    f.render_widget(table, area);
}

/// Pitching-hand label for the arsenal title.
fn hand_label(throws: &str) -> &'static str {
    match throws {
        "L" => "LHP",
        _ => "RHP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_label_spells_out_handedness() {
        assert_eq!(hand_label("L"), "LHP");
        assert_eq!(hand_label("R"), "RHP");
    }
}

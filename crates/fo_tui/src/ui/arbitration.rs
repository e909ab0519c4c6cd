//! Arbitration panel view.

use fo_core::panels::arbitration::{gap_tone, outlook_tone};
use fo_core::Tone;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.arbitration;

    let block = panel_block("Salary Arbitration");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("OPEN CASES", data.open_cases.to_string(), Tone::Strong),
            ("TOTAL GAP", format!("${:.1}M", data.total_gap), Tone::Caution),
        ],
    );

    let rows: Vec<Row> = data
        .cases
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let gap_pct = (c.player_figure - c.team_figure) / c.midpoint * 100.0;
            let row = Row::new(vec![
                Cell::from(c.player),
                Cell::from(c.position),
                Cell::from(c.service_time),
                Cell::from(format!("${:.1}M", c.team_figure)),
                Cell::from(format!("${:.1}M", c.player_figure)),
                Cell::from(toned(format!("{:.0}%", gap_pct), gap_tone(gap_pct))),
                Cell::from(format!("${:.2}M", c.projected)),
                Cell::from(c.hearing_date.format("%b %d").to_string()),
                Cell::from(toned(c.outlook.label().to_string(), outlook_tone(c.outlook))),
            ]);
            if i == app.selected_row() {
                row.style(theme::selected_style())
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(15),
        ],
    )
    .header(
        Row::new(vec![
            "PLAYER", "POS", "SVC", "CLUB", "PLAYER", "GAP", "PROJ", "HEARING", "OUTLOOK",
        ])
        .style(theme::header_style()),
    );
    f.render_widget(table, body);
}

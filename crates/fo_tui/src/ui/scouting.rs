//! Scouting panel view.

use fo_core::panels::scouting::{risk_tone, scale_tone};
use fo_core::Tone;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.scouting;

    let block = panel_block("Scouting: Top Prospects");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("SYSTEM RANK", format!("#{}", data.system_rank), Tone::Strong),
            ("TRACKED", data.prospects.len().to_string(), Tone::Neutral),
        ],
    );

    let rows: Vec<Row> = data
        .prospects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let grade = |g: u8| toned(format!("{}", g), scale_tone(g));
            let row = Row::new(vec![
                Cell::from(p.name),
                Cell::from(p.position),
                Cell::from(format!("{}", p.age)),
                Cell::from(p.level),
                Cell::from(grade(p.hit)),
                Cell::from(grade(p.power)),
                Cell::from(grade(p.run)),
                Cell::from(grade(p.arm)),
                Cell::from(grade(p.field)),
                Cell::from(toned(format!("{}", p.fv), scale_tone(p.fv))),
                Cell::from(format!("{}", p.eta)),
                Cell::from(toned(p.risk.label().to_string(), risk_tone(p.risk))),
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
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec![
            "PROSPECT", "POS", "AGE", "LVL", "HIT", "PWR", "RUN", "ARM", "FLD", "FV", "ETA",
            "RISK",
        ])
        .style(theme::header_style()),
    );
    f.render_widget(table, body);
}

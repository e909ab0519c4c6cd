//! Waiver wire panel view.

use fo_core::panels::waivers::{fit_tone, recommendation_tone};
use fo_core::Tone;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.waivers;

    let block = panel_block("Waiver Wire");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("ON WIRE", data.players.len().to_string(), Tone::Strong),
            ("CLAIM PRIORITY", format!("#{}", data.claim_priority), Tone::Neutral),
        ],
    );

    let rows: Vec<Row> = data
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let row = Row::new(vec![
                Cell::from(p.name),
                Cell::from(p.position),
                Cell::from(format!("{}", p.age)),
                Cell::from(p.former_team),
                Cell::from(format!("${:.1}M", p.salary_owed)),
                Cell::from(toned(format!("{}", p.fit_score), fit_tone(p.fit_score))),
                Cell::from(theme::gauge_bar(p.fit_score as f64, 10)),
                Cell::from(toned(
                    p.recommendation.label().to_string(),
                    recommendation_tone(p.recommendation),
                )),
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
            Constraint::Length(14),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(18),
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["PLAYER", "POS", "AGE", "FROM", "OWED", "FIT", "", "CALL"])
            .style(theme::header_style()),
    );
    f.render_widget(table, body);
}

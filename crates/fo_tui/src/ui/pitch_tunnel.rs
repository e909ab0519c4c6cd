//! Pitch tunneling panel view.

use fo_core::panels::pitch_tunnel::tunnel_tone;
use fo_core::Tone;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.pitch_tunnel;

    let block = panel_block("Pitch Tunneling");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let best = data
        .pairs
        .iter()
        .map(|p| p.tunnel_score)
        .fold(f64::MIN, f64::max);

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("PITCHER", data.pitcher.to_string(), Tone::Strong),
            ("PAIRS", data.pairs.len().to_string(), Tone::Neutral),
            ("BEST SCORE", format!("{:.1}", best), tunnel_tone(best)),
        ],
    );

    let rows: Vec<Row> = data
        .pairs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let row = Row::new(vec![
                Cell::from(format!("{} / {}", p.pitch_a.label(), p.pitch_b.label())),
                Cell::from(format!("{:.1}\"", p.release_gap)),
                Cell::from(format!("{:.1}\"", p.tunnel_gap)),
                Cell::from(format!("{:.1}\"", p.plate_separation)),
                Cell::from(toned(format!("{:.1}", p.tunnel_score), tunnel_tone(p.tunnel_score))),
                Cell::from(theme::gauge_bar(
                    (p.tunnel_score - 20.0) / 60.0 * 100.0,
                    14,
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
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new(vec!["PAIR", "RELEASE", "TUNNEL", "PLATE", "SCORE", ""])
            .style(theme::header_style()),
    );
    f.render_widget(table, body);
}

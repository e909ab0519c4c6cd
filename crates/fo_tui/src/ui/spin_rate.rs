//! Spin rate panel view.

use fo_core::panels::spin_rate::{bauer_tone, spin_efficiency_tone};
use fo_core::Tone;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.spin_rate;

    let block = panel_block("Spin Rate Lab");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let avg_eff = if data.readings.is_empty() {
        0.0
    } else {
        data.readings.iter().map(|r| r.spin_efficiency).sum::<f64>() / data.readings.len() as f64
    };

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("READINGS", data.readings.len().to_string(), Tone::Neutral),
            ("AVG EFF", format!("{:.1}%", avg_eff), spin_efficiency_tone(avg_eff)),
        ],
    );

    let rows: Vec<Row> = data
        .readings
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let row = Row::new(vec![
                Cell::from(r.pitcher),
                Cell::from(r.pitch.label()),
                Cell::from(format!("{}", r.rpm)),
                Cell::from(toned(
                    format!("{:.1}%", r.spin_efficiency),
                    spin_efficiency_tone(r.spin_efficiency),
                )),
                Cell::from(theme::gauge_bar(r.spin_efficiency, 12)),
                Cell::from(toned(format!("{:.1}", r.bauer_units), bauer_tone(r.bauer_units))),
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
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(14),
            Constraint::Length(5),
        ],
    )
    .header(
        Row::new(vec!["PITCHER", "PITCH", "RPM", "EFF", "", "BAUER"])
            .style(theme::header_style()),
    );
    f.render_widget(table, body);
}

//! Luxury tax panel view.

use fo_core::panels::luxury_tax::threshold_tone;
use fo_core::Tone;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Cell, Gauge, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.luxury_tax;

    let block = panel_block("Competitive Balance Tax");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("SEASON", data.season.to_string(), Tone::Neutral),
            ("CBT PAYROLL", format!("${:.1}M", data.current_payroll), Tone::Strong),
            ("UNDER 1ST", format!("${:.1}M", data.space_under_first), Tone::Good),
        ],
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(4),
        ])
        .split(body);

    let first = data.thresholds.first().map(|t| t.amount).unwrap_or(1.0);
    let gauge = Gauge::default()
        .gauge_style(theme::tone_style(Tone::Good))
        .ratio((data.current_payroll / first).clamp(0.0, 1.0))
        .label(format!(
            "${:.1}M of ${:.0}M first threshold",
            data.current_payroll, first
        ));
    f.render_widget(gauge, chunks[0]);

    let threshold_rows: Vec<Row> = data
        .thresholds
        .iter()
        .map(|t| {
            let tone = threshold_tone(t.status);
            Row::new(vec![
                Cell::from(t.label),
                Cell::from(format!("${:.0}M", t.amount)),
                Cell::from(format!("{:.1}%", t.tax_rate)),
                Cell::from(toned(format!("{:?}", t.status).to_uppercase(), tone)),
            ])
        })
        .collect();

    let thresholds = Table::new(
        threshold_rows,
        [
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["THRESHOLD", "LINE", "RATE", "STATUS"]).style(theme::header_style()));
    f.render_widget(thresholds, chunks[1]);

    let commitment_rows: Vec<Row> = data
        .commitments
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let row = Row::new(vec![
                Cell::from(c.player),
                Cell::from(format!("${:.1}M", c.aav)),
                Cell::from(format!("{} yr", c.years_left)),
                Cell::from(theme::gauge_bar(c.aav / 30.0 * 100.0, 16)),
            ]);
            if i == app.selected_row() {
                row.style(theme::selected_style())
            } else {
                row
            }
        })
        .collect();

    let commitments = Table::new(
        commitment_rows,
        [
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(18),
        ],
    )
    .header(Row::new(vec!["COMMITMENT", "AAV", "LEFT", "SHARE"]).style(theme::header_style()));
    f.render_widget(commitments, chunks[2]);
}

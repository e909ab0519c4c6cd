//! Clutch performance panel view.

use fo_core::panels::clutch::{clutch_tone, wpa_tone};
use fo_core::Tone;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.clutch;

    let block = panel_block("Clutch Performance");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("AVG w/RISP", format!("{:.3}", data.team_avg_risp), Tone::Neutral),
            ("HI-LEV OPS", format!("{:.3}", data.team_high_lev_ops), Tone::Strong),
            ("1-RUN", data.one_run_record.to_string(), Tone::Good),
        ],
    );

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(body);

    let rows: Vec<Row> = data
        .hitters
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let row = Row::new(vec![
                Cell::from(h.name.clone()),
                Cell::from(format!("{:.3}", h.avg_risp)),
                Cell::from(format!("{:.3}", h.high_lev_ops)),
                Cell::from(toned(format!("{:+.2}", h.wpa), wpa_tone(h.wpa))),
                Cell::from(toned(format!("{:+.2}", h.clutch_score), clutch_tone(h.clutch_score))),
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
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["HITTER", "RISP", "HI-LEV", "WPA", "CLUTCH"]).style(theme::header_style()),
    );
    f.render_widget(table, halves[0]);

    let mut log_lines = vec![Line::from(Span::styled(
        "LATE-INNING LOG",
        theme::header_style(),
    ))];
    for s in &data.scenarios {
        let tone = wpa_tone(s.wpa_swing / 10.0);
        log_lines.push(Line::from(vec![
            Span::styled(format!("  {}th ", s.inning), theme::tone_style(Tone::Muted)),
            Span::raw(format!("{} -> {} ({}) ", s.situation, s.result, s.batter)),
            Span::styled(format!("{:+.1}%", s.wpa_swing), theme::tone_style(tone)),
        ]));
    }
    f.render_widget(Paragraph::new(log_lines), halves[1]);
}

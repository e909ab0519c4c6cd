//! Team momentum panel view.
//!
//! The only panel gated on game state: shows a placeholder until the embedding
//! game reports a game in progress (`g` toggles it here).

use fo_core::panels::momentum::{momentum_tone, swing_tone};
use fo_core::Tone;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Team Momentum");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !app.game.game_started {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Start a game first",
                theme::tone_style(Tone::Muted),
            )),
            Line::from(Span::styled(
                "press g to simulate a game in progress",
                theme::tone_style(Tone::Muted),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(placeholder, inner);
        return;
    }

    let data = &app.snapshot.momentum;

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("MATCHUP", format!("{} vs {}", data.away, data.home), Tone::Neutral),
            ("INN", format!("{}", data.inning), Tone::Neutral),
            ("SCORE", data.score.to_string(), Tone::Strong),
            ("MOMENTUM", format!("{:+.1}", data.current), momentum_tone(data.current)),
        ],
    );

    let rows: Vec<Row> = data
        .swings
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let tone = swing_tone(s.swing);
            let magnitude = s.swing.abs() / 20.0 * 100.0;
            let row = Row::new(vec![
                Cell::from(format!("{}{}", s.half, s.inning)),
                Cell::from(s.event),
                Cell::from(toned(format!("{:+.1}%", s.swing), tone)),
                Cell::from(toned(theme::gauge_bar(magnitude, 14), tone)),
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
            Constraint::Length(4),
            Constraint::Length(34),
            Constraint::Length(7),
            Constraint::Length(16),
        ],
    )
    .header(Row::new(vec!["INN", "EVENT", "SWING", ""]).style(theme::header_style()));
    f.render_widget(table, body);
}

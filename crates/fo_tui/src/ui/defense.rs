//! Advanced defensive metrics panel view.

use fo_core::panels::defense::{drs_tone, grade_tone, oaa_tone};
use fo_core::Tone;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.defense;

    let block = panel_block("Advanced Defensive Metrics");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("TEAM DRS", format!("{:+}", data.team_drs), drs_tone(data.team_drs)),
            ("TEAM OAA", format!("{:+}", data.team_oaa), oaa_tone(data.team_oaa)),
            ("DEF RANK", format!("#{}", data.team_def_rank), Tone::Strong),
        ],
    );

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(body);

    let player_rows: Vec<Row> = data
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let row = Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(p.position),
                Cell::from(format!("{:.1}", p.innings)),
                Cell::from(toned(format!("{:+}", p.drs), drs_tone(p.drs))),
                Cell::from(toned(format!("{:+}", p.oaa), oaa_tone(p.oaa))),
                Cell::from(format!("{:+.1}", p.uzr)),
                Cell::from(format!("{:+.1}", p.d_war)),
                Cell::from(format!("{}", p.errors)),
                Cell::from(toned(p.grade.code().to_string(), grade_tone(p.grade))),
            ]);
            if i == app.selected_row() {
                row.style(theme::selected_style())
            } else {
                row
            }
        })
        .collect();

    let players = Table::new(
        player_rows,
        [
            Constraint::Length(16),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(5),
        ],
    )
    .header(
        Row::new(vec!["PLAYER", "POS", "INN", "DRS", "OAA", "UZR", "dWAR", "E", "GRD"])
            .style(theme::header_style()),
    );
    f.render_widget(players, halves[0]);

    let position_rows: Vec<Row> = data
        .positions
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.position),
                Cell::from(s.starter),
                Cell::from(toned(format!("{:+}", s.drs), drs_tone(s.drs))),
                Cell::from(toned(s.grade.code().to_string(), grade_tone(s.grade))),
            ])
        })
        .collect();

    let positions = Table::new(
        position_rows,
        [
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(5),
            Constraint::Length(5),
        ],
    )
    .header(Row::new(vec!["POS", "STARTER", "DRS", "GRD"]).style(theme::header_style()));
    f.render_widget(positions, halves[1]);
}

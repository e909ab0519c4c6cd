//! Base running panel view.

use fo_core::panels::base_running::{bsr_tone, sb_pct_tone};
use fo_core::Tone;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{draw_tiles, panel_block, tile_body_split, toned};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.snapshot.base_running;

    let block = panel_block("Base Running");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (tiles_area, body) = tile_body_split(inner);
    draw_tiles(
        f,
        tiles_area,
        &[
            ("TEAM SB", data.team_sb.to_string(), Tone::Strong),
            ("SB%", format!("{:.1}%", data.team_sb_pct), sb_pct_tone(data.team_sb_pct)),
            ("BsR", format!("{:+.1}", data.team_bsr), bsr_tone(data.team_bsr)),
            ("RANK", format!("#{}", data.league_rank), Tone::Neutral),
        ],
    );

    let rows: Vec<Row> = data
        .runners
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let row = Row::new(vec![
                Cell::from(r.name.clone()),
                Cell::from(format!("{}", r.sb)),
                Cell::from(format!("{}", r.cs)),
                Cell::from(toned(format!("{:.1}%", r.sb_pct), sb_pct_tone(r.sb_pct))),
                Cell::from(format!("{:.0}%", r.xbt_pct)),
                Cell::from(format!("{}", r.outs_on_bases)),
                Cell::from(toned(format!("{:+.1}", r.bsr), bsr_tone(r.bsr))),
                Cell::from(theme::gauge_bar(r.xbt_pct, 12)),
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
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(vec!["RUNNER", "SB", "CS", "SB%", "XBT", "OOB", "BsR", "AGGRESSION"])
            .style(theme::header_style()),
    );
    f.render_widget(table, body);
}

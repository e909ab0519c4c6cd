//! Panel renderers.
//!
//! One module per dashboard panel plus the shared chrome: title bar, panel
//! tabs, summary tile row and the key legend. Renderers are pure functions of
//! the app state; click/keyboard handling lives in `app`.

use fo_core::{PanelId, Tone};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::app::App;
use crate::theme;

mod arbitration;
mod arsenal;
mod base_running;
mod clutch;
mod defense;
mod luxury_tax;
mod momentum;
mod pitch_tunnel;
mod scouting;
mod spin_rate;
mod waivers;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(1), // tabs
            Constraint::Min(8),    // panel body
            Constraint::Length(1), // key legend
        ])
        .split(f.area());

    draw_title(f, chunks[0], app);
    draw_tabs(f, chunks[1], app);
    draw_panel(f, chunks[2], app);
    draw_legend(f, chunks[3], app);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(" FRONT OFFICE ", theme::title_style()),
        Span::styled(
            format!("· {} · seed {}", app.snapshot.defense.team, app.snapshot.seed),
            Style::default().fg(theme::MUTED),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = PanelId::ALL.iter().map(|p| Line::from(p.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab)
        .style(Style::default().fg(theme::MUTED))
        .highlight_style(theme::title_style());
    f.render_widget(tabs, area);
}

fn draw_panel(f: &mut Frame, area: Rect, app: &App) {
    match app.panel() {
        PanelId::Defense => defense::render(f, area, app),
        PanelId::BaseRunning => base_running::render(f, area, app),
        PanelId::Clutch => clutch::render(f, area, app),
        PanelId::LuxuryTax => luxury_tax::render(f, area, app),
        PanelId::Arbitration => arbitration::render(f, area, app),
        PanelId::Waivers => waivers::render(f, area, app),
        PanelId::Scouting => scouting::render(f, area, app),
        PanelId::Arsenal => arsenal::render(f, area, app),
        PanelId::SpinRate => spin_rate::render(f, area, app),
        PanelId::PitchTunnel => pitch_tunnel::render(f, area, app),
        PanelId::Momentum => momentum::render(f, area, app),
    }
}

fn draw_legend(f: &mut Frame, area: Rect, app: &App) {
    let mut hints = vec!["Tab/←→ panel", "↑↓ row", "g game", "q quit"];
    if app.panel() == PanelId::Arsenal {
        hints.insert(2, "p pitcher");
    }
    let line = Line::from(Span::styled(
        format!(" {}", hints.join("  ·  ")),
        Style::default().fg(theme::MUTED),
    ));
    f.render_widget(Paragraph::new(line), area);
}

/// Bordered block used by every panel body.
pub(crate) fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::MUTED))
        .title(Span::styled(format!(" {} ", title), theme::title_style()))
}

/// Row of headline metric tiles across the top of a panel.
pub(crate) fn draw_tiles(f: &mut Frame, area: Rect, tiles: &[(&str, String, Tone)]) {
    if tiles.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> =
        tiles.iter().map(|_| Constraint::Ratio(1, tiles.len() as u32)).collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((label, value, tone), cell) in tiles.iter().zip(cells.iter()) {
        let text = vec![
            Line::from(Span::styled(label.to_string(), theme::header_style())),
            Line::from(Span::styled(
                value.clone(),
                theme::tone_style(*tone).add_modifier(ratatui::style::Modifier::BOLD),
            )),
        ];
        f.render_widget(Paragraph::new(text), *cell);
    }
}

/// Styled span for a toned metric value.
pub(crate) fn toned(text: String, tone: Tone) -> Span<'static> {
    Span::styled(text, theme::tone_style(tone))
}

/// Split a panel body into the tile strip and the detail area.
pub(crate) fn tile_body_split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);
    (chunks[0], chunks[1])
}

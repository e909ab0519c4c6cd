//! Application state and key handling.
//!
//! All state is local UI selection: which panel tab is active, which row is
//! highlighted per panel, which pitcher the arsenal comparison focuses on.
//! The snapshot itself is immutable after construction.

use crossterm::event::KeyCode;
use fo_core::{DashboardSnapshot, GameState, PanelId};

pub struct App {
    pub snapshot: DashboardSnapshot,
    pub game: GameState,
    pub tab: usize,
    rows: [usize; PanelId::ALL.len()],
    pub pitcher_ix: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(seed: u64) -> Self {
        App {
            snapshot: DashboardSnapshot::build(seed),
            game: GameState::default(),
            tab: 0,
            rows: [0; PanelId::ALL.len()],
            pitcher_ix: 0,
            should_quit: false,
        }
    }

    pub fn panel(&self) -> PanelId {
        PanelId::ALL[self.tab]
    }

    /// Highlighted row for the active panel.
    pub fn selected_row(&self) -> usize {
        self.rows[self.tab]
    }

    fn row_count(&self) -> usize {
        match self.panel() {
            PanelId::Defense => self.snapshot.defense.players.len(),
            PanelId::BaseRunning => self.snapshot.base_running.runners.len(),
            PanelId::Clutch => self.snapshot.clutch.hitters.len(),
            PanelId::LuxuryTax => self.snapshot.luxury_tax.commitments.len(),
            PanelId::Arbitration => self.snapshot.arbitration.cases.len(),
            PanelId::Waivers => self.snapshot.waivers.players.len(),
            PanelId::Scouting => self.snapshot.scouting.prospects.len(),
            PanelId::Arsenal => self.snapshot.arsenal.pitchers[self.pitcher_ix].pitches.len(),
            PanelId::SpinRate => self.snapshot.spin_rate.readings.len(),
            PanelId::PitchTunnel => self.snapshot.pitch_tunnel.pairs.len(),
            PanelId::Momentum => self.snapshot.momentum.swings.len(),
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = (self.tab + 1) % PanelId::ALL.len();
    }

    pub fn prev_tab(&mut self) {
        self.tab = (self.tab + PanelId::ALL.len() - 1) % PanelId::ALL.len();
    }

    fn row_down(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.rows[self.tab] = (self.rows[self.tab] + 1) % count;
        }
    }

    fn row_up(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.rows[self.tab] = (self.rows[self.tab] + count - 1) % count;
        }
    }

    fn toggle_pitcher(&mut self) {
        let count = self.snapshot.arsenal.pitchers.len();
        self.pitcher_ix = (self.pitcher_ix + 1) % count;
        // Row selection follows the newly focused arsenal.
        self.rows[self.tab] = 0;
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.prev_tab(),
            KeyCode::Down | KeyCode::Char('j') => self.row_down(),
            KeyCode::Up | KeyCode::Char('k') => self.row_up(),
            KeyCode::Char('p') => {
                if self.panel() == PanelId::Arsenal {
                    self.toggle_pitcher();
                }
            }
            KeyCode::Char('g') => self.game.toggle_game(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_through_every_panel() {
        let mut app = App::new(1);
        for expected in PanelId::ALL {
            assert_eq!(app.panel(), expected);
            app.next_tab();
        }
        assert_eq!(app.panel(), PanelId::ALL[0]);
        app.prev_tab();
        assert_eq!(app.panel(), *PanelId::ALL.last().unwrap());
    }

    #[test]
    fn row_selection_wraps_within_panel() {
        let mut app = App::new(1);
        let count = app.snapshot.defense.players.len();
        for _ in 0..count {
            app.on_key(KeyCode::Down);
        }
        assert_eq!(app.selected_row(), 0);
        app.on_key(KeyCode::Up);
        assert_eq!(app.selected_row(), count - 1);
    }

    #[test]
    fn game_toggle_and_quit_keys() {
        let mut app = App::new(1);
        assert!(!app.game.game_started);
        app.on_key(KeyCode::Char('g'));
        assert!(app.game.game_started);
        app.on_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn pitcher_toggle_only_applies_on_arsenal() {
        let mut app = App::new(1);
        app.on_key(KeyCode::Char('p'));
        assert_eq!(app.pitcher_ix, 0);
        while app.panel() != PanelId::Arsenal {
            app.next_tab();
        }
        app.on_key(KeyCode::Char('p'));
        assert_eq!(app.pitcher_ix, 1);
    }
}

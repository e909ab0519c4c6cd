//! Clutch performance panel
//!
//! High-leverage hitting lines and a log of recent late-inning swings in win
//! probability.

use serde::{Deserialize, Serialize};

use crate::palette::Tone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClutchHitter {
    pub name: String,
    /// Batting average with runners in scoring position
    pub avg_risp: f64,
    /// OPS in high-leverage plate appearances
    pub high_lev_ops: f64,
    /// Season win probability added
    pub wpa: f64,
    /// FanGraphs-style clutch score, roughly [-2, 2]
    pub clutch_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClutchScenario {
    pub inning: u8,
    pub situation: &'static str,
    pub batter: &'static str,
    pub result: &'static str,
    /// Win probability swing, percentage points (signed)
    pub wpa_swing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClutchSnapshot {
    pub team: &'static str,
    pub team_avg_risp: f64,
    pub team_high_lev_ops: f64,
    pub one_run_record: &'static str,
    pub hitters: Vec<ClutchHitter>,
    pub scenarios: Vec<ClutchScenario>,
}

pub fn demo_snapshot() -> ClutchSnapshot {
    let hitters = vec![
        hitter("Tomas Herrera", 0.341, 0.912, 3.18, 1.42),
        hitter("Dante Calloway", 0.312, 0.868, 2.44, 0.88),
        hitter("Marcus Webb", 0.288, 0.801, 1.36, 0.31),
        hitter("Cole Brandt", 0.265, 0.744, 0.12, -0.04),
        hitter("Jared Okafor", 0.241, 0.688, -0.58, -0.47),
        hitter("Judd Mercer", 0.198, 0.590, -1.44, -1.12),
    ];

    let scenarios = vec![
        scenario(9, "Down 1, runners on 2nd/3rd, 2 out", "Herrera", "2-run double", 61.4),
        scenario(8, "Tied, bases loaded, 1 out", "Calloway", "Sac fly", 14.2),
        scenario(9, "Up 1, runner on 1st, 0 out", "Mercer", "GIDP", -9.8),
        scenario(7, "Down 2, runner on 2nd, 2 out", "Webb", "Strikeout", -6.1),
        scenario(9, "Tied, runner on 3rd, 2 out", "Brandt", "Walk-off single", 38.6),
    ];

    ClutchSnapshot {
        team: "Harbor City Mariners",
        team_avg_risp: 0.271,
        team_high_lev_ops: 0.768,
        one_run_record: "21-14",
        hitters,
        scenarios,
    }
}

fn hitter(name: &str, avg_risp: f64, high_lev_ops: f64, wpa: f64, clutch_score: f64) -> ClutchHitter {
    ClutchHitter {
        name: name.to_string(),
        avg_risp,
        high_lev_ops,
        wpa,
        clutch_score,
    }
}

fn scenario(
    inning: u8,
    situation: &'static str,
    batter: &'static str,
    result: &'static str,
    wpa_swing: f64,
) -> ClutchScenario {
    ClutchScenario {
        inning,
        situation,
        batter,
        result,
        wpa_swing,
    }
}

/// Clutch score to tone. Zero means performance matches overall talent.
pub fn clutch_tone(score: f64) -> Tone {
    if score >= 1.0 {
        Tone::Good
    } else if score >= 0.25 {
        Tone::Strong
    } else if score > -0.5 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

/// Win probability added to tone.
pub fn wpa_tone(wpa: f64) -> Tone {
    if wpa >= 2.0 {
        Tone::Good
    } else if wpa >= 0.5 {
        Tone::Strong
    } else if wpa > -0.5 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_shape_is_complete() {
        let snap = demo_snapshot();
        assert!(!snap.hitters.is_empty());
        assert!(!snap.scenarios.is_empty());
        // Every scenario is a late-inning situation.
        assert!(snap.scenarios.iter().all(|s| s.inning >= 7));
    }

    #[test]
    fn snapshot_is_idempotent() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn clutch_tone_buckets() {
        assert_eq!(clutch_tone(1.42), Tone::Good);
        assert_eq!(clutch_tone(0.0), Tone::Neutral);
        assert_eq!(clutch_tone(-1.12), Tone::Bad);
    }

    #[test]
    fn wpa_tone_is_total_over_display_range() {
        let mut wpa = -100.0;
        while wpa <= 200.0 {
            let _ = wpa_tone(wpa);
            wpa += 0.25;
        }
        assert_eq!(wpa_tone(3.18), Tone::Good);
        assert_eq!(wpa_tone(0.12), Tone::Neutral);
        assert_eq!(wpa_tone(-1.44), Tone::Bad);
    }
}

//! Team momentum panel
//!
//! In-game win probability swings. This is the only panel gated on external
//! game state: the view shows a placeholder until a game has started.

use serde::{Deserialize, Serialize};

use crate::palette::Tone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumSwing {
    pub inning: u8,
    pub half: &'static str,
    pub event: &'static str,
    /// Win probability change, percentage points (signed, home perspective)
    pub swing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumSnapshot {
    pub home: &'static str,
    pub away: &'static str,
    pub inning: u8,
    pub score: &'static str,
    /// Current momentum reading, [-100, 100], home perspective
    pub current: f64,
    pub swings: Vec<MomentumSwing>,
}

pub fn demo_snapshot() -> MomentumSnapshot {
    let swings = vec![
        swing(1, "T", "Leadoff double", -6.2),
        swing(1, "B", "Two-run homer (Calloway)", 14.8),
        swing(3, "T", "Bases-loaded walk", -9.1),
        swing(4, "B", "Inning-ending double play turned", 7.4),
        swing(6, "B", "RBI single (Herrera)", 9.6),
        swing(7, "T", "Solo homer allowed", -11.3),
        swing(8, "B", "Runners stranded at 2nd/3rd", -5.0),
    ];

    MomentumSnapshot {
        home: "Harbor City Mariners",
        away: "Gulf Breakers",
        inning: 8,
        score: "4-3",
        current: 22.5,
        swings,
    }
}

fn swing(inning: u8, half: &'static str, event: &'static str, swing: f64) -> MomentumSwing {
    MomentumSwing {
        inning,
        half,
        event,
        swing,
    }
}

/// Overall momentum reading ([-100, 100], home perspective) to tone.
pub fn momentum_tone(reading: f64) -> Tone {
    if reading >= 16.0 {
        Tone::Good
    } else if reading >= 0.0 {
        Tone::Strong
    } else if reading > -16.0 {
        Tone::Caution
    } else {
        Tone::Bad
    }
}

/// Win probability swing to tone.
pub fn swing_tone(swing: f64) -> Tone {
    if swing >= 8.0 {
        Tone::Good
    } else if swing >= 0.0 {
        Tone::Strong
    } else if swing > -8.0 {
        Tone::Caution
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
        assert!(!snap.swings.is_empty());
        assert!((-100.0..=100.0).contains(&snap.current));
    }

    #[test]
    fn snapshot_is_idempotent() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn momentum_tone_is_total_over_reading_range() {
        let mut r = -100.0;
        while r <= 100.0 {
            let _ = momentum_tone(r);
            r += 0.5;
        }
        assert_eq!(momentum_tone(22.5), Tone::Good);
        assert_eq!(momentum_tone(-5.0), Tone::Caution);
        assert_eq!(momentum_tone(-40.0), Tone::Bad);
    }

    #[test]
    fn swing_tone_is_total_over_swing_range() {
        let mut s = -100.0;
        while s <= 100.0 {
            let _ = swing_tone(s);
            s += 0.5;
        }
        assert_eq!(swing_tone(14.8), Tone::Good);
        assert_eq!(swing_tone(-11.3), Tone::Bad);
    }
}

//! Base running panel
//!
//! Stolen base economy and extra-base aggression, team summary plus per-runner
//! lines.

use serde::{Deserialize, Serialize};

use crate::palette::{bucket_high, Tone};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRunner {
    pub name: String,
    pub sb: u32,
    pub cs: u32,
    /// Stolen base success rate, percent
    pub sb_pct: f64,
    /// Extra base taken rate, percent
    pub xbt_pct: f64,
    pub outs_on_bases: u32,
    /// Base running runs above average
    pub bsr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRunningSnapshot {
    pub team: &'static str,
    pub team_sb: u32,
    pub team_sb_pct: f64,
    pub team_bsr: f64,
    pub league_rank: u32,
    pub runners: Vec<BaseRunner>,
}

pub fn demo_snapshot() -> BaseRunningSnapshot {
    let runners = vec![
        runner("Dante Calloway", 28, 4, 87.5, 58.0, 2, 5.8),
        runner("Marcus Webb", 19, 3, 86.4, 52.0, 3, 3.9),
        runner("Reese Whitfield", 12, 5, 70.6, 44.0, 4, 0.7),
        runner("Felix Arroyo", 8, 2, 80.0, 47.0, 2, 0.9),
        runner("Jared Okafor", 4, 3, 57.1, 38.0, 5, -1.6),
        runner("Judd Mercer", 1, 2, 33.3, 29.0, 6, -3.4),
    ];

    BaseRunningSnapshot {
        team: "Harbor City Mariners",
        team_sb: 72,
        team_sb_pct: 78.3,
        team_bsr: 6.3,
        league_rank: 11,
        runners,
    }
}

fn runner(
    name: &str,
    sb: u32,
    cs: u32,
    sb_pct: f64,
    xbt_pct: f64,
    outs_on_bases: u32,
    bsr: f64,
) -> BaseRunner {
    BaseRunner {
        name: name.to_string(),
        sb,
        cs,
        sb_pct,
        xbt_pct,
        outs_on_bases,
        bsr,
    }
}

/// Stolen base success rate to tone. Break-even sits near 75%.
pub fn sb_pct_tone(pct: f64) -> Tone {
    bucket_high(pct, [85.0, 75.0, 65.0])
}

/// BsR runs to tone. Zero is league average.
pub fn bsr_tone(bsr: f64) -> Tone {
    if bsr >= 3.0 {
        Tone::Good
    } else if bsr >= 0.5 {
        Tone::Strong
    } else if bsr > -1.5 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_has_runners() {
        let snap = demo_snapshot();
        assert!(!snap.runners.is_empty());
        assert_eq!(snap.runners.len(), 6);
    }

    #[test]
    fn snapshot_is_idempotent() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn sb_pct_tone_break_even() {
        assert_eq!(sb_pct_tone(90.0), Tone::Good);
        assert_eq!(sb_pct_tone(75.0), Tone::Strong);
        assert_eq!(sb_pct_tone(40.0), Tone::Bad);
    }

    #[test]
    fn bsr_tone_is_total_over_sampled_range() {
        let mut v = -100.0;
        while v <= 200.0 {
            // Must bucket without panicking anywhere in the display range.
            let _ = bsr_tone(v);
            v += 0.25;
        }
    }
}

//! Salary arbitration panel
//!
//! Filing figures, midpoints and projected awards for the club's open
//! arbitration cases.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::palette::Tone;

/// Expected path for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    Settle,
    Hearing,
    Extension,
}

impl Outlook {
    pub fn label(&self) -> &'static str {
        match self {
            Outlook::Settle => "Settle",
            Outlook::Hearing => "Hearing",
            Outlook::Extension => "Extension talks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbCase {
    pub player: &'static str,
    pub position: &'static str,
    /// Service time as years.days, e.g. "3.041"
    pub service_time: &'static str,
    /// Club filing figure, $M
    pub team_figure: f64,
    /// Player filing figure, $M
    pub player_figure: f64,
    /// Midpoint of the two filings, $M
    pub midpoint: f64,
    /// Model-projected award, $M
    pub projected: f64,
    pub hearing_date: NaiveDate,
    pub outlook: Outlook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrationSnapshot {
    pub team: &'static str,
    pub open_cases: u32,
    /// Combined gap between filings, $M
    pub total_gap: f64,
    pub cases: Vec<ArbCase>,
}

pub fn demo_snapshot() -> ArbitrationSnapshot {
    let cases = vec![
        case("Reese Whitfield", "2B", "4.122", 6.3, 7.5, date(2026, 2, 3), Outlook::Settle),
        case("Felix Arroyo", "LF", "3.041", 3.1, 4.4, date(2026, 2, 10), Outlook::Hearing),
        case("Omar Reyes", "RHP", "5.015", 9.8, 11.2, date(2026, 2, 12), Outlook::Extension),
        case("Grant Liddell", "RHP", "2.158", 2.2, 2.9, date(2026, 2, 17), Outlook::Settle),
    ];

    let total_gap = cases.iter().map(|c| c.player_figure - c.team_figure).sum::<f64>();

    ArbitrationSnapshot {
        team: "Harbor City Mariners",
        open_cases: cases.len() as u32,
        total_gap,
        cases,
    }
}

fn case(
    player: &'static str,
    position: &'static str,
    service_time: &'static str,
    team_figure: f64,
    player_figure: f64,
    hearing_date: NaiveDate,
    outlook: Outlook,
) -> ArbCase {
    let midpoint = (team_figure + player_figure) / 2.0;
    ArbCase {
        player,
        position,
        service_time,
        team_figure,
        player_figure,
        midpoint,
        // Awards skew slightly toward the club's figure historically.
        projected: midpoint - (player_figure - team_figure) * 0.1,
        hearing_date,
        outlook,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Gap between filings (as a fraction of the midpoint) to tone.
pub fn gap_tone(gap_pct: f64) -> Tone {
    if gap_pct < 10.0 {
        Tone::Good
    } else if gap_pct < 20.0 {
        Tone::Neutral
    } else if gap_pct < 35.0 {
        Tone::Caution
    } else {
        Tone::Bad
    }
}

/// Case outlook to tone.
pub fn outlook_tone(outlook: Outlook) -> Tone {
    match outlook {
        Outlook::Settle => Tone::Good,
        Outlook::Extension => Tone::Strong,
        Outlook::Hearing => Tone::Caution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filings_bracket_the_midpoint() {
        let snap = demo_snapshot();
        assert_eq!(snap.open_cases as usize, snap.cases.len());
        for c in &snap.cases {
            assert!(c.team_figure < c.player_figure);
            assert!(c.team_figure < c.midpoint && c.midpoint < c.player_figure);
            assert!(c.projected > c.team_figure && c.projected < c.player_figure);
        }
    }

    #[test]
    fn hearing_dates_are_real_dates() {
        let snap = demo_snapshot();
        for c in &snap.cases {
            assert!(c.hearing_date > date(2026, 1, 1));
        }
    }

    #[test]
    fn snapshot_is_idempotent() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn gap_tone_is_total() {
        for pct in [0.0, 9.9, 10.0, 19.9, 34.9, 35.0, 500.0] {
            let _ = gap_tone(pct);
        }
    }
}

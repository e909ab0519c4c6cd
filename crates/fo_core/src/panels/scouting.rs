//! Scouting panel
//!
//! Top prospects on the 20-80 scouting scale with ETA and risk bucket.

use serde::{Deserialize, Serialize};

use crate::palette::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Medium,
    High,
    Extreme,
}

impl Risk {
    pub fn label(&self) -> &'static str {
        match self {
            Risk::Low => "Low",
            Risk::Medium => "Medium",
            Risk::High => "High",
            Risk::Extreme => "Extreme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub name: &'static str,
    pub position: &'static str,
    pub age: u8,
    /// Current minor-league level
    pub level: &'static str,
    // Tool grades on the 20-80 scale
    pub hit: u8,
    pub power: u8,
    pub run: u8,
    pub arm: u8,
    pub field: u8,
    /// Overall future value grade
    pub fv: u8,
    pub eta: i32,
    pub risk: Risk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutingSnapshot {
    pub team: &'static str,
    pub system_rank: u32,
    pub prospects: Vec<Prospect>,
}

pub fn demo_snapshot() -> ScoutingSnapshot {
    let prospects = vec![
        prospect("Rio Calderon", "SS", 20, "AA", 60, 55, 65, 55, 60, 60, 2027, Risk::Medium),
        prospect("Wes Pemberton", "RHP", 22, "AAA", 30, 30, 40, 70, 45, 55, 2026, Risk::Low),
        prospect("Ty Nakashima", "CF", 19, "A+", 55, 45, 70, 50, 60, 55, 2028, Risk::High),
        prospect("Beau Fontaine", "C", 21, "AA", 50, 60, 35, 60, 55, 50, 2027, Risk::Medium),
        prospect("Santos Iglesias", "LHP", 18, "A", 25, 25, 45, 65, 40, 50, 2029, Risk::Extreme),
        prospect("Hollis Crane", "3B", 23, "AAA", 45, 55, 45, 55, 50, 45, 2026, Risk::Low),
    ];

    ScoutingSnapshot {
        team: "Harbor City Mariners",
        system_rank: 7,
        prospects,
    }
}

#[allow(clippy::too_many_arguments)]
fn prospect(
    name: &'static str,
    position: &'static str,
    age: u8,
    level: &'static str,
    hit: u8,
    power: u8,
    run: u8,
    arm: u8,
    field: u8,
    fv: u8,
    eta: i32,
    risk: Risk,
) -> Prospect {
    Prospect {
        name,
        position,
        age,
        level,
        hit,
        power,
        run,
        arm,
        field,
        fv,
        eta,
        risk,
    }
}

/// 20-80 scale grade to tone. 50 is major-league average.
pub fn scale_tone(grade: u8) -> Tone {
    if grade >= 60 {
        Tone::Good
    } else if grade >= 50 {
        Tone::Strong
    } else if grade >= 40 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

/// Prospect risk bucket to tone.
pub fn risk_tone(risk: Risk) -> Tone {
    match risk {
        Risk::Low => Tone::Good,
        Risk::Medium => Tone::Neutral,
        Risk::High => Tone::Caution,
        Risk::Extreme => Tone::Bad,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_stay_on_the_scouting_scale() {
        let snap = demo_snapshot();
        assert!(!snap.prospects.is_empty());
        for p in &snap.prospects {
            for g in [p.hit, p.power, p.run, p.arm, p.field, p.fv] {
                assert!((20..=80).contains(&g), "{} has off-scale grade {}", p.name, g);
            }
        }
    }

    #[test]
    fn snapshot_is_idempotent() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn scale_tone_is_total_over_scale() {
        for g in 20..=80u8 {
            let _ = scale_tone(g);
        }
        assert_eq!(scale_tone(70), Tone::Good);
        assert_eq!(scale_tone(30), Tone::Bad);
    }
}

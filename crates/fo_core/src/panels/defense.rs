//! Advanced defensive metrics panel
//!
//! Team-level run prevention summary plus per-player DRS/OAA/UZR lines and a
//! per-position breakdown. All values are a hand-authored snapshot of one
//! club's season to date.

use serde::{Deserialize, Serialize};

use crate::palette::Tone;

/// Letter grade on the scouting card, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    pub fn code(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefensivePlayer {
    pub name: String,
    pub position: &'static str,
    pub innings: f64,
    pub drs: i32,
    pub oaa: i32,
    pub uzr: f64,
    pub d_war: f64,
    pub errors: u32,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub position: &'static str,
    pub starter: &'static str,
    pub drs: i32,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseSnapshot {
    pub team: &'static str,
    pub team_drs: i32,
    pub team_oaa: i32,
    pub team_def_rank: u32,
    pub players: Vec<DefensivePlayer>,
    pub positions: Vec<PositionSummary>,
}

/// Fixed demo snapshot: eight fielders, seven position groups.
pub fn demo_snapshot() -> DefenseSnapshot {
    let players = vec![
        player("Marcus Webb", "SS", 612.1, 14, 11, 8.2, 2.1, 6, Grade::APlus),
        player("Dante Calloway", "CF", 598.0, 9, 12, 6.4, 1.7, 2, Grade::A),
        player("Tomas Herrera", "C", 540.2, 7, 4, 3.1, 1.4, 3, Grade::AMinus),
        player("Jared Okafor", "3B", 575.1, 4, 2, 2.0, 0.8, 9, Grade::BPlus),
        player("Reese Whitfield", "2B", 561.0, 1, 0, 0.4, 0.3, 7, Grade::B),
        player("Cole Brandt", "RF", 520.2, -2, -1, -1.1, -0.2, 4, Grade::CPlus),
        player("Felix Arroyo", "LF", 488.1, -5, -4, -3.6, -0.6, 5, Grade::CMinus),
        player("Judd Mercer", "1B", 570.0, -8, -6, -4.9, -0.9, 11, Grade::F),
    ];

    let positions = vec![
        position("C", "Herrera", 7, Grade::AMinus),
        position("1B", "Mercer", -8, Grade::F),
        position("2B", "Whitfield", 1, Grade::B),
        position("3B", "Okafor", 4, Grade::BPlus),
        position("SS", "Webb", 14, Grade::APlus),
        position("CF", "Calloway", 9, Grade::A),
        position("Corner OF", "Brandt/Arroyo", -7, Grade::CMinus),
    ];

    DefenseSnapshot {
        team: "Harbor City Mariners",
        team_drs: 32,
        team_oaa: 18,
        team_def_rank: 8,
        players,
        positions,
    }
}

#[allow(clippy::too_many_arguments)]
fn player(
    name: &str,
    position: &'static str,
    innings: f64,
    drs: i32,
    oaa: i32,
    uzr: f64,
    d_war: f64,
    errors: u32,
    grade: Grade,
) -> DefensivePlayer {
    DefensivePlayer {
        name: name.to_string(),
        position,
        innings,
        drs,
        oaa,
        uzr,
        d_war,
        errors,
        grade,
    }
}

fn position(
    position: &'static str,
    starter: &'static str,
    drs: i32,
    grade: Grade,
) -> PositionSummary {
    PositionSummary {
        position,
        starter,
        drs,
        grade,
    }
}

/// Letter grade to display tone.
pub fn grade_tone(grade: Grade) -> Tone {
    match grade {
        Grade::APlus | Grade::A | Grade::AMinus => Tone::Good,
        Grade::BPlus | Grade::B | Grade::BMinus => Tone::Strong,
        Grade::CPlus | Grade::C | Grade::CMinus => Tone::Caution,
        Grade::D | Grade::F => Tone::Bad,
    }
}

/// Defensive Runs Saved to display tone.
pub fn drs_tone(drs: i32) -> Tone {
    if drs >= 10 {
        Tone::Good
    } else if drs >= 3 {
        Tone::Strong
    } else if drs >= -2 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

/// Outs Above Average to display tone.
pub fn oaa_tone(oaa: i32) -> Tone {
    if oaa >= 8 {
        Tone::Good
    } else if oaa >= 2 {
        Tone::Strong
    } else if oaa >= -2 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn snapshot_has_fixed_shape() {
        let snap = demo_snapshot();
        assert_eq!(snap.players.len(), 8);
        assert_eq!(snap.positions.len(), 7);
        assert_eq!(snap.team_drs, 32);
        assert_eq!(snap.team_def_rank, 8);
    }

    #[test]
    fn snapshot_is_idempotent() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn grade_tones_match_contract() {
        assert_eq!(grade_tone(Grade::AMinus).hex(), "#22c55e");
        assert_eq!(grade_tone(Grade::F).hex(), "#ef4444");
    }

    #[test]
    fn drs_tone_covers_extremes() {
        assert_eq!(drs_tone(25), Tone::Good);
        assert_eq!(drs_tone(0), Tone::Neutral);
        assert_eq!(drs_tone(-20), Tone::Bad);
    }

    #[test]
    fn grade_serializes_as_letter() {
        let json = serde_json::to_string(&Grade::APlus).unwrap();
        assert_eq!(json, "\"A+\"");
    }

    proptest! {
        #[test]
        fn oaa_tone_is_total(oaa in -100i32..=200) {
            let tone = oaa_tone(oaa);
            prop_assert!(matches!(
                tone,
                Tone::Good | Tone::Strong | Tone::Neutral | Tone::Bad
            ));
        }
    }
}

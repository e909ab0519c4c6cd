//! Waiver wire panel
//!
//! Players currently on waivers, ordered by claim priority, with a roster-fit
//! recommendation for each.

use serde::{Deserialize, Serialize};

use crate::palette::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "strong-yes")]
    StrongYes,
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "situational")]
    Situational,
    #[serde(rename = "no")]
    No,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongYes => "CLAIM",
            Recommendation::Yes => "Claim",
            Recommendation::Situational => "Situational",
            Recommendation::No => "Pass",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiverPlayer {
    pub name: &'static str,
    pub position: &'static str,
    pub age: u8,
    pub former_team: &'static str,
    /// Remaining salary obligation if claimed, $M
    pub salary_owed: f64,
    /// Roster fit score, 0-100
    pub fit_score: u8,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiversSnapshot {
    pub team: &'static str,
    /// Club's position in the claim order (1 claims first)
    pub claim_priority: u8,
    pub players: Vec<WaiverPlayer>,
}

pub fn demo_snapshot() -> WaiversSnapshot {
    let players = vec![
        WaiverPlayer {
            name: "Aki Tanaka",
            position: "RHP",
            age: 27,
            former_team: "Gulf Breakers",
            salary_owed: 1.1,
            fit_score: 84,
            recommendation: Recommendation::StrongYes,
        },
        WaiverPlayer {
            name: "Boone Slater",
            position: "UTIL",
            age: 29,
            former_team: "Prairie Kings",
            salary_owed: 0.8,
            fit_score: 68,
            recommendation: Recommendation::Yes,
        },
        WaiverPlayer {
            name: "Emil Vargas",
            position: "C",
            age: 31,
            former_team: "Summit Peaks",
            salary_owed: 2.4,
            fit_score: 51,
            recommendation: Recommendation::Situational,
        },
        WaiverPlayer {
            name: "Dusty Hollis",
            position: "LHP",
            age: 33,
            former_team: "Gulf Breakers",
            salary_owed: 4.2,
            fit_score: 37,
            recommendation: Recommendation::Situational,
        },
        WaiverPlayer {
            name: "Chip Renner",
            position: "1B",
            age: 34,
            former_team: "Iron Range Miners",
            salary_owed: 6.0,
            fit_score: 22,
            recommendation: Recommendation::No,
        },
    ];

    WaiversSnapshot {
        team: "Harbor City Mariners",
        claim_priority: 9,
        players,
    }
}

/// Claim recommendation to tone.
pub fn recommendation_tone(rec: Recommendation) -> Tone {
    match rec {
        Recommendation::StrongYes => Tone::Good,
        Recommendation::Yes => Tone::Strong,
        Recommendation::Situational => Tone::Caution,
        Recommendation::No => Tone::Bad,
    }
}

/// Roster fit score (0-100) to tone.
pub fn fit_tone(fit: u8) -> Tone {
    if fit >= 75 {
        Tone::Good
    } else if fit >= 55 {
        Tone::Strong
    } else if fit >= 40 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_has_players() {
        let snap = demo_snapshot();
        assert!(!snap.players.is_empty());
        assert!(snap.claim_priority >= 1);
    }

    #[test]
    fn snapshot_is_idempotent() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn recommendation_serializes_kebab_case() {
        let json = serde_json::to_string(&Recommendation::StrongYes).unwrap();
        assert_eq!(json, "\"strong-yes\"");
    }

    #[test]
    fn recommendation_tone_is_exhaustive() {
        assert_eq!(recommendation_tone(Recommendation::StrongYes), Tone::Good);
        assert_eq!(recommendation_tone(Recommendation::No), Tone::Bad);
    }

    #[test]
    fn fit_tone_is_total_over_domain() {
        for fit in 0..=100u8 {
            let _ = fit_tone(fit);
        }
    }
}

//! Luxury tax (CBT) panel
//!
//! Competitive Balance Tax payroll position against the four escalating
//! thresholds, plus the largest guaranteed commitments on the books.

use serde::{Deserialize, Serialize};

use crate::palette::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdStatus {
    Below,
    Near,
    Over,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxThreshold {
    pub label: &'static str,
    /// Threshold amount, $M
    pub amount: f64,
    /// Marginal tax rate above this line, percent
    pub tax_rate: f64,
    pub status: ThresholdStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCommitment {
    pub player: &'static str,
    /// Average annual value, $M
    pub aav: f64,
    pub years_left: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuxuryTaxSnapshot {
    pub team: &'static str,
    pub season: i32,
    /// CBT payroll, $M
    pub current_payroll: f64,
    /// Room under the first threshold, $M
    pub space_under_first: f64,
    pub thresholds: Vec<TaxThreshold>,
    pub commitments: Vec<PayrollCommitment>,
}

pub fn demo_snapshot() -> LuxuryTaxSnapshot {
    let current_payroll = 182.5;
    let first = 237.0;

    let status = |amount: f64| {
        if current_payroll > amount {
            ThresholdStatus::Over
        } else if current_payroll > amount - 10.0 {
            ThresholdStatus::Near
        } else {
            ThresholdStatus::Below
        }
    };

    let thresholds = vec![
        TaxThreshold { label: "First threshold", amount: first, tax_rate: 20.0, status: status(first) },
        TaxThreshold { label: "First surcharge", amount: 257.0, tax_rate: 32.0, status: status(257.0) },
        TaxThreshold { label: "Second surcharge", amount: 277.0, tax_rate: 62.5, status: status(277.0) },
        TaxThreshold { label: "Third surcharge", amount: 297.0, tax_rate: 80.0, status: status(297.0) },
    ];

    let commitments = vec![
        PayrollCommitment { player: "Tomas Herrera", aav: 24.5, years_left: 5 },
        PayrollCommitment { player: "Dante Calloway", aav: 21.0, years_left: 3 },
        PayrollCommitment { player: "Marcus Webb", aav: 17.8, years_left: 6 },
        PayrollCommitment { player: "Cole Brandt", aav: 12.0, years_left: 2 },
        PayrollCommitment { player: "Judd Mercer", aav: 9.5, years_left: 1 },
    ];

    LuxuryTaxSnapshot {
        team: "Harbor City Mariners",
        season: 2026,
        current_payroll,
        space_under_first: first - current_payroll,
        thresholds,
        commitments,
    }
}

/// Threshold status to tone.
pub fn threshold_tone(status: ThresholdStatus) -> Tone {
    match status {
        ThresholdStatus::Below => Tone::Good,
        ThresholdStatus::Near => Tone::Caution,
        ThresholdStatus::Over => Tone::Bad,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_thresholds_below_at_demo_payroll() {
        let snap = demo_snapshot();
        assert_eq!(snap.current_payroll, 182.5);
        assert_eq!(snap.thresholds.len(), 4);
        assert_eq!(snap.thresholds[0].amount, 237.0);
        assert!(snap
            .thresholds
            .iter()
            .all(|t| t.status == ThresholdStatus::Below));
    }

    #[test]
    fn space_under_first_is_consistent() {
        let snap = demo_snapshot();
        assert!((snap.space_under_first - 54.5).abs() < 1e-9);
    }

    #[test]
    fn snapshot_is_idempotent() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn threshold_tone_is_exhaustive() {
        assert_eq!(threshold_tone(ThresholdStatus::Below), Tone::Good);
        assert_eq!(threshold_tone(ThresholdStatus::Near), Tone::Caution);
        assert_eq!(threshold_tone(ThresholdStatus::Over), Tone::Bad);
    }
}

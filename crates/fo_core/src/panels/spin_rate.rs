//! Spin rate panel
//!
//! Raw spin, spin efficiency and Bauer units for the staff's signature
//! pitches. Spin efficiency is always sampled inside [55, 95].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::palette::Tone;
use crate::panels::pitch::PitchType;

pub const SPIN_EFF_MIN: f64 = 55.0;
pub const SPIN_EFF_MAX: f64 = 95.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinReading {
    pub pitcher: &'static str,
    pub pitch: PitchType,
    pub rpm: u32,
    /// Share of spin contributing to movement, percent, in [55, 95]
    pub spin_efficiency: f64,
    /// rpm divided by mph
    pub bauer_units: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinRateSnapshot {
    pub team: &'static str,
    pub readings: Vec<SpinReading>,
}

const STAFF: [(&str, PitchType); 6] = [
    ("Omar Reyes", PitchType::FourSeam),
    ("Omar Reyes", PitchType::Slider),
    ("Grant Liddell", PitchType::Sinker),
    ("Grant Liddell", PitchType::Sweeper),
    ("Aki Tanaka", PitchType::Splitter),
    ("Dusty Hollis", PitchType::Curveball),
];

pub fn demo_snapshot(rng: &mut impl Rng) -> SpinRateSnapshot {
    let readings = STAFF
        .iter()
        .map(|&(pitcher, pitch)| {
            let (slo, shi) = pitch.spin_band();
            let (vlo, vhi) = pitch.velo_band();
            let rpm = rng.gen_range(slo..=shi);
            let velocity = rng.gen_range(vlo..vhi);
            SpinReading {
                pitcher,
                pitch,
                rpm,
                spin_efficiency: round1(rng.gen_range(SPIN_EFF_MIN..=SPIN_EFF_MAX)),
                bauer_units: round1(rpm as f64 / velocity),
            }
        })
        .collect();

    SpinRateSnapshot {
        team: "Harbor City Mariners",
        readings,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Spin efficiency to tone.
pub fn spin_efficiency_tone(eff: f64) -> Tone {
    if eff >= 88.0 {
        Tone::Good
    } else if eff >= 75.0 {
        Tone::Strong
    } else if eff >= 62.0 {
        Tone::Neutral
    } else {
        Tone::Caution
    }
}

/// Bauer units to tone. League average sits near 24.
pub fn bauer_tone(bu: f64) -> Tone {
    if bu >= 27.0 {
        Tone::Good
    } else if bu >= 24.0 {
        Tone::Strong
    } else if bu >= 21.0 {
        Tone::Neutral
    } else {
        Tone::Muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn spin_efficiency_stays_in_documented_range() {
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let snap = demo_snapshot(&mut rng);
            for r in &snap.readings {
                assert!(
                    (SPIN_EFF_MIN..=SPIN_EFF_MAX).contains(&r.spin_efficiency),
                    "{} {} efficiency {} out of range",
                    r.pitcher,
                    r.pitch.label(),
                    r.spin_efficiency
                );
            }
        }
    }

    #[test]
    fn rpm_stays_in_pitch_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let snap = demo_snapshot(&mut rng);
            for r in &snap.readings {
                let (lo, hi) = r.pitch.spin_band();
                assert!((lo..=hi).contains(&r.rpm));
                assert!(r.bauer_units > 10.0 && r.bauer_units < 45.0);
            }
        }
    }

    #[test]
    fn same_seed_same_snapshot() {
        let a = demo_snapshot(&mut ChaCha8Rng::seed_from_u64(9));
        let b = demo_snapshot(&mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn efficiency_tone_is_total_over_range() {
        let mut eff = 0.0;
        while eff <= 120.0 {
            let _ = spin_efficiency_tone(eff);
            eff += 0.5;
        }
    }

    #[test]
    fn bauer_tone_is_total_over_display_range() {
        let mut bu = -100.0;
        while bu <= 200.0 {
            let _ = bauer_tone(bu);
            bu += 0.25;
        }
        assert_eq!(bauer_tone(28.0), Tone::Good);
        assert_eq!(bauer_tone(18.0), Tone::Muted);
    }
}

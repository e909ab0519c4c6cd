//! Pitch tunneling panel
//!
//! How well pairs of pitches share a flight path out of the hand before
//! diverging at the plate. The tunnel score lives on the 20-80 scale: tighter
//! gaps at the decision point and wider separation at the plate score higher.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::palette::Tone;
use crate::panels::pitch::PitchType;

pub const TUNNEL_SCORE_MIN: f64 = 20.0;
pub const TUNNEL_SCORE_MAX: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunnelPair {
    pub pitch_a: PitchType,
    pub pitch_b: PitchType,
    /// Release point gap between the two pitches, inches
    pub release_gap: f64,
    /// Separation at the hitter's decision point, inches
    pub tunnel_gap: f64,
    /// Separation at the plate, inches
    pub plate_separation: f64,
    /// 20-80 composite
    pub tunnel_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchTunnelSnapshot {
    pub pitcher: &'static str,
    pub pairs: Vec<TunnelPair>,
}

const PAIRS: [(PitchType, PitchType); 4] = [
    (PitchType::FourSeam, PitchType::Slider),
    (PitchType::FourSeam, PitchType::Changeup),
    (PitchType::FourSeam, PitchType::Curveball),
    (PitchType::Slider, PitchType::Changeup),
];

pub fn demo_snapshot(rng: &mut impl Rng) -> PitchTunnelSnapshot {
    let pairs = PAIRS
        .iter()
        .map(|&(pitch_a, pitch_b)| {
            let release_gap = round1(rng.gen_range(0.5..3.5));
            let tunnel_gap = round1(rng.gen_range(1.0..6.0));
            let plate_separation = round1(rng.gen_range(12.0..30.0));
            TunnelPair {
                pitch_a,
                pitch_b,
                release_gap,
                tunnel_gap,
                plate_separation,
                tunnel_score: tunnel_score(release_gap, tunnel_gap, plate_separation),
            }
        })
        .collect();

    PitchTunnelSnapshot {
        pitcher: "Omar Reyes",
        pairs,
    }
}

/// Composite 20-80 score: reward late separation, punish gaps the hitter can
/// read early. Clamped to the scale ends.
fn tunnel_score(release_gap: f64, tunnel_gap: f64, plate_separation: f64) -> f64 {
    let raw = 50.0 + (plate_separation - 21.0) * 1.5 - (tunnel_gap - 3.5) * 5.0 - (release_gap - 2.0) * 3.0;
    round1(raw.clamp(TUNNEL_SCORE_MIN, TUNNEL_SCORE_MAX))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Tunnel score to tone.
pub fn tunnel_tone(score: f64) -> Tone {
    if score >= 60.0 {
        Tone::Good
    } else if score >= 50.0 {
        Tone::Strong
    } else if score >= 40.0 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn scores_stay_on_scale() {
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let snap = demo_snapshot(&mut rng);
            assert_eq!(snap.pairs.len(), 4);
            for p in &snap.pairs {
                assert!(
                    (TUNNEL_SCORE_MIN..=TUNNEL_SCORE_MAX).contains(&p.tunnel_score),
                    "score {} off scale",
                    p.tunnel_score
                );
            }
        }
    }

    #[test]
    fn gaps_stay_in_sampling_bands() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let snap = demo_snapshot(&mut rng);
        for p in &snap.pairs {
            assert!(p.release_gap >= 0.45 && p.release_gap <= 3.55);
            assert!(p.tunnel_gap >= 0.95 && p.tunnel_gap <= 6.05);
            assert!(p.plate_separation >= 11.95 && p.plate_separation <= 30.05);
        }
    }

    #[test]
    fn score_rewards_late_separation() {
        assert!(tunnel_score(1.0, 1.5, 28.0) > tunnel_score(1.0, 5.5, 13.0));
    }

    #[test]
    fn same_seed_same_snapshot() {
        let a = demo_snapshot(&mut ChaCha8Rng::seed_from_u64(5));
        let b = demo_snapshot(&mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn tunnel_tone_is_total_over_display_range() {
        let mut score = -100.0;
        while score <= 200.0 {
            let _ = tunnel_tone(score);
            score += 0.25;
        }
        assert_eq!(tunnel_tone(72.0), Tone::Good);
        assert_eq!(tunnel_tone(25.0), Tone::Bad);
    }
}

//! Arsenal comparison panel
//!
//! Side-by-side pitch mixes for two starters. Velocities and whiff rates are
//! sampled per pitch type; usage shares are normalized so each arsenal always
//! sums to 100.0.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::palette::Tone;
use crate::panels::pitch::PitchType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchMix {
    pub pitch: PitchType,
    /// Average velocity, mph
    pub velocity: f64,
    /// Share of all pitches thrown, percent; arsenal-wide sum is 100.0
    pub usage: f64,
    /// Swinging strike rate on swings, percent
    pub whiff_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherArsenal {
    pub name: &'static str,
    pub throws: &'static str,
    pub pitches: Vec<PitchMix>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArsenalSnapshot {
    pub pitchers: Vec<PitcherArsenal>,
}

const REYES_MIX: [PitchType; 4] = [
    PitchType::FourSeam,
    PitchType::Slider,
    PitchType::Changeup,
    PitchType::Curveball,
];

const LIDDELL_MIX: [PitchType; 5] = [
    PitchType::Sinker,
    PitchType::Sweeper,
    PitchType::Cutter,
    PitchType::Splitter,
    PitchType::FourSeam,
];

pub fn demo_snapshot(rng: &mut impl Rng) -> ArsenalSnapshot {
    ArsenalSnapshot {
        pitchers: vec![
            arsenal("Omar Reyes", "R", &REYES_MIX, rng),
            arsenal("Grant Liddell", "R", &LIDDELL_MIX, rng),
        ],
    }
}

fn arsenal(
    name: &'static str,
    throws: &'static str,
    mix: &[PitchType],
    rng: &mut impl Rng,
) -> PitcherArsenal {
    // Raw weights first; earlier pitches in the mix are the primary offerings.
    let weights: Vec<f64> = mix
        .iter()
        .enumerate()
        .map(|(i, _)| rng.gen_range(1.0..3.0) + (mix.len() - i) as f64)
        .collect();

    let usages = normalized_usage(&weights);

    let pitches = mix
        .iter()
        .zip(usages)
        .map(|(&pitch, usage)| {
            let (vlo, vhi) = pitch.velo_band();
            let (wlo, whi) = pitch.whiff_band();
            PitchMix {
                pitch,
                velocity: round1(rng.gen_range(vlo..vhi)),
                usage,
                whiff_pct: round1(rng.gen_range(wlo..whi)),
            }
        })
        .collect();

    PitcherArsenal { name, throws, pitches }
}

/// Convert raw weights to percentages that sum to exactly 100.0 after
/// rounding to one decimal. The rounding residual lands on the largest share.
fn normalized_usage(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    let mut usages: Vec<f64> = weights.iter().map(|w| round1(w / total * 100.0)).collect();

    let residual = 100.0 - usages.iter().sum::<f64>();
    if let Some(max_ix) = usages
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
    {
        usages[max_ix] = round1(usages[max_ix] + residual);
    }
    usages
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Whiff rate to tone.
pub fn whiff_tone(whiff_pct: f64) -> Tone {
    if whiff_pct >= 35.0 {
        Tone::Good
    } else if whiff_pct >= 28.0 {
        Tone::Strong
    } else if whiff_pct >= 20.0 {
        Tone::Neutral
    } else {
        Tone::Bad
    }
}

/// Fastball-family velocity to tone.
pub fn velo_tone(velocity: f64) -> Tone {
    if velocity >= 97.0 {
        Tone::Good
    } else if velocity >= 94.0 {
        Tone::Strong
    } else if velocity >= 91.0 {
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
    fn usage_sums_to_one_hundred() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let snap = demo_snapshot(&mut rng);
            for p in &snap.pitchers {
                let total: f64 = p.pitches.iter().map(|m| m.usage).sum();
                assert!(
                    (total - 100.0).abs() < 0.01,
                    "{} usage sums to {}",
                    p.name,
                    total
                );
            }
        }
    }

    #[test]
    fn sampled_values_stay_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let snap = demo_snapshot(&mut rng);
            for p in &snap.pitchers {
                for m in &p.pitches {
                    let (vlo, vhi) = m.pitch.velo_band();
                    assert!(m.velocity >= vlo - 0.05 && m.velocity <= vhi + 0.05);
                    let (wlo, whi) = m.pitch.whiff_band();
                    assert!(m.whiff_pct >= wlo - 0.05 && m.whiff_pct <= whi + 0.05);
                    assert!(m.usage > 0.0);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_snapshot() {
        let a = demo_snapshot(&mut ChaCha8Rng::seed_from_u64(42));
        let b = demo_snapshot(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn whiff_and_velo_tones_are_total_over_display_range() {
        let mut v = -100.0;
        while v <= 200.0 {
            let _ = whiff_tone(v);
            let _ = velo_tone(v);
            v += 0.25;
        }
        assert_eq!(whiff_tone(38.0), Tone::Good);
        assert_eq!(whiff_tone(12.0), Tone::Bad);
        assert_eq!(velo_tone(98.5), Tone::Good);
        assert_eq!(velo_tone(85.0), Tone::Muted);
    }

    #[test]
    fn two_pitchers_compared() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let snap = demo_snapshot(&mut rng);
        assert_eq!(snap.pitchers.len(), 2);
        assert!(snap.pitchers.iter().all(|p| !p.pitches.is_empty()));
    }
}

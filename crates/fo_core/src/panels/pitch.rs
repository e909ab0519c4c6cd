//! Pitch taxonomy shared by the pitching panels.
//!
//! Each pitch type carries the sampling bands the randomized providers draw
//! from, so every synthesized velocity/spin/whiff value stays in a plausible
//! range for that pitch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchType {
    FourSeam,
    Sinker,
    Cutter,
    Slider,
    Sweeper,
    Curveball,
    Changeup,
    Splitter,
}

impl PitchType {
    pub fn label(&self) -> &'static str {
        match self {
            PitchType::FourSeam => "4-Seam",
            PitchType::Sinker => "Sinker",
            PitchType::Cutter => "Cutter",
            PitchType::Slider => "Slider",
            PitchType::Sweeper => "Sweeper",
            PitchType::Curveball => "Curve",
            PitchType::Changeup => "Change",
            PitchType::Splitter => "Splitter",
        }
    }

    /// Velocity sampling band, mph.
    pub fn velo_band(&self) -> (f64, f64) {
        match self {
            PitchType::FourSeam => (93.0, 99.0),
            PitchType::Sinker => (92.0, 97.0),
            PitchType::Cutter => (87.0, 93.0),
            PitchType::Slider => (83.0, 89.0),
            PitchType::Sweeper => (78.0, 84.0),
            PitchType::Curveball => (76.0, 82.0),
            PitchType::Changeup => (82.0, 88.0),
            PitchType::Splitter => (83.0, 89.0),
        }
    }

    /// Raw spin sampling band, rpm.
    pub fn spin_band(&self) -> (u32, u32) {
        match self {
            PitchType::FourSeam => (2100, 2550),
            PitchType::Sinker => (1950, 2300),
            PitchType::Cutter => (2200, 2600),
            PitchType::Slider => (2300, 2800),
            PitchType::Sweeper => (2500, 2950),
            PitchType::Curveball => (2400, 3000),
            PitchType::Changeup => (1550, 1950),
            PitchType::Splitter => (1100, 1500),
        }
    }

    /// Whiff rate sampling band, percent.
    pub fn whiff_band(&self) -> (f64, f64) {
        match self {
            PitchType::FourSeam => (18.0, 28.0),
            PitchType::Sinker => (12.0, 20.0),
            PitchType::Cutter => (20.0, 28.0),
            PitchType::Slider => (30.0, 42.0),
            PitchType::Sweeper => (28.0, 40.0),
            PitchType::Curveball => (26.0, 38.0),
            PitchType::Changeup => (28.0, 40.0),
            PitchType::Splitter => (34.0, 46.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PitchType; 8] = [
        PitchType::FourSeam,
        PitchType::Sinker,
        PitchType::Cutter,
        PitchType::Slider,
        PitchType::Sweeper,
        PitchType::Curveball,
        PitchType::Changeup,
        PitchType::Splitter,
    ];

    #[test]
    fn bands_are_ordered() {
        for p in ALL {
            let (lo, hi) = p.velo_band();
            assert!(lo < hi, "{} velo band inverted", p.label());
            let (lo, hi) = p.spin_band();
            assert!(lo < hi, "{} spin band inverted", p.label());
            let (lo, hi) = p.whiff_band();
            assert!(lo < hi, "{} whiff band inverted", p.label());
        }
    }
}

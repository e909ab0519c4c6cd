//! Fixed display palette
//!
//! Every panel mapper buckets a metric into one of these tones. The hex
//! constants are the contract with any renderer; terminal frontends translate
//! them to their own color space.

use serde::{Deserialize, Serialize};

/// Closed palette of display tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Clearly positive (green)
    Good,
    /// Above average (blue)
    Strong,
    /// Middle of the pack (gray)
    Neutral,
    /// Worth watching (amber)
    Caution,
    /// Clearly negative (red)
    Bad,
    /// De-emphasized detail text
    Muted,
}

impl Tone {
    /// Web color constant backing this tone.
    pub fn hex(&self) -> &'static str {
        match self {
            Tone::Good => "#22c55e",
            Tone::Strong => "#3b82f6",
            Tone::Neutral => "#a3a3a3",
            Tone::Caution => "#f59e0b",
            Tone::Bad => "#ef4444",
            Tone::Muted => "#737373",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Good => "good",
            Tone::Strong => "strong",
            Tone::Neutral => "neutral",
            Tone::Caution => "caution",
            Tone::Bad => "bad",
            Tone::Muted => "muted",
        }
    }
}

/// Bucket a value that reads "higher is better" against three cut points.
///
/// Shared by mappers whose domain is a plain rate or counting stat with no
/// special cases. `cuts` are in descending order: at/above `cuts[0]` is
/// `Good`, then `Strong`, then `Neutral`, below `cuts[2]` is `Bad`.
pub fn bucket_high(value: f64, cuts: [f64; 3]) -> Tone {
    if value >= cuts[0] {
        Tone::Good
    } else if value >= cuts[1] {
        Tone::Strong
    } else if value >= cuts[2] {
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
    fn hex_constants_are_stable() {
        assert_eq!(Tone::Good.hex(), "#22c55e");
        assert_eq!(Tone::Bad.hex(), "#ef4444");
        assert_eq!(Tone::Caution.hex(), "#f59e0b");
    }

    proptest! {
        #[test]
        fn bucket_high_is_total(value in -1000.0f64..1000.0) {
            // Any input lands in exactly one of the four buckets.
            let tone = bucket_high(value, [10.0, 5.0, 0.0]);
            prop_assert!(matches!(
                tone,
                Tone::Good | Tone::Strong | Tone::Neutral | Tone::Bad
            ));
        }
    }
}

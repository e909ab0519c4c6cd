//! Front-office dashboard data core.
//!
//! Demo snapshot providers, display tone mappers and snapshot assembly for
//! the terminal dashboard. Providers are pure: deterministic panels are
//! literal data, randomized panels draw from an injected `Rng` so a seed
//! reproduces the whole dashboard.

pub mod error;
pub mod palette;
pub mod panels;
pub mod snapshot;
pub mod state;

pub use error::{CoreError, Result};
pub use palette::Tone;
pub use snapshot::{DashboardSnapshot, PanelId};
pub use state::GameState;

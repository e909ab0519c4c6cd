//! Dashboard panel modules.
//!
//! Each module is self-contained: snapshot types, a `demo_snapshot` provider
//! (seeded `Rng` parameter where values are sampled) and the tone mappers its
//! view uses. No panel reads another panel's data.

pub mod arbitration;
pub mod arsenal;
pub mod base_running;
pub mod clutch;
pub mod defense;
pub mod luxury_tax;
pub mod momentum;
pub mod pitch;
pub mod pitch_tunnel;
pub mod scouting;
pub mod spin_rate;
pub mod waivers;

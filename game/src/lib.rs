//! Space Station: a handful of crewmates, one hidden impostor.
//!
//! Pressing the spawn key drops a new actor at a random spot; whoever ends
//! up touching the impostor is unalived. Actors can be dragged around with
//! the mouse.

pub mod actor;
pub mod collision;
pub mod config;
pub mod error;
pub mod footprint;
pub mod random;
pub mod roster;
pub mod session;

pub use actor::{Actor, Skin};
pub use collision::CollisionEngine;
pub use config::{SessionConfig, SpawnArea, StationConfig};
pub use error::StationError;
pub use footprint::{Bounds, Footprint};
pub use random::{RandomSource, SeededSource};
pub use roster::{Roster, Slot, SlotIndex, ROSTER_CAPACITY};
pub use session::{Session, Station};

//! `nav-core` — foundational types for the `campus_nav` navigation framework.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`point`]   | `Point`, Euclidean distance, interpolation |
//! | [`ids`]     | `HubId`, `SegmentId`, `BuildingId`         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod point;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{BuildingId, HubId, SegmentId};
pub use point::Point;

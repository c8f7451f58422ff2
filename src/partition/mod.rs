//! Region partitioning strategies
//!
//! This module contains:
//! - Rectangle and hexagon footprints
//! - Jittered square-block enumeration
//! - Pointy-top hexagonal grid enumeration

/// Pointy-top hexagonal grid enumeration
pub mod hexagonal;
/// Jittered square-block enumeration with an injectable random source
pub mod jitter;
/// Rectangle and hexagon footprints
pub mod region;

pub use hexagonal::HexGrid;
pub use jitter::JitteredBlocks;
pub use region::{HexCell, Rect};

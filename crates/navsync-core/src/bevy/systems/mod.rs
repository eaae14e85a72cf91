//! Systems for the sync layer.
//!
//! Organized by functionality:
//! - matrix: Agent pose → world matrix for entities without their own transform
//! - position: Position in/out passes
//! - rotation: Rotation in/out passes
//! - conflicts: Diagnostics for entities marked for both directions on one axis

pub mod conflicts;
pub mod matrix;
pub mod position;
pub mod rotation;

pub use conflicts::*;
pub use matrix::*;
pub use position::*;
pub use rotation::*;

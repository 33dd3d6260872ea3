//! Behavior action plugins for Pointact.
//!
//! Each action lives in its own module and exposes an `install` function
//! that wires it into a [`pointact_core::Registry`]. Only the drag action is
//! implemented at present.

pub mod drag;

pub use drag::*;

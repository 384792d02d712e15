//! Small helpers shared by handlers.
//!
//! - [`clock`] - Response timestamps

pub mod clock;

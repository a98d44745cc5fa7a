//! # UM982 Monitor
//!
//! A serial driver loop for the Unicore UM982 GNSS receiver.
//!
//! The crate opens a serial port, forwards whatever the receiver writes to
//! a pluggable message decoder, and prints the decoded position, velocity
//! and attitude fields at a fixed interval.
//!
//! ## Architecture
//!
//! The project is organized into the following modules:
//!
//! - [`port`]: Serial port settings, opening and the reader task
//! - [`decode`]: The decoder seam ([`decode::SolutionDecoder`])
//! - [`solution`]: The flat navigation-solution snapshot
//! - [`monitor`]: The fixed-interval driver loop
//! - [`report`]: Console rendering of one snapshot
//! - [`error`]: Custom error types for the application
//!
//! The decoder itself is an external collaborator: message framing,
//! checksum validation and coordinate projection are its business, not
//! this crate's.

pub mod decode;
pub mod error;
pub mod monitor;
pub mod port;
pub mod report;
pub mod solution;

/// Re-exports for convenience
pub mod prelude {
    pub use crate::decode::{NullDecoder, SolutionDecoder};
    pub use crate::error::*;
    pub use crate::monitor::Monitor;
    pub use crate::port::PortSettings;
    pub use crate::solution::Solution;
}

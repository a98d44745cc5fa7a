//! # Decode Module
//!
//! This module defines the seam between the driver loop and the UM982
//! message decoder. The decoder is an external collaborator: how it frames
//! messages, validates checksums and signals partial input is entirely its
//! own business. The loop only feeds it text and reads the resulting
//! [`Solution`] snapshot.

use crate::solution::Solution;

/// Contract for a UM982 message decoder.
///
/// The monitor calls [`decode`](SolutionDecoder::decode) with whatever text
/// arrived on the serial port since the last poll, then reads the current
/// snapshot via [`solution`](SolutionDecoder::solution). Decode success is
/// not validated before reporting; a decoder that could not make sense of
/// its input simply leaves the snapshot as it was.
#[cfg_attr(test, mockall::automock)]
pub trait SolutionDecoder {
    /// Consumes raw receiver output. May be called with partial messages.
    fn decode(&mut self, text: &str);

    /// Current solution snapshot, as of the last `decode` call.
    fn solution(&self) -> &Solution;
}

/// Decoder that discards all input and reports an empty solution.
///
/// This is the plug-in point for a real UM982 protocol decoder; the
/// monitor loop itself is decoder-agnostic.
#[derive(Debug, Default)]
pub struct NullDecoder {
    solution: Solution,
}

impl NullDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolutionDecoder for NullDecoder {
    fn decode(&mut self, _text: &str) {}

    fn solution(&self) -> &Solution {
        &self.solution
    }
}

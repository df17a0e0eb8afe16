// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Pure error values reported by the render surface; no external crates.

mod media;

pub use media::{codes, MediaError, MediaErrorKind};

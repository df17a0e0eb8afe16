// SPDX-License-Identifier: MPL-2.0
//! Domain layer: the values a preview session talks about.
//!
//! Everything here is plain `std` so the session logic can be exercised
//! without any host, surface or localization backend.
//!
//! # Modules
//!
//! - [`request`]: what the host asks to play ([`PlaybackRequest`](request::PlaybackRequest),
//!   [`MediaFile`](request::MediaFile), [`AccountContext`](request::AccountContext))
//! - [`location`]: where the surface should read from ([`PlayableLocation`](location::PlayableLocation))
//! - [`error`]: surface-reported media errors ([`MediaError`](error::MediaError))
//! - [`outcome`]: how a session failed or ended ([`Failure`](outcome::Failure),
//!   [`PlaybackOutcome`](outcome::PlaybackOutcome))

pub mod error;
pub mod location;
pub mod outcome;
pub mod request;

pub use error::{MediaError, MediaErrorKind};
pub use location::PlayableLocation;
pub use outcome::{Failure, PlaybackOutcome};
pub use request::{AccountContext, MediaFile, PlaybackRequest};

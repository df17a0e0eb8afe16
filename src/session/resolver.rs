// SPDX-License-Identifier: MPL-2.0
//! Source resolution: local copy first, then the account's server.

use crate::application::port::RemoteContextResolver;
use crate::domain::{Failure, PlayableLocation, PlaybackRequest};
use std::fmt;

/// Neither a local copy nor a usable account is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceUnavailable;

impl fmt::Display for SourceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no local copy and no usable account")
    }
}

impl From<SourceUnavailable> for Failure {
    fn from(_: SourceUnavailable) -> Self {
        Failure::SourceUnavailable
    }
}

/// Picks where the surface should read `request` from.
///
/// The remote resolver is only consulted when there is no local copy.
pub fn resolve(
    request: &PlaybackRequest,
    remote: &dyn RemoteContextResolver,
) -> Result<PlayableLocation, SourceUnavailable> {
    if let Some(path) = request.local_path() {
        return Ok(PlayableLocation::Local(path.to_path_buf()));
    }

    let context = request.remote_context().ok_or(SourceUnavailable)?;
    remote
        .build_uri(context, request.resource_id())
        .map(PlayableLocation::Remote)
        .ok_or(SourceUnavailable)
}

/// Like [`resolve`], treating an absent request as nothing to play.
pub fn resolve_request(
    request: Option<&PlaybackRequest>,
    remote: &dyn RemoteContextResolver,
) -> Result<PlayableLocation, Failure> {
    let request = request.ok_or(Failure::NothingToPlay)?;
    Ok(resolve(request, remote)?)
}

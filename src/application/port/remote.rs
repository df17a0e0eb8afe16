// SPDX-License-Identifier: MPL-2.0
//! Remote URI construction port definition.

use crate::domain::AccountContext;

/// Port that turns an account and a remote path into a streamable URI.
pub trait RemoteContextResolver {
    /// Builds the URI for `remote_path` on the account's server.
    ///
    /// Returns `None` when the account cannot be used to stream, which the
    /// session treats as an unavailable source.
    fn build_uri(&self, context: &AccountContext, remote_path: &str) -> Option<String>;
}

// SPDX-License-Identifier: MPL-2.0
//! WebDAV URI construction for account-backed files.

use crate::application::port::RemoteContextResolver;
use crate::domain::AccountContext;

/// Builds stream URIs as `<base url><webdav root><remote path>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDavUriBuilder;

impl RemoteContextResolver for WebDavUriBuilder {
    fn build_uri(&self, context: &AccountContext, remote_path: &str) -> Option<String> {
        if context.base_url.trim().is_empty() {
            return None;
        }
        Some(format!("{}{}", context.endpoint(), remote_path))
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Configuration files feeding a session.

use std::fs;

use preview_player::config::{self, Config};
use preview_player::session::SessionSettings;
use tempfile::tempdir;

#[test]
fn settings_file_drives_session_and_account() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
language = "fr"

[playback]
keep_display_awake = false

[account]
name = "bob@cloud"
base_url = "https://cloud.example.org"
webdav_path = "/dav/files/bob"

[diagnostics]
buffer_capacity = 50
"#,
    )
    .expect("failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config.general.language.as_deref(), Some("fr"));
    assert_eq!(
        config.session_settings(),
        SessionSettings {
            keep_display_awake: false
        }
    );
    assert_eq!(config.diagnostics_capacity(), 100);
    let account = config.account.to_context().expect("account");
    assert_eq!(account.endpoint(), "https://cloud.example.org/dav/files/bob");
}

#[test]
fn saved_config_is_read_back() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut config = Config::default();
    config.general.language = Some("en-US".into());

    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
}

#[test]
fn broken_file_falls_back_with_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("settings.toml"), "[playback\n").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

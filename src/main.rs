// SPDX-License-Identifier: MPL-2.0
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration;

use preview_player::config;
use preview_player::diagnostics::{
    BufferCapacity, DiagnosticsCollector, WarningEvent, WarningType,
};
use preview_player::domain::{AccountContext, MediaError, MediaFile, PlaybackOutcome, PlaybackRequest};
use preview_player::i18n::I18n;
use preview_player::infrastructure::{
    export_report, ConsoleControls, ConsoleDialog, ConsoleSurface, Script, WebDavUriBuilder,
};
use preview_player::paths;
use preview_player::session::{Capabilities, PlaybackController};

const HELP: &str = "\
Usage: preview_player [OPTIONS] [FILE]

Plays FILE if it exists locally, otherwise streams it as a remote path
through the configured account.

Options:
  --lang <LOCALE>           Interface language (e.g. en-US, fr)
  --config-dir <DIR>        Directory holding settings.toml
  --account-url <URL>       Server base URL for remote files
  --detached                Behave as if the window were not visible
  --fail <WHAT:EXTRA>       Raise this media error instead of playing
  --duration <SECS>         Simulated playback length [default: 3]
  --diagnostics             Export a diagnostics report to Documents
  --diagnostics-out <PATH>  Export a diagnostics report to PATH
  -h, --help                Print help
";

struct Flags {
    lang: Option<String>,
    config_dir: Option<String>,
    account_url: Option<String>,
    detached: bool,
    fail: Option<MediaError>,
    duration: Option<u64>,
    diagnostics: bool,
    diagnostics_out: Option<PathBuf>,
    file: Option<String>,
}

fn parse_media_error(value: &str) -> Result<MediaError, String> {
    let (what, extra) = value
        .split_once(':')
        .ok_or_else(|| format!("expected WHAT:EXTRA, got '{value}'"))?;
    let what = what.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let extra = extra.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(MediaError::new(what, extra))
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        account_url: args.opt_value_from_str("--account-url")?,
        detached: args.contains("--detached"),
        fail: args.opt_value_from_fn("--fail", parse_media_error)?,
        duration: args.opt_value_from_str("--duration")?,
        diagnostics: args.contains("--diagnostics"),
        diagnostics_out: args.opt_value_from_os_str("--diagnostics-out", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        file: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

/// A path that exists is played from disk; anything else is a remote path.
fn build_request(file: String, account: Option<AccountContext>) -> PlaybackRequest {
    let path = Path::new(&file);
    let media = if path.is_file() {
        let remote_path = path
            .file_name()
            .map(|name| format!("/{}", name.to_string_lossy()))
            .unwrap_or_else(|| file.clone());
        MediaFile::downloaded(remote_path, path)
    } else {
        MediaFile::remote(file)
    };
    PlaybackRequest::new(media, account)
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    let (config, config_warning) = config::load();

    let i18n = match I18n::new(flags.lang.clone(), &config) {
        Ok(i18n) => i18n,
        Err(err) => {
            eprintln!("{err}");
            I18n::default()
        }
    };
    let i18n = Rc::new(i18n);

    let mut collector =
        DiagnosticsCollector::new(BufferCapacity::new(config.diagnostics_capacity()));
    if let Some(key) = &config_warning {
        eprintln!("{}", i18n.tr(key));
        collector.handle().log_warning(WarningEvent::new(
            WarningType::ConfigurationIssue,
            key.clone(),
        ));
    }

    let account = flags
        .account_url
        .map(|url| AccountContext::new(config.account.name.clone().unwrap_or_default(), url))
        .or_else(|| config.account.to_context());
    let request = flags.file.map(|file| build_request(file, account));

    let defaults = Script::default();
    let script = Script {
        duration: flags
            .duration
            .map_or(defaults.duration, Duration::from_secs),
        fail: flags.fail,
        attached: !flags.detached,
        ..defaults
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let caps = Capabilities {
        surface: Box::new(ConsoleSurface::new(script, Rc::clone(&i18n))),
        controls: Box::new(ConsoleControls::new(Rc::clone(&i18n))),
        dialog: Box::new(ConsoleDialog::new(Rc::clone(&i18n))),
        formatter: Box::new(Rc::clone(&i18n)),
        remote: Box::new(WebDavUriBuilder),
    };
    let settings = config.session_settings();
    let handle = collector.handle();

    let outcome = runtime.block_on(async move {
        let mut controller = PlaybackController::new(caps, settings).with_diagnostics(handle);
        controller.open(request.as_ref());
        controller.run().await
    });

    collector.process_pending();
    let label = outcome.map_or("incomplete", PlaybackOutcome::label);
    println!(
        "{}",
        i18n.tr_with_args("console-finished", &[("outcome", label)])
    );

    let export_target = flags
        .diagnostics_out
        .or_else(|| flags.diagnostics.then(paths::default_export_directory));
    if let Some(target) = export_target {
        match export_report(&collector, &target) {
            Ok(path) => {
                let path = path.display().to_string();
                println!(
                    "{}",
                    i18n.tr_with_args("console-diagnostics-saved", &[("path", path.as_str())])
                );
            }
            Err(err) => {
                let err = err.to_string();
                eprintln!(
                    "{}",
                    i18n.tr_with_args("console-diagnostics-failed", &[("error", err.as_str())])
                );
            }
        }
    }

    match outcome {
        Some(PlaybackOutcome::Normal) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

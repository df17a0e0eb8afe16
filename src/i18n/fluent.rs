// SPDX-License-Identifier: MPL-2.0
use crate::application::port::MessageFormatter;
use crate::config::Config;
use crate::domain::MediaError;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default()).unwrap_or_else(|_| Self {
            bundles: HashMap::new(),
            available_locales: Vec::new(),
            current_locale: default_locale(),
        })
    }
}

impl I18n {
    /// Loads every embedded translation and picks the session locale.
    ///
    /// # Errors
    ///
    /// Returns `Error::Locale` if an embedded `.ftl` file does not parse.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Result<Self> {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source)
                .map_err(|_| Error::Locale(format!("failed to parse {filename}")))?;
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|_| Error::Locale(format!("duplicate messages in {filename}")))?;

            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(default_locale);

        Ok(Self {
            bundles,
            available_locales,
            current_locale,
        })
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let fallback = default_locale();
        let locales = [&self.current_locale, &fallback];
        for locale in locales {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
        }
        format!("MISSING: {}", key)
    }
}

impl MessageFormatter for I18n {
    fn format_error(&self, error: &MediaError) -> String {
        let what = error.what.to_string();
        let extra = error.extra.to_string();
        self.tr_with_args(
            error.kind().i18n_key(),
            &[("what", what.as_str()), ("extra", extra.as_str())],
        )
    }

    fn format_nothing_to_play(&self) -> String {
        self.tr("media-error-nothing-to-play")
    }

    fn format_no_account(&self) -> String {
        self.tr("media-error-no-account")
    }

    fn acknowledge_label(&self) -> String {
        self.tr("media-error-acknowledge")
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Picks the first candidate that matches an available locale.
///
/// Order: CLI argument, config file, OS locale. A candidate matches exactly,
/// or by language alone (`fr-CA` picks `fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.general.language.clone(), os_locale]
        .into_iter()
        .flatten()
        .filter_map(|lang_str| lang_str.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(lang) {
        return Some(lang.clone());
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

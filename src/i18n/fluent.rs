use crate::error::{Error, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation catalog shared by every request.
///
/// Bundles use the concurrent intl memoizer so the catalog can sit behind an
/// `Arc` and be read from all server workers.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    default_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("default_locale", &self.default_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded `<locale>.ftl` resource and validates the
    /// configured default locale against the loaded set.
    pub fn new(default_locale: &str) -> Result<Self> {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        // Embedded file order is not guaranteed; keep the switcher stable.
        available_locales.sort_by_key(|l| l.to_string());

        let default_locale: LanguageIdentifier = default_locale
            .parse()
            .map_err(|_| Error::Config(format!("invalid default locale {default_locale:?}")))?;
        if !available_locales.contains(&default_locale) {
            return Err(Error::Config(format!(
                "default locale {default_locale} has no translation bundle"
            )));
        }

        Ok(Self {
            bundles,
            available_locales,
            default_locale,
        })
    }

    /// Locales the page can be served in, in display order.
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn default_locale(&self) -> &LanguageIdentifier {
        &self.default_locale
    }

    /// Maps a path segment to a supported locale, or `None` when the code is
    /// unknown or not configured.
    pub fn resolve(&self, code: &str) -> Option<&LanguageIdentifier> {
        let wanted: LanguageIdentifier = code.parse().ok()?;
        self.available_locales.iter().find(|l| **l == wanted)
    }

    /// Localized UI string for `key` in `locale`, falling back to the default
    /// locale and then to a visible `MISSING:` marker.
    pub fn tr(&self, locale: &LanguageIdentifier, key: &str) -> String {
        if let Some(value) = self.format(locale, key) {
            return value;
        }
        if *locale != self.default_locale {
            if let Some(value) = self.format(&self.default_locale, key) {
                return value;
            }
        }
        format!("MISSING: {}", key)
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let msg = bundle.get_message(key)?;
        let pattern = msg.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

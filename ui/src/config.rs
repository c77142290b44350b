//! Static application configuration.
//!
//! Everything here is compiled in. The landing page reads no environment
//! variables and no files; the only runtime input is the browser's language
//! list, which [`crate::i18n`] consumes.

use dioxus::logger::tracing::Level;
use unic_langid::LanguageIdentifier;

use crate::i18n::I18nError;

/// Id of the host page element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "root";

/// Localization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizationConfig {
    /// Locale used when the detected one has no entry for a key.
    pub fallback_locale: &'static str,
    /// Locales that may be selected. Embedded dictionaries outside this list
    /// stay inactive.
    pub active_locales: &'static [&'static str],
    /// Raise the log level to DEBUG, which surfaces language negotiation
    /// and missing-key diagnostics.
    pub debug: bool,
}

impl LocalizationConfig {
    pub fn fallback_language(&self) -> Result<LanguageIdentifier, I18nError> {
        parse_tag(self.fallback_locale)
    }

    pub fn active_languages(&self) -> Result<Vec<LanguageIdentifier>, I18nError> {
        self.active_locales.iter().map(|tag| parse_tag(tag)).collect()
    }
}

pub const LOCALIZATION: LocalizationConfig = LocalizationConfig {
    fallback_locale: "en-US",
    active_locales: &["en-US"],
    debug: cfg!(debug_assertions),
};

/// Invisible reCAPTCHA settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptchaConfig {
    pub site_key: &'static str,
    pub size: &'static str,
    pub script_src: &'static str,
    pub privacy_url: &'static str,
    pub terms_url: &'static str,
}

pub const CAPTCHA: CaptchaConfig = CaptchaConfig {
    site_key: "6LdGNPsUAAAAAH-De07bVDCXyqX70pPMOyEE7rND",
    size: "invisible",
    script_src: "https://www.google.com/recaptcha/api.js?render=explicit",
    privacy_url: "https://policies.google.com/privacy",
    terms_url: "https://policies.google.com/terms",
};

/// Logger level for the launcher.
pub fn log_level() -> Level {
    if LOCALIZATION.debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn parse_tag(tag: &str) -> Result<LanguageIdentifier, I18nError> {
    tag.parse().map_err(|_| I18nError::InvalidLanguageTag {
        tag: tag.to_string(),
    })
}

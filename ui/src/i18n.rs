//! Internationalization (i18n) support for `ovchip-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/ovchip-ui.ftl   (fallback/reference, active)
//!   nl-NL/ovchip-ui.ftl   (embedded, not active)
//! ```
//!
//! Keys are either flat Fluent message ids (`sign-up`) or dotted
//! `message.attribute` pairs for namespaced copy (`landing-page.title`
//! resolves the `.title` attribute of the `landing-page` message).
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let title = t!("landing-page.title");
//! ```
//!
//! Lookup order is detected locale, then the fallback locale, then the key
//! itself. A missing key never fails a render.
//!
//! The locale is detected once per process by [`init`]:
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`).
//! - Native (tests, SSR): `DesktopLanguageRequester`.
//!
//! Only locales listed in [`crate::config::LOCALIZATION`] are ever selected.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::config::LOCALIZATION;

/// Translation macro. Expands to [`translate`].
///
/// ```
/// assert_eq!(ui::t!("sign-up"), "Sign Up");
/// assert_eq!(ui::t!("landing-page.title"), "Stop Loosing Money");
/// assert_eq!(ui::i18n::translate("no-such-key"), "no-such-key");
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::translate($key)
    };
}

/// Fluent "domain" (matches the crate / the FTL filename).
const DOMAIN: &str = "ovchip-ui";

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("invalid language tag `{tag}`")]
    InvalidLanguageTag { tag: String },
    #[error("failed selecting languages: {0}")]
    Select(#[from] i18n_embed::I18nEmbedError),
}

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = LOCALIZATION
        .fallback_language()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load localization bundles for the detected locale (idempotent).
pub fn init() {
    INIT.call_once(|| match select(requested_languages()) {
        Ok(selected) => debug!(?selected, "i18n languages selected"),
        Err(err) => {
            warn!(%err, "i18n language selection failed; continuing with fallback");
        }
    });
}

fn select(requested: Vec<LanguageIdentifier>) -> Result<Vec<LanguageIdentifier>, I18nError> {
    let active = LOCALIZATION.active_languages()?;
    let requested = restrict_to_active(requested, &active);
    Ok(i18n_embed::select(&*LOADER, &Localizations, &requested)?)
}

/// Drop requested languages with no active counterpart, so embedded but
/// inactive dictionaries are never negotiated.
fn restrict_to_active(
    requested: Vec<LanguageIdentifier>,
    active: &[LanguageIdentifier],
) -> Vec<LanguageIdentifier> {
    requested
        .into_iter()
        .filter(|lang| active.iter().any(|a| a.language == lang.language))
        .collect()
}

/// Look up `key`, falling back to the key itself when no bundle defines it.
pub fn translate(key: &str) -> String {
    init();

    let found = match key.split_once('.') {
        Some((message, attribute)) => LOADER
            .has_attr(message, attribute)
            .then(|| LOADER.get_attr(message, attribute)),
        None => LOADER.has(key).then(|| LOADER.get(key)),
    };

    found.unwrap_or_else(|| {
        debug!(key, "missing translation");
        key.to_string()
    })
}

/// List available (embedded) language identifiers, active or not.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language tags of the locales currently loaded, most preferred first.
pub fn current_languages() -> Vec<String> {
    init();
    LOADER
        .current_languages()
        .iter()
        .map(|lang| lang.to_string())
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

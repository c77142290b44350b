//! Shared UI crate for the ov-chipkaart dashboard landing page. Views,
//! components, localization and configuration live here; platform crates
//! only launch and route.

pub mod config;
pub mod core;
pub mod i18n;
pub mod routes;
pub mod views;

pub mod components {
    // Invisible reCAPTCHA + privacy notice (components/captcha.rs)
    pub mod captcha;
    pub use captcha::InvisibleCaptcha;

    // Wordmark (components/logo.rs)
    pub mod logo;
    pub use logo::Logo;
}

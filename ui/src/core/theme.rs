//! Colour palette. Mirrors the custom properties in `assets/styling/landing.css`.

pub const PRIMARY_DARK: &str = "#002884";
pub const PRIMARY_MAIN: &str = "#3f50b5";
pub const PRIMARY_CONTRAST_TEXT: &str = "#ffffff";
pub const WARNING_LIGHT: &str = "#ffb74d";
pub const GREY_700: &str = "#616161";

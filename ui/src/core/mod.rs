//! Pure, platform-agnostic pieces shared by the views.

pub mod auth_panel;
pub mod theme;

//! Route table.
//!
//! Platform crates own the `Routable` enum; these constants are the paths it
//! (and plain anchors to pages outside this app) must agree on.

pub const ROUTE_LANDING_PAGE: &str = "/";
pub const ROUTE_DASHBOARD: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    LandingPage,
    /// Link target only; no view in this app.
    Dashboard,
}

impl RouteName {
    pub const ALL: [RouteName; 2] = [RouteName::LandingPage, RouteName::Dashboard];

    pub fn path(self) -> &'static str {
        match self {
            RouteName::LandingPage => ROUTE_LANDING_PAGE,
            RouteName::Dashboard => ROUTE_DASHBOARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_absolute_and_distinct() {
        let paths: Vec<_> = RouteName::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["/", "/dashboard"]);
        assert!(paths.iter().all(|p| p.starts_with('/')));
    }
}

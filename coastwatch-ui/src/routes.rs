//! Route Table
//!
//! The six client paths, their access requirements, and resolution of a
//! path plus the current session into a navigation decision.

use crate::guard::{self, Access};
use crate::session::{Role, Session};

/// A client-side view reachable by URL
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Report,
    Reports,
    Login,
    Signup,
    Dashboard,
}

/// What the router should do for a requested path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Redirect(AppRoute),
    NotFound,
}

impl AppRoute {
    /// The host server keeps a copy of this table (`CLIENT_ROUTES` in
    /// `src/server/routes/spa.rs`) to answer deep links.
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Home,
        AppRoute::Report,
        AppRoute::Reports,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Dashboard,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Report => "/report",
            AppRoute::Reports => "/reports",
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::Dashboard => "/dashboard",
        }
    }

    /// Match a URL path. One trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    /// Role a session must hold to render this view
    pub fn required_role(&self) -> Option<Role> {
        match self {
            AppRoute::Dashboard => Some(Role::Authority),
            _ => None,
        }
    }
}

/// Resolve a requested path against the current session
pub fn resolve(path: &str, session: Option<&Session>) -> Navigation {
    let Some(route) = AppRoute::from_path(path) else {
        return Navigation::NotFound;
    };

    match route.required_role() {
        None => Navigation::Render(route),
        Some(role) => match guard::check(session, role) {
            Access::Allow => Navigation::Render(route),
            Access::Redirect(to) => Navigation::Redirect(to),
        },
    }
}

/// Where a login or signup submission lands
pub fn landing_for(role: Role) -> AppRoute {
    match role {
        Role::Authority => AppRoute::Dashboard,
        Role::Local => AppRoute::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    /// Keep in step with `test_table_matches_ui_routes` in the host crate
    #[test]
    fn test_table_matches_host_routes() {
        let table: Vec<_> = AppRoute::ALL
            .iter()
            .map(|r| (r.path(), r.required_role().map(|role| role.as_str())))
            .collect();
        assert_eq!(
            table,
            vec![
                ("/", None),
                ("/report", None),
                ("/reports", None),
                ("/login", None),
                ("/signup", None),
                ("/dashboard", Some("authority")),
            ]
        );
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert_eq!(AppRoute::from_path("/reports/"), Some(AppRoute::Reports));
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/reports//"), None);
        assert_eq!(AppRoute::from_path("/unknown"), None);
        assert_eq!(AppRoute::from_path(""), None);
    }

    #[test]
    fn test_only_dashboard_is_guarded() {
        let guarded: Vec<_> = AppRoute::ALL
            .into_iter()
            .filter(|r| r.required_role().is_some())
            .collect();
        assert_eq!(guarded, vec![AppRoute::Dashboard]);
    }

    #[test]
    fn test_dashboard_without_session_redirects_to_login() {
        assert_eq!(
            resolve("/dashboard", None),
            Navigation::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_dashboard_with_local_session_redirects_to_login() {
        let session = Session::new("Asha", Role::Local);
        assert_eq!(
            resolve("/dashboard", Some(&session)),
            Navigation::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_dashboard_with_authority_session_renders() {
        let session = Session::new("Harbour Office", Role::Authority);
        assert_eq!(
            resolve("/dashboard", Some(&session)),
            Navigation::Render(AppRoute::Dashboard)
        );
    }

    #[test]
    fn test_open_routes_render_for_anyone() {
        let local = Session::new("Asha", Role::Local);
        for route in AppRoute::ALL.into_iter().filter(|r| *r != AppRoute::Dashboard) {
            assert_eq!(resolve(route.path(), None), Navigation::Render(route));
            assert_eq!(resolve(route.path(), Some(&local)), Navigation::Render(route));
        }
    }

    #[test]
    fn test_unknown_path_not_found() {
        assert_eq!(resolve("/admin", None), Navigation::NotFound);
    }

    #[test]
    fn test_landing_after_sign_in() {
        assert_eq!(landing_for(Role::Authority).path(), "/dashboard");
        assert_eq!(landing_for(Role::Local).path(), "/");
    }
}

//! Static route table mapping literal paths to screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` registers the same paths with `leptos_router`; this table is the
//! framework-free view of that mapping, used for the document title and by
//! the host server when it logs what it serves.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the sign-in screen.
pub const SIGN_IN_PATH: &str = "/user/signIn";

/// Screens reachable through the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    SignIn,
}

impl Screen {
    /// Human-readable title shown in the browser tab.
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
        }
    }
}

/// One path-to-screen mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub screen: Screen,
}

/// Every route the shell serves.
pub const ROUTES: &[RouteEntry] = &[RouteEntry { path: SIGN_IN_PATH, screen: Screen::SignIn }];

/// Resolve the screen for `path`, or `None` when nothing is mapped.
///
/// Matching is literal and case-sensitive.
pub fn resolve(path: &str) -> Option<Screen> {
    ROUTES.iter().find(|entry| entry.path == path).map(|entry| entry.screen)
}

//! Navigation gating.
//!
//! Decides which view a principal lands on and whether a requested view
//! is reachable. This only selects views: data access must check the
//! role again on its own.

mod view;
pub use self::view::ViewId;

use crate::core::{Principal, Role};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Allow(ViewId),
    Redirect(ViewId),
}

impl Route {
    /// View that ends up rendered.
    pub fn view(&self) -> ViewId {
        match self {
            Route::Allow(view) | Route::Redirect(view) => *view,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Route::Redirect(_))
    }
}

/// Dashboard entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: ViewId,
    pub active: bool,
}

pub fn resolve_landing_view(principal: &Principal) -> ViewId {
    match principal.role() {
        None => ViewId::Login,
        Some(Role::Admin) => ViewId::AdminDashboard,
        Some(Role::User) => ViewId::UserDashboard,
    }
}

pub fn is_current_view(path: &str, current_path: &str) -> bool {
    path == current_path
}

pub fn route(principal: &Principal, destination: ViewId) -> Route {
    let allowed = match principal.role() {
        None => destination.is_public(),
        Some(role) => match destination {
            ViewId::Home => true,
            ViewId::Login | ViewId::Register => false,
            ViewId::UserDashboard => role == Role::User,
            ViewId::AdminDashboard => role == Role::Admin,
        },
    };

    if allowed {
        Route::Allow(destination)
    } else {
        Route::Redirect(resolve_landing_view(principal))
    }
}

/// Like [`route`], unknown paths redirect to the landing view.
pub fn route_path(principal: &Principal, path: &str) -> Route {
    match ViewId::from_path(path) {
        Some(view) => route(principal, view),
        None => Route::Redirect(resolve_landing_view(principal)),
    }
}

pub fn dashboard_entry(principal: &Principal, current_path: &str) -> Option<NavEntry> {
    if !principal.is_authenticated() {
        return None;
    }
    let target = resolve_landing_view(principal);
    Some(NavEntry {
        label: "Dashboard",
        target,
        active: is_current_view(target.path(), current_path),
    })
}

pub fn after_sign_out() -> ViewId {
    ViewId::Login
}

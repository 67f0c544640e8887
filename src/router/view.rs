use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Screens of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Home,
    Login,
    Register,
    UserDashboard,
    AdminDashboard,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Home,
        ViewId::Login,
        ViewId::Register,
        ViewId::UserDashboard,
        ViewId::AdminDashboard,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ViewId::Home => "/",
            ViewId::Login => "/login",
            ViewId::Register => "/register",
            ViewId::UserDashboard => "/user-dashboard",
            ViewId::AdminDashboard => "/admin",
        }
    }

    pub fn from_path(path: &str) -> Option<ViewId> {
        ViewId::ALL.into_iter().find(|view| view.path() == path)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Login => "login",
            ViewId::Register => "register",
            ViewId::UserDashboard => "user-dashboard",
            ViewId::AdminDashboard => "admin-dashboard",
        }
    }

    /// Reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, ViewId::Home | ViewId::Login | ViewId::Register)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .or_else(|| ViewId::from_path(s))
            .ok_or_else(|| format!("unknown view {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        for view in ViewId::ALL {
            assert_eq!(ViewId::from_path(view.path()), Some(view));
        }
        assert_eq!(ViewId::from_path("/dashboard/settings"), None);
    }

    #[test]
    fn public_views() {
        let public: Vec<ViewId> = ViewId::ALL
            .into_iter()
            .filter(ViewId::is_public)
            .collect();
        assert_eq!(public, vec![ViewId::Home, ViewId::Login, ViewId::Register]);
    }

    #[test]
    fn parse_id_or_path() {
        assert_eq!("admin-dashboard".parse::<ViewId>(), Ok(ViewId::AdminDashboard));
        assert_eq!("/admin".parse::<ViewId>(), Ok(ViewId::AdminDashboard));
        assert!("nowhere".parse::<ViewId>().is_err());
    }
}

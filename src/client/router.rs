//! View routing with authentication and role gates

use std::fmt;

use tracing::debug;

use crate::client::session::SessionSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Search,
    Workspace,
    Profile,
    Analytics,
    Admin,
    Login,
    Register,
}

impl View {
    /// Views shown in the navigation bar, in order
    pub const NAVIGABLE: [View; 6] = [
        View::Dashboard,
        View::Search,
        View::Workspace,
        View::Profile,
        View::Analytics,
        View::Admin,
    ];

    /// Unknown names fall back to the dashboard
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "search" => View::Search,
            "workspace" => View::Workspace,
            "profile" => View::Profile,
            "analytics" => View::Analytics,
            "admin" => View::Admin,
            "login" => View::Login,
            "register" => View::Register,
            _ => View::Dashboard,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Search => "search",
            View::Workspace => "workspace",
            View::Profile => "profile",
            View::Analytics => "analytics",
            View::Admin => "admin",
            View::Login => "login",
            View::Register => "register",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Search => "Search",
            View::Workspace => "Workspace",
            View::Profile => "Company Profile",
            View::Analytics => "Analytics",
            View::Admin => "Admin",
            View::Login => "Log in",
            View::Register => "Register",
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            View::Search | View::Workspace | View::Profile | View::Analytics | View::Admin
        )
    }

    pub fn requires_admin(self) -> bool {
        self == View::Admin
    }

    pub fn is_auth_form(self) -> bool {
        matches!(self, View::Login | View::Register)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Where a navigation request ended up, plus a notice to show if it was redirected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub view: View,
    pub error: Option<String>,
}

impl Navigation {
    fn to(view: View) -> Self {
        Self { view, error: None }
    }

    fn redirect(view: View, error: impl Into<String>) -> Self {
        Self {
            view,
            error: Some(error.into()),
        }
    }

    pub fn was_redirected(&self, requested: View) -> bool {
        self.view != requested
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    pub fn new() -> Self {
        Self
    }

    pub fn navigate(&self, target: View, session: &SessionSnapshot) -> Navigation {
        let navigation = if !session.is_authenticated() {
            if target.requires_auth() {
                Navigation::redirect(
                    View::Login,
                    format!("Please log in to access {}", target.title()),
                )
            } else {
                Navigation::to(target)
            }
        } else if target.requires_admin() && !session.is_team_admin() {
            Navigation::redirect(View::Dashboard, "Admin access required")
        } else if target.is_auth_form() {
            Navigation::to(View::Dashboard)
        } else {
            Navigation::to(target)
        };

        if navigation.was_redirected(target) {
            debug!(from = target.name(), to = navigation.view.name(), "Navigation redirected");
        }
        navigation
    }

    pub fn navigate_by_name(&self, name: &str, session: &SessionSnapshot) -> Navigation {
        self.navigate(View::from_name(name), session)
    }
}

//! # Routes and Navigation
//!
//! All three routes always exist. Only the navigation links depend on the
//! session: the router registers every [`AppRoute::segment`] without looking at
//! the role, so `/admin` is reachable by anyone who types it.

use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Dashboard,
    Admin,
}

impl AppRoute {
    pub const ALL: [AppRoute; 3] = [AppRoute::Login, AppRoute::Dashboard, AppRoute::Admin];

    /// Router segment; the root route is the empty segment.
    pub fn segment(self) -> &'static str {
        match self {
            AppRoute::Login => "",
            AppRoute::Dashboard => "dashboard",
            AppRoute::Admin => "admin",
        }
    }

    /// Link target for this route.
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Admin => "/admin",
        }
    }

    /// Navigation link label.
    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Login => "Login",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Admin => "Admin Panel",
        }
    }

    /// Whether the navigation bar shows a link to this route.
    pub fn is_linked_for(self, role: Role) -> bool {
        match self {
            AppRoute::Login => true,
            AppRoute::Dashboard => role.is_logged_in(),
            AppRoute::Admin => role.is_admin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: AppRoute,
    pub href: &'static str,
    pub label: &'static str,
}

/// Links shown in the navigation bar for `role`, in display order.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    AppRoute::ALL
        .into_iter()
        .filter(|route| route.is_linked_for(role))
        .map(|route| NavLink {
            route,
            href: route.path(),
            label: route.label(),
        })
        .collect()
}

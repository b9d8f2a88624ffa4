//! Which navigation links a visitor gets to see.

use serde::Serialize;

use crate::common::auth::{Actor, Capability, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavRoute {
    pub href: &'static str,
    pub label: &'static str,
}

const fn route(href: &'static str, label: &'static str) -> NavRoute {
    NavRoute { href, label }
}

const PUBLIC_ROUTES: [NavRoute; 4] = [
    route("/", "Home"),
    route("/products", "Products"),
    route("/articles", "Articles"),
    route("/data", "Data Visualization"),
];

const ADMIN_ROUTES: [NavRoute; 2] = [
    route("/admin/dashboard", "Dashboard"),
    route("/admin/users", "Users"),
];

const EDITOR_ROUTES: [NavRoute; 2] = [
    route("/admin/products", "Manage Products"),
    route("/admin/articles", "Manage Articles"),
];

/// Navigation links grouped by audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRoutes {
    pub routes: Vec<NavRoute>,
    pub admin_routes: Vec<NavRoute>,
    pub editor_routes: Vec<NavRoute>,
}

impl NavigationRoutes {
    /// Links visible to `user` (`None` for anonymous visitors)
    pub fn for_user(user: Option<&User>) -> Self {
        let visible = |capability: Capability, routes: &[NavRoute]| {
            if Actor::new(user).can(capability).allowed() {
                routes.to_vec()
            } else {
                Vec::new()
            }
        };

        Self {
            routes: PUBLIC_ROUTES.to_vec(),
            admin_routes: visible(Capability::ViewAdminDashboard, &ADMIN_ROUTES),
            editor_routes: visible(Capability::ManageContent, &EDITOR_ROUTES),
        }
    }
}

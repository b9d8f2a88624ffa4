// Common types and utilities shared across the application

pub mod auth;
pub mod navigation;

pub use auth::{Actor, AuthContext, AuthError, Capability, MockAuthContext, User, UserRole};
pub use navigation::{NavRoute, NavigationRoutes};

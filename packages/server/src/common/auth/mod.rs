/// Authorization module for the Rethread site
///
/// Provides an injected auth context plus a fluent API for capability checks:
///
/// ```rust,ignore
/// use server_core::common::auth::{Actor, Capability};
///
/// Actor::new(auth.current_user().as_ref())
///     .can(Capability::ManageContent)
///     .check()?;
/// ```
///
/// Sessions are held by whoever owns the `AuthContext`; there is no global
/// user state.

mod builder;
mod capability;
mod context;
mod errors;

pub use builder::{can_access, login_redirect, Actor, CapabilityBuilder};
pub use capability::{Capability, UserRole};
pub use context::{AuthContext, DirectoryEntry, MockAuthContext, User, UserDirectory};
pub use errors::AuthError;

use super::{AuthError, Capability, User};

/// Entry point for authorization checks
///
/// Usage:
/// ```rust,ignore
/// Actor::new(Some(&user))
///     .can(Capability::ManageContent)
///     .check()?;
/// ```
pub struct Actor<'a> {
    user: Option<&'a User>,
}

impl<'a> Actor<'a> {
    /// Create a new actor; `None` is an anonymous visitor
    pub fn new(user: Option<&'a User>) -> Self {
        Self { user }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityBuilder<'a> {
        CapabilityBuilder {
            user: self.user,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder<'a> {
    user: Option<&'a User>,
    capability: Capability,
}

impl CapabilityBuilder<'_> {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        let user = self.user.ok_or(AuthError::AuthenticationRequired)?;
        if user.role.can(self.capability) {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied(format!(
                "{} cannot {:?}",
                user.email, self.capability
            )))
        }
    }

    /// Same check, as a boolean
    pub fn allowed(self) -> bool {
        self.check().is_ok()
    }
}

/// Capability required to open `path`, if any
fn required_capability(path: &str) -> Option<Capability> {
    let admin_path = path
        .strip_prefix("/admin")
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))?;

    if admin_path.starts_with("/products") || admin_path.starts_with("/articles") {
        Some(Capability::ManageContent)
    } else {
        Some(Capability::ViewAdminDashboard)
    }
}

/// Whether `user` may open `path`
///
/// Product and article management is open to editors; the rest of `/admin`
/// is admin-only. Everything outside `/admin` is public.
pub fn can_access(user: Option<&User>, path: &str) -> bool {
    match required_capability(path) {
        Some(capability) => Actor::new(user).can(capability).allowed(),
        None => true,
    }
}

/// Login page URL that returns to `path` afterwards
pub fn login_redirect(path: &str) -> String {
    format!("/login?redirect={}", urlencoding::encode(path))
}

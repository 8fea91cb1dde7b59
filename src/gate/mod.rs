//! Route authorization gate: stateless per-request classification of the
//! path, then an allow/redirect/defer decision from the resolved role claim.
//! The decision core is pure; the axum wiring lives in `middleware::gate`.

pub mod patterns;

use once_cell::sync::Lazy;

use crate::config;
use crate::types::Role;
use patterns::PatternSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without any session; no claim resolution is performed
    Public,
    /// Requires an elevated role claim
    Admin,
    /// Requires an authenticated session (generic challenge)
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Send the caller to the configured unauthorized destination
    Redirect,
    /// Defer to the generic authentication challenge downstream
    Challenge,
}

// Pattern sets compile once from config; per-request work is match-only.
static PUBLIC_ROUTES: Lazy<PatternSet> =
    Lazy::new(|| PatternSet::new(&config::config().gate.public_routes));
static ADMIN_ROUTES: Lazy<PatternSet> =
    Lazy::new(|| PatternSet::new(&config::config().gate.admin_routes));

/// Classify against the configured pattern sets. Public wins over admin so a
/// misconfigured overlap fails open only for routes explicitly listed public.
pub fn classify(path: &str) -> RouteClass {
    classify_with(path, &PUBLIC_ROUTES, &ADMIN_ROUTES)
}

pub fn classify_with(path: &str, public: &PatternSet, admin: &PatternSet) -> RouteClass {
    if public.matches(path) {
        RouteClass::Public
    } else if admin.matches(path) {
        RouteClass::Admin
    } else {
        RouteClass::Protected
    }
}

/// Pure decision: the role claim is threaded in explicitly so the gate is
/// testable without an identity provider. `None` means no usable claim and
/// fails every admin check.
pub fn authorize(class: RouteClass, role: Option<Role>) -> Decision {
    match class {
        RouteClass::Public => Decision::Allow,
        RouteClass::Admin => match role {
            Some(role) if role.is_elevated() => Decision::Allow,
            _ => Decision::Redirect,
        },
        RouteClass::Protected => Decision::Challenge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> (PatternSet, PatternSet) {
        (
            PatternSet::new(&["/", "/health", "/auth/*", "/webhooks/*"]),
            PatternSet::new(&["/api/admin/*"]),
        )
    }

    #[test]
    fn classification_precedence() {
        let (public, admin) = sets();
        assert_eq!(classify_with("/auth/login", &public, &admin), RouteClass::Public);
        assert_eq!(classify_with("/api/admin/users", &public, &admin), RouteClass::Admin);
        assert_eq!(classify_with("/api/orders", &public, &admin), RouteClass::Protected);
        assert_eq!(classify_with("/dashboard", &public, &admin), RouteClass::Protected);
    }

    #[test]
    fn admin_requires_elevated_role() {
        assert_eq!(authorize(RouteClass::Admin, Some(Role::Admin)), Decision::Allow);
        assert_eq!(authorize(RouteClass::Admin, Some(Role::SuperAdmin)), Decision::Allow);
        assert_eq!(authorize(RouteClass::Admin, Some(Role::Member)), Decision::Redirect);
        assert_eq!(authorize(RouteClass::Admin, None), Decision::Redirect);
    }

    #[test]
    fn public_allows_without_role() {
        assert_eq!(authorize(RouteClass::Public, None), Decision::Allow);
    }

    #[test]
    fn protected_defers_to_generic_challenge() {
        assert_eq!(authorize(RouteClass::Protected, None), Decision::Challenge);
        assert_eq!(authorize(RouteClass::Protected, Some(Role::Member)), Decision::Challenge);
    }
}

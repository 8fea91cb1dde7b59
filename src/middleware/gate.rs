use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::config;
use crate::gate::{self, Decision, RouteClass};
use crate::types::Role;

use super::auth::{extract_jwt_from_headers, validate_jwt};

/// Resolves the session's role claim for the gate. Threaded in as explicit
/// state so tests can substitute a double and count resolution calls.
#[async_trait]
pub trait RoleResolver: Send + Sync {
    async fn resolve_role(&self, headers: &HeaderMap) -> Option<Role>;
}

/// Production resolver: reads the bearer token and parses the role claim
/// leniently. Any failure along the way normalizes to "no role".
pub struct JwtRoleResolver;

#[async_trait]
impl RoleResolver for JwtRoleResolver {
    async fn resolve_role(&self, headers: &HeaderMap) -> Option<Role> {
        let token = extract_jwt_from_headers(headers).ok()?;
        let claims = validate_jwt(&token).ok()?;
        claims.resolved_role()
    }
}

#[derive(Clone)]
pub struct GateState {
    resolver: Arc<dyn RoleResolver>,
}

impl GateState {
    pub fn new() -> Self {
        Self::with_resolver(Arc::new(JwtRoleResolver))
    }

    pub fn with_resolver(resolver: Arc<dyn RoleResolver>) -> Self {
        Self { resolver }
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::new()
    }
}

/// Outermost request gate. Public paths pass through before any session
/// resolution; admin paths redirect on a failed role check; everything else
/// defers to the JWT challenge on the protected router.
pub async fn route_gate_middleware(
    State(state): State<GateState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    let class = gate::classify(path);
    if class == RouteClass::Public {
        return next.run(request).await;
    }

    let role = state.resolver.resolve_role(request.headers()).await;

    match gate::authorize(class, role) {
        Decision::Allow | Decision::Challenge => next.run(request).await,
        Decision::Redirect => {
            tracing::debug!(path, ?role, "admin route check failed, redirecting");
            Redirect::to(&config::config().gate.unauthorized_path).into_response()
        }
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request},
    middleware,
    routing::get,
    Router,
};

use soporte_api::auth::{generate_jwt, Claims};
use soporte_api::middleware::{jwt_auth_middleware, route_gate_middleware, GateState, RoleResolver};
use soporte_api::types::Role;

/// Role resolver double that counts how often the gate actually consults the
/// session. Public routes must never touch it.
pub struct CountingResolver {
    pub calls: AtomicUsize,
    role: Option<Role>,
}

impl CountingResolver {
    pub fn returning(role: Option<Role>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            role,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleResolver for CountingResolver {
    async fn resolve_role(&self, _headers: &HeaderMap) -> Option<Role> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.role
    }
}

async fn ok_handler() -> &'static str {
    "OK"
}

/// Minimal router shaped like the real app's surface: one public route, one
/// admin route, one protected route behind the generic JWT challenge. Handlers
/// are stubs so no backend is needed.
pub fn gate_app(gate: GateState) -> Router {
    Router::new()
        .route("/auth/login", get(ok_handler))
        .route("/api/admin/users", get(ok_handler))
        .route(
            "/api/orders",
            get(ok_handler).route_layer(middleware::from_fn(jwt_auth_middleware)),
        )
        .layer(middleware::from_fn_with_state(gate, route_gate_middleware))
}

pub fn build_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", t));
    }
    builder.body(Body::empty()).unwrap()
}

/// Mint a real session token with the given role claim string.
pub fn make_token(user_id: i64, username: &str, role: &str) -> String {
    let claims = Claims::new(user_id, username.to_string(), role.to_string());
    generate_jwt(claims).expect("token generation")
}

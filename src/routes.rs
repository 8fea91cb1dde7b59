use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::handlers::{admin, protected, public};
use crate::middleware::{jwt_auth_middleware, route_gate_middleware, GateState};
use crate::models::{Building, CatalogModel, Group, Sector, Tag};

pub fn app() -> Router {
    app_with_gate(GateState::new())
}

/// Router with an injectable gate state so tests can substitute the role
/// resolver. The gate layer is outermost; the JWT challenge covers `/api`.
pub fn app_with_gate(gate: GateState) -> Router {
    let config = crate::config::config();

    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/unauthorized", get(unauthorized))
        .merge(auth_public_routes())
        // Protected + admin API
        .merge(api_routes())
        // Global middleware
        .layer(middleware::from_fn_with_state(gate, route_gate_middleware));

    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn auth_public_routes() -> Router {
    use axum::routing::post;

    Router::new()
        .route("/auth/login", post(public::auth::login))
        .route("/webhooks/auth", post(public::webhook::auth_event))
}

fn api_routes() -> Router {
    Router::new()
        .merge(session_routes())
        .merge(order_routes())
        .merge(task_routes())
        .merge(admin_user_routes())
        .merge(catalog_routes::<Group>("groups"))
        .merge(catalog_routes::<Building>("buildings"))
        .merge(catalog_routes::<Sector>("sectors"))
        .merge(catalog_routes::<Tag>("tags"))
        .layer(middleware::from_fn(jwt_auth_middleware))
}

fn session_routes() -> Router {
    use protected::auth;

    Router::new().route("/api/auth/whoami", get(auth::whoami))
}

fn order_routes() -> Router {
    use protected::{chat, orders};

    Router::new()
        .route(
            "/api/orders",
            get(orders::order_list).post(orders::order_create),
        )
        .route(
            "/api/orders/:id",
            get(orders::order_get).patch(orders::order_update),
        )
        .route(
            "/api/orders/:id/messages",
            get(orders::message_list).post(orders::message_post),
        )
        .route("/api/orders/:id/chat", get(chat::chat_socket))
}

fn task_routes() -> Router {
    use protected::tasks;

    Router::new()
        .route("/api/tasks", get(tasks::task_list).post(tasks::task_create))
        .route(
            "/api/tasks/:id",
            get(tasks::task_get).patch(tasks::task_update),
        )
}

fn admin_user_routes() -> Router {
    use admin::users;

    Router::new()
        .route(
            "/api/admin/users",
            get(users::user_list).post(users::user_create),
        )
        .route(
            "/api/admin/users/:id",
            get(users::user_get)
                .patch(users::user_update)
                .delete(users::user_delete),
        )
}

fn catalog_routes<T: CatalogModel>(segment: &str) -> Router {
    use admin::catalog;

    Router::new()
        .route(
            &format!("/api/admin/{}", segment),
            get(catalog::list::<T>).post(catalog::create::<T>),
        )
        .route(
            &format!("/api/admin/{}/:id", segment),
            get(catalog::get_one::<T>)
                .patch(catalog::update::<T>)
                .delete(catalog::destroy::<T>),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Soporte API",
            "version": version,
            "description": "Helpdesk administration API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/auth/login (public - token acquisition)",
                "webhooks": "/webhooks/auth (public - identity provider sync)",
                "session": "/api/auth/whoami (protected)",
                "orders": "/api/orders[/:id] (protected)",
                "messages": "/api/orders/:id/messages (protected)",
                "chat": "/api/orders/:id/chat (protected)",
                "tasks": "/api/tasks[/:id] (protected)",
                "admin": "/api/admin/* (admin role required)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::client::backend().health().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "backend": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "backend unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "backend_error": e.to_string()
                }
            })),
        ),
    }
}

/// Landing spot for the gate's admin-route redirect.
async fn unauthorized() -> ApiError {
    ApiError::forbidden("You do not have access to this area")
}

/// Bind and serve. Port resolution: explicit override, then SOPORTE_API_PORT
/// or PORT from the environment, then 3000.
pub async fn serve(port_override: Option<u16>) -> anyhow::Result<()> {
    let port = port_override
        .or_else(|| {
            std::env::var("SOPORTE_API_PORT")
                .ok()
                .or_else(|| std::env::var("PORT").ok())
                .and_then(|s| s.parse::<u16>().ok())
        })
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🎫 Soporte API server listening on http://{}", bind_addr);

    axum::serve(listener, app()).await?;
    Ok(())
}

mod common;

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use soporte_api::middleware::GateState;
use soporte_api::types::Role;

// Gate behavior over the app-shaped test router in tests/common: public
// routes skip session resolution entirely, admin routes redirect on a failed
// role check, protected routes defer to the generic JWT challenge.

#[tokio::test]
async fn public_route_allows_without_session_lookup() {
    let resolver = common::CountingResolver::returning(None);
    let app = common::gate_app(GateState::with_resolver(resolver.clone()));

    let res = app
        .oneshot(common::build_request("/auth/login", None))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(resolver.call_count(), 0, "public route consulted the session");
}

#[tokio::test]
async fn admin_route_allows_admin_role() {
    let resolver = common::CountingResolver::returning(Some(Role::Admin));
    let app = common::gate_app(GateState::with_resolver(resolver.clone()));

    let res = app
        .oneshot(common::build_request("/api/admin/users", None))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(resolver.call_count(), 1);
}

#[tokio::test]
async fn admin_route_allows_super_admin_role() {
    let resolver = common::CountingResolver::returning(Some(Role::SuperAdmin));
    let app = common::gate_app(GateState::with_resolver(resolver));

    let res = app
        .oneshot(common::build_request("/api/admin/users", None))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_route_redirects_member_role() {
    let resolver = common::CountingResolver::returning(Some(Role::Member));
    let app = common::gate_app(GateState::with_resolver(resolver));

    let res = app
        .oneshot(common::build_request("/api/admin/users", None))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/unauthorized")
    );
}

#[tokio::test]
async fn admin_route_redirects_without_any_claim() {
    let resolver = common::CountingResolver::returning(None);
    let app = common::gate_app(GateState::with_resolver(resolver));

    let res = app
        .oneshot(common::build_request("/api/admin/users", None))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/unauthorized")
    );
}

#[tokio::test]
async fn protected_route_defers_to_generic_challenge() {
    let resolver = common::CountingResolver::returning(None);
    let app = common::gate_app(GateState::with_resolver(resolver));

    // No redirect here: the gate passes through and the JWT middleware
    // answers with the 401 challenge.
    let res = app
        .oneshot(common::build_request("/api/orders", None))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn jwt_resolver_reads_real_role_claims() {
    // Default GateState uses the production JwtRoleResolver
    let app = common::gate_app(GateState::new());

    let admin = common::make_token(1, "root", "admin");
    let res = app
        .clone()
        .oneshot(common::build_request("/api/admin/users", Some(&admin)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let member = common::make_token(2, "jdoe", "member");
    let res = app
        .clone()
        .oneshot(common::build_request("/api/admin/users", Some(&member)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    // Unknown role strings normalize to "no privileges"
    let stranger = common::make_token(3, "zz", "superuser");
    let res = app
        .oneshot(common::build_request("/api/admin/users", Some(&stranger)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn protected_route_allows_valid_session() {
    let app = common::gate_app(GateState::new());

    let token = common::make_token(4, "jdoe", "member");
    let res = app
        .oneshot(common::build_request("/api/orders", Some(&token)))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

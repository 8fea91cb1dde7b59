use jsonwebtoken::{decode, DecodingKey, Validation};

use soporte_api::auth::{generate_jwt, password, Claims};
use soporte_api::config;
use soporte_api::types::Role;

#[test]
fn jwt_round_trip_preserves_claims() {
    let claims = Claims::new(7, "jdoe".to_string(), "admin".to_string());
    let token = generate_jwt(claims).expect("token generation");

    let secret = &config::config().security.jwt_secret;
    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .expect("token validation");

    assert_eq!(decoded.claims.sub, 7);
    assert_eq!(decoded.claims.username, "jdoe");
    assert_eq!(decoded.claims.role, "admin");
    assert!(decoded.claims.exp > decoded.claims.iat);
}

#[test]
fn role_claim_resolution_is_lenient() {
    let admin = Claims::new(1, "a".to_string(), "admin".to_string());
    assert_eq!(admin.resolved_role(), Some(Role::Admin));

    let super_admin = Claims::new(2, "b".to_string(), "super-admin".to_string());
    assert_eq!(super_admin.resolved_role(), Some(Role::SuperAdmin));

    let unknown = Claims::new(3, "c".to_string(), "superuser".to_string());
    assert_eq!(unknown.resolved_role(), None);

    let empty = Claims::new(4, "d".to_string(), String::new());
    assert_eq!(empty.resolved_role(), None);
}

#[test]
fn tampered_tokens_are_rejected() {
    let claims = Claims::new(9, "jdoe".to_string(), "member".to_string());
    let token = generate_jwt(claims).expect("token generation");

    let tampered = format!("{}x", token);
    let secret = &config::config().security.jwt_secret;
    let result = decode::<Claims>(
        &tampered,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    );

    assert!(result.is_err());
}

#[test]
fn password_hash_and_verify() {
    let hash = password::hash_password("s3cret!").expect("hashing");
    assert!(hash.starts_with("$2"));
    assert!(password::verify_password("s3cret!", &hash).expect("verify"));
    assert!(!password::verify_password("wrong", &hash).expect("verify"));
}

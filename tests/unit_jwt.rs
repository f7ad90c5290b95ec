use sims_api::config::jwt::JwtConfig;
use sims_api::utils::jwt::{issue_token_pair, validate_access_token, validate_refresh_token};

fn test_config() -> JwtConfig {
    JwtConfig {
        access_secret: "unit-test-access-secret".to_string(),
        refresh_secret: "unit-test-refresh-secret".to_string(),
        access_token_expiry: 60,
        refresh_token_expiry: 604800,
    }
}

#[test]
fn test_issue_token_pair_produces_two_distinct_tokens() {
    let config = test_config();
    let pair = issue_token_pair(7, "Jane Doe", &config).unwrap();

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);
}

#[test]
fn test_access_token_round_trip() {
    let config = test_config();
    let pair = issue_token_pair(42, "Jane Doe", &config).unwrap();

    let claims = validate_access_token(&pair.access_token, &config).unwrap();
    assert_eq!(claims.id, 42);
    assert_eq!(claims.name, "Jane Doe");
    assert_eq!(claims.exp - claims.iat, config.access_token_expiry);
}

#[test]
fn test_refresh_token_round_trip_carries_email_field() {
    let config = test_config();
    let pair = issue_token_pair(42, "jane@example.com", &config).unwrap();

    let claims = validate_refresh_token(&pair.refresh_token, &config).unwrap();
    assert_eq!(claims.id, 42);
    // The refresh claim names its secondary attribute `email`; it holds
    // whatever display value the pair was issued with.
    assert_eq!(claims.email, "jane@example.com");
    assert_eq!(claims.exp - claims.iat, config.refresh_token_expiry);
}

#[test]
fn test_access_token_rejected_as_refresh() {
    let config = test_config();
    let pair = issue_token_pair(1, "Jane", &config).unwrap();

    assert!(validate_refresh_token(&pair.access_token, &config).is_none());
}

#[test]
fn test_refresh_token_rejected_as_access() {
    let config = test_config();
    let pair = issue_token_pair(1, "Jane", &config).unwrap();

    assert!(validate_access_token(&pair.refresh_token, &config).is_none());
}

#[test]
fn test_wrong_secret_rejected() {
    let config = test_config();
    let pair = issue_token_pair(1, "Jane", &config).unwrap();

    let other = JwtConfig {
        access_secret: "a-different-secret".to_string(),
        ..test_config()
    };
    assert!(validate_access_token(&pair.access_token, &other).is_none());
}

#[test]
fn test_expired_access_token_rejected() {
    // Negative expiry signs a token that is already past its exp; with zero
    // leeway it must be rejected immediately.
    let config = JwtConfig {
        access_token_expiry: -10,
        ..test_config()
    };
    let pair = issue_token_pair(1, "Jane", &config).unwrap();

    assert!(validate_access_token(&pair.access_token, &config).is_none());
    // The refresh token from the same pair is still within its window.
    assert!(validate_refresh_token(&pair.refresh_token, &config).is_some());
}

#[test]
fn test_expired_refresh_token_rejected() {
    let config = JwtConfig {
        refresh_token_expiry: -10,
        ..test_config()
    };
    let pair = issue_token_pair(1, "Jane", &config).unwrap();

    assert!(validate_refresh_token(&pair.refresh_token, &config).is_none());
    assert!(validate_access_token(&pair.access_token, &config).is_some());
}

#[test]
fn test_malformed_tokens_rejected() {
    let config = test_config();
    let malformed = [
        "",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
    ];

    for token in malformed {
        assert!(validate_access_token(token, &config).is_none());
        assert!(validate_refresh_token(token, &config).is_none());
    }
}

#[test]
fn test_different_users_get_different_tokens() {
    let config = test_config();
    let pair1 = issue_token_pair(1, "one@example.com", &config).unwrap();
    let pair2 = issue_token_pair(2, "two@example.com", &config).unwrap();

    assert_ne!(pair1.access_token, pair2.access_token);

    let claims1 = validate_access_token(&pair1.access_token, &config).unwrap();
    let claims2 = validate_access_token(&pair2.access_token, &config).unwrap();
    assert_eq!(claims1.id, 1);
    assert_eq!(claims2.id, 2);
}

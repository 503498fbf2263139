//! Unit tests for domain entities

use serde_json::{json, Map, Value};

use crate::domain::entities::{
    custom_claims, mask_token, AccessToken, ClaimSet, PrincipalToken, RefreshToken, TokenPair,
};

#[test]
fn test_custom_claims_strips_registered_set() {
    let mut claims = ClaimSet::new();
    for name in ["iss", "sub", "aud", "jti"] {
        claims.insert(name, "value");
    }
    for name in ["iat", "exp", "nbf"] {
        claims.insert(name, 1_700_000_000);
    }
    claims.insert("role", "admin");
    claims.insert("scopes", json!(["read", "write"]));

    let custom = custom_claims(&claims);
    assert_eq!(custom.len(), 2);
    assert_eq!(custom["role"], "admin");
    assert_eq!(custom["scopes"], json!(["read", "write"]));
}

#[test]
fn test_claim_set_accessors() {
    let mut claims = ClaimSet::new();
    claims.insert("sub", "user-1");
    claims.insert("exp", 1_700_000_600);
    claims.insert("nbf", json!(1.5));

    assert_eq!(claims.subject(), Some("user-1"));
    assert_eq!(claims.expires_at(), Some(1_700_000_600));
    // Non-integer timestamps are not readable as temporal claims
    assert_eq!(claims.not_before(), None);
    assert_eq!(claims.issuer(), None);
}

#[test]
fn test_claim_set_serializes_with_sorted_keys() {
    let mut claims = ClaimSet::new();
    claims.insert("sub", "user-1");
    claims.insert("aud", "api");
    claims.insert("exp", 10);

    let json = serde_json::to_string(&claims).unwrap();
    assert_eq!(json, r#"{"aud":"api","exp":10,"sub":"user-1"}"#);
}

#[test]
fn test_principal_token_json_round_trip() {
    let principal = PrincipalToken::new("api", "user-1").with_attribute("role", "admin");
    let json = serde_json::to_string(&principal).unwrap();
    let restored: PrincipalToken = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, principal);
    assert_eq!(restored.attribute("role"), Some(&Value::from("admin")));
}

#[test]
fn test_principal_token_without_attributes() {
    let restored: PrincipalToken =
        serde_json::from_str(r#"{"guard_name":"api","user_identifier":"user-1"}"#).unwrap();
    assert_eq!(restored.user_identifier(), "user-1");
    assert_eq!(restored.attributes, Map::new());
}

#[test]
fn test_token_pair_response_shape() {
    let pair = TokenPair::new(
        AccessToken {
            token: "header.payload.sig".to_string(),
            expires_in: 600,
        },
        RefreshToken {
            token: "abcdef0123456789".to_string(),
            expires_in: 1_209_600,
        },
    );

    let json = serde_json::to_value(&pair).unwrap();
    assert_eq!(
        json,
        json!({
            "access_token": "header.payload.sig",
            "expires_in": 600,
            "refresh_token": "abcdef0123456789"
        })
    );
}

#[test]
fn test_debug_masks_token_strings() {
    let refresh = RefreshToken {
        token: "abcdef0123456789".to_string(),
        expires_in: 60,
    };
    let debug = format!("{:?}", refresh);
    assert!(debug.contains("abcdef01***"));
    assert!(!debug.contains("abcdef0123456789"));
}

#[test]
fn test_mask_token_short_input() {
    assert_eq!(mask_token("abc"), "***");
    assert_eq!(mask_token("0123456789"), "01234567***");
}

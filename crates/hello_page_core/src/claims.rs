use serde_json::Value;

/// Placeholder rendered for any claim the authorizer did not forward.
pub const MISSING_CLAIM: &str = "N/A";

/// Identity attributes forwarded by the Cognito user pool authorizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerClaims {
    pub sub: String,
    pub email: String,
    pub username: String,
}

impl AuthorizerClaims {
    /// Claims for a request that carried no authorizer context at all.
    pub fn missing() -> Self {
        Self {
            sub: MISSING_CLAIM.to_string(),
            email: MISSING_CLAIM.to_string(),
            username: MISSING_CLAIM.to_string(),
        }
    }
}

/// Reads the claims mapping at `requestContext.authorizer.claims`.
///
/// Returns `None` when any segment of the path is missing or the mapping is
/// not an object. Within a present mapping, each claim defaults independently
/// to [`MISSING_CLAIM`]; non-string values count as absent.
pub fn extract_authorizer_claims(event: &Value) -> Option<AuthorizerClaims> {
    let claims = event
        .get("requestContext")?
        .get("authorizer")?
        .get("claims")?
        .as_object()?;

    let claim = |name: &str| {
        claims
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or(MISSING_CLAIM)
            .to_string()
    };

    Some(AuthorizerClaims {
        sub: claim("sub"),
        email: claim("email"),
        username: claim("cognito:username"),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_all_three_claims() {
        let event = json!({
            "requestContext": {
                "authorizer": {
                    "claims": {
                        "sub": "abc",
                        "email": "a@b.com",
                        "cognito:username": "bob"
                    }
                }
            }
        });

        let claims = extract_authorizer_claims(&event).expect("claims should be present");
        assert_eq!(claims.sub, "abc");
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.username, "bob");
    }

    #[test]
    fn defaults_each_absent_claim_independently() {
        let event = json!({
            "requestContext": {
                "authorizer": {
                    "claims": { "email": "a@b.com" }
                }
            }
        });

        let claims = extract_authorizer_claims(&event).expect("claims should be present");
        assert_eq!(claims.sub, MISSING_CLAIM);
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.username, MISSING_CLAIM);
    }

    #[test]
    fn treats_non_string_claim_values_as_absent() {
        let event = json!({
            "requestContext": {
                "authorizer": {
                    "claims": { "sub": 42, "email": null }
                }
            }
        });

        let claims = extract_authorizer_claims(&event).expect("claims should be present");
        assert_eq!(claims.sub, MISSING_CLAIM);
        assert_eq!(claims.email, MISSING_CLAIM);
    }

    #[test]
    fn missing_path_yields_none_without_panicking() {
        assert_eq!(extract_authorizer_claims(&json!({})), None);
        assert_eq!(extract_authorizer_claims(&json!("not an object")), None);
        assert_eq!(
            extract_authorizer_claims(&json!({"requestContext": {}})),
            None
        );
        assert_eq!(
            extract_authorizer_claims(&json!({
                "requestContext": { "authorizer": { "claims": "not a map" } }
            })),
            None
        );
    }
}

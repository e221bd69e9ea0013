//! Outward payload shaping shared by the person handlers.

use std::collections::HashMap;

use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{PersonId, PersonQuery};

/// Key standing in for an absent `name` filter.
pub const ABSENT_NAME_KEY: &str = "null";

/// Text paired with an identifier that exists.
pub const EXISTS_MESSAGE: &str = "It exist!";

/// Fields treated as credentials when shaping responses.
pub const CREDENTIAL_FIELDS: [&str; 1] = ["password"];

/// Whether credentials survive in outward payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Return the payload unchanged.
    #[default]
    Echo,
    /// Remove every credential field.
    Strip,
}

impl CredentialPolicy {
    /// Select [`CredentialPolicy::Strip`] when `strip` is set.
    pub const fn from_strip_flag(strip: bool) -> Self {
        if strip { Self::Strip } else { Self::Echo }
    }

    /// Apply the policy to a flat JSON object.
    ///
    /// # Examples
    /// ```
    /// use people_api::api::shaping::CredentialPolicy;
    /// use serde_json::{Map, json};
    ///
    /// let mut payload = Map::new();
    /// payload.insert("first_name".into(), json!("Ana"));
    /// payload.insert("password".into(), json!("secret123"));
    /// let shaped = CredentialPolicy::Strip.apply(payload);
    /// assert!(!shaped.contains_key("password"));
    /// ```
    pub fn apply(self, mut payload: Map<String, Value>) -> Map<String, Value> {
        if self == Self::Strip {
            for field in CREDENTIAL_FIELDS {
                payload.remove(field);
            }
        }
        payload
    }
}

/// `201 Created` with a JSON body.
pub fn created<T: Serialize>(body: &T) -> HttpResponse {
    HttpResponse::Created().json(body)
}

/// Single-entry mapping confirming that `id` exists.
pub fn existence(id: PersonId) -> HashMap<String, &'static str> {
    HashMap::from([(id.to_string(), EXISTS_MESSAGE)])
}

/// Single-entry mapping from the `name` filter to the `age` filter.
///
/// An absent name is keyed as `"null"`; an absent age maps to JSON `null`.
pub fn query_echo(query: PersonQuery) -> HashMap<String, Option<String>> {
    let key = query.name.unwrap_or_else(|| ABSENT_NAME_KEY.to_owned());
    HashMap::from([(key, query.age)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use rstest::rstest;
    use serde_json::json;

    fn payload() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("first_name".into(), json!("Ana"));
        map.insert("password".into(), json!("secret123"));
        map.insert("city".into(), json!("Lima"));
        map
    }

    #[rstest]
    #[case(CredentialPolicy::Echo, true)]
    #[case(CredentialPolicy::Strip, false)]
    fn policy_controls_password(#[case] policy: CredentialPolicy, #[case] kept: bool) {
        let shaped = policy.apply(payload());
        assert_eq!(shaped.contains_key("password"), kept);
        assert_eq!(shaped.get("city"), Some(&json!("Lima")));
    }

    #[rstest]
    #[case(false, CredentialPolicy::Echo)]
    #[case(true, CredentialPolicy::Strip)]
    fn strip_flag_selects_policy(#[case] strip: bool, #[case] expected: CredentialPolicy) {
        assert_eq!(CredentialPolicy::from_strip_flag(strip), expected);
    }

    #[test]
    fn existence_keys_by_identifier() {
        let id = PersonId::for_lookup("3").expect("valid id");
        let body = serde_json::to_value(existence(id)).expect("serialise");
        assert_eq!(body, json!({ "3": "It exist!" }));
    }

    #[rstest]
    #[case(None, None, json!({ "null": null }))]
    #[case(Some("Ana"), None, json!({ "Ana": null }))]
    #[case(None, Some("30"), json!({ "null": "30" }))]
    #[case(Some("Ana"), Some("30"), json!({ "Ana": "30" }))]
    fn query_echo_keys_age_by_name(
        #[case] name: Option<&str>,
        #[case] age: Option<&str>,
        #[case] expected: Value,
    ) {
        let query = PersonQuery {
            name: name.map(str::to_owned),
            age: age.map(str::to_owned),
        };
        let body = serde_json::to_value(query_echo(query)).expect("serialise");
        assert_eq!(body, expected);
    }

    #[test]
    fn created_uses_201() {
        assert_eq!(created(&json!({})).status(), StatusCode::CREATED);
    }
}

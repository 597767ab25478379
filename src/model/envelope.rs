use super::User;
use serde::Serialize;

/// Status code reported for a mutation that found its target.
pub const CODE_OK: &str = "200";

/// Status code reported when the requested id does not exist.
pub const CODE_NOT_FOUND: &str = "404";

const MSG_NOT_FOUND: &str = "user not found";

/// Outcome of a mutation.
///
/// A missing record is a normal outcome carried here with `success == false`,
/// never an error of the call itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationEnvelope {
    pub code: String,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl MutationEnvelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: CODE_OK.to_string(),
            success: true,
            message: message.into(),
            user: None,
        }
    }

    pub fn ok_with_user(message: impl Into<String>, user: User) -> Self {
        Self {
            user: Some(user),
            ..Self::ok(message)
        }
    }

    pub fn not_found() -> Self {
        Self {
            code: CODE_NOT_FOUND.to_string(),
            success: false,
            message: MSG_NOT_FOUND.to_string(),
            user: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_no_user() {
        let envelope = MutationEnvelope::ok("user removed");
        assert_eq!(envelope.code, "200");
        assert!(envelope.success);
        assert_eq!(envelope.message, "user removed");
        assert!(envelope.user.is_none());
    }

    #[test]
    fn test_ok_with_user() {
        let user = User::new("7", "n", "e");
        let envelope = MutationEnvelope::ok_with_user("user added", user.clone());
        assert_eq!(envelope.code, CODE_OK);
        assert_eq!(envelope.user, Some(user));
    }

    #[test]
    fn test_not_found() {
        let envelope = MutationEnvelope::not_found();
        assert_eq!(envelope.code, "404");
        assert!(!envelope.success);
        assert_eq!(envelope.message, "user not found");
        assert!(envelope.user.is_none());
    }

    #[test]
    fn test_serialization_omits_missing_user() {
        let json = serde_json::to_value(MutationEnvelope::not_found()).unwrap();
        assert!(json.get("user").is_none());
        assert_eq!(json["code"], "404");
    }
}

//! API Error Taxonomy
//!
//! Every backend call resolves to one of these categories. All of them are
//! terminal for the current action; the pages report and stop.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 from any endpoint
    #[error("Not authorized!")]
    Unauthorized,

    /// 404 on a lookup (recipe listing or name resolution)
    #[error("Not found!")]
    NotFound,

    /// 409 on registration
    #[error("Email already exists!")]
    Conflict,

    /// 404 on the mutating half of a resolve-then-mutate pair: the record
    /// was renamed or deleted between the lookup and this request.
    #[error("Recipe changed before the update could be applied!")]
    Stale,

    /// Any other non-success status
    #[error("Uh-oh, an error occurred!: {0}")]
    Status(u16),

    /// fetch rejected or the response body could not be read
    #[error("Uh-oh, an error occurred!")]
    Network(String),

    /// Success status but an unusable body
    #[error("Unexpected response from server")]
    Malformed(String),
}

impl ApiError {
    /// Map a non-success HTTP status to its category.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            409 => ApiError::Conflict,
            other => ApiError::Status(other),
        }
    }

    /// Reinterpret a status for the second half of resolve-then-mutate,
    /// where a 404 means the resolved id went stale.
    pub fn from_mutation_status(status: u16) -> Self {
        match status {
            404 => ApiError::Stale,
            other => ApiError::from_status(other),
        }
    }

    /// Message for the login flow, where a 401 means the credentials were
    /// wrong rather than a missing session.
    pub fn login_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Incorrect login!".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_their_categories() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(409), ApiError::Conflict);
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
    }

    #[test]
    fn mutation_404_is_stale_not_not_found() {
        assert_eq!(ApiError::from_mutation_status(404), ApiError::Stale);
        assert_eq!(ApiError::from_mutation_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_mutation_status(500), ApiError::Status(500));
    }

    // A 401 outside the login flow is an authorization failure, not a
    // bad-credentials report; only the login page shows "Incorrect login!".
    #[test]
    fn unauthorized_message_depends_on_the_flow() {
        assert_eq!(ApiError::Unauthorized.to_string(), "Not authorized!");
        assert_eq!(ApiError::Unauthorized.login_message(), "Incorrect login!");
        assert_eq!(
            ApiError::Status(500).login_message(),
            "Uh-oh, an error occurred!: 500"
        );
        assert_eq!(ApiError::NotFound.login_message(), "Not found!");
    }
}

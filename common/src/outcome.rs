//! Mapping of `POST /use/{machine_id}` responses to what the user is told.
//!
//! The API answers a successful usage with a literal `null` body. Everything
//! else is a failure of some kind. Whatever happens, the wizard is reloaded
//! afterwards.

use crate::requests::ErrorDetail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    /// 409: someone else is already using the machine.
    InUse,
    /// 404: the machine is gone or disabled.
    NotFound,
    /// 403: the user may not log this usage.
    Forbidden { detail: Option<String> },
    /// Anything else, including transport errors and unexpected bodies.
    Failed { detail: Option<String> },
}

impl SubmitOutcome {
    /// Classifies an HTTP response by status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .map(|error| error.detail);

        match status {
            200..=299 if body.trim() == "null" => SubmitOutcome::Success,
            200..=299 => {
                log::warn!("usage accepted with unexpected body: {}", body);
                SubmitOutcome::Failed { detail: None }
            }
            409 => SubmitOutcome::InUse,
            404 => SubmitOutcome::NotFound,
            403 => SubmitOutcome::Forbidden { detail },
            _ => SubmitOutcome::Failed { detail },
        }
    }

    /// Outcome for a request that never got a response.
    pub fn transport_error(message: impl Into<String>) -> Self {
        SubmitOutcome::Failed {
            detail: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success)
    }

    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Success => "Machine usage logged. Happy making!".to_string(),
            SubmitOutcome::InUse => {
                "This machine is already in use. Please pick another machine.".to_string()
            }
            SubmitOutcome::NotFound => "This machine does not exist.".to_string(),
            SubmitOutcome::Forbidden { detail } => with_detail(
                "You are not permitted to use this machine.",
                detail.as_deref(),
            ),
            SubmitOutcome::Failed { detail } => with_detail(
                "Something went wrong while logging your usage. Please try again.",
                detail.as_deref(),
            ),
        }
    }
}

fn with_detail(message: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.trim().is_empty() => format!("{message}\n\n{detail}"),
        _ => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_body_is_success() {
        let outcome = SubmitOutcome::from_response(200, "null");
        assert!(outcome.is_success());
    }

    #[test]
    fn non_null_success_body_is_a_failure() {
        assert_eq!(
            SubmitOutcome::from_response(200, r#"{"id":"x"}"#),
            SubmitOutcome::Failed { detail: None }
        );
    }

    #[test]
    fn conflict_means_in_use() {
        let outcome = SubmitOutcome::from_response(409, r#"{"detail":"Machine is in use"}"#);
        assert_eq!(outcome, SubmitOutcome::InUse);
        assert!(outcome.message().contains("already in use"));
    }

    #[test]
    fn status_codes_map_to_fixed_messages() {
        assert_eq!(SubmitOutcome::from_response(404, ""), SubmitOutcome::NotFound);
        assert!(SubmitOutcome::NotFound.message().contains("does not exist"));

        let forbidden = SubmitOutcome::from_response(
            403,
            r#"{"detail":"You don't have permission to log machine usages between semesters"}"#,
        );
        assert!(forbidden.message().starts_with("You are not permitted"));
        assert!(forbidden.message().contains("between semesters"));

        let other = SubmitOutcome::from_response(400, "not json");
        assert_eq!(other, SubmitOutcome::Failed { detail: None });
        assert!(other.message().starts_with("Something went wrong"));
    }

    #[test]
    fn transport_errors_are_generic_failures() {
        let outcome = SubmitOutcome::transport_error("network down");
        assert!(!outcome.is_success());
        assert!(outcome.message().ends_with("network down"));
    }
}

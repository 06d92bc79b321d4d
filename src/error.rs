//! Error types for the wage tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the store, configuration loader and API can report.
//! The summary calculator itself never fails.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the wage tracker.
///
/// # Example
///
/// ```
/// use wage_tracker::error::TrackerError;
///
/// let error = TrackerError::MemberNotFound {
///     id: "m1".to_string(),
/// };
/// assert_eq!(error.to_string(), "Member not found: m1");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No member exists with the given id.
    #[error("Member not found: {id}")]
    MemberNotFound {
        /// The member id that was looked up.
        id: String,
    },

    /// No group exists with the given id.
    #[error("Group not found: {id}")]
    GroupNotFound {
        /// The group id that was looked up.
        id: String,
    },

    /// No user exists with the given id.
    #[error("User not found: {id}")]
    UserNotFound {
        /// The user id that was looked up.
        id: String,
    },

    /// The user exists but has been deactivated.
    #[error("User '{id}' is inactive")]
    InactiveUser {
        /// The id of the inactive user.
        id: String,
    },

    /// The user's role does not permit the requested action.
    #[error("User '{user_id}' is not allowed to {action}")]
    Forbidden {
        /// The id of the user attempting the action.
        user_id: String,
        /// A short description of the attempted action.
        action: String,
    },

    /// A summary period was malformed.
    #[error("Invalid period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// A monetary amount was outside its allowed range.
    #[error("Invalid {field} amount {amount}: {message}")]
    InvalidAmount {
        /// The field that carried the amount (e.g. "payment", "wage").
        field: String,
        /// The rejected amount, as given.
        amount: String,
        /// Why the amount was rejected.
        message: String,
    },

    /// A request field was empty or malformed.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance status outside the fixed enumeration.
    #[error("Unknown attendance status '{status}' for member '{member_id}' on {date}")]
    UnknownAttendanceStatus {
        /// The raw status value.
        status: String,
        /// The member the entry belongs to.
        member_id: String,
        /// The date of the entry.
        date: NaiveDate,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = TrackerError::ConfigNotFound {
            path: "/missing/tracker.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/tracker.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = TrackerError::ConfigParseError {
            path: "/config/seed/members.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/seed/members.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_group_not_found_displays_id() {
        let error = TrackerError::GroupNotFound {
            id: "g9".to_string(),
        };
        assert_eq!(error.to_string(), "Group not found: g9");
    }

    #[test]
    fn test_forbidden_displays_user_and_action() {
        let error = TrackerError::Forbidden {
            user_id: "staff1".to_string(),
            action: "set wages".to_string(),
        };
        assert_eq!(error.to_string(), "User 'staff1' is not allowed to set wages");
    }

    #[test]
    fn test_invalid_amount_displays_field_and_amount() {
        let error = TrackerError::InvalidAmount {
            field: "payment".to_string(),
            amount: "-5".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payment amount -5: must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_field_displays_field_and_message() {
        let error = TrackerError::InvalidField {
            field: "name".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid field 'name': must not be empty");
    }

    #[test]
    fn test_unknown_status_displays_member_and_date() {
        let error = TrackerError::UnknownAttendanceStatus {
            status: "overtime".to_string(),
            member_id: "m1".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown attendance status 'overtime' for member 'm1' on 2023-01-10"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TrackerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_member_not_found() -> TrackerResult<()> {
            Err(TrackerError::MemberNotFound {
                id: "m404".to_string(),
            })
        }

        fn propagates_error() -> TrackerResult<()> {
            returns_member_not_found()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(TrackerError::MemberNotFound { .. })
        ));
    }
}

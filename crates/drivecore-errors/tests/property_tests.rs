//! Property-based tests for error composition and context preservation.

use drivecore_errors::{
    common::{DriveCoreError, ErrorContext, ErrorSeverity, ResultExt},
    config::ConfigError,
    validation::ValidationError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_error_severity_ordering(a in 0u8..=3, b in 0u8..=3) {
        let sev = |n: u8| match n {
            0 => ErrorSeverity::Info,
            1 => ErrorSeverity::Warning,
            2 => ErrorSeverity::Error,
            _ => ErrorSeverity::Critical,
        };

        prop_assert_eq!(a.cmp(&b), sev(a).cmp(&sev(b)));
    }

    #[test]
    fn test_error_context_preserves_operation(operation in ".*") {
        let ctx = ErrorContext::new(&operation);
        prop_assert!(ctx.to_string().contains(&operation) || operation.is_empty());
    }

    #[test]
    fn test_unknown_preset_message_contains_name(name in "[a-z0-9_]+") {
        let err = ConfigError::unknown_preset(&name);
        prop_assert!(err.to_string().contains(&name));
    }

    #[test]
    fn test_out_of_range_message_contains_field(field in "[a-z_]+", value in -1e6f64..1e6) {
        let err = ValidationError::out_of_range(&field, value, -1.0, 1.0);
        prop_assert!(err.to_string().contains(&field));
    }

    #[test]
    fn test_context_wrapping_keeps_inner_message(reason in "[a-zA-Z ]+") {
        let result: Result<(), ConfigError> = Err(ConfigError::parse("<inline>", &reason));
        let wrapped: Result<(), DriveCoreError> = result.with_context("parse");
        let msg = wrapped.err().map(|e| e.to_string()).unwrap_or_default();
        prop_assert!(msg.contains(&reason));
    }
}

use mindwell_core::error::CoreError;
use mindwell_core::notice::{auth_message, Notice, NoticeVariant, AI_FAILURE_MESSAGE};

#[test]
fn credential_errors_share_one_message() {
    assert_eq!(
        auth_message("auth/user-not-found", "raw"),
        "Invalid email or password."
    );
    assert_eq!(
        auth_message("auth/wrong-password", "raw"),
        "Invalid email or password."
    );
}

#[test]
fn signup_errors_are_mapped() {
    assert_eq!(
        auth_message("auth/email-already-in-use", ""),
        "An account with this email already exists."
    );
    assert_eq!(auth_message("auth/weak-password", ""), "The password is too weak.");
}

#[test]
fn unknown_codes_pass_provider_message_through() {
    assert_eq!(
        auth_message("auth/network-request-failed", "Network down"),
        "Network down"
    );
    assert_eq!(auth_message("auth/other", ""), "An unknown error occurred.");
}

#[test]
fn flow_failures_collapse_to_generic_message() {
    let notice = Notice::flow_failure();
    assert_eq!(notice.description, AI_FAILURE_MESSAGE);
    assert_eq!(Notice::stress_fallback().variant, NoticeVariant::Default);
}

#[test]
fn every_core_error_reads_as_a_validation_notice() {
    let errors = [
        CoreError::MissingField("title".to_string()),
        CoreError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 10,
            value: 0,
        },
    ];
    for error in &errors {
        let expected = match error {
            CoreError::MissingField(_) => "Please fill in the title field.",
            CoreError::OutOfRange { .. } => "rating must be between 1 and 10, got 0",
        };
        let notice = Notice::validation(error);
        assert_eq!(notice.variant, NoticeVariant::Destructive);
        assert_eq!(notice.description, expected);
    }
}

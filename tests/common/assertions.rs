//! Custom assertion macros

/// Assert that a string contains a substring
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert the status and `msg` of a JSON error response
macro_rules! assert_error {
    ($response:expr, $status:expr, $msg:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["msg"], $msg, "unexpected error body: {}", body);
        assert_eq!(body["status"], $status.as_u16());
    }};
}

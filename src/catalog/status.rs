//! Numeric failure codes and the messages shown for them.
//!
//! HTTP statuses are used as-is. Failures that never reached an HTTP status
//! get one of the negative synthetic codes below.

/// Unclassified fault
pub const GENERIC_ERROR: i32 = -1;
/// Transport-level I/O failure
pub const IO_ERROR: i32 = -2;
/// The response could not be turned into a record
pub const NULL_REFERENCE: i32 = -3;
/// Host unreachable or no network route
pub const NO_CONNECTION: i32 = -1009;
/// Malformed arguments are reported as a missing resource
pub const NOT_FOUND: i32 = 404;

/// Map a status or synthetic code to its user-facing message.
///
/// `200` is listed on purpose: the upstream API reports a missing entry with a
/// 200 status on some endpoints, and the existing copy calls that out.
#[must_use]
pub fn describe(code: i32) -> String {
    let message = match code {
        GENERIC_ERROR => "Something went wrong. Please try again.",
        IO_ERROR => "A network error occurred while reading the response.",
        NULL_REFERENCE => "The server returned incomplete data.",
        NO_CONNECTION => "No internet connection. Check your network and try again.",
        200 => "The requested entry could not be found.",
        400 => "Invalid page: pages start at 1 and max at 500.",
        401 => "Authentication failed: you do not have permissions to access the service.",
        404 => "The resource you requested could not be found.",
        405 => "Invalid format: this service doesn't exist in that format.",
        422 => "Invalid parameters: your request parameters are incorrect.",
        429 => "Your request count is over the allowed limit. Please wait and try again.",
        500 => "Invalid id: the pre-requisite id is invalid or not found.",
        501 => "Invalid service: this service does not exist.",
        503 => "Service offline: this service is temporarily offline, try again later.",
        504 => "Your request to the backend server timed out. Try again.",
        other => return format!("An unexpected error occurred (code {other})."),
    };

    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_have_fixed_messages() {
        let codes = [
            -1, -2, -3, -1009, 200, 400, 401, 404, 405, 422, 429, 500, 501, 503, 504,
        ];

        for code in codes {
            let message = describe(code);
            assert!(
                !message.contains("unexpected"),
                "code {code} fell through to the fallback"
            );
        }
    }

    #[test]
    fn test_known_codes_are_distinct() {
        let mut messages: Vec<String> = [
            -1, -2, -3, -1009, 200, 400, 401, 404, 405, 422, 429, 500, 501, 503, 504,
        ]
        .into_iter()
        .map(describe)
        .collect();
        messages.sort();
        messages.dedup();

        assert_eq!(messages.len(), 15);
    }

    #[test]
    fn test_exact_copy_for_not_found_codes() {
        assert_eq!(
            describe(404),
            "The resource you requested could not be found."
        );
        assert_eq!(describe(200), "The requested entry could not be found.");
        assert_eq!(
            describe(NO_CONNECTION),
            "No internet connection. Check your network and try again."
        );
    }

    #[test]
    fn test_unknown_code_uses_template() {
        assert_eq!(describe(418), "An unexpected error occurred (code 418).");
        assert_eq!(describe(-7), "An unexpected error occurred (code -7).");
    }

    #[test]
    fn test_synthetic_constants() {
        assert_eq!(describe(NO_CONNECTION), describe(-1009));
        assert_eq!(describe(NOT_FOUND), describe(404));
    }
}

use anyhow::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Cancelled,
    NotFound,        // HTTP 404
    RateLimited,     // HTTP 429
    ClientError,     // Other HTTP 4xx
    ServerError,     // HTTP 500+
    InvalidResponse, // Body did not match the expected shape
    NetworkError,    // DNS, routing, etc.
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Check for HTTP status codes (via reqwest error chain)
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                return match status.as_u16() {
                    404 => ErrorType::NotFound,
                    429 => ErrorType::RateLimited,
                    400..=499 => ErrorType::ClientError,
                    500..=599 => ErrorType::ServerError,
                    _ => ErrorType::Other,
                };
            }
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_decode() {
                return ErrorType::InvalidResponse;
            }
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorType::InvalidResponse;
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("cancelled") || error_msg.contains("canceled") {
        return ErrorType::Cancelled;
    }
    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    // Network-level errors
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for the log - show raw error details
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    // Otherwise the deepest (root cause) error
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

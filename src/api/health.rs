//! Static diagnostic routes
//!
//! Neither handler touches storage.

/// Body of the liveness route
pub const LIVENESS_MESSAGE: &str = "Backend is running!";

/// Body of the name route
pub const SERVICE_NAME: &str = "contacts-backend";

/// GET / - Liveness check
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /name - Fixed service name
pub async fn service_name() -> &'static str {
    SERVICE_NAME
}

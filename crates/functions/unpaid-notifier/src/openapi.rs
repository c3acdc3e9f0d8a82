//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use crate::handlers::notify_handler::{NotifyErrorResponse, NotifyResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::notify_handler::notify_unpaid,
        crate::handlers::health_handler::health_check,
    ),
    components(schemas(NotifyResponse, NotifyErrorResponse, HealthResponse)),
    tags(
        (name = "Notifications", description = "Scheduled unpaid-dues notifications"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

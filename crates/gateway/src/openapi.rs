//! OpenAPI documentation.

use utoipa::OpenApi;

use common::ErrorResponse;
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::user_handler::list_users),
    components(schemas(UserResponse, ErrorResponse)),
    tags((name = "Users", description = "User directory endpoints"))
)]
pub struct ApiDoc;

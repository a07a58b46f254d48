use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bob API",
        version = "0.1.0",
        description = "A binary object store over Redis GET and SET (NX)"
    ),
    paths(
        handlers::get::get_handler,
        handlers::post::post_handler
    ),
    tags(
        (name = "blob", description = "Blob storage operations")
    )
)]
pub struct ApiDoc;

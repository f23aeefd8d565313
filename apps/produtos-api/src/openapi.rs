//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Produtos API",
        version = "0.1.0",
        description = "Product catalogue API backed by PostgreSQL",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(health::health, health::ready),
    components(schemas(health::HealthResponse)),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
struct BaseDoc;

/// Combined OpenAPI documentation: service info and probes plus the
/// products domain, which is mounted at the root.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_products::ApiDoc::openapi());
        doc
    }
}

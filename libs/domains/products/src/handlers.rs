use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use axum_helpers::{
    ErrorResponse, IdPath, JsonResponse, StrictJson,
    errors::{
        handlers::method_not_allowed,
        responses::{
            BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
            PayloadTooLargeResponse, UnsupportedMediaTypeResponse,
        },
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::Product;
use crate::pages::ProductPages;
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "produtos";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        index,
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ErrorResponse),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            UnsupportedMediaTypeResponse,
            PayloadTooLargeResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Shared handler state
pub struct ProductsState<R: ProductRepository> {
    service: ProductService<R>,
    pages: ProductPages,
}

/// Create the products router: JSON CRUD under `/produtos` and the HTML index at `/`
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    pages: ProductPages,
) -> Router {
    let state = Arc::new(ProductsState { service, pages });

    Router::new()
        .route("/", get(index))
        .route("/produtos", get(list_products).post(create_product))
        .route(
            "/produtos/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route(
            "/produtos/{id}/",
            get(get_product).put(update_product).delete(delete_product),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

/// HTML table of all products
#[utoipa::path(
    get,
    path = "/",
    tag = TAG,
    responses(
        (status = 200, description = "Product list page", content_type = "text/html", body = String),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn index<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
) -> ProductResult<Html<String>> {
    let products = state.service.list_products().await?;
    let page = state.pages.render_index(&products)?;
    Ok(Html(page))
}

/// List all products ordered by name
#[utoipa::path(
    get,
    path = "/produtos",
    tag = TAG,
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
) -> ProductResult<JsonResponse<Vec<Product>>> {
    let products = state.service.list_products().await?;
    Ok(JsonResponse::ok(products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/produtos",
    tag = TAG,
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = BadRequestResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
    StrictJson(product): StrictJson<Product>,
) -> ProductResult<impl IntoResponse> {
    let id = state.service.create_product(&product).await?;
    let created = product.with_id(id);

    Ok((
        [(header::LOCATION, format!("/produtos/{id}"))],
        JsonResponse(StatusCode::CREATED, created),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/produtos/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<JsonResponse<Product>> {
    let product = state.service.get_product(id).await?;
    Ok(JsonResponse::ok(product))
}

/// Replace a product
///
/// The id comes from the path; any `id` in the body is overwritten.
#[utoipa::path(
    put,
    path = "/produtos/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = Product,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
    IdPath(id): IdPath,
    StrictJson(product): StrictJson<Product>,
) -> ProductResult<StatusCode> {
    state.service.update_product(&product.with_id(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/produtos/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted (or already absent)"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    state.service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

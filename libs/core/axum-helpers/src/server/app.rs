use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::JsonResponse;
use axum::{Router, routing::get};
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Path serving the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates a configured Axum router with request tracing and documentation.
///
/// This function sets up:
/// - The OpenAPI document at [`OPENAPI_PATH`]
/// - The given routes, mounted at the root
/// - Request tracing
/// - A JSON 404 fallback
///
/// Routes passed in must already have their state applied and must not set a
/// router-level fallback of their own.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    let doc = T::openapi();

    Router::new()
        .route(
            OPENAPI_PATH,
            get(move || {
                let doc = doc.clone();
                async move { JsonResponse::ok(doc) }
            }),
        )
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Production server: binds the configured address and serves until shutdown.
///
/// On SIGINT/SIGTERM (or [`ShutdownCoordinator::shutdown`]) the listener stops
/// accepting, in-flight requests get `server_config.shutdown_timeout` to
/// finish, and `cleanup` runs once the server has stopped.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::{ShutdownCoordinator, create_production_app};
///
/// let (coordinator, _rx) = ShutdownCoordinator::new();
/// let cleanup = async move {
///     db.close().await.ok();
/// };
///
/// create_production_app(router, &config.server, coordinator, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    coordinator: ShutdownCoordinator,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve_listener(
        listener,
        router,
        coordinator,
        server_config.shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serves `router` on an already-bound listener.
///
/// Requests still running `grace` after shutdown begins are abandoned.
pub async fn serve_listener<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    grace: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let signal_task = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.wait_for_signal().await })
    };

    let stop_accepting = coordinator.clone();
    let serve = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { stop_accepting.cancelled().await })
        .into_future();
    tokio::pin!(serve);

    let result = tokio::select! {
        result = &mut serve => result,
        _ = coordinator.cancelled() => {
            info!("Draining in-flight requests (timeout: {:?})", grace);
            match tokio::time::timeout(grace, &mut serve).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("In-flight requests exceeded {:?}, forcing shutdown", grace);
                    Ok(())
                }
            }
        }
    };

    signal_task.abort();
    cleanup.await;
    info!("Server stopped");

    result.inspect_err(|e| {
        tracing::error!("Server encountered an error: {:?}", e);
    })
}

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

use servenow::config::AppConfig;
use servenow::handlers;
use servenow::models::{AdminAccount, Role};
use servenow::services::credentials;
use servenow::services::identity::AnonymousIdentity;
use servenow::state::AppState;
use servenow::store::{seed, Store};

/// Tags each request with a generated id and wraps handling in a span so
/// every log line from a handler carries it.
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    );
    next.run(request).instrument(span).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let admin_hash =
        credentials::hash_password(config.admin_password.clone(), config.bcrypt_cost).await?;
    let admin = AdminAccount {
        email: config.admin_email.clone(),
        password_hash: admin_hash,
        role: Role::Admin,
    };

    let store = Store::new(seed::providers(), vec![admin]);
    tracing::info!(
        providers = store.list_providers(None).len(),
        "provider registry seeded"
    );

    let state = Arc::new(AppState {
        store,
        config: config.clone(),
        identity: Box::new(AnonymousIdentity),
    });

    // The API is consumed cross-origin by static marketing sites.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(handlers::health::liveness))
        .route("/api/admin/login", post(handlers::auth::admin_login))
        .route(
            "/api/customer/register",
            post(handlers::auth::register_customer),
        )
        .route("/api/providers", get(handlers::providers::list_providers))
        .route("/api/providers/:id", get(handlers::providers::get_provider))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

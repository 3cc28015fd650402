use axum::{
    http::Method,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use dotenvy::dotenv;
use serde::Serialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use waitlist_server::config::Config;
use waitlist_server::utils::state::setup;
use waitlist_server::web::handlers::{add_signup, check_email, get_stats, resolve_asset};

async fn welcome() -> impl IntoResponse {
    "Waitlist Server"
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthCheckResponse {
        status: "OK".to_string(),
    })
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    config_tracing();

    let config = Config::load().expect("Failed to load configuration");
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = setup(&config);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/waitlist", post(add_signup))
        .route("/waitlist/stats", get(get_stats))
        .route("/waitlist/check/{email}", get(check_email))
        .route("/assets/{key}", get(resolve_asset))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new())
                .layer(cors),
        )
        .with_state(state);

    let listener = TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on {addr}");
    axum::serve(listener, router).await.unwrap()
}

fn config_tracing() {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1")
    }

    use tracing::Level;
    use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

    let tracing_layer = tracing_subscriber::fmt::layer();
    let filter = filter::Targets::new()
        .with_target("hyper::proto", Level::INFO)
        .with_target("tower_http::trace", Level::DEBUG)
        .with_default(Level::DEBUG);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}

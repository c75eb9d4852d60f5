use axum::{
    extract::State,
    response::Redirect,
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use estacionamento_web::{
    config, database,
    handlers::{cliente, estacionamento},
    state::AppState,
    views::Views,
};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting estacionamento-web in {:?} mode", config.environment);

    let pool = match database::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = database::ensure_schema(&pool).await {
        tracing::error!("Failed to prepare database schema: {}", e);
        std::process::exit(1);
    }

    let views = match Views::new() {
        Ok(views) => views,
        Err(e) => {
            tracing::error!("Failed to load templates: {}", e);
            std::process::exit(1);
        }
    };

    let app = app(AppState::new(pool, views));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("estacionamento-web listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(cliente_routes())
        .merge(estacionamento_routes());

    if config::config().server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn cliente_routes() -> Router<AppState> {
    use axum::routing::put;

    Router::new()
        .route("/cliente", get(cliente::list).post(cliente::create))
        .route("/cliente/:id", put(cliente::update).delete(cliente::delete))
}

fn estacionamento_routes() -> Router<AppState> {
    use axum::routing::put;

    Router::new()
        .route(
            "/estacionamentos",
            get(estacionamento::list).post(estacionamento::create),
        )
        .route(
            "/estacionamentos/:id",
            put(estacionamento::update).delete(estacionamento::delete),
        )
}

async fn index() -> Redirect {
    Redirect::to("/cliente")
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}

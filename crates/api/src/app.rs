use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{dashboard, event_log, export, health, journal_events, logs, places, tasks};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin, the phone automations and dashboard are not same-origin
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Event logging. The automation endpoints accept GET and POST; arrive and
    // exit are registered explicitly so they never compete with sibling routes.
    let logging_routes = Router::new()
        .route("/api/log", post(event_log::log_event))
        .route(
            "/api/arrive/:lat/:lon",
            get(event_log::log_arrival).post(event_log::log_arrival),
        )
        .route(
            "/api/exit/:lat/:lon",
            get(event_log::log_exit).post(event_log::log_exit),
        )
        .route(
            "/api/:event/:lat/:lon",
            get(event_log::log_event_from_path).post(event_log::log_event_from_path),
        )
        .route("/api/logs", get(logs::list_logs))
        .route("/api/logs/:id", delete(logs::delete_log));

    let resource_routes = Router::new()
        .route(
            "/api/places",
            get(places::list_places).post(places::create_place),
        )
        .route("/api/places/:id", delete(places::delete_place))
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/api/tasks/:id",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        .route(
            "/api/events",
            get(journal_events::list_events).post(journal_events::create_event),
        )
        .route(
            "/api/events/:id",
            put(journal_events::update_event).delete(journal_events::delete_event),
        )
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/export", get(export::export_data));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(logging_routes)
        .merge(resource_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use citizen_service_api::config;
use citizen_service_api::database::manager::DatabaseManager;
use citizen_service_api::database::models::{
    Citizen, Department, Grievance, Service, ServiceRequest,
};
use citizen_service_api::handlers;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, CORS_ORIGINS, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Citizen Service API");

    // Connectivity is fatal at startup: do not serve without the store
    match DatabaseManager::startup_check().await {
        Ok(db_name) => tracing::info!("Connected to database: {}", db_name),
        Err(e) => {
            tracing::error!("Database unreachable at startup: {}", e);
            std::process::exit(1);
        }
    }

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Citizen Service API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(entity_routes())
        .merge(dashboard_routes())
        .merge(procedure_routes())
        .merge(citizen_log_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn entity_routes() -> Router {
    use handlers::entities::{create, delete_one, get_one, list, update_one};

    Router::new()
        .route("/api/citizens", get(list::<Citizen>).post(create::<Citizen>))
        .route(
            "/api/citizens/:id",
            get(get_one::<Citizen>)
                .put(update_one::<Citizen>)
                .delete(delete_one::<Citizen>),
        )
        .route(
            "/api/departments",
            get(list::<Department>).post(create::<Department>),
        )
        .route("/api/services", get(list::<Service>).post(create::<Service>))
        .route(
            "/api/service-requests",
            get(list::<ServiceRequest>).post(create::<ServiceRequest>),
        )
        .route(
            "/api/grievances",
            get(list::<Grievance>).post(create::<Grievance>),
        )
}

fn dashboard_routes() -> Router {
    use handlers::dashboard;

    Router::new()
        .route("/api/dashboard/stats", get(dashboard::stats))
        .route(
            "/api/dashboard/recent-requests",
            get(dashboard::recent_requests),
        )
        .route(
            "/api/dashboard/department-performance",
            get(dashboard::department_performance),
        )
        .route(
            "/api/dashboard/monthly-trends",
            get(dashboard::monthly_trends),
        )
        .route(
            "/api/dashboard/department-performance-function",
            get(dashboard::department_performance_function),
        )
        .route(
            "/api/dashboard/service-revenue-function",
            get(dashboard::service_revenue_function),
        )
}

fn procedure_routes() -> Router {
    use handlers::procedures;

    Router::new()
        .route(
            "/api/procedures/department-service-count",
            get(procedures::department_service_count),
        )
        .route(
            "/api/procedures/pending-requests",
            get(procedures::pending_requests),
        )
        .route(
            "/api/procedures/payment-summary",
            get(procedures::payment_summary),
        )
        .route(
            "/api/procedures/grievances-by-department",
            get(procedures::grievances_by_department),
        )
}

fn citizen_log_routes() -> Router {
    use handlers::citizen_logs;

    // GET only: citizen_log is trigger-owned and this layer never writes it
    Router::new().route("/api/citizen-logs", get(citizen_logs::list_citizen_logs))
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<_> = config::config()
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Citizen Service Management System API",
            "version": version,
            "description": "REST facade for citizen services, requests, grievances, and stored procedures",
            "docs": "/docs",
            "endpoints": {
                "home": "/",
                "health": "/health",
                "citizens": "/api/citizens",
                "departments": "/api/departments",
                "services": "/api/services",
                "service_requests": "/api/service-requests",
                "grievances": "/api/grievances",
                "dashboard": "/api/dashboard/*",
                "procedures": "/api/procedures/*",
                "citizen_logs": "/api/citizen-logs",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "healthy",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}

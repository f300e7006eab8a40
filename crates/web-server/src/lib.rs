use axum::{
    routing::get,
    Router,
};
use configuration::Config;
use core_types::Student;
use database::{Dao, StudentRecord, StudentService};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn Dao<Student, Record = StudentRecord>>,
}

impl AppState {
    pub fn new(students: impl Dao<Student, Record = StudentRecord> + 'static) -> Self {
        Self {
            students: Arc::new(students),
        }
    }
}

/// Builds the router with every route and middleware layer attached.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/etudiants",
            get(handlers::list_students).post(handlers::create_student),
        )
        .with_state(Arc::new(state))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    // Tracing is initialized by the binary, not here.
    let addr = config.server.socket_addr()?;

    let db_pool = database::connect(&config.database).await?;
    database::run_migrations(&db_pool).await?;
    let app = create_router(AppState::new(StudentService::new(db_pool)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server started and listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

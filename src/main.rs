mod models;
mod search;
mod session;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Local;
use models::{SearchOptions, SearchRequest, SearchResponse};
use search::{build_results, KeywordTable};
use session::{InMemorySessionStorage, Session, SessionStorage};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Clone)]
struct AppState {
    keyword_table: Arc<KeywordTable>,
    storage: Arc<dyn SessionStorage>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("hot_topics_server=debug,tower_http=info")
        .init();

    let keyword_table = Arc::new(KeywordTable::builtin());
    let storage: Arc<dyn SessionStorage> = Arc::new(InMemorySessionStorage::new());
    let state = AppState {
        keyword_table,
        storage,
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/options", get(search_options))
        .route("/search", post(search))
        .route("/session/:session_id", get(get_session).delete(reset_session))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Hot topics search server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn search_options() -> Json<SearchOptions> {
    Json(SearchOptions::listing())
}

#[instrument(skip(state))]
async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, StatusCode> {
    let start_time = std::time::Instant::now();
    if req.keyword.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let session_id = Uuid::new_v4().to_string();
    info!(
        "Searching trending articles for session {}: country={} category={} window={}d keyword={}",
        session_id,
        req.country.label(),
        req.category.label(),
        req.time_range.days(),
        req.keyword
    );

    let related_keywords = state.keyword_table.related_keywords(&req.keyword);
    let results = build_results(&req, &related_keywords, Local::now());

    let session = Session {
        id: session_id.clone(),
        query: req.clone(),
        related_keywords: related_keywords.clone(),
        results: results.clone(),
        created_at: Local::now(),
    };
    state
        .storage
        .save(session)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    info!("Assembled {} results for session {}", results.len(), session_id);

    Ok(Json(SearchResponse {
        session_id,
        keyword: req.keyword,
        total_count: results.len(),
        related_keywords,
        results,
        total_time_ms: start_time.elapsed().as_millis() as u64,
    }))
}

#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, StatusCode> {
    let session = state
        .storage
        .get(&session_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(session))
}

#[instrument(skip(state))]
async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    state
        .storage
        .remove(&session_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    info!("Cleared search session {}", session_id);

    Ok(StatusCode::NO_CONTENT)
}

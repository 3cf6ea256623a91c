//! Web server for the game catalog
//!
//! Provides REST API endpoints for listings, category and tag pages, search
//! and the popular-content widgets. Handlers take a catalog snapshot per
//! request; slicing parameters arrive as 1-based page numbers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::aggregate::{popular_categories, popular_tags, CategoryCount, TagCount};
use crate::catalog::CatalogService;
use crate::config::{MAX_RELATED_GAMES, POPULAR_LIMIT};
use crate::models::GameRecord;
use crate::pagination::{offset_for_page, total_pages};
use crate::query::{
    all_categories, all_games, all_tags, game_by_id, games_by_category, games_by_tag,
    related_games, Page,
};
use crate::search::{search_games, suggest_games};

/// Shared application state (catalog service behind the TTL cache)
#[derive(Clone)]
struct AppState {
    catalog: Arc<CatalogService>,
    page_size: usize,
}

/// Listing query parameters (1-based page)
#[derive(Deserialize)]
struct ListParams {
    #[serde(default = "default_page")]
    page: usize,
    limit: Option<usize>,
}

fn default_page() -> usize {
    1
}

/// Search query parameters
#[derive(Deserialize)]
struct SearchParams {
    q: String,
    #[serde(default = "default_page")]
    page: usize,
    limit: Option<usize>,
}

/// Typeahead query parameters
#[derive(Deserialize)]
struct SuggestParams {
    q: String,
}

/// Popular widget query parameters
#[derive(Deserialize)]
struct PopularParams {
    #[serde(default = "default_popular_limit")]
    limit: usize,
}

fn default_popular_limit() -> usize {
    POPULAR_LIMIT
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

/// One page of games plus pagination metadata
#[derive(Serialize)]
struct PagedGames {
    games: Vec<GameRecord>,
    total: usize,
    page: usize,
    page_size: usize,
    total_pages: usize,
}

/// Game detail plus the related-games grid
#[derive(Serialize)]
struct GameDetail {
    game: GameRecord,
    related: Vec<GameRecord>,
}

/// Catalog state for monitoring
#[derive(Serialize)]
struct CatalogStatus {
    games: usize,
    loaded_at: Option<String>,
    feed: String,
}

/// Resolve 1-based page params to the limit/offset pair the query layer takes
fn slicing(params_page: usize, params_limit: Option<usize>, page_size: usize) -> (usize, usize) {
    let limit = params_limit.unwrap_or(page_size).max(1);
    let page = params_page.max(1);
    (limit, offset_for_page(page, limit))
}

fn paged_response(page_result: Page, page: usize, limit: usize) -> PagedGames {
    PagedGames {
        total_pages: total_pages(page_result.total, limit),
        total: page_result.total,
        games: page_result.games,
        page: page.max(1),
        page_size: limit,
    }
}

/// GET /api/games?page={page}&limit={limit}
async fn list_games_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ApiResponse<PagedGames>> {
    let catalog = state.catalog.snapshot();
    let (limit, offset) = slicing(params.page, params.limit, state.page_size);
    let result = all_games(&catalog, Some(limit), offset);
    ApiResponse::ok(paged_response(result, params.page, limit))
}

/// GET /api/games/{id} - one record plus its related-games grid
async fn game_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<GameDetail>>, StatusCode> {
    let catalog = state.catalog.snapshot();

    match game_by_id(&catalog, &id) {
        Some(game) => {
            let related = related_games(&catalog, &id, MAX_RELATED_GAMES);
            Ok(ApiResponse::ok(GameDetail { game, related }))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// GET /api/categories - sorted category names with counts
async fn categories_handler(State(state): State<AppState>) -> Json<ApiResponse<Vec<CategoryCount>>> {
    let catalog = state.catalog.snapshot();
    let categories = all_categories(&catalog)
        .into_iter()
        .map(|name| {
            let count = games_by_category(&catalog, &name, None, 0).total;
            CategoryCount { name, count }
        })
        .collect();
    ApiResponse::ok(categories)
}

/// GET /api/categories/{name}?page={page}&limit={limit}
async fn category_games_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<ListParams>,
) -> Json<ApiResponse<PagedGames>> {
    let catalog = state.catalog.snapshot();
    let (limit, offset) = slicing(params.page, params.limit, state.page_size);
    let result = games_by_category(&catalog, &name, Some(limit), offset);
    ApiResponse::ok(paged_response(result, params.page, limit))
}

/// GET /api/tags - sorted tag names with counts
async fn tags_handler(State(state): State<AppState>) -> Json<ApiResponse<Vec<TagCount>>> {
    let catalog = state.catalog.snapshot();
    let tags = all_tags(&catalog)
        .into_iter()
        .map(|name| {
            let count = games_by_tag(&catalog, &name, None, 0).total;
            TagCount {
                href: crate::aggregate::tag_href(&name),
                name,
                count,
            }
        })
        .collect();
    ApiResponse::ok(tags)
}

/// GET /api/tags/{name}?page={page}&limit={limit}
async fn tag_games_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<ListParams>,
) -> Json<ApiResponse<PagedGames>> {
    let catalog = state.catalog.snapshot();
    let (limit, offset) = slicing(params.page, params.limit, state.page_size);
    let result = games_by_tag(&catalog, &name, Some(limit), offset);
    ApiResponse::ok(paged_response(result, params.page, limit))
}

/// GET /api/search?q={query}&page={page}&limit={limit}
async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<PagedGames>> {
    let catalog = state.catalog.snapshot();
    let (limit, offset) = slicing(params.page, params.limit, state.page_size);
    let result = search_games(&catalog, &params.q, Some(limit), offset);
    ApiResponse::ok(paged_response(result, params.page, limit))
}

/// GET /api/suggest?q={query} - header dropdown, capped result count
async fn suggest_handler(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<ApiResponse<Vec<GameRecord>>> {
    let catalog = state.catalog.snapshot();
    ApiResponse::ok(suggest_games(&catalog, &params.q))
}

/// GET /api/popular/tags?limit={limit}
async fn popular_tags_handler(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Json<ApiResponse<Vec<TagCount>>> {
    let catalog = state.catalog.snapshot();
    ApiResponse::ok(popular_tags(&catalog, params.limit))
}

/// GET /api/popular/categories?limit={limit}
async fn popular_categories_handler(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Json<ApiResponse<Vec<CategoryCount>>> {
    let catalog = state.catalog.snapshot();
    ApiResponse::ok(popular_categories(&catalog, params.limit))
}

fn status_of(state: &AppState, games: usize) -> CatalogStatus {
    CatalogStatus {
        games,
        loaded_at: state.catalog.loaded_time(),
        feed: state.catalog.feed_path().display().to_string(),
    }
}

/// GET /api/status
async fn status_handler(State(state): State<AppState>) -> Json<ApiResponse<CatalogStatus>> {
    let catalog = state.catalog.snapshot();
    let status = status_of(&state, catalog.len());
    ApiResponse::ok(status)
}

/// POST /api/reload - drop the cache and load the feed again now
async fn reload_handler(State(state): State<AppState>) -> Json<ApiResponse<CatalogStatus>> {
    state.catalog.invalidate();
    let catalog = state.catalog.snapshot();
    log::info!("Catalog reloaded on request, {} games", catalog.len());
    let status = status_of(&state, catalog.len());
    ApiResponse::ok(status)
}

/// Build the API router
pub fn create_router(catalog: Arc<CatalogService>, page_size: usize) -> Router {
    let state = AppState { catalog, page_size };

    Router::new()
        .route("/api/games", get(list_games_handler))
        .route("/api/games/{id}", get(game_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/categories/{name}", get(category_games_handler))
        .route("/api/tags", get(tags_handler))
        .route("/api/tags/{name}", get(tag_games_handler))
        .route("/api/search", get(search_handler))
        .route("/api/suggest", get(suggest_handler))
        .route("/api/popular/tags", get(popular_tags_handler))
        .route("/api/popular/categories", get(popular_categories_handler))
        .route("/api/status", get(status_handler))
        .route("/api/reload", post(reload_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the web server (async)
///
/// Binds to 0.0.0.0 (all interfaces) to work with Docker port mapping.
/// Shuts down cleanly on Ctrl-C.
pub async fn serve(
    catalog: Arc<CatalogService>,
    port: u16,
    page_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(catalog, page_size);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Catalog API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
    log::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_router() {
        let catalog = Arc::new(CatalogService::new("feed.json"));
        let _router = create_router(catalog, 48);
        // If we got here without panicking, the router was created successfully
    }

    #[test]
    fn test_slicing_defaults_and_clamps() {
        // Default page and limit
        assert_eq!(slicing(1, None, 48), (48, 0));
        // Page 2 starts one page in
        assert_eq!(slicing(2, None, 48), (48, 48));
        // Explicit limit overrides the page size
        assert_eq!(slicing(3, Some(10), 48), (10, 20));
        // Page 0 and limit 0 clamp instead of erroring
        assert_eq!(slicing(0, Some(0), 48), (1, 0));
    }

    #[test]
    fn test_paged_response_metadata() {
        let result = Page {
            games: Vec::new(),
            total: 100,
        };
        let paged = paged_response(result, 2, 48);
        assert_eq!(paged.total, 100);
        assert_eq!(paged.page, 2);
        assert_eq!(paged.page_size, 48);
        assert_eq!(paged.total_pages, 3);
    }

    #[test]
    fn test_api_response_serialization() {
        let response: ApiResponse<Vec<i32>> = ApiResponse {
            success: true,
            data: Some(vec![1, 2, 3]),
            error: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":[1,2,3]"));
        // error should be omitted when None
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_api_response_error_serialization() {
        let response: ApiResponse<()> = ApiResponse {
            success: false,
            data: None,
            error: Some("Test error".to_string()),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"Test error\""));
        // data should be omitted when None
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn test_search_params_default_page() {
        let params: SearchParams = serde_json::from_str(r#"{"q":"snake"}"#).unwrap();
        assert_eq!(params.page, 1);
        assert!(params.limit.is_none());
    }
}

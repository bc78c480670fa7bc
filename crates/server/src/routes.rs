use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth::ServerState;

pub mod books;
pub mod sellers;
pub mod token;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public seller/book CRUD, the token
/// endpoint, and the gated seller-detail route
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let seller_routes = Router::new()
        .route("/", post(sellers::register).get(sellers::list))
        // GET is gated by the AuthenticatedSeller extractor in the handler
        .route(
            "/:seller_id",
            get(sellers::get_one).put(sellers::update).delete(sellers::remove),
        );

    let book_routes = Router::new()
        .route("/", post(books::create).get(books::list))
        .route("/:book_id", get(books::get_one).put(books::update).delete(books::remove));

    let token_routes = Router::new().route("/", post(token::issue));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/seller", seller_routes)
        .nest("/api/v1/books", book_routes)
        .nest("/api/v1/token", token_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

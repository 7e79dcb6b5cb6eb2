//! Posts proxy: `GET /posts` and `POST /posts` forwarded to the upstream.

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::client::{FetchBody, FetchOptions, HttpVerb};
use crate::http::extract::LenientBody;
use crate::http::relay::relay;
use crate::http::server::AppState;

const JSON_CONTENT_TYPE: &str = "application/json";

pub fn routes() -> Router<AppState> {
    Router::new().route("/posts", get(list_posts).post(create_post))
}

fn json_options(method: HttpVerb) -> FetchOptions {
    FetchOptions::new(method).header("Content-Type", JSON_CONTENT_TYPE)
}

async fn list_posts(State(state): State<AppState>) -> impl IntoResponse {
    let options = json_options(HttpVerb::Get);
    let response = relay(
        state.client.fetch(&state.posts_url, &options, None),
        state.relay,
    )
    .await;

    ([(CONTENT_TYPE, JSON_CONTENT_TYPE)], response)
}

async fn create_post(
    State(state): State<AppState>,
    LenientBody(body): LenientBody,
) -> impl IntoResponse {
    let options = json_options(HttpVerb::Post);
    let payload = FetchBody::Text(body.to_string());
    let response = relay(
        state.client.fetch(&state.posts_url, &options, Some(payload)),
        state.relay,
    )
    .await;

    ([(CONTENT_TYPE, JSON_CONTENT_TYPE)], response)
}

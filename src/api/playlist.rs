use axum::{Extension, extract::Query, response::Response};

use crate::{
    api::{first_values, respond},
    management::StatsManager,
};

/// `GET /playlist?id=<playlist id>`
pub async fn playlist(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(manager): Extension<StatsManager>,
) -> Response {
    let params = first_values(pairs);
    let id = params.get("id").map(String::as_str).unwrap_or_default();

    respond(manager.playlist(id).await)
}

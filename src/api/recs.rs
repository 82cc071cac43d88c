use axum::{Extension, extract::Query, response::Response};

use crate::{
    api::{first_values, respond},
    management::StatsManager,
    targets::parse_target_attributes,
};

/// `GET /recs?id=<playlist id>&seeds=<a,b,c>&<attribute>=<float>...`
pub async fn recs(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(manager): Extension<StatsManager>,
) -> Response {
    let params = first_values(pairs);
    let id = params.get("id").map(String::as_str).unwrap_or_default();
    let seeds = params.get("seeds").map(String::as_str);
    let targets = parse_target_attributes(&params);

    respond(manager.recommendations(id, seeds, &targets).await)
}

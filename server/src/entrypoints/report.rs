use rocket::{serde::json::Json, State};
use shared::{generate_weeks, resolve_week, summarize_week};
use utoipa::IntoParams;

use crate::{
    error::ApiError,
    store::Store,
    types::{ErrorResponse, WeekResponse, WeeklySummaryResponse},
};

#[derive(Debug, FromForm, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeekQuery {
    /// One of the labels returned by `/api/weeks`
    #[field(name = "weekLabel")]
    #[param(rename = "weekLabel")]
    week_label: Option<String>,
}

#[utoipa::path(context_path = "/api", params(WeekQuery), responses(
    (status = 200, description = "Per participant scores of the week", body = Vec<WeeklySummaryResponse>),
    (status = 400, description = "Missing or unknown week label", body = ErrorResponse),
    (status = 500, description = "Store failure", body = ErrorResponse)
))]
#[get("/weekly-data?<query..>")]
pub(super) async fn get_weekly_data(
    store: &State<Store>,
    query: WeekQuery,
) -> Result<Json<Vec<WeeklySummaryResponse>>, ApiError> {
    let week = resolve_week(query.week_label.as_deref(), chrono::Utc::now())?;
    let (start, end) = week.query_range();
    let entries = store
        .entries_between(start, end)
        .await
        .map_err(ApiError::store("Error fetching weekly data"))?;

    Ok(Json(
        summarize_week(&week, &entries)
            .into_iter()
            .map(Into::into)
            .collect(),
    ))
}

#[utoipa::path(context_path = "/api", responses(
    (status = 200, description = "Weeks of the campaign so far, oldest first", body = Vec<WeekResponse>)
))]
#[get("/weeks")]
pub(super) async fn get_weeks() -> Json<Vec<WeekResponse>> {
    Json(
        generate_weeks(chrono::Utc::now())
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing report entrypoints", |rocket| async {
        rocket.mount("/api", rocket::routes![get_weekly_data, get_weeks])
    })
}

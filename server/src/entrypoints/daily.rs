use rocket::{http::Status, serde::json::Json, State};

use crate::{
    error::ApiError,
    store::{Store, UpsertOutcome},
    types::{DailySubmissionRequest, ErrorResponse, MessageResponse},
};

#[utoipa::path(context_path = "/api", request_body = DailySubmissionRequest, responses(
    (status = 201, description = "First checklist of the day stored", body = MessageResponse),
    (status = 200, description = "Today's checklist replaced", body = MessageResponse),
    (status = 400, description = "Missing name or blank answer", body = ErrorResponse),
    (status = 500, description = "Store failure", body = ErrorResponse)
))]
#[post("/submit-form", data = "<request>")]
pub(super) async fn submit_daily(
    store: &State<Store>,
    request: Json<DailySubmissionRequest>,
) -> Result<(Status, Json<MessageResponse>), ApiError> {
    let (full_name, answers) = request.validate()?;
    let outcome = store
        .upsert_daily_entry(full_name, answers, chrono::Utc::now())
        .await
        .map_err(ApiError::store("Error saving record"))?;

    tracing::info!("Daily checklist of {full_name}: {outcome:?}");

    Ok(match outcome {
        UpsertOutcome::Inserted => (
            Status::Created,
            Json(MessageResponse::new("Record inserted successfully")),
        ),
        UpsertOutcome::Updated => (
            Status::Ok,
            Json(MessageResponse::new("Record updated successfully")),
        ),
    })
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing daily entrypoints", |rocket| async {
        rocket.mount("/api", rocket::routes![submit_daily])
    })
}

use rocket::{http::Status, serde::json::Json, State};

use crate::{
    error::ApiError,
    store::Store,
    types::{ErrorResponse, RegistrationRequest, RegistrationResponse},
};

#[utoipa::path(context_path = "/api", request_body = RegistrationRequest, responses(
    (status = 201, description = "Register a participant", body = RegistrationResponse),
    (status = 400, description = "Missing or unknown field", body = ErrorResponse),
    (status = 500, description = "Store failure", body = ErrorResponse)
))]
#[post("/register", data = "<request>")]
pub(super) async fn register(
    store: &State<Store>,
    request: Json<RegistrationRequest>,
) -> Result<(Status, Json<RegistrationResponse>), ApiError> {
    let participant = request.validate()?;
    let record = store
        .insert_participant(&participant)
        .await
        .map_err(ApiError::store("Failed to register. Please try again."))?;

    tracing::info!("Registered participant {} ({})", record.id, record.full_name);

    Ok((
        Status::Created,
        Json(RegistrationResponse {
            message: "Registration successful".to_string(),
            data: record.into(),
        }),
    ))
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing registration entrypoints", |rocket| async {
        rocket.mount("/api", rocket::routes![register])
    })
}

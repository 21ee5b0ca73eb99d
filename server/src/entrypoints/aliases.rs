use rocket::{serde::json::Json, State};

use crate::{error::ApiError, store::Store, types::ErrorResponse};

#[utoipa::path(context_path = "/api", responses(
    (status = 200, description = "Same as /api/get-names", body = Vec<String>),
    (status = 500, description = "Store failure", body = ErrorResponse)
))]
#[get("/participants")]
pub(super) async fn get_participants(store: &State<Store>) -> Result<Json<Vec<String>>, ApiError> {
    super::participants::get_names(store).await
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing aliases", |rocket| async {
        rocket.mount("/api", rocket::routes![get_participants])
    })
}

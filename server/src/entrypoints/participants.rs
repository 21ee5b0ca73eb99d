use rocket::{serde::json::Json, State};
use shared::{city_group_labels, priority_labels, sorted_unique_names};

use crate::{
    error::ApiError,
    store::Store,
    types::{ErrorResponse, FormOptionsResponse},
};

#[utoipa::path(context_path = "/api", responses(
    (status = 200, description = "Sorted registered names without duplicates", body = Vec<String>),
    (status = 500, description = "Store failure", body = ErrorResponse)
))]
#[get("/get-names")]
pub(super) async fn get_names(store: &State<Store>) -> Result<Json<Vec<String>>, ApiError> {
    let names = store
        .participant_names()
        .await
        .map_err(ApiError::store("Error fetching names"))?;

    Ok(Json(sorted_unique_names(names)))
}

#[utoipa::path(context_path = "/api", responses(
    (status = 200, description = "Choices offered by the registration form", body = FormOptionsResponse)
))]
#[get("/options")]
pub(super) async fn get_options() -> Json<FormOptionsResponse> {
    Json(FormOptionsResponse {
        city_groups: city_group_labels().into_iter().map(Into::into).collect(),
        priorities: priority_labels().into_iter().map(Into::into).collect(),
    })
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing participant entrypoints", |rocket| async {
        rocket.mount("/api", rocket::routes![get_names, get_options])
    })
}

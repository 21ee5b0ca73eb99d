use rocket::fairing::AdHoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::types::{
    DailySubmissionRequest, ErrorResponse, FormOptionsResponse, MessageResponse,
    ParticipantResponse, RegistrationRequest, RegistrationResponse, WeekResponse,
    WeeklySummaryResponse,
};

pub mod aliases;
pub mod daily;
pub mod participants;
pub mod registration;
pub mod report;

#[derive(OpenApi)]
#[openapi(
    paths(
        registration::register,
        daily::submit_daily,
        participants::get_names,
        participants::get_options,
        aliases::get_participants,
        report::get_weekly_data,
        report::get_weeks,
    ),
    components(schemas(
        ErrorResponse,
        MessageResponse,
        RegistrationRequest,
        RegistrationResponse,
        ParticipantResponse,
        DailySubmissionRequest,
        WeekResponse,
        WeeklySummaryResponse,
        FormOptionsResponse,
    ))
)]
pub struct ApiDoc;

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("Installing entrypoints", |rocket| async {
        rocket
            .attach(registration::stage())
            .attach(daily::stage())
            .attach(participants::stage())
            .attach(aliases::stage())
            .attach(report::stage())
            .mount(
                "/",
                SwaggerUi::new("/swagger-ui/<_..>").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
}

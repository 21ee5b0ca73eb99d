use rocket::{
    http::Status,
    response::{self, Responder},
    serde::json::Json,
    Request, Response,
};
use shared::ValidationError;

use crate::types::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Store {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    /// Wraps a store failure, the client only ever sees `message`.
    pub fn store(message: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |cause| Self::Store { message, cause }
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Validation(_) => Status::BadRequest,
            Self::Store { .. } => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        match &self {
            Self::Store { message, cause } => tracing::error!("{message}: {cause:#}"),
            Self::Validation(e) => tracing::debug!("Rejected request: {e}"),
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}

use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{models::MessageResponse, validation::ValidationError};
use thiserror::Error;
use tracing::error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Internal server error")]
    Storage(#[source] StoreError),
    #[error("Internal server error during reset")]
    ResetFailed(#[source] StoreError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::Storage(_) | ApiError::ResetFailed(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();

        if let ApiError::Storage(source) | ApiError::ResetFailed(source) = &self {
            error!("{} {} failed: {}", req.method(), req.uri(), source);
        }

        let body = Json(MessageResponse::error(status.code, self.to_string()));
        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}

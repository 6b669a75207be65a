use rocket::{Request, catch, serde::json::Json};
use shared::models::MessageResponse;

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<MessageResponse> {
    Json(MessageResponse::error(400, "Invalid request body."))
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<MessageResponse> {
    Json(MessageResponse::error(404, "The requested resource was not found."))
}

#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<MessageResponse> {
    Json(MessageResponse::error(422, "Request body is not a valid vote."))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<MessageResponse> {
    Json(MessageResponse::error(500, "Internal server error"))
}

use std::sync::Arc;
use rocket::{State, get, post, http::Status, serde::json::Json};
use tracing::{debug, instrument};
use shared::{models::*, Tally};
use crate::{
    config::{Config, DEFAULT_DELETE_BATCH_SIZE, DEFAULT_SCAN_PAGE_SIZE},
    error::ApiError,
    processor::VoteProcessor,
    store::VoteStore,
};

pub struct AppState {
    pub store: Arc<dyn VoteStore>,
    pub scan_page_size: usize,
    pub delete_batch_size: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn VoteStore>) -> Self {
        Self {
            store,
            scan_page_size: DEFAULT_SCAN_PAGE_SIZE,
            delete_batch_size: DEFAULT_DELETE_BATCH_SIZE,
        }
    }

    pub fn from_config(store: Arc<dyn VoteStore>, config: &Config) -> Self {
        Self {
            store,
            scan_page_size: config.scan_page_size,
            delete_batch_size: config.delete_batch_size,
        }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, request))]
#[post("/vote", data = "<request>")]
pub async fn cast_vote(
    state: &State<AppState>,
    request: Json<CastVoteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let record = VoteProcessor::cast_vote(state.store.as_ref(), &request).await?;
    debug!("Recorded {} vote {}", record.option, record.id);
    Ok(Json(MessageResponse::ack("Vote recorded successfully")))
}

#[instrument(skip(state))]
#[get("/results")]
pub async fn results(state: &State<AppState>) -> Result<Json<Tally>, ApiError> {
    VoteProcessor::tally(state.store.as_ref(), state.scan_page_size)
        .await
        .map(Json)
        .map_err(ApiError::Storage)
}

#[instrument(skip(state))]
#[post("/reset")]
pub async fn reset(state: &State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    VoteProcessor::reset(state.store.as_ref(), state.scan_page_size, state.delete_batch_size)
        .await
        .map_err(ApiError::ResetFailed)?;
    Ok(Json(MessageResponse::ack("Survey reset successfully")))
}

use crate::models::{CastVoteRequest, VoteOption};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Session ID is required")]
    MissingSession,
    #[error("Vote option is required")]
    MissingOption,
    #[error("Invalid vote option: {0}")]
    InvalidOption(String),
}

/// Checks a vote request and returns the parsed option.
///
/// The session id only has to be present. Nothing here looks at whether the
/// same session already voted: that promise is kept by the client alone.
pub fn validate_cast_vote(request: &CastVoteRequest) -> Result<VoteOption, ValidationError> {
    match request.session_id.as_deref() {
        Some(session) if !session.is_empty() => (),
        _ => return Err(ValidationError::MissingSession),
    }

    request.vote
        .as_deref()
        .ok_or(ValidationError::MissingOption)?
        .parse()
}

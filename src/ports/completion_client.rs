use crate::domain::AppError;

/// One chat-completion exchange: a hosted model id, a system instruction, and
/// the constructed user instruction. JSON-formatted output is always requested.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model_id: String,
    pub system: String,
    pub instruction: String,
}

/// Port for the remote completion service.
///
/// Implementations perform exactly one request per call; there is no retry,
/// caching, or rate limiting at this seam.
pub trait CompletionClient {
    /// Send the request and return the generated message text.
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError>;
}

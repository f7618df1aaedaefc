use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushError {
    /// The push service answered with a non-success status.
    #[error("push service rejected message: {status} {body}")]
    Rejected { status: u16, body: String },

    /// The request never reached the push service.
    #[error("push transport error: {0}")]
    Transport(String),
}

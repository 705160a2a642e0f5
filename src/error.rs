pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generation was asked for a puzzle that cannot exist: a zero-sized
    /// grid, or an alphabet with fewer distinct symbols than the draft
    /// requires. This is the only user-facing validation failure; solving
    /// never errors.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl Error {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CspError {
    /// The name passed to [`Policy::set`](crate::Policy::set) or
    /// [`Policy::add`](crate::Policy::add) is not a CSP directive. Carries
    /// the rejected name.
    #[error("invalid CSP directive: {0:?}")]
    InvalidDirective(String),
}

pub type Result<T> = std::result::Result<T, CspError>;

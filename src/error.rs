use thiserror::Error;

pub type Result<T> = std::result::Result<T, MaxCutError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaxCutError {
    /// The caller supplied a malformed input: bad graph size, bad alpha,
    /// empty histogram, mismatched bitstring width.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A sampler or optimizer back end failed.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl MaxCutError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        MaxCutError::InvalidArgument(message.into())
    }
}

#[cfg(feature = "python")]
impl From<MaxCutError> for pyo3::PyErr {
    fn from(err: MaxCutError) -> Self {
        match err {
            MaxCutError::InvalidArgument(_) => {
                pyo3::exceptions::PyValueError::new_err(err.to_string())
            }
            MaxCutError::Backend(_) => pyo3::exceptions::PyRuntimeError::new_err(err.to_string()),
        }
    }
}

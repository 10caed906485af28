#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("Invalid input for calendar picker: '{0}'")]
    InvalidInput(String),

    #[error("Unknown factory method: {0}")]
    UnknownMethod(String),

    #[error("Invalid factory method name: '{0}'")]
    InvalidMethodName(String),

    #[error("Component '{0}' already exists in this form")]
    DuplicateComponent(String),
}

impl PickerError {
    /// Create an InvalidInput error naming the offending value.
    pub fn invalid_input(value: impl std::fmt::Display) -> Self {
        PickerError::InvalidInput(value.to_string())
    }
}

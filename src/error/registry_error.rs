#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the named-binding registry can report.
pub enum RegistryError {
    /// No set is bound to the name.
    UndefinedBinding {
        /// The normalized name.
        name: String,
    },
    /// The binding may not be deleted.
    ProtectedBinding {
        /// The normalized name.
        name: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedBinding { name } => write!(f, "Set '{name}' does not exist."),
            Self::ProtectedBinding { name } => {
                write!(f, "Set '{name}' is protected and cannot be deleted.")
            },
        }
    }
}

impl std::error::Error for RegistryError {}

use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnrecognizedVariant { found: String, ty: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedVariant { found, ty } => {
                write!(f, "unrecognized {}: {:?}", ty, found)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

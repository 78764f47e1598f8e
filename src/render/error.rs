use core::fmt;

#[derive(Debug)]
pub enum RenderError {
    NoAdapter,
    UnknownParameter { name: String },

    /// More segments than the device allows texture columns
    TooWide { width: u32, max: u32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self)
    }
}

impl std::error::Error for RenderError {}

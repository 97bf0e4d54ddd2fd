pub mod errors;

pub use errors::{ConfigError, TintError};

pub type Result<T> = std::result::Result<T, TintError>;

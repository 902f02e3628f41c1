pub mod logger;
pub mod parsing;

pub use logger::{init_logger, LogContext, TimedOperation};
pub use parsing::FieldParser;

mod diagnostic;
mod error;

pub use diagnostic::Diagnostic;
pub use error::BuilderError;

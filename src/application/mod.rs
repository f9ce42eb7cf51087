mod application;
pub mod data;
mod input_source;
mod printer;
mod runtime_config;
mod session;

pub use application::{Application, ApplicationError};
pub use input_source::{InputLines, InputSource, InputSourceError};
pub use printer::Printer;
pub use runtime_config::RuntimeConfig;
pub use session::{OutputLine, Session};

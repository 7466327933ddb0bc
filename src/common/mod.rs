pub use config::*;
pub use errors::*;
pub use validation::*;

pub mod logging;

mod config;
mod errors;
mod macros;
mod validation;

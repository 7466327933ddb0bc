pub use client::*;
pub use crud::*;
pub use envelope::*;
pub use resource::*;
pub use settings::*;
pub use upload::*;

mod client;
mod crud;
mod envelope;
mod resource;
mod settings;
mod upload;

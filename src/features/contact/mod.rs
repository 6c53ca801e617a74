pub mod components;
pub mod error;
pub mod models;
pub mod services;

pub use components::*;
pub use error::ContactError;
pub use models::*;
pub use services::*;

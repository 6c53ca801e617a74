pub mod components;
pub mod plans;

pub use components::*;
pub use plans::*;

pub mod components;
pub mod state;

pub use components::*;
pub use state::*;

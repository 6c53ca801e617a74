pub mod components;
pub mod hooks;
pub mod state;

pub use components::*;
pub use hooks::*;
pub use state::*;

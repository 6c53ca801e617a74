pub mod contact_modal;

pub use contact_modal::{ContactDialog, ContactModal};

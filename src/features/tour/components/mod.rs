pub mod demo_modal;

pub use demo_modal::DemoModal;

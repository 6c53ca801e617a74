pub mod contact;
pub mod kanban;
pub mod pricing;
pub mod tour;

pub mod card;
pub mod column;

// Card and column types shared by the kanban board and its components
pub use card::{Card, CardId, Priority};
pub use column::ColumnId;

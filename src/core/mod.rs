pub mod board;
pub mod label;
pub mod placement;
pub mod script;
pub mod store;

pub use board::{Board, Change};
pub use label::TimeLabelFactory;
pub use store::ColumnStore;

pub mod column;
pub mod drag;
pub mod entity;

pub use column::ColumnName;
pub use drag::DragEnd;
pub use entity::{EntityId, SlotLabel, TimeSlot};

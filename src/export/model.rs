use crate::core::ColumnStore;
use serde::Serialize;

/// One exported tag, flattened with its column and position.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlotExport {
    pub column: String,
    pub position: usize,
    pub id: String,
    pub label: String,
}

impl SlotExport {
    /// Flatten the board in fixed column order; positions start at 1.
    pub fn from_store(store: &ColumnStore) -> Vec<SlotExport> {
        store
            .iter()
            .flat_map(|(name, slots)| {
                slots.iter().enumerate().map(move |(i, slot)| SlotExport {
                    column: name.to_string(),
                    position: i + 1,
                    id: slot.id.to_string(),
                    label: slot.label.to_string(),
                })
            })
            .collect()
    }
}

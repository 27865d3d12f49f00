use super::{column::ColumnName, entity::EntityId};
use log::debug;

/// A completed drag gesture: which tag was released, and over which column.
/// `over_id` is `None` when the tag was dropped outside every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub active_id: EntityId,
    pub over_id: Option<ColumnName>,
}

impl DragEnd {
    pub fn new(active_id: EntityId, over_id: Option<ColumnName>) -> Self {
        Self { active_id, over_id }
    }

    /// Validate a raw payload at the boundary.
    ///
    /// Returns `None` when the active id is not a valid id. An unknown or
    /// missing target becomes `over_id: None`, which the engine ignores.
    pub fn from_raw(active: &str, over: Option<&str>) -> Option<Self> {
        let active_id = match active.parse::<EntityId>() {
            Ok(id) => id,
            Err(e) => {
                debug!("event=drag_end status=ignored reason=bad_active_id value={active} err={e}");
                return None;
            }
        };

        let over_id = over.and_then(|raw| raw.parse::<ColumnName>().ok());
        Some(Self { active_id, over_id })
    }
}

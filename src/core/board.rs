use crate::core::label::TimeLabelFactory;
use crate::core::placement::{self, DropOutcome};
use crate::core::store::ColumnStore;
use crate::errors::ValidationError;
use crate::models::{ColumnName, DragEnd, EntityId, TimeSlot};
use log::debug;

/// Result of a user action on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Created(TimeSlot),
    Copied { new_id: EntityId, to: ColumnName },
    Moved { from: ColumnName, to: ColumnName },
    Deleted(EntityId),
    NoOp,
}

impl From<DropOutcome> for Change {
    fn from(outcome: DropOutcome) -> Self {
        match outcome {
            DropOutcome::Copied { new_id, to } => Change::Copied { new_id, to },
            DropOutcome::Moved { from, to } => Change::Moved { from, to },
            DropOutcome::NoOp => Change::NoOp,
        }
    }
}

/// Owner of the single mutable store slot for one session.
///
/// Each action computes the next store and replaces the previous one in a
/// single assignment, so a half-applied transition is never observable.
#[derive(Debug, Default)]
pub struct Board {
    store: ColumnStore,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ColumnStore {
        &self.store
    }

    /// Validate four raw values and put the new tag in the generator pool.
    pub fn create(
        &mut self,
        start_hour: &str,
        start_minute: &str,
        end_hour: &str,
        end_minute: &str,
    ) -> Result<Change, ValidationError> {
        let slot = TimeLabelFactory::create_label(start_hour, start_minute, end_hour, end_minute)?;
        Ok(self.push_generated(slot))
    }

    pub fn create_range(&mut self, text: &str) -> Result<Change, ValidationError> {
        let slot = TimeLabelFactory::create_from_range(text)?;
        Ok(self.push_generated(slot))
    }

    pub fn create_free(&mut self, text: &str) -> Result<Change, ValidationError> {
        let slot = TimeLabelFactory::create_free_text(text)?;
        Ok(self.push_generated(slot))
    }

    pub fn drop_on(&mut self, source: EntityId, target: ColumnName) -> Change {
        let (next, outcome) = placement::apply_drop_traced(self.take(), source, target);
        self.store = next;
        outcome.into()
    }

    pub fn drag_end(&mut self, event: &DragEnd) -> Change {
        let (next, outcome) = placement::apply_event_traced(self.take(), event);
        self.store = next;
        outcome.into()
    }

    pub fn delete(&mut self, id: EntityId) -> Change {
        let existed = self.store.get(id).is_some();
        self.store = placement::delete_entity(self.take(), id);
        if existed {
            debug!("event=delete id={id}");
            Change::Deleted(id)
        } else {
            Change::NoOp
        }
    }

    fn push_generated(&mut self, slot: TimeSlot) -> Change {
        debug!("event=create id={} label={}", slot.id, slot.label);
        let mut next = self.take();
        next.append(ColumnName::Generator, slot.clone());
        self.store = next;
        Change::Created(slot)
    }

    fn take(&mut self) -> ColumnStore {
        std::mem::take(&mut self.store)
    }
}

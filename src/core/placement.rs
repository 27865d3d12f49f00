//! Drag-end transitions over a [`ColumnStore`].
//!
//! Every function here takes the store by value and hands back the next
//! version; none of them fail. Unresolvable references degrade to no-ops.
//!
//! - Dragging out of the generator pool **copies**: the pool tag stays as a
//!   template and the target column gets a new tag with the same label,
//!   unless it already shows that label.
//! - Dragging between weekday columns **moves** the tag, keeping its id.

use crate::core::store::ColumnStore;
use crate::models::{ColumnName, DragEnd, EntityId};
use log::debug;

/// What a transition did, for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Copied { new_id: EntityId, to: ColumnName },
    Moved { from: ColumnName, to: ColumnName },
    NoOp,
}

/// Apply a drop of `source` onto `target`.
pub fn apply_drop(store: ColumnStore, source: EntityId, target: ColumnName) -> ColumnStore {
    apply_drop_traced(store, source, target).0
}

/// Same as [`apply_drop`], also reporting the outcome.
pub fn apply_drop_traced(
    mut store: ColumnStore,
    source: EntityId,
    target: ColumnName,
) -> (ColumnStore, DropOutcome) {
    let Some(owner) = store.find_owning_column(source) else {
        debug!("event=drop status=noop reason=unknown_source id={source}");
        return (store, DropOutcome::NoOp);
    };

    if owner == target {
        debug!("event=drop status=noop reason=same_column id={source} column={target}");
        return (store, DropOutcome::NoOp);
    }

    let Some(entity) = store.get(source).cloned() else {
        return (store, DropOutcome::NoOp);
    };

    if owner.is_generator() {
        if store.contains_label(target, &entity.label) {
            debug!(
                "event=drop status=noop reason=duplicate_label label={} column={target}",
                entity.label
            );
            return (store, DropOutcome::NoOp);
        }

        let copy = entity.duplicate();
        let new_id = copy.id;
        store.append(target, copy);
        debug!(
            "event=drop kind=copy src={source} new={new_id} label={} to={target}",
            entity.label
        );
        return (store, DropOutcome::Copied { new_id, to: target });
    }

    store.remove_from(owner, source);
    if !store.contains_id(target, source) {
        store.append(target, entity);
    }
    debug!("event=drop kind=move id={source} from={owner} to={target}");
    (store, DropOutcome::Moved { from: owner, to: target })
}

/// Adapter for a boundary-validated drag event; no target means no change.
pub fn apply_event(store: ColumnStore, event: &DragEnd) -> ColumnStore {
    apply_event_traced(store, event).0
}

/// Same as [`apply_event`], also reporting the outcome.
pub fn apply_event_traced(store: ColumnStore, event: &DragEnd) -> (ColumnStore, DropOutcome) {
    match event.over_id {
        Some(target) => apply_drop_traced(store, event.active_id, target),
        None => {
            debug!("event=drop status=noop reason=no_target id={}", event.active_id);
            (store, DropOutcome::NoOp)
        }
    }
}

/// Remove `id` from every column. Deleting an absent id returns the store as is.
pub fn delete_entity(mut store: ColumnStore, id: EntityId) -> ColumnStore {
    store.remove_by_id(id);
    store
}

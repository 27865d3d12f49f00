//! In-memory mapping from the eight fixed columns to their ordered tags.

use crate::errors::{AppError, AppResult};
use crate::models::{ColumnName, EntityId, SlotLabel, TimeSlot};

/// Shortest id prefix accepted by [`ColumnStore::resolve`].
pub const MIN_ID_PREFIX: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnStore {
    columns: [Vec<TimeSlot>; 8],
}

impl ColumnStore {
    /// All columns empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self, name: ColumnName) -> &[TimeSlot] {
        &self.columns[name.index()]
    }

    /// Columns with their contents, in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnName, &[TimeSlot])> {
        ColumnName::ALL
            .into_iter()
            .map(move |name| (name, self.column(name)))
    }

    /// Add `entity` at the end of `name`.
    pub fn append(&mut self, name: ColumnName, entity: TimeSlot) {
        self.columns[name.index()].push(entity);
    }

    /// Append by raw column name, as typed by a caller outside the closed set.
    pub fn append_named(&mut self, name: &str, entity: TimeSlot) -> AppResult<()> {
        let column = name
            .parse::<ColumnName>()
            .map_err(|_| AppError::UnknownColumn(name.to_string()))?;
        self.append(column, entity);
        Ok(())
    }

    /// Remove `id` from every column holding it. Absent ids are ignored.
    pub fn remove_by_id(&mut self, id: EntityId) {
        for column in self.columns.iter_mut() {
            column.retain(|slot| slot.id != id);
        }
    }

    /// Remove `id` from a single column only.
    pub(crate) fn remove_from(&mut self, name: ColumnName, id: EntityId) {
        self.columns[name.index()].retain(|slot| slot.id != id);
    }

    /// First column, in fixed order, containing `id`.
    pub fn find_owning_column(&self, id: EntityId) -> Option<ColumnName> {
        self.iter()
            .find(|(_, slots)| slots.iter().any(|s| s.id == id))
            .map(|(name, _)| name)
    }

    pub fn get(&self, id: EntityId) -> Option<&TimeSlot> {
        self.columns.iter().flatten().find(|s| s.id == id)
    }

    pub fn contains_id(&self, name: ColumnName, id: EntityId) -> bool {
        self.column(name).iter().any(|s| s.id == id)
    }

    pub fn contains_label(&self, name: ColumnName, label: &SlotLabel) -> bool {
        self.column(name).iter().any(|s| &s.label == label)
    }

    /// Resolve a user-typed reference to a tag id.
    ///
    /// Accepted forms, tried in order: a full id, `Column/label`, an exact
    /// label (first match in column order), and a unique hex prefix of an
    /// id of at least [`MIN_ID_PREFIX`] digits, hyphens ignored.
    pub fn resolve(&self, token: &str) -> Option<EntityId> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        if let Ok(id) = token.parse::<EntityId>() {
            return self.get(id).map(|s| s.id);
        }

        if let Some((column, label)) = token.split_once('/')
            && let Ok(column) = column.parse::<ColumnName>()
        {
            return self
                .column(column)
                .iter()
                .find(|s| s.label.as_str() == label)
                .map(|s| s.id);
        }

        if let Some(slot) = self.columns.iter().flatten().find(|s| s.label.as_str() == token) {
            return Some(slot.id);
        }

        let needle = token.to_lowercase().replace('-', "");
        if needle.len() < MIN_ID_PREFIX || !needle.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let mut matches = self
            .columns
            .iter()
            .flatten()
            .map(|s| s.id)
            .filter(|id| id.as_uuid().simple().to_string().starts_with(&needle));

        let first = matches.next()?;
        // ambiguous prefix
        if matches.any(|other| other != first) {
            return None;
        }
        Some(first)
    }

    /// Total number of tags across all columns.
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }
}

//! Selection state machine and the seams the host UI plugs into.
//!
//! The controller owns the expanded item list and the selection; the host
//! owns the visual rows, the detail view, and the icon table, and lends
//! them to the controller for the duration of each operation.

use crate::types::ItemRecord;

/// Host-owned visual row handle. The host passes one row per record, in
/// list order.
pub trait ItemRow {
    fn set_highlighted(&mut self, highlighted: bool);
}

/// Sink for the selected record's display fields. Receives exactly one
/// call per selection change.
pub trait DetailSink<Icon> {
    fn display(&mut self, icon: Icon, name: &str, description: &str, stat_text: &str);
}

/// Bounds-checked resolution of a record's icon index to a host-owned
/// icon handle.
pub trait IconLookup {
    type Icon;

    fn resolve(&self, index: usize) -> Result<Self::Icon, IconError>;
}

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Uninitialized,
    Selected(usize),
}

/// Owns the expanded item list and the single current selection.
#[derive(Debug)]
pub struct Selection {
    items: Vec<ItemRecord>,
    state: SelectionState,
}

impl Selection {
    pub fn new(items: Vec<ItemRecord>) -> Self {
        Self {
            items,
            state: SelectionState::Uninitialized,
        }
    }

    /// The expanded, read-only item list.
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Index of the selected record, if initialized.
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            SelectionState::Uninitialized => None,
            SelectionState::Selected(index) => Some(index),
        }
    }

    /// The currently selected record, if any.
    pub fn selected_record(&self) -> Option<&ItemRecord> {
        self.selected().and_then(|index| self.items.get(index))
    }

    /// Select row 0 and publish its record to the detail sink.
    ///
    /// Every record's icon index is resolved here so a bad index fails
    /// startup rather than the first click on the bad row. Calling this
    /// on an already-initialized controller is a no-op.
    pub fn initialize<R, D, I>(
        &mut self,
        rows: &mut [R],
        detail: &mut D,
        icons: &I,
    ) -> Result<(), SelectionError>
    where
        R: ItemRow,
        D: DetailSink<I::Icon>,
        I: IconLookup,
    {
        if self.items.is_empty() {
            return Err(SelectionError::EmptyList);
        }
        if matches!(self.state, SelectionState::Selected(_)) {
            return Ok(());
        }

        for record in &self.items {
            icons.resolve(record.icon_index)?;
        }

        self.select(0, rows, detail, icons)
    }

    /// Make row `index` the selection: every other row unhighlighted, row
    /// `index` highlighted, the record's fields published once.
    /// Re-selecting the current row has no observable effect.
    pub fn select<R, D, I>(
        &mut self,
        index: usize,
        rows: &mut [R],
        detail: &mut D,
        icons: &I,
    ) -> Result<(), SelectionError>
    where
        R: ItemRow,
        D: DetailSink<I::Icon>,
        I: IconLookup,
    {
        let Some(record) = self.items.get(index) else {
            return Err(SelectionError::RowOutOfRange {
                index,
                len: self.items.len(),
            });
        };

        if self.state == SelectionState::Selected(index) {
            return Ok(());
        }

        // Resolve the icon before touching any row so an error leaves the
        // highlights and the detail view untouched.
        let icon = icons.resolve(record.icon_index)?;

        for row in rows.iter_mut() {
            row.set_highlighted(false);
        }
        if let Some(row) = rows.get_mut(index) {
            row.set_highlighted(true);
        }

        detail.display(icon, &record.name, &record.description, &record.stat_text());
        self.state = SelectionState::Selected(index);

        Ok(())
    }

    /// Clear all highlights and return to `Uninitialized`. Safe to call
    /// repeatedly, or before `initialize` was ever called.
    pub fn teardown<R: ItemRow>(&mut self, rows: &mut [R]) {
        for row in rows.iter_mut() {
            row.set_highlighted(false);
        }
        self.state = SelectionState::Uninitialized;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("cannot initialize selection over an empty item list")]
    EmptyList,
    #[error("row index {index} out of range for list of {len}")]
    RowOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Icon(#[from] IconError),
}

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("icon index {index} out of range for icon table of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

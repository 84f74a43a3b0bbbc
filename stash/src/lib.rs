pub mod catalog;
pub mod selection;
pub mod types;

pub use catalog::{load, parse_items, replicate, CatalogError};
pub use selection::{
    DetailSink, IconError, IconLookup, ItemRow, Selection, SelectionError, SelectionState,
};
pub use types::{ItemRecord, StatValue};

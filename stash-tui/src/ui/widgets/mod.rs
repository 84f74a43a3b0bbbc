pub mod detail_panel;
pub mod item_list;

pub use detail_panel::{DetailPanel, DetailPanelState};
pub use item_list::{ItemListState, ItemListWidget, RowEntry};

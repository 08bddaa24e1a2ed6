//! UI Components
//!
//! Leptos components for the list, history and feedback surfaces.

mod add_item_form;
mod category_section;
mod grocery_list;
mod history_panel;
mod item_row;
mod toast_banner;

pub use add_item_form::AddItemForm;
pub use category_section::CategorySection;
pub use grocery_list::GroceryList;
pub use history_panel::HistoryPanel;
pub use item_row::ItemRow;
pub use toast_banner::ToastBanner;

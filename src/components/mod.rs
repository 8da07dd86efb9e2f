//! UI Components
//!
//! Leptos components for both widgets.

mod filter_tabs;
mod password_generator;
mod strength_meter;
mod todo_form;
mod todo_item;
mod todo_list;
mod todo_panel;
mod toggle_switch;

pub use filter_tabs::FilterTabs;
pub use password_generator::PasswordGenerator;
pub use strength_meter::StrengthMeter;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use todo_panel::TodoPanel;
pub use toggle_switch::ToggleSwitch;

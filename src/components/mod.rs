//! UI Components
//!
//! Reusable Leptos components.

mod action_bar;
mod algorithm_grid;
mod comparison_panel;
mod confirm_button;
mod item_table;
mod preset_grid;
mod recommendation_panel;
mod result_panel;
mod toast_stack;

pub use action_bar::ActionBar;
pub use algorithm_grid::AlgorithmGrid;
pub use comparison_panel::ComparisonPanel;
pub use confirm_button::ConfirmButton;
pub use item_table::ItemTable;
pub use preset_grid::PresetGrid;
pub use recommendation_panel::RecommendationPanel;
pub use result_panel::ResultPanel;
pub use toast_stack::ToastStack;

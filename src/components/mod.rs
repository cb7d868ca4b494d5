//! UI Components
//!
//! Leptos components for the rubric editor.

mod ai_example_section;
mod criterion_dropdown;
mod criterion_list;
mod delete_confirm_button;
mod option_row;
mod training_example_list;
mod validation_panel;

pub use ai_example_section::AiExampleSection;
pub use criterion_dropdown::CriterionDropdown;
pub use criterion_list::CriterionList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use option_row::OptionRow;
pub use training_example_list::TrainingExampleList;
pub use validation_panel::ValidationPanel;

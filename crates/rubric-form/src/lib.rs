//! Rubric Form Model
//!
//! DOM-free model of the rubric authoring form:
//! - naming: gap-filling identifier allocation per sibling set
//! - field: string and bounded integer form fields
//! - notify: edit notifications and the synchronous bus
//! - item / container: the item lifecycle contract and the ordered collection
//! - option, criterion, training_example, ai_example: the five item kinds
//! - editor: the page-level aggregate wiring everything together

mod ai_example;
mod config;
mod container;
mod criterion;
mod editor;
mod error;
mod field;
mod format;
mod i18n;
mod item;
mod naming;
mod notify;
mod option;
mod training_example;

mod tests;

pub use ai_example::{
    apply_except, AiExample, AiExampleMenuItem, AiExamplePairs, AiExampleValues, EditorScope,
    MenuItemValues,
};
pub use config::EditorConfig;
pub use container::Container;
pub use criterion::{Criterion, CriterionValues, Feedback};
pub use editor::RubricEditor;
pub use error::{FormError, FormResult};
pub use field::{IntField, StringField};
pub use format::format_option_label;
pub use i18n::{interpolate, EnglishCatalog, MapCatalog, Translator};
pub use item::{FieldValues, HandlerEnv, Item, ParentRef};
pub use naming::{create_unique_name, SiblingNames};
pub use notify::{
    Notification, NotificationBus, Notifier, NullNotifier, RecordingNotifier, SubscriptionId,
};
pub use option::{OptionValues, RubricOption};
pub use training_example::{
    CriterionSelect, ExampleValues, SelectChoice, SelectedOption, TrainingExample,
};

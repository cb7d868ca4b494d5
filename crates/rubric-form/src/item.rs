//! Item Contract
//!
//! Every form item (option, criterion, training example, AI example,
//! AI example menu item) implements `Item`. Containers only see this trait.

use serde::{Deserialize, Serialize};

use crate::ai_example::{AiExampleValues, MenuItemValues};
use crate::criterion::CriterionValues;
use crate::i18n::Translator;
use crate::naming::SiblingNames;
use crate::notify::Notifier;
use crate::option::OptionValues;
use crate::training_example::ExampleValues;

/// Exported values of one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValues {
    Criterion(CriterionValues),
    AiExample(AiExampleValues),
    TrainingExample(ExampleValues),
    Option(OptionValues),
    MenuItem(MenuItemValues),
}

/// Identity of the item that owns a container (an option's criterion)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub name: Option<String>,
    pub label: String,
}

/// Scope injected into lifecycle handlers
#[derive(Clone, Copy)]
pub struct HandlerEnv<'a> {
    pub notifier: &'a dyn Notifier,
    pub catalog: &'a dyn Translator,
    pub parent: Option<&'a ParentRef>,
}

impl<'a> HandlerEnv<'a> {
    pub fn new(notifier: &'a dyn Notifier, catalog: &'a dyn Translator) -> Self {
        Self {
            notifier,
            catalog,
            parent: None,
        }
    }

    pub fn with_parent(self, parent: &'a ParentRef) -> Self {
        Self {
            parent: Some(parent),
            ..self
        }
    }
}

/// Lifecycle and validation contract shared by all item kinds.
///
/// A container calls `add_event_listeners` once after insertion,
/// `add_handler` once right after an explicit add, `remove_handler` once
/// right before detaching, and `update_handler` on every commit.
pub trait Item {
    fn add_event_listeners(&mut self) {}

    fn field_values(&self) -> FieldValues;

    /// Identifier within the sibling set, if this kind has one
    fn name(&self) -> Option<&str> {
        None
    }

    fn add_handler(&mut self, _names: &mut SiblingNames, _env: &HandlerEnv<'_>) {}

    fn remove_handler(&mut self, _env: &HandlerEnv<'_>) {}

    fn update_handler(&mut self, _env: &HandlerEnv<'_>) {}

    fn validate(&mut self) -> bool {
        true
    }

    fn validation_errors(&self) -> Vec<String> {
        Vec::new()
    }

    fn clear_validation_errors(&mut self) {}
}

impl<I: Item + ?Sized> Item for Box<I> {
    fn add_event_listeners(&mut self) {
        (**self).add_event_listeners()
    }

    fn field_values(&self) -> FieldValues {
        (**self).field_values()
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn add_handler(&mut self, names: &mut SiblingNames, env: &HandlerEnv<'_>) {
        (**self).add_handler(names, env)
    }

    fn remove_handler(&mut self, env: &HandlerEnv<'_>) {
        (**self).remove_handler(env)
    }

    fn update_handler(&mut self, env: &HandlerEnv<'_>) {
        (**self).update_handler(env)
    }

    fn validate(&mut self) -> bool {
        (**self).validate()
    }

    fn validation_errors(&self) -> Vec<String> {
        (**self).validation_errors()
    }

    fn clear_validation_errors(&mut self) {
        (**self).clear_validation_errors()
    }
}

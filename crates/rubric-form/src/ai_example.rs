//! AI Examples
//!
//! An AI example and its menu item are two renderings of one logical
//! example. They share an identifier and nothing else; every lookup
//! between them goes by that key.
//!
//! Invariant: each example name has exactly one menu item with the same
//! name and vice versa. `AiExamplePairs` is the only code that adds or
//! removes either side, and always does both.

use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::error::{FormError, FormResult};
use crate::field::StringField;
use crate::item::{FieldValues, HandlerEnv, Item};
use crate::naming::SiblingNames;
use crate::training_example::{CriterionSelect, ExampleValues, TrainingExample};

/// Apply a flag to every item except the one matching `keep`.
/// `apply` receives `true` for items that get the flag.
pub fn apply_except<T>(
    items: &mut [T],
    keep: impl Fn(&T) -> bool,
    mut apply: impl FnMut(&mut T, bool),
) {
    for item in items.iter_mut() {
        let applied = !keep(item);
        apply(item, applied);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiExampleValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub label: String,
    #[serde(flatten)]
    pub example: ExampleValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiExample {
    name: Option<String>,
    label: StringField,
    body: TrainingExample,
    hidden: bool,
}

impl AiExample {
    pub fn new(selects: Vec<CriterionSelect>) -> Self {
        Self {
            name: None,
            label: StringField::default(),
            body: TrainingExample::new(selects),
            hidden: false,
        }
    }

    pub fn named(name: impl Into<String>, selects: Vec<CriterionSelect>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(selects)
        }
    }

    /// Example already on the page
    pub fn loaded(name: Option<String>, label: impl Into<String>, body: TrainingExample) -> Self {
        Self {
            name,
            label: StringField::new(label),
            body,
            hidden: false,
        }
    }

    pub fn values(&self) -> AiExampleValues {
        AiExampleValues {
            identifier: self.name.clone(),
            label: self.label().to_string(),
            example: self.body.values(),
        }
    }

    pub fn label(&self) -> &str {
        self.label.get()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label.set(label);
    }

    pub fn example(&self) -> &TrainingExample {
        &self.body
    }

    pub fn example_mut(&mut self) -> &mut TrainingExample {
        &mut self.body
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Copy this example's label into the menu item sharing its name.
    /// Returns false when there is no such menu item.
    pub fn push_label(&self, menu: &mut [AiExampleMenuItem]) -> bool {
        let Some(name) = self.name.as_deref() else {
            return false;
        };
        match menu.iter_mut().find(|item| item.name.as_deref() == Some(name)) {
            Some(item) => {
                item.display = self.label().to_string();
                true
            }
            None => false,
        }
    }
}

impl Item for AiExample {
    fn field_values(&self) -> FieldValues {
        FieldValues::AiExample(self.values())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn add_handler(&mut self, names: &mut SiblingNames, env: &HandlerEnv<'_>) {
        self.name = Some(names.claim());
        self.body.render_labels(env.catalog);
    }

    fn validate(&mut self) -> bool {
        self.body.validate_selects()
    }

    fn validation_errors(&self) -> Vec<String> {
        self.body.select_errors()
    }

    fn clear_validation_errors(&mut self) {
        self.body.clear_select_errors();
    }
}

/// Navigation entry for one AI example. Holds no form data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiExampleMenuItem {
    name: Option<String>,
    display: String,
    emphasized: bool,
}

impl AiExampleMenuItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            display: display.into(),
            emphasized: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }
}

impl Item for AiExampleMenuItem {
    fn field_values(&self) -> FieldValues {
        FieldValues::MenuItem(MenuItemValues {
            identifier: self.name.clone(),
        })
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn add_handler(&mut self, names: &mut SiblingNames, _env: &HandlerEnv<'_>) {
        self.name = Some(names.claim());
    }
}

/// Display state shared by the examples and menu of one editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorScope {
    /// Name of the example currently shown
    pub visible: Option<String>,
    /// Name of the emphasized menu item
    pub selected: Option<String>,
    /// Whether the "no example selected" placeholder is shown
    pub placeholder_visible: bool,
}

/// The two AI collections, kept in lockstep
#[derive(Debug, Clone)]
pub struct AiExamplePairs {
    examples: Container<AiExample>,
    menu: Container<AiExampleMenuItem>,
    scope: EditorScope,
}

impl Default for AiExamplePairs {
    fn default() -> Self {
        Self::new()
    }
}

impl AiExamplePairs {
    pub fn new() -> Self {
        Self {
            examples: Container::new("ai_example"),
            menu: Container::new("ai_example_menu_item"),
            scope: EditorScope {
                placeholder_visible: true,
                ..EditorScope::default()
            },
        }
    }

    /// Adopt pairs already on the page; the first example is shown
    pub fn load(examples: Vec<AiExample>, menu: Vec<AiExampleMenuItem>) -> FormResult<Self> {
        let mut pairs = Self {
            examples: Container::load("ai_example", examples)?,
            menu: Container::load("ai_example_menu_item", menu)?,
            scope: EditorScope::default(),
        };
        pairs.check_pairing()?;
        let first = pairs
            .examples
            .get_all_items()
            .first()
            .and_then(|example| example.name.clone());
        match first {
            Some(name) => pairs.select(&name)?,
            None => pairs.scope.placeholder_visible = true,
        }
        Ok(pairs)
    }

    pub fn examples(&self) -> &[AiExample] {
        self.examples.get_all_items()
    }

    pub fn examples_mut(&mut self) -> &mut [AiExample] {
        self.examples.get_all_items_mut()
    }

    pub fn menu_items(&self) -> &[AiExampleMenuItem] {
        self.menu.get_all_items()
    }

    pub fn scope(&self) -> &EditorScope {
        &self.scope
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn example_mut(&mut self, name: &str) -> FormResult<&mut AiExample> {
        let index = self
            .examples
            .position_of(name)
            .ok_or_else(|| FormError::UnknownName("ai_example".to_string(), name.to_string()))?;
        self.examples.get_mut(index)
    }

    /// Add an example and its menu item together, then show the new example
    pub fn add_pair(
        &mut self,
        selects: Vec<CriterionSelect>,
        env: &HandlerEnv<'_>,
    ) -> FormResult<String> {
        let example_name = self
            .examples
            .add(AiExample::new(selects), env)
            .name
            .clone()
            .unwrap_or_default();
        let menu_name = self
            .menu
            .add(AiExampleMenuItem::new(), env)
            .name
            .clone()
            .unwrap_or_default();

        if example_name != menu_name {
            log::warn!(
                "[ai_example] example {} paired with menu item {}, rolling back",
                example_name,
                menu_name
            );
            self.examples.remove_by_name(&example_name, env)?;
            self.menu.remove_by_name(&menu_name, env)?;
            return Err(FormError::PairingMismatch(example_name, menu_name));
        }

        self.select(&example_name)?;
        Ok(example_name)
    }

    /// Remove a pair. If its example is the only one left or the one on
    /// screen, the placeholder is revealed before the example goes away.
    pub fn remove_pair(&mut self, name: &str, env: &HandlerEnv<'_>) -> FormResult<()> {
        let example_index = self
            .examples
            .position_of(name)
            .ok_or_else(|| FormError::UnknownName("ai_example".to_string(), name.to_string()))?;
        let menu_index = self.menu.position_of(name).ok_or_else(|| {
            FormError::UnknownName("ai_example_menu_item".to_string(), name.to_string())
        })?;

        let only = self.examples.len() == 1;
        let on_screen = self.scope.visible.as_deref() == Some(name);
        if only || on_screen {
            self.scope.placeholder_visible = true;
            self.scope.visible = None;
            self.scope.selected = None;
        }

        self.menu.remove(menu_index, env)?;
        self.examples.remove(example_index, env)?;
        Ok(())
    }

    /// Menu click: show only the example named `name` and emphasize its
    /// menu item
    pub fn select(&mut self, name: &str) -> FormResult<()> {
        if self.menu.position_of(name).is_none() {
            return Err(FormError::UnknownName(
                "ai_example_menu_item".to_string(),
                name.to_string(),
            ));
        }
        apply_except(
            self.examples.get_all_items_mut(),
            |example| example.name.as_deref() == Some(name),
            |example, hide| example.hidden = hide,
        );
        apply_except(
            self.menu.get_all_items_mut(),
            |item| item.name.as_deref() == Some(name),
            |item, muted| item.emphasized = !muted,
        );
        self.scope.visible = Some(name.to_string());
        self.scope.selected = Some(name.to_string());
        self.scope.placeholder_visible = false;
        Ok(())
    }

    /// Edit on the example at `index` finalized: label goes to its menu item
    pub fn commit_example(&mut self, index: usize, env: &HandlerEnv<'_>) -> FormResult<()> {
        self.examples.commit(index, env)?;
        let example = self.examples.get(index)?;
        if !example.push_label(self.menu.get_all_items_mut()) {
            log::debug!("[ai_example] no menu item for {:?}", example.name);
        }
        Ok(())
    }

    /// Check the one-to-one key invariant
    pub fn check_pairing(&self) -> FormResult<()> {
        for example in self.examples.get_all_items() {
            let name = example.name.as_deref().unwrap_or_default();
            let matches = self
                .menu
                .get_all_items()
                .iter()
                .filter(|item| item.name.as_deref() == Some(name))
                .count();
            if matches != 1 {
                return Err(FormError::PairingMismatch(name.to_string(), String::new()));
            }
        }
        for item in self.menu.get_all_items() {
            let name = item.name.as_deref().unwrap_or_default();
            if self.examples.position_of(name).is_none() {
                return Err(FormError::PairingMismatch(String::new(), name.to_string()));
            }
        }
        Ok(())
    }

    pub fn validate_all(&mut self) -> bool {
        self.examples.validate_all()
    }

    pub fn validation_errors(&self) -> Vec<String> {
        self.examples.validation_errors()
    }

    pub fn clear_validation_errors(&mut self) {
        self.examples.clear_validation_errors();
    }

    pub fn values(&self) -> Vec<AiExampleValues> {
        self.examples.get_all_items().iter().map(AiExample::values).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EnglishCatalog;
    use crate::notify::NullNotifier;

    fn env() -> HandlerEnv<'static> {
        HandlerEnv::new(&NullNotifier, &EnglishCatalog)
    }

    fn pairs_of(n: usize) -> AiExamplePairs {
        let env = env();
        let mut pairs = AiExamplePairs::new();
        for _ in 0..n {
            pairs.add_pair(Vec::new(), &env).expect("pair added");
        }
        pairs
    }

    #[test]
    fn test_pairs_share_names() {
        let pairs = pairs_of(3);
        let example_names: Vec<_> = pairs.examples().iter().map(|e| e.name()).collect();
        let menu_names: Vec<_> = pairs.menu_items().iter().map(|m| m.name()).collect();
        assert_eq!(example_names, vec![Some("0"), Some("1"), Some("2")]);
        assert_eq!(example_names, menu_names);
        assert!(pairs.check_pairing().is_ok());
    }

    #[test]
    fn test_select_shows_only_one() {
        let mut pairs = pairs_of(3);
        pairs.select("1").expect("select");

        let hidden: Vec<_> = pairs.examples().iter().map(AiExample::is_hidden).collect();
        assert_eq!(hidden, vec![true, false, true]);
        let emphasized: Vec<_> = pairs
            .menu_items()
            .iter()
            .map(AiExampleMenuItem::is_emphasized)
            .collect();
        assert_eq!(emphasized, vec![false, true, false]);
        assert_eq!(pairs.scope().visible.as_deref(), Some("1"));
        assert!(!pairs.scope().placeholder_visible);
    }

    #[test]
    fn test_label_reaches_matching_menu_item_only() {
        let env = env();
        let mut pairs = pairs_of(3);
        pairs.example_mut("2").expect("example 2").set_label("Foo");
        pairs.commit_example(2, &env).expect("commit");

        let displays: Vec<_> = pairs.menu_items().iter().map(|m| m.display()).collect();
        assert_eq!(displays, vec!["", "", "Foo"]);
    }

    #[test]
    fn test_push_label_miss_is_silent() {
        let mut example = AiExample::named("5", Vec::new());
        example.set_label("Orphan");
        let mut menu = vec![AiExampleMenuItem::named("0", "Zero")];
        assert!(!example.push_label(&mut menu));
        assert_eq!(menu[0].display(), "Zero");
    }

    #[test]
    fn test_remove_visible_reveals_placeholder() {
        let env = env();
        let mut pairs = pairs_of(2);
        pairs.select("0").expect("select");

        pairs.remove_pair("1", &env).expect("remove hidden");
        assert!(!pairs.scope().placeholder_visible);

        pairs.add_pair(Vec::new(), &env).expect("re-add");
        pairs.select("0").expect("select");
        pairs.remove_pair("0", &env).expect("remove visible");
        assert!(pairs.scope().placeholder_visible);
        assert_eq!(pairs.scope().visible, None);
        assert!(pairs.check_pairing().is_ok());
    }

    #[test]
    fn test_remove_last_reveals_placeholder() {
        let env = env();
        let mut pairs = pairs_of(1);
        pairs.scope.visible = None;
        pairs.scope.placeholder_visible = false;
        pairs.remove_pair("0", &env).expect("remove");
        assert!(pairs.scope().placeholder_visible);
        assert!(pairs.is_empty());
        assert!(pairs.menu_items().is_empty());
    }

    #[test]
    fn test_gap_reused_on_both_sides() {
        let env = env();
        let mut pairs = pairs_of(3);
        pairs.remove_pair("1", &env).expect("remove");
        assert_eq!(pairs.add_pair(Vec::new(), &env).expect("add"), "1");
        assert!(pairs.check_pairing().is_ok());
    }

    #[test]
    fn test_load_detects_unpaired() {
        let err = AiExamplePairs::load(
            vec![AiExample::named("0", Vec::new())],
            vec![AiExampleMenuItem::named("1", "")],
        )
        .unwrap_err();
        assert!(matches!(err, FormError::PairingMismatch(_, _)));
    }

    #[test]
    fn test_add_rolls_back_on_divergence() {
        let env = env();
        let mut pairs = pairs_of(2);
        // Mutate one side alone so the two registries drift apart
        pairs.menu.remove(0, &env).expect("menu remove");

        let err = pairs.add_pair(Vec::new(), &env).unwrap_err();
        assert_eq!(err, FormError::PairingMismatch("2".to_string(), "0".to_string()));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.menu_items().len(), 1);
    }

    #[test]
    fn test_apply_except() {
        let mut flags = vec![(0, false), (1, false), (2, false)];
        apply_except(&mut flags, |(n, _)| *n == 2, |(_, flag), applied| *flag = applied);
        assert_eq!(flags, vec![(0, true), (1, true), (2, false)]);
    }
}

//! Item Container
//!
//! Ordered collection of items produced from one template. Owns the
//! sibling name registry and drives each item's lifecycle hooks.

use crate::error::{FormError, FormResult};
use crate::item::{FieldValues, HandlerEnv, Item};
use crate::naming::SiblingNames;

#[derive(Debug, Clone)]
pub struct Container<T: Item> {
    template: &'static str,
    items: Vec<T>,
    names: SiblingNames,
}

impl<T: Item> Container<T> {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            items: Vec::new(),
            names: SiblingNames::new(),
        }
    }

    /// Adopt items that already exist on page load. Their names are
    /// reserved as-is and `add_handler` is not run. A name held by two
    /// items rejects the whole load.
    pub fn load(template: &'static str, items: Vec<T>) -> FormResult<Self> {
        let mut container = Self::new(template);
        for mut item in items {
            if let Some(name) = item.name() {
                if !container.names.reserve(name) {
                    log::error!("[{}] duplicate name {:?} on load", template, name);
                    return Err(FormError::DuplicateName(template.to_string(), name.to_string()));
                }
            }
            item.add_event_listeners();
            container.items.push(item);
        }
        Ok(container)
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Append a new item and run its creation hooks
    pub fn add(&mut self, item: T, env: &HandlerEnv<'_>) -> &mut T {
        self.items.push(item);
        let index = self.items.len() - 1;
        let item = &mut self.items[index];
        item.add_event_listeners();
        item.add_handler(&mut self.names, env);
        log::debug!("[{}] added {:?} at {}", self.template, item.name(), index);
        item
    }

    /// Run the removal hook, then detach the item and free its name
    pub fn remove(&mut self, index: usize, env: &HandlerEnv<'_>) -> FormResult<T> {
        self.check_index(index)?;
        self.items[index].remove_handler(env);
        let item = self.items.remove(index);
        if let Some(name) = item.name() {
            self.names.release(name);
        }
        log::debug!("[{}] removed {:?} from {}", self.template, item.name(), index);
        Ok(item)
    }

    pub fn remove_by_name(&mut self, name: &str, env: &HandlerEnv<'_>) -> FormResult<T> {
        let index = self.position_of(name).ok_or_else(|| self.unknown(name))?;
        self.remove(index, env)
    }

    /// Edit finalized on the item at `index`: run its update hook
    pub fn commit(&mut self, index: usize, env: &HandlerEnv<'_>) -> FormResult<()> {
        self.check_index(index)?;
        self.items[index].update_handler(env);
        Ok(())
    }

    pub fn get_all_items(&self) -> &[T] {
        &self.items
    }

    pub fn get_all_items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn get(&self, index: usize) -> FormResult<&T> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    pub fn get_mut(&mut self, index: usize) -> FormResult<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    pub fn get_item_values(&self) -> Vec<FieldValues> {
        self.items.iter().map(Item::field_values).collect()
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == Some(name))
    }

    pub fn names(&self) -> &SiblingNames {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate every item (no short-circuit so all get marked)
    pub fn validate_all(&mut self) -> bool {
        self.items
            .iter_mut()
            .fold(true, |valid, item| item.validate() && valid)
    }

    pub fn validation_errors(&self) -> Vec<String> {
        self.items.iter().flat_map(Item::validation_errors).collect()
    }

    pub fn clear_validation_errors(&mut self) {
        self.items.iter_mut().for_each(Item::clear_validation_errors);
    }

    fn check_index(&self, index: usize) -> FormResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(FormError::IndexOutOfRange(
                self.template.to_string(),
                index,
                self.items.len(),
            ))
        }
    }

    fn unknown(&self, name: &str) -> FormError {
        FormError::UnknownName(self.template.to_string(), name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EnglishCatalog;
    use crate::notify::RecordingNotifier;
    use crate::option::RubricOption;

    fn new_option() -> RubricOption {
        RubricOption::new(0, 999)
    }

    #[test]
    fn test_add_assigns_names_in_order() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut options = Container::new("option");

        options.add(new_option(), &env);
        options.add(new_option(), &env);

        let names: Vec<_> = options.get_all_items().iter().map(|o| o.name()).collect();
        assert_eq!(names, vec![Some("0"), Some("1")]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut options: Container<RubricOption> = Container::new("option");
        let err = options.remove(0, &env).unwrap_err();
        assert_eq!(err, FormError::IndexOutOfRange("option".to_string(), 0, 0));
        assert!(options.remove_by_name("3", &env).is_err());
    }

    #[test]
    fn test_load_reserves_existing_names() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let existing = vec![
            RubricOption::named("0", 0, 999),
            RubricOption::named("2", 0, 999),
        ];
        let mut options = Container::load("option", existing).expect("load");
        assert!(notifier.fired().is_empty());

        let added = options.add(new_option(), &env);
        assert_eq!(added.name(), Some("1"));
    }

    #[test]
    fn test_load_rejects_shared_name() {
        let existing = vec![
            RubricOption::named("0", 0, 999),
            RubricOption::named("0", 0, 999),
        ];
        let err = Container::load("option", existing).unwrap_err();
        assert_eq!(err, FormError::DuplicateName("option".to_string(), "0".to_string()));
    }

    #[test]
    fn test_unnamed_items_load_side_by_side() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut options =
            Container::load("option", vec![new_option(), RubricOption::named("0", 0, 999)])
                .expect("load");

        options.remove(1, &env).expect("remove");
        let added = options.add(new_option(), &env);
        assert_eq!(added.name(), Some("0"));
        assert_eq!(options.names().len(), 1);
    }

    #[test]
    fn test_boxed_items() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut items: Container<Box<dyn Item>> = Container::new("mixed");
        items.add(Box::new(new_option()), &env);
        items.add(Box::new(crate::ai_example::AiExampleMenuItem::new()), &env);

        assert_eq!(items.get_item_values().len(), 2);
        assert_eq!(items.get_all_items()[1].name(), Some("1"));
    }
}

//! Rubric Editor
//!
//! Page-level aggregate. Owns the criteria, the training examples and the
//! AI example pairs, and listens on the notification bus so every example
//! dropdown follows rubric edits.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::ai_example::{
    AiExample, AiExampleMenuItem, AiExamplePairs, AiExampleValues, MenuItemValues,
};
use crate::config::EditorConfig;
use crate::container::Container;
use crate::criterion::{Criterion, CriterionValues};
use crate::error::{FormError, FormResult};
use crate::i18n::{EnglishCatalog, Translator};
use crate::item::{HandlerEnv, Item};
use crate::notify::{Notification, NotificationBus, SubscriptionId};
use crate::option::RubricOption;
use crate::training_example::{CriterionSelect, ExampleValues, TrainingExample};

type SharedExamples = Rc<RefCell<Container<TrainingExample>>>;
type SharedPairs = Rc<RefCell<AiExamplePairs>>;

/// Everything the form currently holds, for inspection
#[derive(Debug, Serialize)]
struct EditorValues {
    criteria: Vec<CriterionValues>,
    training_examples: Vec<ExampleValues>,
    ai_examples: Vec<AiExampleValues>,
}

pub struct RubricEditor {
    config: EditorConfig,
    catalog: Rc<dyn Translator>,
    bus: Rc<NotificationBus>,
    criteria: Container<Criterion>,
    examples: SharedExamples,
    ai: SharedPairs,
    listener: SubscriptionId,
}

impl RubricEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_catalog(config, Rc::new(EnglishCatalog))
    }

    pub fn with_catalog(config: EditorConfig, catalog: Rc<dyn Translator>) -> Self {
        Self::assemble(
            config,
            catalog,
            Container::new("criterion"),
            Container::new("training_example"),
            AiExamplePairs::new(),
        )
    }

    /// Editor over everything already on the page. AI examples and menu
    /// items must pair up one-to-one by identifier.
    pub fn load(
        config: EditorConfig,
        catalog: Rc<dyn Translator>,
        criteria: &[CriterionValues],
        examples: &[ExampleValues],
        ai_examples: &[AiExampleValues],
        ai_menu: &[MenuItemValues],
    ) -> FormResult<Self> {
        config.check()?;
        let criteria = criteria
            .iter()
            .map(|values| Criterion::from_values(values, config.points_min, config.points_max))
            .collect::<FormResult<Vec<_>>>()?;
        let training = examples
            .iter()
            .map(|values| example_from_values(&criteria, values, &*catalog))
            .collect();
        let ai_list = ai_examples
            .iter()
            .map(|values| {
                let body = example_from_values(&criteria, &values.example, &*catalog);
                AiExample::loaded(values.identifier.clone(), values.label.as_str(), body)
            })
            .collect();
        let menu = ai_menu
            .iter()
            .map(|item| {
                let display = ai_examples
                    .iter()
                    .find(|example| example.identifier == item.identifier)
                    .map(|example| example.label.as_str())
                    .unwrap_or_default();
                match &item.identifier {
                    Some(name) => AiExampleMenuItem::named(name.as_str(), display),
                    None => AiExampleMenuItem::new(),
                }
            })
            .collect();

        Ok(Self::assemble(
            config,
            catalog,
            Container::load("criterion", criteria)?,
            Container::load("training_example", training)?,
            AiExamplePairs::load(ai_list, menu)?,
        ))
    }

    fn assemble(
        config: EditorConfig,
        catalog: Rc<dyn Translator>,
        criteria: Container<Criterion>,
        examples: Container<TrainingExample>,
        ai: AiExamplePairs,
    ) -> Self {
        let bus = Rc::new(NotificationBus::new());
        let examples = Rc::new(RefCell::new(examples));
        let ai = Rc::new(RefCell::new(ai));
        let listener = subscribe_examples_listener(&bus, &examples, &ai, catalog.clone());
        Self {
            config,
            catalog,
            bus,
            criteria,
            examples,
            ai,
            listener,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &dyn Translator {
        &*self.catalog
    }

    pub fn bus(&self) -> &NotificationBus {
        &self.bus
    }

    /// Listen to every notification the editor's items fire
    pub fn subscribe(&self, subscriber: impl Fn(&Notification) + 'static) -> SubscriptionId {
        self.bus.subscribe(subscriber)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        id != self.listener && self.bus.unsubscribe(id)
    }

    // ========================
    // Criteria and options
    // ========================

    pub fn criteria(&self) -> &[Criterion] {
        self.criteria.get_all_items()
    }

    pub fn criterion_mut(&mut self, index: usize) -> FormResult<&mut Criterion> {
        self.criteria.get_mut(index)
    }

    pub fn add_criterion(&mut self) -> String {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        let criterion = Criterion::new(
            self.config.default_feedback,
            self.config.points_min,
            self.config.points_max,
        );
        let added = self.criteria.add(criterion, &env);
        added.name().unwrap_or_default().to_string()
    }

    pub fn remove_criterion(&mut self, index: usize) -> FormResult<()> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        self.criteria.remove(index, &env).map(|_| ())
    }

    pub fn commit_criterion(&mut self, index: usize) -> FormResult<()> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        self.criteria.commit(index, &env)
    }

    pub fn add_option(&mut self, criterion: usize) -> FormResult<String> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        let option = self.criteria.get_mut(criterion)?.add_option(&env);
        Ok(option.name().unwrap_or_default().to_string())
    }

    pub fn remove_option(&mut self, criterion: usize, option: usize) -> FormResult<()> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        self.criteria
            .get_mut(criterion)?
            .remove_option(option, &env)
            .map(|_| ())
    }

    pub fn commit_option(&mut self, criterion: usize, option: usize) -> FormResult<()> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        self.criteria.get_mut(criterion)?.commit_option(option, &env)
    }

    /// Sum of each criterion's best option
    /// Out-of-range points are skipped
    pub fn total_points(&self) -> i64 {
        self.criteria()
            .iter()
            .filter_map(|criterion| {
                criterion
                    .options()
                    .iter()
                    .filter_map(RubricOption::points_in_range)
                    .max()
            })
            .fold(0i64, i64::saturating_add)
    }

    // ========================
    // Training examples
    // ========================

    /// New example with one empty dropdown per named criterion
    pub fn add_training_example(&mut self) -> usize {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        let selects = selects_for(self.criteria.get_all_items(), &*self.catalog);
        let mut examples = self.examples.borrow_mut();
        examples.add(TrainingExample::new(selects), &env);
        examples.len() - 1
    }

    pub fn remove_training_example(&mut self, index: usize) -> FormResult<()> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        self.examples.borrow_mut().remove(index, &env).map(|_| ())
    }

    /// Edit on the training example at `index` finalized
    pub fn commit_training_example(&mut self, index: usize) -> FormResult<()> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        self.examples.borrow_mut().commit(index, &env)
    }

    pub fn training_examples<R>(&self, f: impl FnOnce(&[TrainingExample]) -> R) -> R {
        f(self.examples.borrow().get_all_items())
    }

    pub fn update_training_example<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut TrainingExample) -> R,
    ) -> FormResult<R> {
        let mut examples = self.examples.borrow_mut();
        Ok(f(examples.get_mut(index)?))
    }

    // ========================
    // AI examples
    // ========================

    pub fn ai_examples<R>(&self, f: impl FnOnce(&AiExamplePairs) -> R) -> R {
        f(&self.ai.borrow())
    }

    pub fn add_ai_pair(&mut self) -> FormResult<String> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        let selects = selects_for(self.criteria.get_all_items(), &*self.catalog);
        self.ai.borrow_mut().add_pair(selects, &env)
    }

    pub fn remove_ai_pair(&mut self, name: &str) -> FormResult<()> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        self.ai.borrow_mut().remove_pair(name, &env)
    }

    pub fn select_ai_example(&mut self, name: &str) -> FormResult<()> {
        self.ai.borrow_mut().select(name)
    }

    pub fn update_ai_example<R>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut AiExample) -> R,
    ) -> FormResult<R> {
        let mut ai = self.ai.borrow_mut();
        Ok(f(ai.example_mut(name)?))
    }

    /// Edit on an AI example finalized; pushes its label to the menu
    pub fn commit_ai_example(&mut self, name: &str) -> FormResult<()> {
        let env = HandlerEnv::new(&*self.bus, &*self.catalog);
        let mut ai = self.ai.borrow_mut();
        let index = ai
            .examples()
            .iter()
            .position(|example| example.name() == Some(name))
            .ok_or_else(|| FormError::UnknownName("ai_example".to_string(), name.to_string()))?;
        ai.commit_example(index, &env)
    }

    // ========================
    // Validation and values
    // ========================

    /// Clear old marks, then validate every item in page order
    pub fn validate(&mut self) -> bool {
        self.clear_validation_errors();
        let criteria = self.criteria.validate_all();
        let training = self.examples.borrow_mut().validate_all();
        let ai = self.ai.borrow_mut().validate_all();
        criteria && training && ai
    }

    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = self.criteria.validation_errors();
        errors.extend(self.examples.borrow().validation_errors());
        errors.extend(self.ai.borrow().validation_errors());
        errors
    }

    pub fn clear_validation_errors(&mut self) {
        self.criteria.clear_validation_errors();
        self.examples.borrow_mut().clear_validation_errors();
        self.ai.borrow_mut().clear_validation_errors();
    }

    pub fn criteria_values(&self) -> Vec<CriterionValues> {
        self.criteria().iter().map(Criterion::values).collect()
    }

    pub fn training_values(&self) -> Vec<ExampleValues> {
        self.examples
            .borrow()
            .get_all_items()
            .iter()
            .map(TrainingExample::values)
            .collect()
    }

    pub fn ai_values(&self) -> Vec<AiExampleValues> {
        self.ai.borrow().values()
    }

    pub fn to_json(&self) -> FormResult<String> {
        let values = EditorValues {
            criteria: self.criteria_values(),
            training_examples: self.training_values(),
            ai_examples: self.ai_values(),
        };
        serde_json::to_string_pretty(&values).map_err(|e| FormError::Serialization(e.to_string()))
    }
}

impl std::fmt::Debug for RubricEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RubricEditor")
            .field("config", &self.config)
            .field("criteria", &self.criteria.len())
            .field("training_examples", &self.examples.borrow().len())
            .field("ai_examples", &self.ai.borrow().len())
            .finish()
    }
}

/// One empty dropdown per named criterion, listing its named options
fn selects_for(criteria: &[Criterion], catalog: &dyn Translator) -> Vec<CriterionSelect> {
    criteria
        .iter()
        .filter_map(|criterion| {
            let name = criterion.name()?;
            let mut select = CriterionSelect::new(name, criterion.label());
            for option in criterion.options() {
                if let Some(option_name) = option.name() {
                    select.upsert_choice(option_name, option.label(), option.points(), catalog);
                }
            }
            select.render_labels(catalog);
            Some(select)
        })
        .collect()
}

/// Example already on the page, dropdowns built from the loaded rubric
fn example_from_values(
    criteria: &[Criterion],
    values: &ExampleValues,
    catalog: &dyn Translator,
) -> TrainingExample {
    let mut example = TrainingExample::new(selects_for(criteria, catalog));
    example.set_answer(values.answer.as_str());
    for selected in &values.options_selected {
        if !example.select_option(&selected.criterion, &selected.option) {
            log::warn!(
                "[editor] dropped selection {:?} for criterion {:?}",
                selected.option,
                selected.criterion
            );
        }
    }
    example
}

/// Keep one example's dropdowns in step with a rubric notification
fn sync_example(example: &mut TrainingExample, notification: &Notification, catalog: &dyn Translator) {
    match notification {
        Notification::OptionAdd {
            criterion_name,
            criterion_label,
            name,
            label,
            points,
        } => {
            let select = example.ensure_criterion(criterion_name, criterion_label);
            select.upsert_choice(name, label, *points, catalog);
            select.render_labels(catalog);
        }
        Notification::OptionRemove {
            criterion_name,
            name,
        } => {
            if let Some(select) = example.select_mut(criterion_name) {
                select.remove_choice(name);
            }
        }
        Notification::OptionUpdated {
            criterion_name,
            name,
            label,
            points,
        } => {
            if let Some(select) = example.select_mut(criterion_name) {
                if select.choices().iter().any(|choice| &choice.value == name) {
                    select.upsert_choice(name, label, *points, catalog);
                }
            }
        }
        Notification::CriterionUpdated {
            criterion_name,
            criterion_label,
        } => {
            if let Some(select) = example.select_mut(criterion_name) {
                select.set_label(criterion_label.as_str());
            }
        }
        Notification::CriterionRemove { criterion_name } => {
            example.remove_criterion(criterion_name);
        }
    }
}

fn subscribe_examples_listener(
    bus: &NotificationBus,
    examples: &SharedExamples,
    ai: &SharedPairs,
    catalog: Rc<dyn Translator>,
) -> SubscriptionId {
    let examples = Rc::downgrade(examples);
    let ai = Rc::downgrade(ai);
    bus.subscribe(move |notification| {
        let (Some(examples), Some(ai)) = (examples.upgrade(), ai.upgrade()) else {
            return;
        };
        let (Ok(mut examples), Ok(mut ai)) = (examples.try_borrow_mut(), ai.try_borrow_mut())
        else {
            log::warn!(
                "[editor] examples busy, {} not applied",
                notification.event_name()
            );
            return;
        };
        for example in examples.get_all_items_mut() {
            sync_example(example, notification, &*catalog);
        }
        for example in ai.examples_mut() {
            sync_example(example.example_mut(), notification, &*catalog);
        }
    })
}

//! Training Example
//!
//! A sample answer with one option chosen per criterion. Refers to
//! criteria and options by identifier only.

use serde::{Deserialize, Serialize};

use crate::field::StringField;
use crate::format::format_option_label;
use crate::i18n::Translator;
use crate::item::{FieldValues, HandlerEnv, Item};
use crate::naming::SiblingNames;

/// One entry of a criterion dropdown. Value "" is the "not selected" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChoice {
    pub value: String,
    pub label: String,
    pub points: Option<i64>,
    pub display: String,
}

impl SelectChoice {
    pub fn not_selected() -> Self {
        Self::new("", "", None)
    }

    pub fn new(value: impl Into<String>, label: impl Into<String>, points: Option<i64>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            points,
            display: String::new(),
        }
    }

    pub fn render(&mut self, catalog: &dyn Translator) {
        self.display = format_option_label(self.points, &self.label, &self.value, catalog);
    }
}

/// Dropdown choosing one option of one criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionSelect {
    criterion: String,
    label: String,
    choices: Vec<SelectChoice>,
    selected: String,
    marked: bool,
}

impl CriterionSelect {
    pub fn new(criterion: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            criterion: criterion.into(),
            label: label.into(),
            choices: vec![SelectChoice::not_selected()],
            selected: String::new(),
            marked: false,
        }
    }

    pub fn criterion(&self) -> &str {
        &self.criterion
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn choices(&self) -> &[SelectChoice] {
        &self.choices
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Choose a value; unknown values are refused
    pub fn select(&mut self, value: &str) -> bool {
        if self.choices.iter().any(|choice| choice.value == value) {
            self.selected = value.to_string();
            true
        } else {
            false
        }
    }

    /// Insert or refresh the choice for option `value`
    pub fn upsert_choice(
        &mut self,
        value: &str,
        label: &str,
        points: Option<i64>,
        catalog: &dyn Translator,
    ) {
        let index = match self.choices.iter().position(|choice| choice.value == value) {
            Some(index) => {
                let choice = &mut self.choices[index];
                choice.label = label.to_string();
                choice.points = points;
                index
            }
            None => {
                self.choices.push(SelectChoice::new(value, label, points));
                self.choices.len() - 1
            }
        };
        self.choices[index].render(catalog);
    }

    /// Drop option `value`; clears the selection if it pointed there
    pub fn remove_choice(&mut self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        let before = self.choices.len();
        self.choices.retain(|choice| choice.value != value);
        if self.selected == value {
            self.selected.clear();
        }
        self.choices.len() != before
    }

    pub fn render_labels(&mut self, catalog: &dyn Translator) {
        self.choices.iter_mut().for_each(|choice| choice.render(catalog));
    }

    pub fn validate(&mut self) -> bool {
        self.marked = self.selected.is_empty();
        !self.marked
    }

    pub fn clear_validation_errors(&mut self) {
        self.marked = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub criterion: String,
    pub option: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleValues {
    pub answer: String,
    pub options_selected: Vec<SelectedOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingExample {
    answer: StringField,
    selects: Vec<CriterionSelect>,
}

impl TrainingExample {
    pub fn new(selects: Vec<CriterionSelect>) -> Self {
        Self {
            answer: StringField::default(),
            selects,
        }
    }

    pub fn values(&self) -> ExampleValues {
        ExampleValues {
            answer: self.answer().to_string(),
            options_selected: self
                .selects
                .iter()
                .map(|select| SelectedOption {
                    criterion: select.criterion.clone(),
                    option: select.selected.clone(),
                })
                .collect(),
        }
    }

    pub fn answer(&self) -> &str {
        self.answer.get()
    }

    pub fn set_answer(&mut self, answer: impl Into<String>) {
        self.answer.set(answer);
    }

    pub fn selects(&self) -> &[CriterionSelect] {
        &self.selects
    }

    pub fn select_mut(&mut self, criterion: &str) -> Option<&mut CriterionSelect> {
        self.selects.iter_mut().find(|select| select.criterion == criterion)
    }

    /// Pick `option` for `criterion`; false if either is unknown
    pub fn select_option(&mut self, criterion: &str, option: &str) -> bool {
        self.select_mut(criterion)
            .map(|select| select.select(option))
            .unwrap_or(false)
    }

    /// Dropdown for `criterion`, created at the end if missing
    pub fn ensure_criterion(&mut self, criterion: &str, label: &str) -> &mut CriterionSelect {
        let index = match self.selects.iter().position(|s| s.criterion == criterion) {
            Some(index) => index,
            None => {
                self.selects.push(CriterionSelect::new(criterion, label));
                self.selects.len() - 1
            }
        };
        &mut self.selects[index]
    }

    pub fn remove_criterion(&mut self, criterion: &str) -> bool {
        let before = self.selects.len();
        self.selects.retain(|select| select.criterion != criterion);
        self.selects.len() != before
    }

    pub fn render_labels(&mut self, catalog: &dyn Translator) {
        self.selects
            .iter_mut()
            .for_each(|select| select.render_labels(catalog));
    }

    /// Marks every empty dropdown
    pub(crate) fn validate_selects(&mut self) -> bool {
        self.selects
            .iter_mut()
            .fold(true, |valid, select| select.validate() && valid)
    }

    /// One message per currently marked dropdown
    pub(crate) fn select_errors(&self) -> Vec<String> {
        self.selects
            .iter()
            .filter(|select| select.marked)
            .map(|_| "Training example option selection is required.".to_string())
            .collect()
    }

    pub(crate) fn clear_select_errors(&mut self) {
        self.selects
            .iter_mut()
            .for_each(CriterionSelect::clear_validation_errors);
    }
}

impl Item for TrainingExample {
    fn field_values(&self) -> FieldValues {
        FieldValues::TrainingExample(self.values())
    }

    fn add_handler(&mut self, _names: &mut SiblingNames, env: &HandlerEnv<'_>) {
        self.render_labels(env.catalog);
    }

    fn validate(&mut self) -> bool {
        self.validate_selects()
    }

    fn validation_errors(&self) -> Vec<String> {
        self.select_errors()
    }

    fn clear_validation_errors(&mut self) {
        self.clear_select_errors();
    }
}

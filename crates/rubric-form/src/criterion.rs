//! Rubric Criterion
//!
//! Composite item: its own label/prompt/feedback plus an owned, ordered
//! container of options. Removing a criterion drops its options with it.

use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::error::FormResult;
use crate::field::StringField;
use crate::item::{FieldValues, HandlerEnv, Item, ParentRef};
use crate::naming::SiblingNames;
use crate::notify::Notification;
use crate::option::{OptionValues, RubricOption};

/// Whether learners may or must leave written feedback on a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    #[default]
    Disabled,
    Optional,
    Required,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Disabled => "disabled",
            Feedback::Optional => "optional",
            Feedback::Required => "required",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "optional" => Feedback::Optional,
            "required" => Feedback::Required,
            _ => Feedback::Disabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub label: String,
    pub prompt: String,
    pub feedback: Feedback,
    pub options: Vec<OptionValues>,
}

#[derive(Debug, Clone)]
pub struct Criterion {
    name: Option<String>,
    label: StringField,
    prompt: StringField,
    prompt_marked: bool,
    feedback: Feedback,
    options: Container<RubricOption>,
    points_bounds: (i64, i64),
}

impl Criterion {
    pub fn new(feedback: Feedback, points_min: i64, points_max: i64) -> Self {
        Self {
            name: None,
            label: StringField::default(),
            prompt: StringField::default(),
            prompt_marked: false,
            feedback,
            options: Container::new("option"),
            points_bounds: (points_min, points_max),
        }
    }

    /// Criterion already on the page, with its options
    pub fn from_values(
        values: &CriterionValues,
        points_min: i64,
        points_max: i64,
    ) -> FormResult<Self> {
        let options = values
            .options
            .iter()
            .map(|option| RubricOption::from_values(option, points_min, points_max))
            .collect();
        Ok(Self {
            name: values.name.clone(),
            label: StringField::new(values.label.as_str()),
            prompt: StringField::new(values.prompt.as_str()),
            prompt_marked: false,
            feedback: values.feedback,
            options: Container::load("option", options)?,
            points_bounds: (points_min, points_max),
        })
    }

    pub fn values(&self) -> CriterionValues {
        CriterionValues {
            name: self.name.clone(),
            label: self.label().to_string(),
            prompt: self.prompt().to_string(),
            feedback: self.feedback,
            options: self.options.get_all_items().iter().map(RubricOption::values).collect(),
        }
    }

    pub fn label(&self) -> &str {
        self.label.get()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label.set(label);
    }

    pub fn prompt(&self) -> &str {
        self.prompt.get()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt.set(prompt);
    }

    pub fn prompt_marked(&self) -> bool {
        self.prompt_marked
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = feedback;
    }

    pub fn options(&self) -> &[RubricOption] {
        self.options.get_all_items()
    }

    pub fn option_mut(&mut self, index: usize) -> FormResult<&mut RubricOption> {
        self.options.get_mut(index)
    }

    fn parent_ref(&self) -> ParentRef {
        ParentRef {
            name: self.name.clone(),
            label: self.label().to_string(),
        }
    }

    /// Add a blank option; fires `optionAdd` through the option's hook
    pub fn add_option(&mut self, env: &HandlerEnv<'_>) -> &mut RubricOption {
        let (min, max) = self.points_bounds;
        let parent = self.parent_ref();
        let env = env.with_parent(&parent);
        self.options.add(RubricOption::new(min, max), &env)
    }

    pub fn remove_option(&mut self, index: usize, env: &HandlerEnv<'_>) -> FormResult<RubricOption> {
        let parent = self.parent_ref();
        self.options.remove(index, &env.with_parent(&parent))
    }

    /// Edit on the option at `index` finalized
    pub fn commit_option(&mut self, index: usize, env: &HandlerEnv<'_>) -> FormResult<()> {
        let parent = self.parent_ref();
        self.options.commit(index, &env.with_parent(&parent))
    }
}

impl Item for Criterion {
    fn field_values(&self) -> FieldValues {
        FieldValues::Criterion(self.values())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn add_handler(&mut self, names: &mut SiblingNames, _env: &HandlerEnv<'_>) {
        self.name = Some(names.claim());
    }

    fn remove_handler(&mut self, env: &HandlerEnv<'_>) {
        if let Some(criterion_name) = self.name.clone() {
            env.notifier
                .notification_fired(&Notification::CriterionRemove { criterion_name });
        }
    }

    fn update_handler(&mut self, env: &HandlerEnv<'_>) {
        // A commit can arrive before add_handler has named the criterion
        let Some(criterion_name) = self.name.clone() else {
            log::warn!("[criterion] update ignored, no name assigned yet");
            return;
        };
        env.notifier.notification_fired(&Notification::CriterionUpdated {
            criterion_name,
            criterion_label: self.label().to_string(),
        });
    }

    fn validate(&mut self) -> bool {
        self.prompt_marked = self.prompt().is_empty();
        let options_valid = self.options.validate_all();
        !self.prompt_marked && options_valid
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.prompt_marked {
            errors.push("Criterion prompt is invalid.".to_string());
        }
        errors.extend(self.options.validation_errors());
        errors
    }

    fn clear_validation_errors(&mut self) {
        self.prompt_marked = false;
        self.options.clear_validation_errors();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EnglishCatalog;
    use crate::notify::RecordingNotifier;

    fn named_criterion(name: &str) -> Criterion {
        let mut criterion = Criterion::new(Feedback::Disabled, 0, 999);
        criterion.name = Some(name.to_string());
        criterion
    }

    #[test]
    fn test_empty_prompt_is_invalid() {
        let mut criterion = named_criterion("0");
        criterion.set_prompt("");
        assert!(!criterion.validate());
        assert!(criterion.prompt_marked());
        assert!(criterion
            .validation_errors()
            .contains(&"Criterion prompt is invalid.".to_string()));
    }

    #[test]
    fn test_all_options_checked() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut criterion = named_criterion("0");
        criterion.set_prompt("How original is it?");
        criterion.add_option(&env).set_points(1000);
        criterion.add_option(&env).set_points(-1);
        criterion.add_option(&env).set_points(5);

        assert!(!criterion.validate());
        assert_eq!(
            criterion.validation_errors(),
            vec!["Option points are invalid", "Option points are invalid"]
        );

        criterion.clear_validation_errors();
        assert!(criterion.validation_errors().is_empty());
    }

    #[test]
    fn test_values_include_options_in_order() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut criterion = named_criterion("3");
        criterion.set_label("Ideas");
        criterion.set_prompt("Prompt");
        criterion.set_feedback(Feedback::Required);
        criterion.add_option(&env).set_label("Poor");
        criterion.add_option(&env).set_label("Good");

        let values = criterion.values();
        assert_eq!(values.name.as_deref(), Some("3"));
        assert_eq!(values.label, "Ideas");
        assert_eq!(values.feedback, Feedback::Required);
        let labels: Vec<_> = values.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Poor", "Good"]);
    }

    #[test]
    fn test_option_add_carries_criterion_identity() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut criterion = named_criterion("1");
        criterion.set_label("Form");
        criterion.add_option(&env);

        match &notifier.fired()[0] {
            Notification::OptionAdd {
                criterion_name,
                criterion_label,
                name,
                ..
            } => {
                assert_eq!(criterion_name, "1");
                assert_eq!(criterion_label, "Form");
                assert_eq!(name, "0");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_update_before_add_is_ignored() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut criterion = Criterion::new(Feedback::Disabled, 0, 999);
        criterion.update_handler(&env);
        assert!(notifier.fired().is_empty());

        let mut names = SiblingNames::new();
        criterion.add_handler(&mut names, &env);
        criterion.set_label("Clarity");
        criterion.update_handler(&env);
        assert_eq!(
            notifier.fired(),
            vec![Notification::CriterionUpdated {
                criterion_name: "0".to_string(),
                criterion_label: "Clarity".to_string(),
            }]
        );
    }

    #[test]
    fn test_feedback_strings() {
        assert_eq!(Feedback::from_str("required"), Feedback::Required);
        assert_eq!(Feedback::from_str("bogus"), Feedback::Disabled);
        assert_eq!(Feedback::Optional.as_str(), "optional");
    }

    #[test]
    fn test_from_values_rejects_duplicate_option_names() {
        let option = OptionValues {
            name: Some("0".to_string()),
            label: "Poor".to_string(),
            points: Some(0),
            explanation: String::new(),
        };
        let values = CriterionValues {
            name: Some("0".to_string()),
            label: "Ideas".to_string(),
            prompt: "Prompt".to_string(),
            feedback: Feedback::Disabled,
            options: vec![option.clone(), option],
        };
        let err = Criterion::from_values(&values, 0, 999).unwrap_err();
        assert_eq!(
            err,
            crate::error::FormError::DuplicateName("option".to_string(), "0".to_string())
        );
    }
}

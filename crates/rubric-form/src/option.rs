//! Criterion Option
//!
//! A point-valued choice inside one criterion.

use serde::{Deserialize, Serialize};

use crate::field::{IntField, StringField};
use crate::item::{FieldValues, HandlerEnv, Item};
use crate::naming::SiblingNames;
use crate::notify::Notification;

/// Exported option values. `name` is absent until one has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub label: String,
    pub points: Option<i64>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RubricOption {
    name: Option<String>,
    label: StringField,
    points: IntField,
    explanation: StringField,
}

impl RubricOption {
    /// New, unnamed option with points bounded by `[min, max]`
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            name: None,
            label: StringField::default(),
            points: IntField::with_value(min, max, min),
            explanation: StringField::default(),
        }
    }

    /// Option that already has an identifier (page load)
    pub fn named(name: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(min, max)
        }
    }

    pub fn from_values(values: &OptionValues, min: i64, max: i64) -> Self {
        let mut option = Self::new(min, max);
        option.name = values.name.clone();
        option.label.set(values.label.as_str());
        match values.points {
            Some(points) => option.points.set(points),
            None => option.points.set_raw(""),
        }
        option.explanation.set(values.explanation.as_str());
        option
    }

    pub fn values(&self) -> OptionValues {
        OptionValues {
            name: self.name.clone(),
            label: self.label().to_string(),
            points: self.points(),
            explanation: self.explanation().to_string(),
        }
    }

    pub fn label(&self) -> &str {
        self.label.get()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label.set(label);
    }

    pub fn points(&self) -> Option<i64> {
        self.points.get()
    }

    pub fn set_points(&mut self, points: i64) {
        self.points.set(points);
    }

    /// Points, only if they parse and lie within the bounds
    pub fn points_in_range(&self) -> Option<i64> {
        let (min, max) = self.points.bounds();
        self.points().filter(|points| (min..=max).contains(points))
    }

    /// Raw text from the points input; may not be numeric
    pub fn set_points_raw(&mut self, raw: impl Into<String>) {
        self.points.set_raw(raw);
    }

    pub fn points_raw(&self) -> &str {
        self.points.raw()
    }

    pub fn points_marked(&self) -> bool {
        self.points.is_marked()
    }

    pub fn explanation(&self) -> &str {
        self.explanation.get()
    }

    pub fn set_explanation(&mut self, explanation: impl Into<String>) {
        self.explanation.set(explanation);
    }

    fn criterion_name<'e>(&self, env: &'e HandlerEnv<'_>) -> Option<&'e str> {
        env.parent.and_then(|parent| parent.name.as_deref())
    }
}

impl Item for RubricOption {
    fn field_values(&self) -> FieldValues {
        FieldValues::Option(self.values())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn add_handler(&mut self, names: &mut SiblingNames, env: &HandlerEnv<'_>) {
        let name = names.claim();
        self.name = Some(name.clone());

        let Some(parent) = env.parent else {
            log::warn!("[option] {} added outside a criterion", name);
            return;
        };
        let Some(criterion_name) = parent.name.clone() else {
            log::warn!("[option] {} added to an unnamed criterion", name);
            return;
        };
        env.notifier.notification_fired(&Notification::OptionAdd {
            criterion_name,
            criterion_label: parent.label.clone(),
            name,
            label: self.label().to_string(),
            points: self.points(),
        });
    }

    fn remove_handler(&mut self, env: &HandlerEnv<'_>) {
        if let (Some(criterion_name), Some(name)) = (self.criterion_name(env), self.name.clone()) {
            env.notifier.notification_fired(&Notification::OptionRemove {
                criterion_name: criterion_name.to_string(),
                name,
            });
        }
    }

    fn update_handler(&mut self, env: &HandlerEnv<'_>) {
        if let (Some(criterion_name), Some(name)) = (self.criterion_name(env), self.name.clone()) {
            env.notifier.notification_fired(&Notification::OptionUpdated {
                criterion_name: criterion_name.to_string(),
                name,
                label: self.label().to_string(),
                points: self.points(),
            });
        } else {
            log::warn!("[option] update before a name was assigned");
        }
    }

    fn validate(&mut self) -> bool {
        self.points.validate()
    }

    fn validation_errors(&self) -> Vec<String> {
        if self.points.is_marked() {
            vec!["Option points are invalid".to_string()]
        } else {
            Vec::new()
        }
    }

    fn clear_validation_errors(&mut self) {
        self.points.clear_validation_errors();
    }
}

//! Form Fields
//!
//! Uniform get/set over a backing form value. Integer fields carry an
//! inclusive range and an error mark.

/// Free-text field, no validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringField {
    value: String,
}

impl StringField {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// Integer field backed by raw text, checked against `[min, max]`.
///
/// The raw text may be anything the user typed; `get` returns `None`
/// when it does not parse. Call `validate` before trusting `get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntField {
    raw: String,
    min: i64,
    max: i64,
    marked: bool,
}

impl IntField {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            raw: String::new(),
            min,
            max,
            marked: false,
        }
    }

    pub fn with_value(min: i64, max: i64, value: i64) -> Self {
        let mut field = Self::new(min, max);
        field.set(value);
        field
    }

    pub fn get(&self) -> Option<i64> {
        self.raw.trim().parse().ok()
    }

    pub fn set(&mut self, value: i64) {
        self.raw = value.to_string();
    }

    /// Overwrite with whatever text the input currently holds
    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// True iff the value parses and lies within the bounds. Marks the
    /// field on failure and unmarks it on success.
    pub fn validate(&mut self) -> bool {
        let valid = matches!(self.get(), Some(n) if n >= self.min && n <= self.max);
        self.marked = !valid;
        valid
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn clear_validation_errors(&mut self) {
        self.marked = false;
    }
}

//! Option Label Formatting

use crate::i18n::{interpolate, Translator};

/// Display text for a choice in an option dropdown.
///
/// Value "" is the "not selected" sentinel. Without a numeric point value
/// only the label is shown.
pub fn format_option_label(
    points: Option<i64>,
    label: &str,
    value: &str,
    catalog: &dyn Translator,
) -> String {
    if value.is_empty() {
        return catalog.gettext("Not Selected");
    }
    let Some(points) = points else {
        return label.to_string();
    };
    let label = if label.is_empty() {
        catalog.gettext("Unnamed Option")
    } else {
        label.to_string()
    };
    let template = catalog.ngettext(
        "{label} - {points} point",
        "{label} - {points} points",
        points,
    );
    interpolate(&template, &[("label", &label), ("points", &points.to_string())])
}

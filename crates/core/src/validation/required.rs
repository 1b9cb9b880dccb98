//! Required-field presence check over raw form values.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Labels for field names whose mechanical title-casing reads badly.
const KNOWN_FIELD_LABELS: &[(&str, &str)] = &[
    ("tour_id", "Tour"),
    ("aadhaar_number", "Aadhaar number"),
    ("pan_number", "PAN"),
    ("date_of_birth", "Date of birth"),
    ("pincode", "PIN code"),
];

/// Convert a field name to a human-readable label.
///
/// Looks up known names first; falls back to replacing underscores with
/// spaces and capitalizing the first letter.
pub fn field_label(name: &str) -> String {
    for &(k, label) in KNOWN_FIELD_LABELS {
        if k == name {
            return label.to_string();
        }
    }
    let mut chars = name.replace('_', " ").chars().collect::<Vec<_>>();
    if let Some(first) = chars.first_mut() {
        *first = first.to_uppercase().next().unwrap_or(*first);
    }
    chars.into_iter().collect()
}

/// Whether a form value counts as absent: missing, null, or a blank string.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

/// Return `field -> message` for every name in `required` that is absent
/// from `values`. Empty when all required fields are present.
///
/// Fields not listed in `required` are never reported.
pub fn validate_required_fields(
    values: &Map<String, Value>,
    required: &[&str],
) -> BTreeMap<String, String> {
    required
        .iter()
        .filter(|name| is_blank(values.get(**name)))
        .map(|name| (name.to_string(), format!("{} is required", field_label(name))))
        .collect()
}

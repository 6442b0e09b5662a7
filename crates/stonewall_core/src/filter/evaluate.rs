//! Filter predicate over features.
//!
//! A feature matches when every non-empty criteria component holds:
//! - text: the lowercased attribute blob contains the lowercased query;
//! - wall type / vegetation: exact equality with the feature's value.
//!
//! Absent attributes contribute nothing to the blob and never equal a
//! non-empty selector.

use crate::model::criteria::FilterCriteria;
use crate::model::feature::Feature;
use serde_json::{Number, Value};

/// Returns the matching features in input order.
pub fn evaluate<'a, I>(features: I, criteria: &FilterCriteria) -> Vec<&'a Feature>
where
    I: IntoIterator<Item = &'a Feature>,
{
    let query = criteria.text.to_lowercase();
    features
        .into_iter()
        .filter(|feature| matches_lowered(feature, &query, criteria))
        .collect()
}

/// Single-feature form of [`evaluate`].
pub fn matches(feature: &Feature, criteria: &FilterCriteria) -> bool {
    matches_lowered(feature, &criteria.text.to_lowercase(), criteria)
}

fn matches_lowered(feature: &Feature, query: &str, criteria: &FilterCriteria) -> bool {
    if !query.is_empty() && !search_blob(feature).contains(query) {
        return false;
    }
    if !criteria.wall_type.is_empty() && feature.wall_type() != Some(criteria.wall_type.as_str())
    {
        return false;
    }
    if !criteria.vegetation.is_empty()
        && feature.vegetation_cover() != Some(criteria.vegetation.as_str())
    {
        return false;
    }
    true
}

/// Lowercased, space-joined text of every attribute value.
///
/// Lists are flattened in place; `null` and nested objects contribute an
/// empty segment.
pub fn search_blob(feature: &Feature) -> String {
    let mut parts = Vec::with_capacity(feature.properties().len());
    for value in feature.properties().values() {
        push_value_text(value, &mut parts);
    }
    parts.join(" ").to_lowercase()
}

fn push_value_text(value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::String(text) => parts.push(text.clone()),
        Value::Number(number) => parts.push(number_text(number)),
        Value::Bool(flag) => parts.push(flag.to_string()),
        Value::Array(items) => {
            for item in items {
                push_value_text(item, parts);
            }
        }
        Value::Null | Value::Object(_) => parts.push(String::new()),
    }
}

/// Number text as a browser would print it: whole floats drop the `.0`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            if value == 0.0 {
                "0".to_string()
            } else {
                format!("{value:.0}")
            }
        }
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, matches, search_blob};
    use crate::model::criteria::FilterCriteria;
    use crate::model::feature::{EntryId, Feature};
    use serde_json::json;

    fn feature(id: &str, properties: serde_json::Value) -> Feature {
        Feature::new(
            EntryId::new(id),
            None,
            properties.as_object().cloned().unwrap(),
        )
    }

    #[test]
    fn blob_flattens_lists_and_lowercases() {
        let f = feature(
            "e1",
            json!({
                "entry_id": "e1",
                "Stone_Shape": ["Round", "Flat"],
                "Surveyor_Name": "Ada LOVELACE",
                "Photo_URL": null,
                "count": 3
            }),
        );
        assert_eq!(search_blob(&f), "e1 round flat ada lovelace  3");
    }

    #[test]
    fn whole_floats_render_without_fraction() {
        let f = feature(
            "e2",
            json!({ "Length_m": 41.0, "Height_m": 1.25, "Zero": -0.0, "Stones": 12 }),
        );
        assert_eq!(search_blob(&f), "41 1.25 0 12");
        assert!(matches(&f, &FilterCriteria::default().with_text("41 1.25")));
        assert!(!matches(&f, &FilterCriteria::default().with_text("41.0")));
    }

    #[test]
    fn text_query_is_case_insensitive_and_spans_list_items() {
        let f = feature("e1", json!({ "Stone_Shape": ["Round", "Flat"] }));
        assert!(matches(&f, &FilterCriteria::default().with_text("ROUND FL")));
        assert!(!matches(&f, &FilterCriteria::default().with_text("square")));
    }

    #[test]
    fn categorical_selectors_are_exact_and_absent_values_never_match() {
        let typed = feature("a", json!({ "Wall_Type": "Dry Stone" }));
        let untyped = feature("b", json!({}));

        let exact = FilterCriteria::default().with_wall_type("Dry Stone");
        let lower = FilterCriteria::default().with_wall_type("dry stone");

        assert!(matches(&typed, &exact));
        assert!(!matches(&typed, &lower));
        assert!(!matches(&untyped, &exact));
    }

    #[test]
    fn evaluate_preserves_input_order() {
        let features = vec![
            feature("c", json!({ "Wall_Type": "Dry Stone" })),
            feature("a", json!({ "Wall_Type": "Mortared" })),
            feature("b", json!({ "Wall_Type": "Dry Stone" })),
        ];
        let result = evaluate(&features, &FilterCriteria::default().with_wall_type("Dry Stone"));
        let ids = result
            .iter()
            .map(|f| f.entry_id().as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["c", "b"]);
    }
}

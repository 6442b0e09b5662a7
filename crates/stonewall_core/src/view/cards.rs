//! Recent-entry cards.

use super::NOT_GIVEN;
use crate::model::feature::{EntryId, Feature};
use crate::recent::{created_at, format_created_at};

/// One card in the recent-entries list. Selecting it focuses `entry_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntryCard {
    pub entry_id: EntryId,
    pub date_label: String,
    pub summary: String,
    pub collected_by: String,
}

impl RecentEntryCard {
    pub fn from_feature(feature: &Feature) -> Self {
        let summary = format!(
            "{} in {} condition under {} herbaceous cover.",
            feature.wall_type().unwrap_or(NOT_GIVEN),
            feature.wall_condition().unwrap_or(NOT_GIVEN).to_lowercase(),
            feature.vegetation_cover().unwrap_or(NOT_GIVEN).to_lowercase()
        );
        let collected_by = match feature.surveyor_name() {
            Some(name) => format!("Collected by {name}"),
            None => "Anonymous submission".to_string(),
        };

        Self {
            entry_id: feature.entry_id().clone(),
            date_label: format_created_at(created_at(feature)),
            summary,
            collected_by,
        }
    }
}

/// Cards for already-ordered recent features.
pub fn recent_entry_cards<'a, I>(features: I) -> Vec<RecentEntryCard>
where
    I: IntoIterator<Item = &'a Feature>,
{
    features
        .into_iter()
        .map(RecentEntryCard::from_feature)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::RecentEntryCard;
    use crate::model::feature::{EntryId, Feature};
    use crate::recent::INVALID_DATE_LABEL;
    use serde_json::json;

    fn feature(properties: serde_json::Value) -> Feature {
        Feature::new(
            EntryId::new("card"),
            None,
            properties.as_object().cloned().unwrap(),
        )
    }

    #[test]
    fn summary_lowercases_condition_and_cover() {
        let card = RecentEntryCard::from_feature(&feature(json!({
            "Wall_Type": "Dry Stone",
            "Wall_Condition": "Good",
            "Vegetation_Cover": "Clear (0-25% covered)",
            "Surveyor_Name": "M. Oliver",
            "created_at": "2025-06-01T14:03:22Z"
        })));
        assert_eq!(
            card.summary,
            "Dry Stone in good condition under clear (0-25% covered) herbaceous cover."
        );
        assert_eq!(card.collected_by, "Collected by M. Oliver");
        assert_eq!(card.date_label, "6/1/2025, 2:03:22 PM");
    }

    #[test]
    fn missing_values_degrade_without_failing() {
        let card = RecentEntryCard::from_feature(&feature(json!({ "created_at": "soon" })));
        assert_eq!(
            card.summary,
            "Not given in not given condition under not given herbaceous cover."
        );
        assert_eq!(card.collected_by, "Anonymous submission");
        assert_eq!(card.date_label, INVALID_DATE_LABEL);
    }
}

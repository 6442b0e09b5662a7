//! Dropdown options and the entry count label.

use serde::Serialize;

pub const ANY_WALL_TYPE: &str = "(Any wall type)";
pub const ANY_VEGETATION: &str = "(Any vegetation)";

/// One `<option>`; an empty `value` means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    fn of(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

fn options(placeholder: &str, values: &[String]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(placeholder))
        .chain(values.iter().map(|value| SelectOption::of(value)))
        .collect()
}

pub fn wall_type_options(wall_types: &[String]) -> Vec<SelectOption> {
    options(ANY_WALL_TYPE, wall_types)
}

pub fn vegetation_options(vegetation: &[String]) -> Vec<SelectOption> {
    options(ANY_VEGETATION, vegetation)
}

/// `"(<shown> out of <total>)"` header for the recent-entries list.
pub fn entry_count_label(shown: usize, total: usize) -> String {
    format!("({} out of {})", shown.min(total), total)
}

#[cfg(test)]
mod tests {
    use super::{entry_count_label, vegetation_options, wall_type_options, ANY_WALL_TYPE};

    #[test]
    fn options_start_with_empty_placeholder() {
        let options = wall_type_options(&["Dry Stone".to_string()]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, ANY_WALL_TYPE);
        assert_eq!(options[1].value, "Dry Stone");

        assert_eq!(vegetation_options(&[]).len(), 1);
    }

    #[test]
    fn count_label_never_exceeds_total() {
        assert_eq!(entry_count_label(10, 42), "(10 out of 42)");
        assert_eq!(entry_count_label(10, 3), "(3 out of 3)");
    }
}

//! Common display utilities and helpers

use crate::models::raw::ResourceLabel;

/// Placeholder for empty cells
pub const EMPTY_CELL: &str = "--";

/// Return `value`, or `--` when it is empty
pub fn or_dash(value: &str) -> String {
    if value.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}

/// Render labels as `name:value` pairs separated by commas
pub fn format_labels(labels: &[ResourceLabel]) -> String {
    if labels.is_empty() {
        return EMPTY_CELL.to_string();
    }

    labels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "--");
        assert_eq!(or_dash("value"), "value");
    }

    #[test]
    fn test_format_labels() {
        let labels = vec![
            ResourceLabel::new("env", "prod"),
            ResourceLabel::new("icon", "slack"),
        ];
        assert_eq!(format_labels(&labels), "env:prod, icon:slack");
        assert_eq!(format_labels(&[]), "--");
    }
}

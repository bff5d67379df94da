//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, Width, object::Rows},
};

/// Widest a single cell may grow before wrapping
const MAX_CELL_WIDTH: usize = 60;

/// Format rows as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No records found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(MAX_CELL_WIDTH)))
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "NAME")]
        name: String,
        #[tabled(rename = "LABELS")]
        labels: String,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<TestRow> = vec![];
        assert_eq!(format_table(&rows), "No records found.");
    }

    #[test]
    fn test_format_table_rows() {
        let rows = vec![
            TestRow {
                name: "grafana".to_string(),
                labels: "env:prod".to_string(),
            },
            TestRow {
                name: "jenkins".to_string(),
                labels: "--".to_string(),
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("NAME"));
        assert!(result.contains("grafana"));
        assert!(result.contains("jenkins"));
        assert!(result.contains("╭"));
    }

    #[test]
    fn test_long_cells_wrap() {
        let rows = vec![TestRow {
            name: "x".to_string(),
            labels: "a".repeat(MAX_CELL_WIDTH * 2),
        }];

        let result = format_table(&rows);

        assert!(!result.contains(&"a".repeat(MAX_CELL_WIDTH + 1)));
    }
}

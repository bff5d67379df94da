//! Pretty (human-oriented) output formatting

/// Types that render as a multi-line block in pretty output
pub trait PrettyPrint {
    fn pretty(&self) -> String;
}

/// Render each item as a block, separated by blank lines
pub fn format_pretty<T: PrettyPrint>(items: &[T]) -> String {
    if items.is_empty() {
        return "No records found.".to_string();
    }

    items
        .iter()
        .map(PrettyPrint::pretty)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    impl PrettyPrint for Item {
        fn pretty(&self) -> String {
            format!("item {}", self.0)
        }
    }

    #[test]
    fn test_format_pretty_empty() {
        let items: Vec<Item> = vec![];
        assert_eq!(format_pretty(&items), "No records found.");
    }

    #[test]
    fn test_format_pretty_separates_blocks() {
        let items = vec![Item("a"), Item("b")];
        assert_eq!(format_pretty(&items), "item a\n\nitem b");
    }
}

//! Input argument types for list commands

use clap::Args;

/// Where to read raw records from, and how many to show.
///
/// Flatten this into any command that normalizes a document of records:
/// ```ignore
/// List {
///     #[command(flatten)]
///     input: InputArgs,
/// }
/// ```
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON file with raw records ("-" reads stdin)
    #[arg(long, short = 'i', default_value = "-")]
    pub input: String,

    /// Maximum records to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            input: "-".to_string(),
            limit: None,
        }
    }
}

impl InputArgs {
    /// Whether records are read from stdin
    pub fn is_stdin(&self) -> bool {
        self.input == "-"
    }

    /// Apply `--limit` to a list of records
    pub fn apply_limit<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.limit {
            Some(limit) => items.into_iter().take(limit).collect(),
            None => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reads_stdin() {
        assert!(InputArgs::default().is_stdin());
    }

    #[test]
    fn test_apply_limit() {
        let args = InputArgs {
            input: "apps.json".to_string(),
            limit: Some(2),
        };
        assert!(!args.is_stdin());
        assert_eq!(args.apply_limit(vec![1, 2, 3]), vec![1, 2]);
        assert_eq!(InputArgs::default().apply_limit(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}

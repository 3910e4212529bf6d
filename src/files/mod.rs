//! File helpers - read, create, and naive CSV parsing
//!
//! Every path is resolved as `<root>/<folder>/<file>`, where `root` is
//! the configured base directory (the user's home by default).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Result;

/// Resolve a file path below the given root
pub fn resolve(root: &Path, folder: &str, file_name: &str) -> PathBuf {
    root.join(folder).join(file_name)
}

/// Write `content` to a file, creating parent folders as needed
pub fn create_file(root: &Path, folder: &str, file_name: &str, content: &str) -> Result<String> {
    let path = resolve(root, folder, file_name);
    debug!("Creating file {:?} ({} bytes)", path, content.len());

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;

    Ok("File created".to_string())
}

/// Read a file, terminating every line with `\n`
pub fn read_file(root: &Path, folder: &str, file_name: &str) -> Result<String> {
    let path = resolve(root, folder, file_name);
    debug!("Reading file {:?}", path);

    let content = std::fs::read_to_string(&path)?;
    let mut result = String::with_capacity(content.len() + 1);
    for line in content.lines() {
        result.push_str(line);
        result.push('\n');
    }

    Ok(result)
}

/// Parse a CSV file by splitting every line on `,`.
///
/// There is no quoting or escaping support: `"a,b"` yields two cells.
pub fn parse_csv(root: &Path, folder: &str, file_name: &str) -> Result<Vec<Vec<String>>> {
    let path = resolve(root, folder, file_name);
    debug!("Parsing CSV {:?}", path);

    let content = std::fs::read_to_string(&path)?;
    Ok(split_csv(&content))
}

/// Split CSV text into rows of cells
pub fn split_csv(content: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_then_read() {
        let tmp = TempDir::new().unwrap();

        let created = create_file(tmp.path(), "notes", "a.txt", "one\ntwo").unwrap();
        assert_eq!(created, "File created");

        let content = read_file(tmp.path(), "notes", "a.txt").unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_read_missing_file_is_err() {
        let tmp = TempDir::new().unwrap();
        let result = read_file(tmp.path(), "nowhere", "missing.txt");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_parse_csv_splits_on_commas() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("data.csv"), "a,b,c\n1,,3\n").unwrap();

        let rows = parse_csv(tmp.path(), "", "data.csv").unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "", "3"]]);
    }

    #[test]
    fn test_blank_line_is_one_empty_cell() {
        let rows = split_csv("a\n\nb");
        assert_eq!(rows, vec![vec!["a"], vec![""], vec!["b"]]);
    }

    #[test]
    fn test_parse_csv_ignores_quotes() {
        let rows = split_csv("\"Smith, John\",42");
        assert_eq!(rows, vec![vec!["\"Smith", " John\"", "42"]]);
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::checks::load_checks;
use crate::document::Document;

/// Selector -> presence outcome for one run, keyed in ascending order.
pub type ResultMap = BTreeMap<String, bool>;

/// Evaluate every selector in the checks file against the document.
///
/// The checks file is re-read here rather than cached from argument
/// resolution. Duplicate selectors collapse to a single key, last write
/// wins.
pub fn evaluate(document: &Document, checks_file: &Path) -> Result<ResultMap> {
    let checks = load_checks(checks_file)?;
    let mut results = ResultMap::new();
    for selector in &checks {
        let present = document.has_match(selector)?;
        results.insert(selector.clone(), present);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "htmlcheck-evaluator-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_evaluate_records_presence() {
        let checks = fixture("basic.json", r#"["p", "a"]"#);
        let doc = Document::parse("<html><body><p>hi</p></body></html>");
        let results = evaluate(&doc, &checks).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results["p"], true);
        assert_eq!(results["a"], false);
        fs::remove_file(checks).ok();
    }

    #[test]
    fn test_evaluate_key_order_ascending() {
        let checks = fixture("order.json", r#"["p", "a[href]", "div.container"]"#);
        let doc = Document::parse("<html></html>");
        let results = evaluate(&doc, &checks).unwrap();
        let keys: Vec<String> = results.keys().cloned().collect();
        assert_eq!(keys, vec!["a[href]", "div.container", "p"]);
        fs::remove_file(checks).ok();
    }

    #[test]
    fn test_evaluate_duplicates_collapse() {
        let checks = fixture("dup.json", r#"["p", "p"]"#);
        let doc = Document::parse("<html><body><p>hi</p></body></html>");
        let results = evaluate(&doc, &checks).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results["p"], true);
        fs::remove_file(checks).ok();
    }

    #[test]
    fn test_evaluate_missing_checks_file() {
        let doc = Document::parse("<html></html>");
        assert!(evaluate(&doc, Path::new("nope-checks.json")).is_err());
    }
}

use std::sync::LazyLock;

use regex::Regex;

use super::model::RowRange;
use crate::error::ViewError;

static ROW_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Row (\d+)\]").expect("Hardcode regex pattern"));

/// Row position encoded in a selector string (`"... [Row 12]"`), if any.
pub fn extract_row_index(label_text: &str) -> Option<usize> {
    ROW_SUFFIX
        .captures(label_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Turn the two selector strings into an inclusive row range.
pub fn resolve_range(start_label: &str, end_label: &str) -> Result<RowRange, ViewError> {
    let start = extract_row_index(start_label)
        .ok_or_else(|| ViewError::MissingRowSuffix(start_label.to_string()))?;
    let end = extract_row_index(end_label)
        .ok_or_else(|| ViewError::MissingRowSuffix(end_label.to_string()))?;

    if start > end {
        return Err(ViewError::StartAfterEnd { start, end });
    }
    Ok(RowRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_suffix() {
        assert_eq!(extract_row_index("Jan  [Row 7]"), Some(7));
        assert_eq!(extract_row_index("[Row 3] odd  [Row 12]"), Some(3));
        assert_eq!(extract_row_index("Jan"), None);
        assert_eq!(extract_row_index("Jan [Row x]"), None);
    }

    #[test]
    fn resolves_inclusive_range() {
        let range = resolve_range("A  [Row 0]", "D  [Row 3]").unwrap();
        assert_eq!(range, RowRange { start: 0, end: 3 });

        let single = resolve_range("A  [Row 4]", "A  [Row 4]").unwrap();
        assert_eq!(single, RowRange { start: 4, end: 4 });
    }

    #[test]
    fn duplicate_text_resolves_by_suffix() {
        let range = resolve_range("A  [Row 1]", "A  [Row 9]").unwrap();
        assert_eq!(range, RowRange { start: 1, end: 9 });
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            resolve_range("F  [Row 5]", "C  [Row 2]"),
            Err(ViewError::StartAfterEnd { start: 5, end: 2 })
        );
    }

    #[test]
    fn missing_suffix_is_rejected() {
        assert!(matches!(
            resolve_range("A", "B  [Row 2]"),
            Err(ViewError::MissingRowSuffix(s)) if s == "A"
        ));
    }
}

//! Search filter for the category list.

use crate::domain::CategoryRecord;

/// Case-insensitive substring match on the category name.
///
/// An empty term matches every record. Otherwise records without a string
/// name never match.
pub fn matches_search(record: &CategoryRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record
        .name()
        .is_some_and(|name| name.to_lowercase().contains(&term.to_lowercase()))
}

/// Records matching `term`, in their original order.
pub fn filter_records<'a>(records: &'a [CategoryRecord], term: &str) -> Vec<&'a CategoryRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<CategoryRecord> {
        vec![
            CategoryRecord::from_json(json!({"_id": "1", "category": "Books"})),
            CategoryRecord::from_json(json!({"_id": "2", "category": 42})),
            CategoryRecord::from_json(json!({"_id": "3", "category": "Notebooks"})),
            CategoryRecord::from_json(json!({"_id": "4", "category": "Lamps"})),
        ]
    }

    #[test]
    fn test_case_insensitive_substring() {
        let records = records();
        let hits = filter_records(&records, "BOO");
        let names: Vec<_> = hits.iter().filter_map(|r| r.name()).collect();
        assert_eq!(names, vec!["Books", "Notebooks"]);
    }

    #[test]
    fn test_non_string_name_is_unmatched() {
        let records = records();
        assert!(!matches_search(&records[1], "4"));
        assert!(filter_records(&records, "boo").iter().all(|r| r.is_valid()));
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let records = records();
        assert_eq!(filter_records(&records, "").len(), 4);
    }
}

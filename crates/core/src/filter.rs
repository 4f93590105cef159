//! In-process filtering for event listings.
//!
//! Event listing fetches every row ordered by date and filters locally;
//! matching is case-insensitive exact equality on the stringified field.

/// A single `field = value` filter pair.
pub type FilterPair = (String, String);

/// Case-insensitive exact match between a field value and a filter value.
pub fn value_matches(field_value: &str, filter_value: &str) -> bool {
    field_value.eq_ignore_ascii_case(filter_value.trim())
}

/// Apply every filter pair against a record via a field-lookup closure.
///
/// The closure returns the record's stringified value for a field name, or
/// `None` if the record has no such field. A record matches only when every
/// pair matches.
pub fn matches_all<F>(filters: &[FilterPair], lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    filters.iter().all(|(field, value)| {
        lookup(field)
            .map(|actual| value_matches(&actual, value))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(field: &str) -> Option<String> {
        match field {
            "name" => Some("Career Fair".to_string()),
            "location" => Some("NYC".to_string()),
            _ => None,
        }
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(value_matches("Career Fair", "career fair"));
        assert!(value_matches("NYC", "nyc"));
    }

    #[test]
    fn match_is_exact_not_substring() {
        assert!(!value_matches("Career Fair", "career"));
    }

    #[test]
    fn all_pairs_must_match() {
        let filters = vec![
            ("name".to_string(), "CAREER FAIR".to_string()),
            ("location".to_string(), "nyc".to_string()),
        ];
        assert!(matches_all(&filters, record));

        let filters = vec![
            ("name".to_string(), "Career Fair".to_string()),
            ("location".to_string(), "Boston".to_string()),
        ];
        assert!(!matches_all(&filters, record));
    }

    #[test]
    fn unknown_field_never_matches() {
        let filters = vec![("venue".to_string(), "NYC".to_string())];
        assert!(!matches_all(&filters, record));
    }

    #[test]
    fn empty_filter_set_matches_everything() {
        assert!(matches_all(&[], record));
    }
}

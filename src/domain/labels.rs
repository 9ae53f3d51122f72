/// Split a comma-separated label list.
///
/// The split is literal: surrounding whitespace is kept, so `"A, B"` yields
/// `["A", " B"]`. An absent or empty string yields no labels.
pub fn parse_labels(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_labels() {
        assert!(parse_labels(None).is_empty());
    }

    #[test]
    fn test_empty_labels() {
        assert!(parse_labels(Some("")).is_empty());
    }

    #[test]
    fn test_comma_separated_labels() {
        assert_eq!(parse_labels(Some("A,B")), ["A", "B"]);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(parse_labels(Some("A, B")), ["A", " B"]);
    }

    #[test]
    fn test_single_label() {
        assert_eq!(parse_labels(Some("PERSON")), ["PERSON"]);
    }

    #[test]
    fn test_empty_segments_are_kept() {
        assert_eq!(parse_labels(Some("A,,B,")), ["A", "", "B", ""]);
    }
}

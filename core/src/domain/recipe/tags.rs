//! Recipe tags are stored as one comma separated text column. These helpers
//! are the only place that knows about that encoding.

/// Splits a comma separated tag string into normalized tags: trimmed,
/// lowercased, without empties, first occurrence kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',') {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Canonical storage form of a tag string, e.g. `"Vegan,  quick"` becomes
/// `"vegan, quick"`.
pub fn normalize_tags(raw: &str) -> String {
    parse_tags(raw).join(", ")
}

pub fn has_tag(raw: &str, tag: &str) -> bool {
    let tag = tag.trim().to_lowercase();
    !tag.is_empty() && parse_tags(raw).contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes() {
        assert_eq!(
            parse_tags(" Vegan, quick ,,VEGAN, High Protein "),
            vec!["vegan", "quick", "high protein"]
        );
    }

    #[test]
    fn empty_input_has_no_tags() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
        assert_eq!(normalize_tags(" , ,"), "");
    }

    #[test]
    fn normalized_form_is_comma_space_joined() {
        assert_eq!(normalize_tags("Dinner,Pasta"), "dinner, pasta");
    }

    #[test]
    fn tag_match_is_exact_and_case_insensitive() {
        assert!(has_tag("dinner, pasta", "Pasta"));
        assert!(!has_tag("dinner, pasta", "past"));
        assert!(!has_tag("dinner, pasta", " "));
    }
}

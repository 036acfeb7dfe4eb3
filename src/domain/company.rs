use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    #[serde(rename = "Company")]
    pub name: String,
    #[serde(rename = "Website")]
    pub website: String,
}

/// Double check to make sure the company name is in the page's text.
///
/// Case-insensitive substring containment, nothing fuzzier. Pages that never
/// spell out the exact company name are discarded even when the fetch itself
/// succeeded.
pub fn mentions_company(text: &str, company_name: &str) -> bool {
    text.to_lowercase().contains(&company_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::mentions_company;

    #[test]
    fn matches_exact_name_ignoring_case() {
        assert!(mentions_company(
            "The Acme Corp sustainability report",
            "acme corp"
        ));
        assert!(mentions_company("ACME CORP annual review", "Acme Corp"));
    }

    #[test]
    fn rejects_text_without_the_name() {
        assert!(!mentions_company("Unrelated content", "acme corp"));
        assert!(!mentions_company("Acme Holdings yearly report", "acme corp"));
    }

    #[test]
    fn empty_page_text_never_matches() {
        assert!(!mentions_company("", "acme corp"));
    }
}

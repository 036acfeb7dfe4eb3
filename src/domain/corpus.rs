const SECTION_RULE_LEN: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Ok,
    Timeout,
    Error,
}

/// Outcome of rendering one candidate url. Write-once; every failure path
/// collapses to a status instead of an error return.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub url: String,
    pub text: String,
    pub status: FetchStatus,
}

impl FetchResult {
    pub fn ok(url: String, text: String) -> Self {
        FetchResult {
            url,
            text,
            status: FetchStatus::Ok,
        }
    }

    pub fn timeout(url: String) -> Self {
        FetchResult {
            url,
            text: String::new(),
            status: FetchStatus::Timeout,
        }
    }

    pub fn error(url: String) -> Self {
        FetchResult {
            url,
            text: String::new(),
            status: FetchStatus::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorpusSection {
    pub url: String,
    pub text: String,
}

/// Accepted page texts for one company, in the order the fetches completed.
#[derive(Debug, Clone, Default)]
pub struct RawCorpus {
    pub sections: Vec<CorpusSection>,
}

impl RawCorpus {
    pub fn new() -> Self {
        RawCorpus { sections: vec![] }
    }

    pub fn push(&mut self, url: String, text: String) {
        self.sections.push(CorpusSection { url, text });
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Concatenated corpus text with each section prefixed by its source url
    /// and closed by a rule of `=` characters. This is both the unfiltered
    /// output artifact and the extraction input, so the corpus order is fixed
    /// before any chunking happens.
    pub fn annotated_text(&self) -> String {
        let rule = "=".repeat(SECTION_RULE_LEN);
        self.sections
            .iter()
            .map(|section| format!("URL: {}\n{}\n{}\n", section.url, section.text, rule))
            .collect()
    }
}

use std::sync::OnceLock;

use regex::Regex;

// one paper as returned by the arXiv feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperEntry {
    pub title: String,
    pub published: String,
    pub summary: String,
    pub link: String
}

impl PaperEntry {
    pub fn new(title: &str, published: &str, summary: &str, link: &str) -> Self {
        PaperEntry {
            title: collapse_whitespace(title),
            published: published.trim().to_string(),
            summary: collapse_whitespace(summary),
            link: link.trim().to_string()
        }
    }

    // abstract page -> pdf, e.g. http://arxiv.org/abs/2301.00001v1 -> http://arxiv.org/pdf/2301.00001v1
    pub fn pdf_link(&self) -> String {
        self.link.replace("abs", "pdf")
    }
}

// merged results of one search, in category order then server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub keywords: String,
    pub categories: Vec<String>,
    pub entries: Vec<PaperEntry>,
    pub failed: Vec<String>
}

impl Report {
    pub fn new(keywords: &str, categories: Vec<String>, entries: Vec<PaperEntry>, failed: Vec<String>) -> Self {
        Report {
            keywords: keywords.to_string(),
            categories,
            entries,
            failed
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// feed titles and abstracts are hard-wrapped with indentation.
fn collapse_whitespace(text: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static regex"));
    re.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_link() {
        let entry = PaperEntry::new("t", "2023-01-01T00:00:00Z", "s", "http://arxiv.org/abs/2301.00001v1");
        assert_eq!(entry.pdf_link(), "http://arxiv.org/pdf/2301.00001v1");
        assert_eq!(entry.link, "http://arxiv.org/abs/2301.00001v1");
    }

    #[test]
    fn test_pdf_link_without_abs() {
        let entry = PaperEntry::new("t", "p", "s", "http://example.org/paper/1");
        assert_eq!(entry.pdf_link(), "http://example.org/paper/1");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let entry = PaperEntry::new(
            "  Quantum Error Correction\n  with Cat Qubits ",
            " 2024-05-02T17:59:59Z\n",
            "We study\n  things.\n",
            "http://arxiv.org/abs/2405.01234v1"
        );
        assert_eq!(entry.title, "Quantum Error Correction with Cat Qubits");
        assert_eq!(entry.summary, "We study things.");
        assert_eq!(entry.published, "2024-05-02T17:59:59Z");
    }
}

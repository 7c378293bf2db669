use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::{
    error::FetchError,
    model::PaperEntry,
    parser::parse_feed,
    query::CategoryQuery
};

const USER_AGENT: &str = concat!("arxivsearch/", env!("CARGO_PKG_VERSION"));

// Source of raw Atom feed text for a query URL.
pub trait FeedSource {
    fn fetch_feed(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client
}

impl HttpFeedSource {
    pub fn new(client: Client) -> Self {
        HttpFeedSource {
            client
        }
    }

    pub fn with_defaults() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::new(client))
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch_feed(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.text()?)
    }
}

pub fn fetch_category<S: FeedSource + ?Sized>(source: &S, query: &CategoryQuery) -> Result<Vec<PaperEntry>, FetchError> {
    let xml = source.fetch_feed(&query.url)?;
    parse_feed(&xml)
}

// Runs every query in order. A failing category yields no entries and
// is reported back by code; the rest of the search carries on.
pub fn fetch_all<S: FeedSource + ?Sized>(source: &S, queries: &[CategoryQuery]) -> (Vec<PaperEntry>, Vec<String>) {
    let mut entries: Vec<PaperEntry> = Vec::new();
    let mut failed: Vec<String> = Vec::new();
    for query in queries {
        match fetch_category(source, query) {
            Ok(mut found) => {
                info!(category = %query.category, count = found.len(), "fetched category");
                entries.append(&mut found);
            }
            Err(e) => {
                warn!(category = %query.category, error = %e, "category fetch failed, treating as empty");
                failed.push(query.category.clone());
            }
        }
    }
    (entries, failed)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct StubSource {
        calls: RefCell<Vec<String>>
    }

    impl FeedSource for StubSource {
        fn fetch_feed(&self, url: &str) -> Result<String, FetchError> {
            self.calls.borrow_mut().push(url.to_string());
            if url.contains("bad") {
                return Ok(String::from("<feed><entry><title>x</entry></feed>"));
            }
            Ok(format!(
                concat!(
                    "<feed><entry><id>http://arxiv.org/abs/{0}</id><title>{0} one</title>",
                    "<summary>s</summary><published>p</published></entry>",
                    "<entry><id>http://arxiv.org/abs/{0}</id><title>{0} two</title>",
                    "<summary>s</summary><published>p</published></entry></feed>"
                ),
                url
            ))
        }
    }

    fn query(category: &str) -> CategoryQuery {
        CategoryQuery {
            category: category.to_string(),
            url: category.to_string()
        }
    }

    #[test]
    fn test_fetch_all_concatenates_in_order() {
        let source = StubSource { calls: RefCell::new(Vec::new()) };
        let (entries, failed) = fetch_all(&source, &[query("a"), query("b")]);
        let titles = entries.iter().map(|e| e.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["a one", "a two", "b one", "b two"]);
        assert!(failed.is_empty());
        assert_eq!(*source.calls.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_fetch_all_tolerates_failures() {
        let source = StubSource { calls: RefCell::new(Vec::new()) };
        let (entries, failed) = fetch_all(&source, &[query("bad"), query("c")]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "c one");
        assert_eq!(failed, vec![String::from("bad")]);
        assert_eq!(source.calls.borrow().len(), 2);
    }
}

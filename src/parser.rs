use quick_xml::de::from_str;
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::PaperEntry
};

pub fn parse_feed(xml: &str) -> Result<Vec<PaperEntry>, FetchError> {
    let feed: ArxivFeed = from_str(xml)?;
    Ok(feed.entries.into_iter()
        .map(PaperEntry::from_entry)
        .collect())
}

impl PaperEntry {
    fn from_entry(entry: ArxivEntry) -> Self {
        let link = entry.abstract_link()
            .unwrap_or(entry.id.as_str())
            .to_string();
        PaperEntry::new(&entry.title, &entry.published, &entry.summary, &link)
    }
}

// Arxiv Raw XML Model

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ArxivFeed {
    #[serde(rename = "entry")]
    entries: Vec<ArxivEntry>
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ArxivEntry {
    id: String,
    title: String,
    summary: String,
    published: String,
    #[serde(rename = "link")]
    links: Vec<LinkField>
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct LinkField {
    #[serde(rename = "@href")]
    href: String,
    #[serde(rename = "@rel")]
    rel: Option<String>,
    #[serde(rename = "@type")]
    link_type: Option<String>
}

impl ArxivEntry {
    // the abstract page: rel="alternate", else the text/html link.
    fn abstract_link(&self) -> Option<&str> {
        self.links.iter()
            .find(|field| field.rel.as_deref() == Some("alternate"))
            .or_else(|| self.links.iter().find(|field| field.link_type.as_deref() == Some("text/html")))
            .map(|field| field.href.as_str())
            .filter(|href| !href.is_empty())
    }
}

// end Arxiv Raw XML Model

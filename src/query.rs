use tracing::debug;

use crate::{
    config::SearchConfig,
    error::ValidationError
};

macro_rules! arxiv_query {
    () => { concat!(
        "{}search_query={}&start=0&max_results={}",
        "&sortBy=submittedDate&sortOrder=descending"
    ) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    keywords: String,
    pub categories: Vec<String>
}

impl SearchRequest {
    pub fn new(keywords: &str, categories: Vec<String>) -> Self {
        SearchRequest {
            keywords: keywords.trim().to_string(),
            categories
        }
    }

    // arXiv query syntax, passed through untouched.
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn validate(&self, config: &SearchConfig) -> Result<(), ValidationError> {
        if self.keywords.is_empty() {
            return Err(ValidationError::EmptyKeywords);
        }
        if self.categories.is_empty() {
            return Err(ValidationError::NoCategories);
        }
        match self.categories.iter().find(|code| config.category(code).is_none()) {
            Some(code) => Err(ValidationError::UnknownCategory(code.clone())),
            None => Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub category: String,
    pub url: String
}

pub fn search_expression(category: &str, keywords: &str) -> String {
    format!("cat:{} AND ({})", category, keywords)
}

pub fn build_queries(config: &SearchConfig, request: &SearchRequest) -> Result<Vec<CategoryQuery>, ValidationError> {
    request.validate(config)?;
    let queries = request.categories.iter()
        .map(|code| {
            let expression = search_expression(code, request.keywords());
            let url = format!(
                arxiv_query!(),
                config.api_url,
                urlencoding::encode(&expression),
                config.max_results
            );
            debug!(category = %code, %url, "built query");
            CategoryQuery {
                category: code.clone(),
                url
            }
        })
        .collect();
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::Category;

    const ACTUAL: &str = concat!(
        "http://export.arxiv.org/api/query?",
        "search_query=cat%3Acs.AI%20AND%20%28%22quantum%20computing%22%29",
        "&start=0&max_results=10&sortBy=submittedDate&sortOrder=descending"
    );

    #[test]
    fn test_url_generation() {
        let request = SearchRequest::new("\"quantum computing\"", vec![String::from("cs.AI")]);
        let queries = build_queries(&SearchConfig::default(), &request).unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].category, "cs.AI");
        assert_eq!(queries[0].url, ACTUAL, "URL improperly formatted");
    }

    #[test]
    fn test_one_query_per_category_in_order() {
        let codes = vec![String::from("cs.LG"), String::from("quant-ph"), String::from("cs.AI")];
        let request = SearchRequest::new("spin", codes.clone());
        let queries = build_queries(&SearchConfig::default(), &request).unwrap();
        let got = queries.iter().map(|q| q.category.clone()).collect::<Vec<_>>();
        assert_eq!(got, codes);
        assert!(queries[1].url.contains("search_query=cat%3Aquant-ph%20AND%20%28spin%29&"));
    }

    #[test]
    fn test_keywords_encoded_once() {
        let keywords = "(\"spin\" AND \"qubit\") OR (\"hall bar\")";
        let request = SearchRequest::new(keywords, vec![String::from("cond-mat")]);
        let queries = build_queries(&SearchConfig::default(), &request).unwrap();
        let encoded = queries[0].url
            .split("search_query=").nth(1).unwrap()
            .split('&').next().unwrap();
        assert!(!encoded.contains("%25"));
        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, format!("cat:cond-mat AND ({})", keywords));
    }

    #[test]
    fn test_config_limits_are_used() {
        let config = SearchConfig::new(
            "http://localhost/api?",
            3,
            vec![Category::new("Test", "test.XX")],
            PathBuf::from(".")
        );
        let request = SearchRequest::new("x", vec![String::from("test.XX")]);
        let queries = build_queries(&config, &request).unwrap();
        assert!(queries[0].url.starts_with("http://localhost/api?search_query="));
        assert!(queries[0].url.contains("&max_results=3&"));
    }

    #[test]
    fn test_keywords_trimmed() {
        let request = SearchRequest::new("  graphene \n", vec![String::from("cond-mat")]);
        assert_eq!(request.keywords(), "graphene");
    }

    #[test]
    fn test_validation() {
        let config = SearchConfig::default();
        let empty = SearchRequest::new("   ", vec![]);
        assert_eq!(empty.validate(&config), Err(ValidationError::EmptyKeywords));

        let no_cats = SearchRequest::new("qubit", vec![]);
        assert_eq!(no_cats.validate(&config), Err(ValidationError::NoCategories));
        assert_eq!(build_queries(&config, &no_cats), Err(ValidationError::NoCategories));

        let unknown = SearchRequest::new("qubit", vec![String::from("cs.AI"), String::from("hep-th")]);
        assert_eq!(
            unknown.validate(&config),
            Err(ValidationError::UnknownCategory(String::from("hep-th")))
        );
    }
}

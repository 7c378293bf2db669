use std::{env, path::PathBuf};

use crate::error::ConfigError;

const ENV_FILE: &str = "arxivsearch.env";
const DEFAULT_API_URL: &str = "http://export.arxiv.org/api/query?";
const DEFAULT_MAX_RESULTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub code: String
}

impl Category {
    pub fn new(name: &str, code: &str) -> Self {
        Category {
            name: name.to_string(),
            code: code.to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_url: String,
    pub max_results: u32,
    pub categories: Vec<Category>,
    pub output_dir: PathBuf
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            api_url: String::from(DEFAULT_API_URL),
            max_results: DEFAULT_MAX_RESULTS,
            categories: vec![
                Category::new("Quantum Physics (quant-ph)", "quant-ph"),
                Category::new("Applied Physics (physics.app-ph)", "physics.app-ph"),
                Category::new("Condensed Matter (cond-mat)", "cond-mat"),
                Category::new("Artificial Intelligence (cs.AI)", "cs.AI"),
                Category::new("Data Structures and Algorithms (cs.DS)", "cs.DS"),
                Category::new("Machine Learning (cs.LG)", "cs.LG"),
                Category::new("Systems and Control (cs.SY)", "cs.SY")
            ],
            output_dir: PathBuf::from(".")
        }
    }
}

impl SearchConfig {
    pub fn new(api_url: &str, max_results: u32, categories: Vec<Category>, output_dir: PathBuf) -> Self {
        SearchConfig {
            api_url: api_url.to_string(),
            max_results,
            categories,
            output_dir
        }
    }

    // defaults, overridden by `arxivsearch.env` (optional) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_file(ENV_FILE)
    }

    pub fn from_env_file(name: &str) -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::from_filename(name) {
            if !e.not_found() {
                return Err(ConfigError::EnvFile(e));
            }
        }
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ARXIV_API_URL") {
            self.api_url = url;
        }
        if let Some(raw) = lookup("MAX_RESULTS") {
            self.max_results = parse_positive_u32("MAX_RESULTS", &raw)?;
        }
        if let Some(dir) = lookup("OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        Ok(self)
    }

    pub fn category(&self, code: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.code == code)
    }
}

fn parse_positive_u32(key: &str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            key: key.to_string(),
            value: raw.to_string()
        })
    }
}

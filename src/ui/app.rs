// Search form state: keyword input, category checkboxes, Search button
// and the modal dialogs shown after a search.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::{
    config::SearchConfig,
    error::SearchError,
    query::SearchRequest,
    search::SearchOutcome
};

pub const INSTRUCTIONS: &str =
    "Use this form to search for papers on arXiv within specified categories and keywords.";
pub const EXAMPLE_KEYWORDS: &str =
    "Example keywords: (\"spin\" AND \"qubit\") OR (\"resonator\" AND \"qubit\" AND \"coupling\") OR (\"hall bar\")";
pub const PLACEHOLDER: &str = "Enter your keywords here...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Keywords,
    Category(usize),
    Search
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Warning,
    Information
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String
}

impl Dialog {
    fn warning(title: &str, message: String) -> Self {
        Self { kind: DialogKind::Warning, title: title.to_string(), message }
    }

    fn information(title: &str, message: String) -> Self {
        Self { kind: DialogKind::Information, title: title.to_string(), message }
    }
}

// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Submit,
    Quit
}

pub struct App {
    config: SearchConfig,
    // Keyword input buffer
    pub keywords: String,
    // One flag per configured category, all checked at start
    pub checked: Vec<bool>,
    pub focus: Focus,
    pub phase: Phase,
    // Modal dialog; swallows input while open
    pub dialog: Option<Dialog>
}

impl App {
    pub fn new(config: SearchConfig) -> Self {
        let checked = vec![true; config.categories.len()];
        Self {
            config,
            keywords: String::new(),
            checked,
            focus: Focus::Keywords,
            phase: Phase::Idle,
            dialog: None
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // Request built from the current form contents, categories in display order.
    pub fn request(&self) -> SearchRequest {
        let codes = self.config.categories.iter()
            .zip(self.checked.iter())
            .filter(|(_, checked)| **checked)
            .map(|(cat, _)| cat.code.clone())
            .collect();
        SearchRequest::new(&self.keywords, codes)
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Action {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if self.phase == Phase::Searching {
            return Action::None;
        }
        if self.dialog.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dialog = None;
            }
            return Action::None;
        }

        match code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab | KeyCode::Down => self.focus = self.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.prev_focus(),
            KeyCode::Enter => match self.focus {
                Focus::Keywords | Focus::Search => return Action::Submit,
                Focus::Category(i) => self.toggle(i)
            },
            KeyCode::Char(' ') if matches!(self.focus, Focus::Category(_)) => {
                if let Focus::Category(i) = self.focus {
                    self.toggle(i);
                }
            }
            KeyCode::Char(' ') if self.focus == Focus::Search => return Action::Submit,
            KeyCode::Char(c) if self.focus == Focus::Keywords => self.keywords.push(c),
            KeyCode::Backspace if self.focus == Focus::Keywords => {
                self.keywords.pop();
            }
            _ => {}
        }
        Action::None
    }

    // Enter the blocking "search in progress" state.
    pub fn begin_search(&mut self) {
        self.phase = Phase::Searching;
        self.dialog = None;
    }

    // Back to idle, with a dialog describing how the search ended.
    pub fn finish_search(&mut self, result: Result<SearchOutcome, SearchError>) {
        self.phase = Phase::Idle;
        self.dialog = Some(match result {
            Ok(SearchOutcome::NoResults { failed }) => Dialog::information(
                "No Results",
                with_failures("No papers found for the given keywords and categories.".to_string(), &failed)
            ),
            Ok(SearchOutcome::Saved { path, failed, .. }) => {
                let name = path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Dialog::information(
                    "Search Completed",
                    with_failures(format!("Search results saved to {}", name), &failed)
                )
            }
            Err(SearchError::Validation(e)) => Dialog::warning("Input Error", e.to_string()),
            Err(e) => Dialog::warning("Search Failed", e.to_string())
        });
    }

    fn toggle(&mut self, ix: usize) {
        if let Some(flag) = self.checked.get_mut(ix) {
            *flag = !*flag;
        }
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Keywords];
        order.extend((0..self.checked.len()).map(Focus::Category));
        order.push(Focus::Search);
        order
    }

    fn next_focus(&self) -> Focus {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        order[(pos + 1) % order.len()]
    }

    fn prev_focus(&self) -> Focus {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        order[(pos + order.len() - 1) % order.len()]
    }
}

fn with_failures(message: String, failed: &[String]) -> String {
    if failed.is_empty() {
        message
    } else {
        format!("{}\n\nThese categories could not be fetched: {}", message, failed.join(", "))
    }
}

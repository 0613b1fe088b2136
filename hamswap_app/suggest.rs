//! Constrained autocomplete over fixed vocabularies, plus the
//! manufacturer→model narrowing used by the listing form.

use hamswap_types::catalog;
use hamswap_types::listing::Category;

/// Minimum query length before free-text fields (manufacturer, model) offer
/// suggestions.
pub const FREE_TEXT_MIN_LEN: usize = 2;
/// Closed lists (country names) suggest from the first character.
pub const CLOSED_LIST_MIN_LEN: usize = 1;

/// Case-insensitive substring matches from `vocabulary`, in vocabulary
/// order. Queries shorter than `min_len` yield nothing.
pub fn suggestions(query: &str, vocabulary: &[&str], min_len: usize) -> Vec<String> {
    if query.chars().count() < min_len {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    vocabulary
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .map(|entry| entry.to_string())
        .collect()
}

/// Model vocabulary for the listing form: the category's closed list,
/// further restricted to the manufacturer's known model prefixes when the
/// manufacturer is recognized. Unmapped manufacturers leave the category
/// list untouched.
pub fn narrowed_models(category: Option<Category>, manufacturer: &str) -> Vec<&'static str> {
    let category_models = match category {
        Some(category) => catalog::models_for_category(category),
        None => catalog::all_models(),
    };

    if manufacturer.chars().count() < FREE_TEXT_MIN_LEN {
        return category_models;
    }

    match catalog::model_prefixes(manufacturer) {
        Some(prefixes) => category_models
            .into_iter()
            .filter(|model| prefixes.iter().any(|prefix| model.starts_with(prefix)))
            .collect(),
        None => category_models,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// Keyboard-navigable suggestion list. The highlighted index is bounded to
/// `[-1, len - 1]`; -1 means nothing is highlighted.
#[derive(Debug, Default)]
pub struct SuggestionBox {
    suggestions: Vec<String>,
    highlighted: isize,
    open: bool,
}

impl SuggestionBox {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            highlighted: -1,
            open: false,
        }
    }

    /// Recompute the list for a new query. Typing always reopens the box
    /// and drops the highlight.
    pub fn update_query(&mut self, query: &str, vocabulary: &[&str], min_len: usize) {
        self.suggestions = suggestions(query, vocabulary, min_len);
        self.highlighted = -1;
        self.open = !self.suggestions.is_empty();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> isize {
        self.highlighted
    }

    /// Handle a navigation key. Returns the committed suggestion on Enter
    /// with a valid highlight; all keys are ignored while the box is closed.
    pub fn handle_key(&mut self, key: SuggestionKey) -> Option<String> {
        if !self.open {
            return None;
        }

        match key {
            SuggestionKey::Down => {
                if self.highlighted < self.suggestions.len() as isize - 1 {
                    self.highlighted += 1;
                }
                None
            }
            SuggestionKey::Up => {
                if self.highlighted > 0 {
                    self.highlighted -= 1;
                } else {
                    self.highlighted = -1;
                }
                None
            }
            SuggestionKey::Enter => {
                let index = self.highlighted;
                if index >= 0 && (index as usize) < self.suggestions.len() {
                    let committed = self.suggestions[index as usize].clone();
                    self.close();
                    Some(committed)
                } else {
                    None
                }
            }
            SuggestionKey::Escape => {
                self.close();
                None
            }
        }
    }

    /// Commit a suggestion by direct click.
    pub fn select(&mut self, index: usize) -> Option<String> {
        if !self.open || index >= self.suggestions.len() {
            return None;
        }
        let committed = self.suggestions[index].clone();
        self.close();
        Some(committed)
    }

    /// Clicking outside the list closes it without committing.
    pub fn click_outside(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.open = false;
        self.highlighted = -1;
    }
}

//! Form field value objects

use crate::state::{categories_of, CategoryMap};

/// One choice in a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value sent in change events
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

/// Options for the difficulty selector (1 to 5)
pub fn difficulty_options() -> Vec<SelectOption> {
    (1..=5)
        .map(|d: u8| SelectOption {
            value: d.to_string(),
            label: d.to_string(),
        })
        .collect()
}

/// Options for the category selector, one per category in id order
pub fn category_options(categories: &CategoryMap) -> Vec<SelectOption> {
    categories_of(categories)
        .map(|c| SelectOption {
            value: c.id.to_string(),
            label: c.name,
        })
        .collect()
}

/// Widget values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index of the selected option
    Select(usize),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single input widget with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text input
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new select with the first option selected
    pub fn select(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select(0),
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select(_))
    }

    /// Get the text value (returns empty string for selects)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select(_) => "",
        }
    }

    /// Get the selected index (returns 0 for text inputs)
    pub fn selected_index(&self) -> usize {
        match &self.value {
            FieldValue::Select(i) => *i,
            FieldValue::Text(_) => 0,
        }
    }

    /// Push a character to a text input
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text input
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Select the option at `index`, clamped to the option count
    pub fn select_index(&mut self, index: usize, option_count: usize) {
        if let FieldValue::Select(i) = &mut self.value {
            *i = index.min(option_count.saturating_sub(1));
        }
    }

    /// Move the selection forward, stopping at the last option
    pub fn select_next(&mut self, option_count: usize) {
        let next = self.selected_index() + 1;
        self.select_index(next, option_count);
    }

    /// Move the selection back, stopping at the first option
    pub fn select_prev(&mut self, option_count: usize) {
        let prev = self.selected_index().saturating_sub(1);
        self.select_index(prev, option_count);
    }

    /// Restore the initial value (empty text, first option)
    pub fn reset(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select(i) => *i = 0,
        }
    }

    /// The value a change event carries for this widget.
    /// None for a select with no options.
    pub fn change_value(&self, options: &[SelectOption]) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Select(i) => options.get(*i).map(|o| o.value.clone()),
        }
    }
}

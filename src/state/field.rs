//! Form field value objects

/// Represents a single form field with its configuration, value and
/// transient validation state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub is_multiline: bool,
    /// At most one error annotation per field at any time
    error: Option<String>,
}

impl FormField {
    /// Create a new optional text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            required: false,
            is_multiline,
            error: None,
        }
    }

    /// Create a new required text field
    pub fn required(name: &str, label: &str) -> Self {
        Self {
            required: true,
            ..Self::text(name, label, false)
        }
    }

    /// Get the value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value and any attached error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Attach an error annotation, replacing any prior one
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Remove the error annotation if present
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }
}

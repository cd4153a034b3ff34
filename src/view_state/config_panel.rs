//! In-app editor for the API URL and token.

use crate::config::ConsoleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigField {
    #[default]
    ApiUrl,
    Token,
}

/// Open editor with working copies of the two values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPanel {
    pub open: bool,
    pub field: ConfigField,
    pub api_url: String,
    pub token: String,
    /// Line under the inputs ("Config loaded.", "Saved.", ...).
    pub hint: String,
}

impl ConfigPanel {
    /// Open with the values of `config`.
    pub fn open_with(&mut self, config: &ConsoleConfig) {
        self.open = true;
        self.field = ConfigField::ApiUrl;
        self.api_url = config.api_url.clone();
        self.token = config.token.clone();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            ConfigField::ApiUrl => ConfigField::Token,
            ConfigField::Token => ConfigField::ApiUrl,
        };
    }

    pub fn input_char(&mut self, c: char) {
        self.current_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.current_mut().pop();
    }

    /// Merge the edited values into `base`, trimmed.
    pub fn apply_to(&self, base: &ConsoleConfig) -> ConsoleConfig {
        ConsoleConfig {
            api_url: self.api_url.trim().to_string(),
            token: self.token.trim().to_string(),
            ..base.clone()
        }
    }

    /// Token as shown on screen.
    pub fn masked_token(&self) -> String {
        "•".repeat(self.token.chars().count())
    }

    fn current_mut(&mut self) -> &mut String {
        match self.field {
            ConfigField::ApiUrl => &mut self.api_url,
            ConfigField::Token => &mut self.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_and_apply() {
        let base = ConsoleConfig::default();
        let mut panel = ConfigPanel::default();
        panel.open_with(&base);
        for _ in 0..4 {
            panel.backspace();
        }
        panel.input_char('9');
        panel.toggle_field();
        for c in " abc ".chars() {
            panel.input_char(c);
        }

        let config = panel.apply_to(&base);
        assert_eq!(config.api_url, "http://127.0.0.1:9");
        assert_eq!(config.token, "abc");
        assert_eq!(panel.masked_token().chars().count(), 5);
    }
}

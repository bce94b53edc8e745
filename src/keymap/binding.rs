//! KeyBinding struct for mapping keys to actions
//!
//! Provides parsing of key strings like "ctrl+c", "shift+tab", "enter"

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "enter", "ctrl+a", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    /// Terminals report Shift+Tab as `BackTab`, sometimes with SHIFT set and
    /// sometimes without; both spellings match either report.
    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
        match code {
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                (KeyCode::BackTab, modifiers.difference(KeyModifiers::SHIFT))
            }
            KeyCode::BackTab => (KeyCode::BackTab, modifiers.difference(KeyModifiers::SHIFT)),
            _ => (code, modifiers),
        }
    }

    fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        Self::normalized(self.code, self.modifiers) == Self::normalized(code, modifiers)
    }
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.parse()
            .map(|parsed| parsed.matches(code, modifiers))
            .unwrap_or(false)
    }

    /// Parse the key string into KeyCode and KeyModifiers
    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Ctrl+C")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err("Empty key string".to_string());
    }

    // "+" on its own (or as the final part, e.g. "ctrl++") is the plus key
    let (modifier_part, key_part) = if key == "+" {
        ("", "+")
    } else if let Some(prefix) = key.strip_suffix("++") {
        (prefix, "+")
    } else {
        match key.rsplit_once('+') {
            Some((prefix, last)) => (prefix, last),
            None => ("", key.as_str()),
        }
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_part.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" | "command" => modifiers |= KeyModifiers::SUPER,
            _ => return Err(format!("Unknown modifier: {}", part)),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let key = key.trim();

    let code = match key {
        "up" | "arrow_up" => KeyCode::Up,
        "down" | "arrow_down" => KeyCode::Down,
        "left" | "arrow_left" => KeyCode::Left,
        "right" | "arrow_right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }

            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };

    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+c" -> "Ctrl+C")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
                "left" | "arrow_left" => "←".to_string(),
                "right" | "arrow_right" => "→".to_string(),
                "up" | "arrow_up" => "↑".to_string(),
                "down" | "arrow_down" => "↓".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ if part.chars().count() == 1 => part.to_uppercase(),
                _ if part.starts_with('f') && part.len() <= 3 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let parsed = parse_key_string("j").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('j'));
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let parsed = parse_key_string("ctrl+c").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('c'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_multi_modifier() {
        let parsed = parse_key_string("Ctrl+Shift+N").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('n'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        let parsed = parse_key_string("ctrl++").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('+'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("backtab").unwrap().code, KeyCode::BackTab);
        assert_eq!(parse_key_string("f12").unwrap().code, KeyCode::F(12));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_string("").is_err());
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("banana").is_err());
        assert!(parse_key_string("f13").is_err());
    }

    #[test]
    fn test_shift_tab_matches_backtab_reports() {
        let binding = KeyBinding::new("shift+tab", Action::PrevField);
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Tab, KeyModifiers::NONE));
    }

    #[test]
    fn test_key_binding_matches() {
        let binding = KeyBinding::new("ctrl+a", Action::Home);
        assert!(binding.matches(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('b'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+c"), "Ctrl+C");
        assert_eq!(format_key_display("enter"), "Enter");
        assert_eq!(format_key_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_display("left"), "←");
    }

    #[test]
    fn test_key_binding_description() {
        let binding = KeyBinding::new("enter", Action::Confirm);
        assert_eq!(binding.get_description(), "Submit");

        let mut custom = KeyBinding::new("ctrl+s", Action::Confirm);
        custom.description = Some("Say hello".to_string());
        assert_eq!(custom.get_description(), "Say hello");
    }
}

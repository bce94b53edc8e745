//! `preview` command: render the parameterized hello template.

use crate::config::Config;
use crate::strings::StringTable;
use tracing::info;

/// The localized template text for `name`.
pub fn render(config: &Config, name: &str) -> String {
    StringTable::new(config.locale()).hello(name)
}

pub fn run(config: &Config, name: &str) {
    let text = render(config, name);
    info!(locale = %config.locale(), "Previewed hello template");
    println!("{}", text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_english() {
        assert_eq!(render(&Config::default(), "Antonio"), "Hello Antonio!");
    }

    #[test]
    fn test_render_spanish() {
        let config = Config {
            locale: "es-MX".to_string(),
            ..Config::default()
        };
        assert_eq!(render(&config, "Antonio"), "¡Hola Antonio!");
    }
}

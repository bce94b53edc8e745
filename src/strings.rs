//! Localized string table.
//!
//! A static lookup of the four strings the screen shows, keyed by
//! [`StringKey`]. Templates use positional placeholders (`%1$s`) or
//! sequential ones (`%s`); `%%` is a literal percent sign.

use std::fmt;

/// Keys of the localized string table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Welcome label shown above the input row
    Welcome,
    /// Placeholder shown in the empty name field
    Hint,
    /// Label of the submit button
    Done,
    /// Greeting template taking the name as its only argument
    Hello,
}

/// Locales with a built-in table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Resolve a BCP 47-ish tag (`en`, `es-MX`, `es_ES.UTF-8`) by its primary
    /// language subtag. Anything unknown falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Locale::Spanish,
            _ => Locale::English,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// String table for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringTable {
    locale: Locale,
}

impl StringTable {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn for_locale(tag: &str) -> Self {
        Self::new(Locale::from_tag(tag))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw table entry, placeholders unexpanded
    pub fn get(&self, key: StringKey) -> &'static str {
        match self.locale {
            Locale::English => match key {
                StringKey::Welcome => "Welcome! What is your name?",
                StringKey::Hint => "Your name",
                StringKey::Done => "Done",
                StringKey::Hello => "Hello %1$s!",
            },
            Locale::Spanish => match key {
                StringKey::Welcome => "¡Bienvenido! ¿Cómo te llamas?",
                StringKey::Hint => "Tu nombre",
                StringKey::Done => "Listo",
                StringKey::Hello => "¡Hola %1$s!",
            },
        }
    }

    /// Entry with placeholders expanded from `args`
    pub fn format(&self, key: StringKey, args: &[&str]) -> String {
        format_template(self.get(key), args)
    }

    /// The parameterized greeting template
    pub fn hello(&self, name: &str) -> String {
        self.format(StringKey::Hello, &[name])
    }
}

/// Expand `%N$s`, `%s` and `%%` in `template`.
///
/// Placeholders without a matching argument are copied through unchanged.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        if let Some(after) = tail.strip_prefix('s') {
            match args.get(next_arg) {
                Some(arg) => out.push_str(arg),
                None => out.push_str("%s"),
            }
            next_arg += 1;
            rest = after;
            continue;
        }

        let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && tail[digits..].starts_with("$s") {
            let placeholder_len = 1 + digits + 2;
            let arg = tail[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| args.get(i));
            match arg {
                Some(arg) => out.push_str(arg),
                None => out.push_str(&rest[pos..pos + placeholder_len]),
            }
            rest = &tail[digits + 2..];
            continue;
        }

        out.push('%');
        rest = tail;
    }

    out.push_str(rest);
    out
}

//! Bot command parsing.

/// A `/name[@bot] args...` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    /// Command name without the slash and without any `@bot` suffix.
    pub name: &'a str,
    /// Everything after the command word, trimmed.
    pub args: &'a str,
}

impl<'a> Command<'a> {
    /// Parses `text` as a command; `None` when it does not start with `/` or the name is empty.
    pub fn parse(text: &'a str) -> Option<Self> {
        let rest = text.trim_start().strip_prefix('/')?;
        let (word, args) = match rest.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args.trim()),
            None => (rest, ""),
        };
        let name = word.split('@').next().unwrap_or_default();
        if name.is_empty() {
            return None;
        }
        Some(Self { name, args })
    }

    /// Case-insensitive name comparison.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// First whitespace-separated argument.
    pub fn first_arg(&self) -> Option<&'a str> {
        self.args.split_whitespace().next()
    }
}

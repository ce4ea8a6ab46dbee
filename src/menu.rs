use crate::error::{MenuError, Result};
use crate::term::Screen;
use crate::ui;

/// Title given to menus constructed without one.
pub const DEFAULT_TITLE: &str = "Default Menu";
/// Prompt given to menus constructed without one.
pub const DEFAULT_PROMPT: &str = "Make a Selection: ";

/// A console menu: a title and prompt paired with an ordered set of
/// entries, each selected by a single character.
///
/// Entries keep insertion order and keys are unique; [`Menu::add`]
/// rejects duplicates without touching existing state.
#[derive(Debug, Clone)]
pub struct Menu {
    /// Shown as the first output line; `None` renders as an empty line.
    pub title: Option<String>,
    /// Printed last, without a trailing newline.
    pub prompt: String,
    items: Vec<(char, String)>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Creates a menu with the default title and prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prompt(DEFAULT_TITLE, DEFAULT_PROMPT, false)
    }

    /// Creates a menu with the given title and the default prompt.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self::with_prompt(title, DEFAULT_PROMPT, false)
    }

    /// Creates a menu with the given title and prompt. With `pad_prompt`
    /// the prompt is stored as `"{prompt}: "`, otherwise verbatim.
    #[must_use]
    pub fn with_prompt(title: impl Into<String>, prompt: impl Into<String>, pad_prompt: bool) -> Self {
        let prompt = prompt.into();
        Self {
            title: Some(title.into()),
            prompt: if pad_prompt { format!("{prompt}: ") } else { prompt },
            items: Vec::new(),
        }
    }

    /// Adds one entry.
    ///
    /// # Errors
    /// Returns [`MenuError::DuplicateKey`] if `key` is already taken;
    /// the menu is left unchanged.
    pub fn add(&mut self, key: char, label: impl Into<String>) -> Result<()> {
        if self.contains(key) {
            return Err(MenuError::DuplicateKey(key));
        }
        self.items.push((key, label.into()));
        Ok(())
    }

    /// Adds entries in iteration order, stopping at the first duplicate.
    ///
    /// # Errors
    /// Returns [`MenuError::DuplicateKey`] for the first key already
    /// taken. Entries added before the failing one are kept.
    pub fn add_all<I, S>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        for (key, label) in pairs {
            self.add(key, label)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, key: char) -> bool {
        self.items.iter().any(|(k, _)| *k == key)
    }

    /// Label of the entry for `key`, if present.
    #[must_use]
    pub fn get(&self, key: char) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| label.as_str())
    }

    /// Iterates over `(key, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.items.iter().map(|(k, label)| (*k, label.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draws the menu on `screen` and blocks for one keystroke. With
    /// `clear_screen` the terminal is cleared first.
    ///
    /// A single attempt is made per call; re-prompting after a rejected
    /// key is the caller's choice.
    ///
    /// # Errors
    /// Returns [`MenuError::InvalidSelection`] if the pressed key has no
    /// entry, or [`MenuError::Io`] if the terminal fails.
    pub fn display<S: Screen>(&self, screen: &mut S, clear_screen: bool) -> Result<char> {
        if clear_screen {
            screen.clear()?;
        }
        ui::render(self, screen)?;
        let pressed = screen.read_key()?;
        if self.contains(pressed) {
            Ok(pressed)
        } else {
            Err(MenuError::InvalidSelection(pressed))
        }
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a (char, String);
    type IntoIter = std::slice::Iter<'a, (char, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::script::ScriptedScreen;

    #[test]
    fn new_uses_both_defaults() {
        let menu = Menu::new();
        assert_eq!(menu.title.as_deref(), Some(DEFAULT_TITLE));
        assert_eq!(menu.prompt, DEFAULT_PROMPT);
        assert!(menu.is_empty());
    }

    #[test]
    fn titled_keeps_default_prompt() {
        let menu = Menu::titled("Title");
        assert_eq!(menu.title.as_deref(), Some("Title"));
        assert_eq!(menu.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn pad_prompt_appends_colon_and_space() {
        assert_eq!(Menu::with_prompt("T", "P", true).prompt, "P: ");
        assert_eq!(Menu::with_prompt("T", "P", false).prompt, "P");
    }

    #[test]
    fn added_entry_appears_exactly_once() {
        let mut menu = Menu::new();
        menu.add('k', "Label").unwrap();
        let hits: Vec<_> = menu.iter().filter(|&(k, v)| k == 'k' && v == "Label").collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn duplicate_key_is_rejected_without_mutation() {
        let mut menu = Menu::new();
        menu.add('a', "first").unwrap();
        let err = menu.add('a', "second").unwrap_err();
        assert!(matches!(err, MenuError::DuplicateKey('a')));
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.get('a'), Some("first"));
    }

    #[test]
    fn add_all_preserves_insertion_order() {
        let mut menu = Menu::new();
        menu.add_all([('a', "1"), ('b', "2")]).unwrap();
        assert_eq!(menu.iter().collect::<Vec<_>>(), vec![('a', "1"), ('b', "2")]);
    }

    #[test]
    fn add_all_stops_at_first_duplicate_keeping_earlier_entries() {
        let mut menu = Menu::new();
        menu.add('a', "existing").unwrap();
        let err = menu.add_all([('b', "kept"), ('a', "dup"), ('c', "never")]).unwrap_err();
        assert!(matches!(err, MenuError::DuplicateKey('a')));
        assert_eq!(menu.get('b'), Some("kept"));
        assert_eq!(menu.get('a'), Some("existing"));
        assert!(!menu.contains('c'));
    }

    #[test]
    fn iteration_is_restartable() {
        let mut menu = Menu::new();
        menu.add_all([('x', "one"), ('y', "two")]).unwrap();
        let first: Vec<_> = menu.iter().collect();
        let second: Vec<_> = menu.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn display_returns_matching_key() {
        let mut menu = Menu::titled("Pick");
        menu.add_all([('a', "Apples"), ('b', "Bread")]).unwrap();
        let mut screen = ScriptedScreen::new(&['b']);
        assert_eq!(menu.display(&mut screen, false).unwrap(), 'b');
        assert_eq!(screen.cleared, 0);
    }

    #[test]
    fn display_rejects_unmapped_key() {
        let mut menu = Menu::titled("Pick");
        menu.add('a', "Apples").unwrap();
        let mut screen = ScriptedScreen::new(&['z']);
        let err = menu.display(&mut screen, false).unwrap_err();
        assert!(matches!(err, MenuError::InvalidSelection('z')));
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn display_clears_only_when_asked() {
        let mut menu = Menu::new();
        menu.add('a', "Apples").unwrap();
        let mut screen = ScriptedScreen::new(&['a']);
        menu.display(&mut screen, true).unwrap();
        assert_eq!(screen.cleared, 1);
    }
}

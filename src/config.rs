use crate::menu::{DEFAULT_TITLE, Menu};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A menu definition as read from a TOML file.
#[derive(Debug, Deserialize)]
pub struct MenuFile {
    pub title: Option<String>,
    pub prompt: Option<String>,
    #[serde(default)]
    pub pad_prompt: bool,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Deserialize)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
}

impl MenuItem {
    /// The selection key, which must be exactly one character.
    ///
    /// # Errors
    /// Returns error if `key` is empty or longer than one character.
    fn key(&self) -> Result<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => anyhow::bail!("menu key {:?} must be exactly one character", self.key),
        }
    }
}

impl MenuFile {
    /// Builds a [`Menu`] from the definition. Missing title or prompt
    /// fall back to the constructor defaults.
    ///
    /// # Errors
    /// Returns error on a malformed key or a key defined twice.
    pub fn into_menu(self) -> Result<Menu> {
        let title = self.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
        let mut menu = match self.prompt {
            Some(prompt) => Menu::with_prompt(title, prompt, self.pad_prompt),
            None => Menu::titled(title),
        };
        for item in self.items {
            let key = item.key()?;
            menu.add(key, item.label)
                .with_context(|| format!("menu file defines key {key:?} twice"))?;
        }
        Ok(menu)
    }
}

/// Reads a menu definition from `path`.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load(path: &Path) -> Result<MenuFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read menu file {}", path.display()))?;
    let file: MenuFile = toml::from_str(&text)
        .with_context(|| format!("Failed to parse menu file {}", path.display()))?;
    tracing::debug!(path = %path.display(), items = file.items.len(), "loaded menu definition");
    Ok(file)
}

/// Where the binary looks for a menu definition when none is given.
#[must_use]
pub fn default_path() -> PathBuf {
    ProjectDirs::from("io", "keymenu", "keymenu").map_or_else(
        || PathBuf::from(".").join(".keymenu").join("menu.toml"),
        |proj_dirs| proj_dirs.config_dir().join("menu.toml"),
    )
}

use crate::menu::Menu;
use crate::term::Screen;
use std::io;

/// Separator width when the menu has no title.
const UNTITLED_SEPARATOR_WIDTH: usize = 10;

/// Writes the menu layout onto `screen`: title line, dash separator,
/// blank line, one `"key: label"` line per entry in insertion order, the
/// separator again, then the prompt without a trailing newline.
///
/// # Errors
/// Returns an error if the screen rejects a write.
pub fn render<S: Screen>(menu: &Menu, screen: &mut S) -> io::Result<()> {
    let line = separator(menu.title.as_deref());
    screen.write_line(menu.title.as_deref().unwrap_or_default())?;
    screen.write_line(&line)?;
    screen.write_line("")?;
    for (key, label) in menu.iter() {
        screen.write_line(&format!("{key}: {label}"))?;
    }
    screen.write_line(&line)?;
    screen.write(&menu.prompt)
}

fn separator(title: Option<&str>) -> String {
    "-".repeat(title.map_or(UNTITLED_SEPARATOR_WIDTH, |t| t.chars().count()))
}

use anyhow::Result;
use clap::Parser;
use keymenu::config;
use keymenu::error::MenuError;
use keymenu::menu::Menu;
use keymenu::term::Term;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML menu definition
    menu: Option<PathBuf>,

    /// Clear the terminal before drawing the menu
    #[arg(long)]
    clear: bool,

    /// Ask once instead of re-prompting on an invalid key
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();
    better_panic::install();

    let menu = load_menu(args.menu.as_deref())?;
    let mut term = Term::new();

    // The menu makes a single attempt per display call; re-prompting on a
    // rejected key happens here.
    loop {
        match menu.display(&mut term, args.clear) {
            Ok(key) => {
                println!();
                tracing::debug!(%key, "selection accepted");
                let label = menu.get(key).unwrap_or_default();
                println!("Selected {key}: {label}");
                return Ok(());
            }
            Err(MenuError::InvalidSelection(key)) if !args.once => {
                println!();
                println!("No entry for {key:?}, try again.");
            }
            Err(err) => {
                println!();
                return Err(err.into());
            }
        }
    }
}

fn load_menu(path: Option<&Path>) -> Result<Menu> {
    if let Some(path) = path {
        return config::load(path)?.into_menu();
    }
    let default = config::default_path();
    if default.exists() {
        return config::load(&default)?.into_menu();
    }
    tracing::debug!("no menu definition found, using the built-in sample");
    Ok(sample_menu()?)
}

fn sample_menu() -> keymenu::error::Result<Menu> {
    let mut menu = Menu::with_prompt("Main Menu", "Pick an option", true);
    menu.add_all([('a', "Add"), ('d', "Delete"), ('v', "View"), ('q', "Quit")])?;
    Ok(menu)
}

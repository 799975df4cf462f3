use clap::{Parser, Subcommand};
use std::process;
use themedb::{persist, schema, validation, ThemeDocument, ThemeStore};

/// themedb CLI: list, inspect, and edit theme files from the command line
#[derive(Parser)]
#[command(name = "themedb", version, about)]
struct Cli {
    /// Directory containing *.ini theme files
    #[arg(long, default_value = "res/theme")]
    theme_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available themes
    List,

    /// Print a theme file's content
    Show {
        /// Theme name
        theme: String,
    },

    /// Add, remove, or rename sections
    Section {
        #[command(subcommand)]
        action: SectionAction,
    },

    /// Add, remove, rename, or move keys
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Generate a schema.json from a reference theme
    GenerateSchema {
        /// Reference theme name
        theme: String,
        /// Output path (default: schema.json inside the theme directory)
        #[arg(long)]
        output: Option<String>,
    },

    /// Check a theme's values against a schema
    Validate {
        /// Theme name
        theme: String,
        /// Path to the schema.json file
        #[arg(long)]
        schema: String,
    },
}

#[derive(Subcommand)]
enum SectionAction {
    /// Add a section to one theme, or to every theme with 'all'
    Add { target: String, name: String },
    /// Remove a section and everything in it
    Remove { target: String, name: String },
    /// Rename a section
    Rename {
        target: String,
        old: String,
        new: String,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Insert or update a key in a section
    Add {
        target: String,
        section: String,
        key: String,
        value: String,
    },
    /// Remove a key from a section
    Remove {
        target: String,
        section: String,
        key: String,
    },
    /// Rename a key within a section
    Rename {
        target: String,
        section: String,
        old: String,
        new: String,
    },
    /// Move a key into another section
    Move {
        target: String,
        section: String,
        key: String,
        dest: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ThemeStore::new(&cli.theme_dir);

    match cli.command {
        Command::List => {
            let names = store.list_themes();
            if names.is_empty() {
                println!("No themes found in {}", store.root().display());
            } else {
                println!("Available themes:");
                for name in names {
                    println!("  {name}");
                }
            }
        }

        Command::Show { theme } => {
            let path = store.theme_path(&theme);
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read theme '{}': {e}", path.display()))?;
            print!("{content}");
        }

        Command::Section { action } => match action {
            SectionAction::Add { target, name } => {
                update_each(&store, &target, |doc| {
                    doc.add_section(&name);
                    Ok(())
                })?;
            }
            SectionAction::Remove { target, name } => {
                update_each(&store, &target, |doc| {
                    doc.remove_section(&name);
                    Ok(())
                })?;
            }
            SectionAction::Rename { target, old, new } => {
                update_each(&store, &target, |doc| doc.rename_section(&old, &new))?;
            }
        },

        Command::Key { action } => match action {
            KeyAction::Add {
                target,
                section,
                key,
                value,
            } => {
                update_each(&store, &target, |doc| doc.add_key(&section, &key, &value))?;
            }
            KeyAction::Remove {
                target,
                section,
                key,
            } => {
                update_each(&store, &target, |doc| {
                    doc.remove_key(&section, &key);
                    Ok(())
                })?;
            }
            KeyAction::Rename {
                target,
                section,
                old,
                new,
            } => {
                update_each(&store, &target, |doc| doc.rename_key(&section, &old, &new))?;
            }
            KeyAction::Move {
                target,
                section,
                key,
                dest,
            } => {
                update_each(&store, &target, |doc| doc.move_key(&section, &key, &dest))?;
            }
        },

        Command::GenerateSchema { theme, output } => {
            let doc = store.load(&theme)?;
            let generated = schema::generate_schema(&doc);
            let out_path = output
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| store.root().join("schema.json"));
            schema::write_schema(&out_path, &generated)?;
            println!("Schema generated at {}", out_path.display());
        }

        Command::Validate {
            theme,
            schema: schema_path,
        } => {
            let doc = store.load(&theme)?;
            let schema = schema::parse_schema(std::path::Path::new(&schema_path))?;
            let failures = validation::validate_document(&doc, &schema);
            if failures.is_empty() {
                println!("{theme}: OK");
            } else {
                for failure in &failures {
                    println!("{failure}");
                }
                println!("{theme}: {} failure(s)", failures.len());
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Run one mutation against a single theme, or against every theme in the
/// store when the target is `all`, saving each document afterwards.
fn update_each(
    store: &ThemeStore,
    target: &str,
    op: impl Fn(&mut ThemeDocument) -> themedb::Result<()>,
) -> Result<(), Box<dyn std::error::Error>> {
    let names = if target == "all" {
        store.list_themes()
    } else {
        vec![target.to_string()]
    };

    for name in names {
        let mut doc = store.load(&name)?;
        op(&mut doc)?;
        persist::save(&doc)?;
        println!("Updated: {}", doc.path().display());
    }
    Ok(())
}

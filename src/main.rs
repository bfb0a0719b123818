use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tt_class::catalog::{load_catalog, Catalog, Category};
use tt_class::saved::{get_saved_path, load_saved, save_saved, SavedConfiguration};
use tt_class::{Calculator, ErrorKind, Selection};

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_INTEGRITY: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum SavedCommands {
    /// List saved configurations, newest first
    List,
    /// Print the submission text of a saved configuration
    Show {
        /// Index number as shown by `saved list` (1-based)
        index: usize,
    },
    /// Remove every saved configuration
    Clear,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List vehicle makes in the catalog
    Makes,
    /// List models of a make
    Models {
        make: String,
    },
    /// List modifications and their points
    Mods {
        /// Only show this category (engine, drivetrain, suspension, chassis, aero, tires, weight)
        category: Option<Category>,
    },
    /// Score a vehicle's modifications and compute its final class
    Classify {
        #[arg(long)]
        make: String,

        #[arg(long)]
        model: String,

        /// Tire choice (required, exactly one)
        #[arg(long)]
        tire: Option<String>,

        /// Modification as CATEGORY=LABEL; repeat for more
        #[arg(long = "mod", value_parser = parse_mod)]
        mods: Vec<(Category, String)>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Save the result to the saved configurations
        #[arg(long)]
        save: bool,
    },
    /// Manage saved configurations
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
}

#[derive(Parser, Debug)]
#[command(name = "tt-class")]
#[command(about = "Time-trial vehicle classification calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/tt-class/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file to use instead of the configured or built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_mod(s: &str) -> Result<(Category, String), String> {
    let (category, label) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=LABEL, got '{}'", s))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label in '{}'", s));
    }
    Ok((category.parse()?, label.to_string()))
}

fn exit_with(message: impl std::fmt::Display, code: i32) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tt_class::telemetry::init(cli.verbose) {
        eprintln!("Logging disabled: {}", e);
    }

    let config = match tt_class::config::load_config(cli.config.map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => exit_with(format!("Config error: {:#}", e), EXIT_CONFIG),
    };

    if let Err(errors) = tt_class::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => load_catalog(path),
        None => Catalog::builtin(),
    };
    let calc = match catalog {
        Ok(c) => Calculator::new(c),
        Err(e) => exit_with(format!("Catalog error: {:#}", e), EXIT_CONFIG),
    };

    let use_colors = tt_class::output::should_use_colors(config.color);
    let saved_path = match config.saved_path.clone().map(Ok).unwrap_or_else(get_saved_path) {
        Ok(p) => p,
        Err(e) => exit_with(format!("Config error: {:#}", e), EXIT_CONFIG),
    };

    match cli.command {
        Commands::Makes => {
            println!(
                "{}",
                tt_class::output::format_name_list(&calc.makes(), "No makes in catalog.")
            );
        }
        Commands::Models { make } => {
            let empty = format!("No models for '{}'.", make);
            println!(
                "{}",
                tt_class::output::format_name_list(&calc.models(&make), &empty)
            );
        }
        Commands::Mods { category } => {
            let categories = match category {
                Some(c) => vec![c],
                None => calc.categories(),
            };
            let blocks: Vec<String> = categories
                .into_iter()
                .map(|c| tt_class::output::format_mod_items(c, calc.items(c), use_colors))
                .collect();
            println!("{}", blocks.join("\n\n"));
        }
        Commands::Classify {
            make,
            model,
            tire,
            mods,
            json,
            save,
        } => {
            let mut selection = Selection::new();
            if let Some(tire) = tire {
                selection.select(Category::Tires, tire);
            }
            for (category, label) in mods {
                if calc.catalog().score_table().points(category, &label).is_none() {
                    tracing::warn!(%category, label = %label, "not in the score table, counts as 0 points");
                }
                selection.select(category, label);
            }

            let result = match calc.evaluate(&make, &model, &selection) {
                Ok(r) => r,
                Err(e) => {
                    let code = match e.kind() {
                        ErrorKind::Validation => EXIT_VALIDATION,
                        ErrorKind::Integrity => EXIT_INTEGRITY,
                    };
                    exit_with(e, code);
                }
            };

            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(s) => println!("{}", s),
                    Err(e) => exit_with(format!("Failed to serialize result: {}", e), EXIT_CONFIG),
                }
            } else {
                println!("{}", tt_class::output::format_result(&result, use_colors));
            }

            if save {
                let mut store = match load_saved(&saved_path) {
                    Ok(s) => s,
                    Err(e) => exit_with(format!("Saved configurations error: {:#}", e), EXIT_CONFIG),
                };
                store.push(SavedConfiguration::new(result, selection));
                if let Err(e) = save_saved(&saved_path, &store) {
                    exit_with(format!("Saved configurations error: {:#}", e), EXIT_CONFIG);
                }
                eprintln!("Saved to {}", saved_path.display());
            }
        }
        Commands::Saved { command } => {
            let mut store = match load_saved(&saved_path) {
                Ok(s) => s,
                Err(e) => exit_with(format!("Saved configurations error: {:#}", e), EXIT_CONFIG),
            };
            match command {
                SavedCommands::List => {
                    println!("{}", tt_class::output::format_saved_list(&store, use_colors));
                }
                SavedCommands::Show { index } => match store.get(index) {
                    Some(saved) => println!("{}", saved.format_submission()),
                    None => exit_with(
                        format!(
                            "Invalid index {}. Must be between 1 and {}.",
                            index,
                            store.len()
                        ),
                        EXIT_VALIDATION,
                    ),
                },
                SavedCommands::Clear => {
                    let count = store.len();
                    store.clear();
                    if let Err(e) = save_saved(&saved_path, &store) {
                        exit_with(format!("Saved configurations error: {:#}", e), EXIT_CONFIG);
                    }
                    eprintln!("Removed {} saved configurations", count);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

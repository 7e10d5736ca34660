use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reel_ingredients::config::AppConfig;
use reel_ingredients::export::shopping_list_to_text_with_config;
use reel_ingredients::observability::{self, metrics::record_error_metrics};
use reel_ingredients::recipe_source::load_recipes_from_path;
use reel_ingredients::validation::validate_scale_factor;
use reel_ingredients::{build_shopping_list, parse_ingredient, scale_ingredient};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse, scale and aggregate recipe ingredients", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse ingredient lines and print them as JSON
    Parse {
        /// Ingredient lines, e.g. "2 1/2 cups flour"
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Scale ingredient lines by a factor
    Scale {
        /// Multiplier applied to every quantity
        #[arg(short, long)]
        factor: f64,
        /// Ingredient lines
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Build a shopping list from recipe JSON files
    List {
        /// Files holding a recipe object or an array of recipes
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Title printed above the list
        #[arg(short, long)]
        title: Option<String>,
        /// Print the aggregated items as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Load and validate configuration at startup
fn load_configuration() -> Result<AppConfig> {
    let config = AppConfig::from_env().map_err(|e| {
        record_error_metrics("config", "startup");
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    config.validate().map_err(|e| {
        record_error_metrics("config", "startup");
        anyhow::anyhow!(
            "Configuration validation failed: {}. Please check your environment variables.",
            e
        )
    })?;

    Ok(config)
}

fn main() -> Result<()> {
    // Load environment variables from .env file first
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_configuration()?;
    observability::init_tracing_with_config(&config.observability)?;
    info!("{}", config.summary());

    match cli.command {
        Command::Parse { lines } => {
            for line in &lines {
                let parsed = parse_ingredient(line);
                println!("{}", serde_json::to_string(&parsed)?);
            }
        }
        Command::Scale { factor, lines } => {
            let factor = validate_scale_factor(factor).map_err(|kind| {
                record_error_metrics("validation", "cli");
                anyhow::anyhow!("Invalid scale factor {}: {}", factor, kind.replace('_', " "))
            })?;
            for line in &lines {
                println!("{}", scale_ingredient(line, factor));
            }
        }
        Command::List { files, title, json } => {
            let mut recipes = Vec::new();
            for file in &files {
                let loaded = load_recipes_from_path(file).map_err(|e| {
                    record_error_metrics("recipe_source", "cli");
                    anyhow::anyhow!("{}", e)
                });
                recipes.extend(
                    loaded.with_context(|| format!("Could not load recipes from {}", file.display()))?,
                );
            }

            let items = build_shopping_list(&recipes);
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                println!(
                    "{}",
                    shopping_list_to_text_with_config(&items, title.as_deref(), &config.export)
                );
            }
        }
    }

    Ok(())
}

use crate::config::{Config, IdStrategy, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use storefront_editor::{save_document, CustomizationDocument, LayoutDocument, DEFAULT_MAX_ENTRIES};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory holding the saved documents
    #[arg(short, long, default_value = "data")]
    pub data_dir: String,

    /// Use reproducible `<type>-<n>` ids instead of timestamped ones
    #[arg(long)]
    pub sequential_ids: bool,

    /// Force overwrite existing config and documents
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing storefront project...".bright_blue().bold()
    );

    let config = Config {
        data_dir: args.data_dir.clone(),
        history_limit: DEFAULT_MAX_ENTRIES,
        id_strategy: if args.sequential_ids {
            IdStrategy::Sequential
        } else {
            IdStrategy::Timestamp
        },
        ..Config::default()
    };

    let data_dir = config.get_data_dir(cwd);
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
        println!("  {} Created {}/", "✓".green(), args.data_dir);
    }

    let mut store = config.store(cwd);
    save_document(&mut store, &config.site_key, &LayoutDocument::new())?;
    println!("  {} Created empty layout '{}'", "✓".green(), config.site_key);

    save_document(&mut store, &config.theme_key, &CustomizationDocument::default())?;
    println!("  {} Created default theme '{}'", "✓".green(), config.theme_key);

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: storefront layout add-section");
    println!("  2. Run: storefront theme preset ocean");
    println!("  3. Run: storefront export --template-id starter --template-name Starter");

    Ok(())
}

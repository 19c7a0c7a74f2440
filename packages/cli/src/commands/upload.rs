use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use storefront_theme::ThemeUploadForm;

#[derive(Debug, Args)]
pub struct ValidateUploadArgs {
    /// JSON file holding the raw upload form fields
    pub form: PathBuf,

    /// Print the validated package as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn validate_upload(args: ValidateUploadArgs, _cwd: &str) -> Result<()> {
    let text = std::fs::read_to_string(&args.form)
        .with_context(|| format!("Cannot read {}", args.form.display()))?;
    let form: ThemeUploadForm = serde_json::from_str(&text)
        .with_context(|| format!("Invalid form file {}", args.form.display()))?;

    let package = form.validate()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&package)?);
        return Ok(());
    }

    println!("  {} {}", "✓".green(), package.name.bright_white().bold());
    println!("    category: {}", package.category);
    println!("    price:    {:.2}", package.price);
    println!("    leaves:   {}", package.customizations.leaf_count());
    println!(
        "    layout:   {}",
        if package.layout.is_some() { "yes" } else { "no" }
    );
    Ok(())
}

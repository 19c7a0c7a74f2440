mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    export, init, layout, suggest, theme, validate_upload, ExportArgs, InitArgs, LayoutArgs,
    SuggestArgs, ThemeArgs, ValidateUploadArgs,
};
use tracing_subscriber::EnvFilter;

/// Storefront CLI - edit page layouts and themes from the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new storefront project
    Init(InitArgs),

    /// Edit the page layout
    Layout(LayoutArgs),

    /// Edit the theme customization
    Theme(ThemeArgs),

    /// Write a theme export bundle
    Export(ExportArgs),

    /// Check a theme upload form before publishing
    ValidateUpload(ValidateUploadArgs),

    /// Turn an assistant reply into suggestion chips
    Suggest(SuggestArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| {
            let cwd = dir.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Layout(args) => layout(args, &cwd),
                Command::Theme(args) => theme(args, &cwd),
                Command::Export(args) => export(args, &cwd),
                Command::ValidateUpload(args) => validate_upload(args, &cwd),
                Command::Suggest(args) => suggest(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

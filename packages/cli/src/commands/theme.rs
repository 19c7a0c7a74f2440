use crate::commands::script::{commit, open_session, read_script, run_steps, Step};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use storefront_editor::{CustomizationAction, ThemeSession};
use storefront_theme::css::to_css_variables;
use storefront_theme::presets::{COLOR_PRESETS, FONT_PRESETS};
use storefront_theme::{schema_paths, LeafPath, LeafValue};

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print one leaf, or every schema leaf when no path is given
    Get { path: Option<String> },

    /// Set one leaf (`colors.primary '#ff0000'`)
    Set { path: String, value: String },

    /// Apply a named color or font preset
    Preset { name: String },

    /// List available presets
    Presets,

    /// Restore every leaf to its default
    Reset,

    /// Print the theme as CSS custom properties
    Css,

    /// Apply a JSON script of actions
    Apply { script: PathBuf },
}

pub fn theme(args: ThemeArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let action = match args.command {
        ThemeCommand::Get { path } => {
            let session: ThemeSession = open_session(&config, cwd, &config.theme_key)?;
            let doc = session.document();
            match path {
                Some(path) => {
                    let value = doc
                        .get(&path)
                        .ok_or_else(|| anyhow!("Unknown customization path: {}", path))?;
                    println!("{}", value);
                }
                None => {
                    for path in schema_paths() {
                        if let Some(value) = doc.get_leaf(&path) {
                            println!("{} = {}", path.to_string().cyan(), value);
                        }
                    }
                }
            }
            return Ok(());
        }
        ThemeCommand::Presets => {
            for preset in COLOR_PRESETS.iter().chain(FONT_PRESETS) {
                println!("  {} {}", preset.name.bright_white(), format!("({})", preset.category).dimmed());
            }
            return Ok(());
        }
        ThemeCommand::Css => {
            let session: ThemeSession = open_session(&config, cwd, &config.theme_key)?;
            print!("{}", to_css_variables(session.document()));
            return Ok(());
        }
        ThemeCommand::Apply { script } => {
            let steps: Vec<Step<CustomizationAction>> = read_script(&script)?;
            let mut session: ThemeSession = open_session(&config, cwd, &config.theme_key)?;
            println!("{}", "🎨 Applying theme script...".bright_blue().bold());
            run_steps(&mut session, steps);
            return commit(&mut session, &config, cwd, &config.theme_key);
        }
        ThemeCommand::Set { path, value } => {
            if LeafPath::parse(&path).is_none() {
                return Err(anyhow!(
                    "Invalid path '{}': expected <category>.<key>, e.g. colors.primary",
                    path
                ));
            }
            CustomizationAction::Set {
                path,
                value: LeafValue::parse_lenient(&value),
            }
        }
        ThemeCommand::Preset { name } => {
            if storefront_theme::find_preset(&name).is_none() {
                return Err(anyhow!("Unknown preset: {} (see `storefront theme presets`)", name));
            }
            CustomizationAction::ApplyPreset { name }
        }
        ThemeCommand::Reset => CustomizationAction::Reset,
    };

    let mut session: ThemeSession = open_session(&config, cwd, &config.theme_key)?;
    run_steps(&mut session, vec![Step::Action(action)]);
    commit(&mut session, &config, cwd, &config.theme_key)
}

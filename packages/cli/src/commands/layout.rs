use crate::commands::script::{commit, open_session, read_script, run_steps, Step};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use storefront_editor::{LayoutAction, LayoutDocument, LayoutSession, KNOWN_TYPES};

#[derive(Debug, Args)]
pub struct LayoutArgs {
    #[command(subcommand)]
    pub command: LayoutCommand,
}

#[derive(Debug, Subcommand)]
pub enum LayoutCommand {
    /// Print the section/component tree
    Show {
        /// Print the raw JSON document instead
        #[arg(long)]
        json: bool,
    },

    /// Append an empty section
    AddSection,

    /// Append a component with default content
    Add {
        section_id: String,
        /// Component type (text, image, button, product-card, ...)
        component_type: String,
    },

    /// Remove a component
    Remove { section_id: String, component_id: String },

    /// Copy a component to the end of its section
    Duplicate { section_id: String, component_id: String },

    /// Move a component by position
    Move {
        source_section_id: String,
        dest_section_id: String,
        source_index: usize,
        dest_index: usize,
    },

    /// Remove a section and all of its components
    DeleteSection { section_id: String },

    /// Rename a section
    Rename { section_id: String, name: String },

    /// Apply a JSON script of actions
    Apply { script: PathBuf },

    /// List component types with built-in defaults
    Types,
}

pub fn layout(args: LayoutArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let action = match args.command {
        LayoutCommand::Show { json } => {
            let session: LayoutSession = open_session(&config, cwd, &config.site_key)?;
            if json {
                println!("{}", serde_json::to_string_pretty(session.document())?);
            } else {
                print_tree(session.document());
            }
            return Ok(());
        }
        LayoutCommand::Types => {
            for kind in KNOWN_TYPES {
                println!("  {}", kind);
            }
            return Ok(());
        }
        LayoutCommand::Apply { script } => {
            let steps: Vec<Step<LayoutAction>> = read_script(&script)?;
            let mut session: LayoutSession = open_session(&config, cwd, &config.site_key)?;
            println!("{}", "🧱 Applying layout script...".bright_blue().bold());
            run_steps(&mut session, steps);
            return commit(&mut session, &config, cwd, &config.site_key);
        }
        LayoutCommand::AddSection => LayoutAction::AddSection,
        LayoutCommand::Add { section_id, component_type } => LayoutAction::AddComponent {
            section_id,
            component_type,
        },
        LayoutCommand::Remove { section_id, component_id } => LayoutAction::DeleteComponent {
            section_id,
            component_id,
        },
        LayoutCommand::Duplicate { section_id, component_id } => LayoutAction::DuplicateComponent {
            section_id,
            component_id,
        },
        LayoutCommand::Move {
            source_section_id,
            dest_section_id,
            source_index,
            dest_index,
        } => LayoutAction::MoveComponent {
            source_section_id,
            dest_section_id,
            source_index,
            dest_index,
        },
        LayoutCommand::DeleteSection { section_id } => LayoutAction::DeleteSection { section_id },
        LayoutCommand::Rename { section_id, name } => LayoutAction::RenameSection { section_id, name },
    };

    let mut session: LayoutSession = open_session(&config, cwd, &config.site_key)?;
    run_steps(&mut session, vec![Step::Action(action)]);
    commit(&mut session, &config, cwd, &config.site_key)
}

fn print_tree(doc: &LayoutDocument) {
    if doc.sections.is_empty() {
        println!("{}", "(empty layout)".dimmed());
        return;
    }
    for section in &doc.sections {
        println!(
            "{} {}",
            section.name.bright_white().bold(),
            format!("[{}]", section.id).dimmed()
        );
        for (index, component) in section.components.iter().enumerate() {
            println!(
                "  {} {} {}",
                format!("{}.", index).dimmed(),
                component.kind().cyan(),
                component.id.dimmed()
            );
        }
    }
}

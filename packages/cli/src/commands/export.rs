use crate::commands::script::open_session;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use storefront_editor::ThemeSession;
use storefront_theme::css::to_stylesheet;
use storefront_theme::{ExportBundle, TemplateRef};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Id of the template the theme is based on
    #[arg(long)]
    pub template_id: String,

    /// Display name of the template
    #[arg(long)]
    pub template_name: String,

    #[arg(long)]
    pub category: Option<String>,

    /// File with extra CSS to embed
    #[arg(long)]
    pub custom_css: Option<PathBuf>,

    /// File with extra JS to embed
    #[arg(long)]
    pub custom_js: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Also write the generated stylesheet next to the bundle
    #[arg(long)]
    pub stylesheet: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let session: ThemeSession = open_session(&config, cwd, &config.theme_key)?;

    let custom_css = read_optional(args.custom_css.as_ref())?;
    let custom_js = read_optional(args.custom_js.as_ref())?;

    let template = TemplateRef {
        id: args.template_id,
        name: args.template_name,
        category: args.category,
    };
    let bundle = ExportBundle::new(template, session.document().clone(), custom_css, custom_js);

    let out_dir = PathBuf::from(cwd).join(&args.out);
    fs::create_dir_all(&out_dir)?;

    let bundle_path = out_dir.join(bundle.file_name());
    bundle.write_to(&bundle_path)?;
    println!("  {} {}", "✓".green(), bundle_path.display());

    if args.stylesheet {
        let css_path = bundle_path.with_extension("css");
        fs::write(&css_path, to_stylesheet(&bundle.customizations, &bundle.custom_css))?;
        println!("  {} {}", "✓".green(), css_path.display());
    }

    println!("{}", "✨ Export complete".green().bold());
    Ok(())
}

fn read_optional(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display())),
        None => Ok(String::new()),
    }
}

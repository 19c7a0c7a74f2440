use anyhow::Result;
use clap::Args;
use colored::Colorize;
use storefront_theme::suggestions::suggestion_chips;

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Assistant reply text
    pub reply: String,

    #[arg(long)]
    pub json: bool,
}

pub fn suggest(args: SuggestArgs, _cwd: &str) -> Result<()> {
    let chips = suggestion_chips(&args.reply);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chips)?);
        return Ok(());
    }

    if chips.is_empty() {
        println!("{}", "No suggestions".dimmed());
        return Ok(());
    }
    for chip in chips {
        match chip.change {
            Some(change) => println!(
                "  {} {} {}",
                "•".cyan(),
                chip.label,
                format!("({} = {})", change.path, change.value).dimmed()
            ),
            None => println!("  {} {}", "•".cyan(), chip.label),
        }
    }
    Ok(())
}

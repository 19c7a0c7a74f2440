//! Running a batch of actions through one edit session.
//!
//! A script is a JSON array whose items are either action objects or the
//! strings `"undo"` / `"redo"`:
//!
//! ```json
//! [ { "type": "addSection" }, "undo", "redo" ]
//! ```

use crate::config::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use storefront_editor::{load_document, EditSession, Persisted, Reducer};
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    Undo,
    Redo,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Step<A> {
    Control(Control),
    Action(A),
}

pub fn read_script<A: DeserializeOwned>(path: &Path) -> Result<Vec<Step<A>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read script {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid script {}", path.display()))
}

/// Open a session on the document stored under `key`
pub fn open_session<R>(config: &Config, cwd: &str, key: &str) -> Result<EditSession<R>>
where
    R: Reducer,
    R::Document: Persisted + Default,
{
    let store = config.store(cwd);
    let document: R::Document = load_document(&store, key)?;
    Ok(EditSession::with_history_limit(
        document,
        config.id_generator(),
        config.history_limit,
    ))
}

/// Apply steps in order, printing one line per step
pub fn run_steps<R: Reducer>(session: &mut EditSession<R>, steps: Vec<Step<R>>) {
    for step in steps {
        match step {
            Step::Control(Control::Undo) => report("undo", session.undo()),
            Step::Control(Control::Redo) => report("redo", session.redo()),
            Step::Action(action) => {
                let label = action.label();
                let changed = session.dispatch(&action);
                report(&label, changed);
            }
        }
    }
    debug!(entries = session.history().len(), "Script finished");
}

/// Save the session if anything changed
pub fn commit<R>(session: &mut EditSession<R>, config: &Config, cwd: &str, key: &str) -> Result<()>
where
    R: Reducer,
    R::Document: Persisted,
{
    if !session.is_dirty() {
        println!("{}", "No changes to save".dimmed());
        return Ok(());
    }
    let mut store = config.store(cwd);
    session.save_to(&mut store, key)?;
    println!("  {} Saved {}", "✓".green(), key.bright_white());
    Ok(())
}

fn report(label: &str, changed: bool) {
    if changed {
        println!("  {} {}", "✓".green(), label);
    } else {
        println!("  {} {} (no change)", "·".dimmed(), label.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdStrategy;
    use storefront_editor::{LayoutAction, LayoutSession};

    #[test]
    fn test_parse_mixed_script() {
        let json = r#"[{ "type": "addSection" }, "undo", "redo"]"#;
        let steps: Vec<Step<LayoutAction>> = serde_json::from_str(json).unwrap();
        assert_eq!(steps.len(), 3);
        assert!(matches!(steps[0], Step::Action(LayoutAction::AddSection)));
        assert!(matches!(steps[1], Step::Control(Control::Undo)));
        assert!(matches!(steps[2], Step::Control(Control::Redo)));
    }

    #[test]
    fn test_run_and_commit_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config {
            id_strategy: IdStrategy::Sequential,
            ..Config::default()
        };

        let mut session: LayoutSession = open_session(&config, &cwd, "site").unwrap();
        run_steps(
            &mut session,
            vec![
                Step::Action(LayoutAction::AddSection),
                Step::Action(LayoutAction::AddSection),
                Step::Control(Control::Undo),
            ],
        );
        assert_eq!(session.document().sections.len(), 1);
        commit(&mut session, &config, &cwd, "site").unwrap();
        assert!(!session.is_dirty());

        let reopened: LayoutSession = open_session(&config, &cwd, "site").unwrap();
        assert_eq!(reopened.document(), session.document());
    }
}

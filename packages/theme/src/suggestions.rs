//! # Suggestion Chips
//!
//! Local classification of AI assistant replies into quick-action chips.
//! Pure keyword/regex matching; the reply itself comes from the remote
//! assistant and is never interpreted beyond this.

use crate::customization::LeafValue;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Color,
    Typography,
    Layout,
    Spacing,
    Animation,
}

impl SuggestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Color => "Adjust colors",
            SuggestionKind::Typography => "Change fonts",
            SuggestionKind::Layout => "Rework layout",
            SuggestionKind::Spacing => "Tune spacing",
            SuggestionKind::Animation => "Add motion",
        }
    }
}

/// Leaf update a chip can apply directly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedChange {
    pub path: String,
    pub value: LeafValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<SuggestedChange>,
}

fn patterns() -> &'static [(SuggestionKind, Regex)] {
    static PATTERNS: OnceLock<Vec<(SuggestionKind, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (SuggestionKind::Color, r"(?i)\b(colou?rs?|palette|hue|contrast)\b|#[0-9a-f]{3,6}\b"),
            (SuggestionKind::Typography, r"(?i)\b(fonts?|typeface|typography|serif|sans-serif|headings?)\b"),
            (SuggestionKind::Layout, r"(?i)\b(layout|grid|columns?|header|footer|sidebar|hero)\b"),
            (SuggestionKind::Spacing, r"(?i)\b(spacing|padding|margins?|whitespace|gaps?)\b"),
            (SuggestionKind::Animation, r"(?i)\b(animations?|animate|transitions?|hover|motion)\b"),
        ]
        .into_iter()
        .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("static suggestion pattern")))
        .collect()
    })
}

fn hex_color() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").expect("static hex pattern"))
}

/// Categories mentioned by a reply, in fixed order, without duplicates
pub fn classify(reply: &str) -> Vec<SuggestionKind> {
    patterns()
        .iter()
        .filter(|(_, re)| re.is_match(reply))
        .map(|(kind, _)| *kind)
        .collect()
}

/// Hex colors mentioned in a reply, lowercased, in order of appearance
pub fn extract_colors(reply: &str) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for m in hex_color().find_iter(reply) {
        let color = m.as_str().to_lowercase();
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    colors
}

/// Build the chips shown under an assistant reply
pub fn suggestion_chips(reply: &str) -> Vec<Suggestion> {
    let mut chips: Vec<Suggestion> = classify(reply)
        .into_iter()
        .map(|kind| Suggestion {
            kind,
            label: kind.label().to_string(),
            change: None,
        })
        .collect();

    for (color, key) in extract_colors(reply).into_iter().zip(["primary", "secondary", "accent"]) {
        chips.push(Suggestion {
            kind: SuggestionKind::Color,
            label: format!("Use {} as {} color", color, key),
            change: Some(SuggestedChange {
                path: format!("colors.{}", key),
                value: LeafValue::Text(color),
            }),
        });
    }

    chips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_multiple_categories() {
        let reply = "Try a warmer color palette and a serif font for headings, with more padding.";
        assert_eq!(
            classify(reply),
            vec![
                SuggestionKind::Color,
                SuggestionKind::Typography,
                SuggestionKind::Spacing
            ]
        );
    }

    #[test]
    fn test_classify_nothing() {
        assert!(classify("Sounds good, let me know!").is_empty());
    }

    #[test]
    fn test_extract_colors_dedupes_and_lowercases() {
        let reply = "Use #FF5733 for buttons, #fff for text and #ff5733 again.";
        assert_eq!(extract_colors(reply), vec!["#ff5733", "#fff"]);
    }

    #[test]
    fn test_chips_include_direct_color_changes() {
        let chips = suggestion_chips("Switch the primary to #1e40af and accent to #f59e0b.");

        let changes: Vec<_> = chips.iter().filter_map(|c| c.change.as_ref()).collect();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].path, "colors.primary");
        assert_eq!(changes[0].value, LeafValue::Text("#1e40af".to_string()));
        assert_eq!(changes[1].path, "colors.secondary");
    }

    #[test]
    fn test_hover_maps_to_animation() {
        let chips = suggestion_chips("Add a subtle hover effect on product cards.");
        assert!(chips.iter().any(|c| c.kind == SuggestionKind::Animation));
    }
}

//! Built-in demonstration inputs.

use super::TranslationDirection;
use crate::ui::Style;

/// A fixed sentence and direction used to pre-fill the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleEntry {
    pub source_text: &'static str,
    pub direction: TranslationDirection,
}

pub const EXAMPLES: &[ExampleEntry] = &[
    ExampleEntry {
        source_text: "Silang tersebut taler menandai tanggal hak tersangka mantuka ring diadili dengan cepat.",
        direction: TranslationDirection::BalineseToEnglish,
    },
    ExampleEntry {
        source_text: "Maroochydore ngalahang Caboolture ring final purwaka.",
        direction: TranslationDirection::BalineseToEnglish,
    },
    ExampleEntry {
        source_text: "At 11:20, the police asked the protesters to move back on to the pavement, stating that they needed to balance the right to protest with the traffic building up.",
        direction: TranslationDirection::EnglishToBalinese,
    },
];

/// Prints the built-in examples to stdout.
pub fn print_examples() {
    println!("{}", Style::header("Examples"));
    for (index, example) in EXAMPLES.iter().enumerate() {
        println!(
            "  {} {} {}",
            Style::code(index),
            Style::label(format!("[{}]", example.direction.label())),
            example.source_text
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_are_non_empty() {
        assert!(!EXAMPLES.is_empty());
        assert!(EXAMPLES.iter().all(|e| !e.source_text.trim().is_empty()));
    }

    #[test]
    fn test_examples_cover_both_directions() {
        for direction in TranslationDirection::ALL {
            assert!(EXAMPLES.iter().any(|e| e.direction == direction));
        }
    }
}

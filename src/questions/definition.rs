//! Static question definitions.

use super::{Answer, QuestionId};
use serde::Serialize;

/// One selectable option of a radio or multi-select question.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct QuestionOption {
    pub token: &'static str,
    pub label: &'static str,
}

/// Numeric range of a slider question.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct SliderRange {
    pub min: u8,
    pub max: u8,
    pub min_label: &'static str,
    pub max_label: &'static str,
    pub default: u8,
}

/// How a question collects its answer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    Radio {
        options: &'static [QuestionOption],
    },
    MultiSelect {
        options: &'static [QuestionOption],
        max_selections: usize,
    },
    Slider(SliderRange),
}

impl InputKind {
    /// Name of the answer shape this input produces.
    pub fn answer_kind(&self) -> &'static str {
        match self {
            Self::Radio { .. } => "choice",
            Self::MultiSelect { .. } => "selection",
            Self::Slider(_) => "scale",
        }
    }

    pub fn options(&self) -> &'static [QuestionOption] {
        match self {
            Self::Radio { options } | Self::MultiSelect { options, .. } => *options,
            Self::Slider(_) => &[],
        }
    }
}

/// Immutable description of one quiz question.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct QuestionDefinition {
    pub id: QuestionId,
    pub key: &'static str,
    pub prompt: &'static str,
    pub input: InputKind,
}

impl QuestionDefinition {
    pub fn has_option(&self, token: &str) -> bool {
        self.input.options().iter().any(|o| o.token == token)
    }

    /// Bring an answer within this question's limits.
    ///
    /// Selections drop repeated tokens and are capped at the maximum;
    /// slider values are clamped into range. Other answers pass through.
    pub fn normalize(&self, answer: Answer) -> Answer {
        match (&self.input, answer) {
            (InputKind::MultiSelect { max_selections, .. }, Answer::Selection(tokens)) => {
                let mut kept: Vec<String> = Vec::with_capacity(*max_selections);
                for token in tokens {
                    if kept.len() == *max_selections {
                        break;
                    }
                    if !kept.contains(&token) {
                        kept.push(token);
                    }
                }
                Answer::Selection(kept)
            }
            (InputKind::Slider(range), Answer::Scale(value)) => {
                Answer::Scale(value.clamp(range.min, range.max))
            }
            (_, answer) => answer,
        }
    }
}

const fn option(token: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption { token, label }
}

/// The six questions, in order.
pub static QUESTIONS: [QuestionDefinition; 6] = [
    QuestionDefinition {
        id: QuestionId::DRINK_STYLE,
        key: "drink_style",
        prompt: "How do you usually take your coffee?",
        input: InputKind::Radio {
            options: &[
                option("black", "Black, no fuss"),
                option("with-milk", "With milk or cream"),
                option("sweet", "Sweet and indulgent"),
                option("rich-chocolatey", "Rich and chocolatey"),
                option("smooth-nutty", "Smooth and nutty"),
                option("bright-fruity", "Bright and fruity"),
            ],
        },
    },
    QuestionDefinition {
        id: QuestionId::ROAST,
        key: "roast",
        prompt: "How dark do you like your roast?",
        input: InputKind::Radio {
            options: &[
                option("light", "Light"),
                option("medium", "Medium"),
                option("medium-dark", "Medium-dark"),
                option("dark", "Dark"),
            ],
        },
    },
    QuestionDefinition {
        id: QuestionId::FLAVORS,
        key: "flavors",
        prompt: "Pick up to three flavors you love",
        input: InputKind::MultiSelect {
            options: &[
                option("chocolate", "Chocolate"),
                option("nutty", "Nutty"),
                option("caramel", "Caramel"),
                option("fruity", "Fruity"),
                option("citrus", "Citrus"),
                option("floral", "Floral"),
                option("spicy", "Spicy"),
                option("earthy", "Earthy"),
            ],
            max_selections: 3,
        },
    },
    QuestionDefinition {
        id: QuestionId::BITTERNESS,
        key: "bitterness",
        prompt: "How much bitterness can you handle?",
        input: InputKind::Slider(SliderRange {
            min: 1,
            max: 5,
            min_label: "Barely there",
            max_label: "Bring it on",
            default: 3,
        }),
    },
    QuestionDefinition {
        id: QuestionId::BREW_METHOD,
        key: "brew_method",
        prompt: "How do you brew at home?",
        input: InputKind::Radio {
            options: &[
                option("drip", "Drip machine"),
                option("pour-over", "Pour-over"),
                option("espresso", "Espresso"),
                option("french-press", "French press"),
                option("aeropress", "AeroPress"),
                option("moka-pot", "Moka pot"),
                option("cold-brew", "Cold brew"),
            ],
        },
    },
    QuestionDefinition {
        id: QuestionId::CAFFEINE,
        key: "caffeine",
        prompt: "How much caffeine do you want?",
        input: InputKind::Radio {
            options: &[
                option("full", "Full caffeine"),
                option("half", "Half caff"),
                option("decaf", "Decaf"),
            ],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavors_question_caps_at_three() {
        let definition = QuestionId::FLAVORS.definition();
        assert!(matches!(
            definition.input,
            InputKind::MultiSelect {
                max_selections: 3,
                ..
            }
        ));
    }

    #[test]
    fn normalize_caps_and_dedupes_selection_in_order() {
        let definition = QuestionId::FLAVORS.definition();
        let normalized = definition.normalize(Answer::selection([
            "spicy",
            "chocolate",
            "spicy",
            "citrus",
            "floral",
        ]));

        assert_eq!(
            normalized,
            Answer::selection(["spicy", "chocolate", "citrus"])
        );
    }

    #[test]
    fn normalize_clamps_slider() {
        let definition = QuestionId::BITTERNESS.definition();
        assert_eq!(definition.normalize(Answer::scale(0)), Answer::scale(1));
        assert_eq!(definition.normalize(Answer::scale(9)), Answer::scale(5));
        assert_eq!(definition.normalize(Answer::scale(4)), Answer::scale(4));
    }

    #[test]
    fn normalize_leaves_other_answers_alone() {
        let definition = QuestionId::ROAST.definition();
        assert_eq!(
            definition.normalize(Answer::choice("unknown")),
            Answer::choice("unknown")
        );
        assert_eq!(definition.normalize(Answer::Skipped), Answer::Skipped);
        assert_eq!(definition.normalize(Answer::scale(9)), Answer::scale(9));
    }

    #[test]
    fn options_are_known() {
        let definition = QuestionId::BREW_METHOD.definition();
        assert!(definition.has_option("espresso"));
        assert!(!definition.has_option("siphon"));
        assert!(QuestionId::BITTERNESS.definition().input.options().is_empty());
    }

    #[test]
    fn definitions_serialize_for_presentation() {
        let json = serde_json::to_value(QuestionId::BITTERNESS.definition()).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["input"]["kind"], "slider");
        assert_eq!(json["input"]["max"], 5);
    }
}

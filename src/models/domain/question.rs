use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::domain::option_list::{OptionList, DEFAULT_OPTION_SLOTS};

pub const DEFAULT_TRUE_FALSE_TEXT: &str = "Is this statement true or false?";
pub const DEFAULT_FILL_IN_THE_BLANK_TEXT: &str = "____ is the capital of France.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    TrueFalse,
    MultipleChoice,
    FillInTheBlank,
    MultipleResponse,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::TrueFalse => "truefalse",
            QuestionKind::MultipleChoice => "multiplechoice",
            QuestionKind::FillInTheBlank => "fillintheblank",
            QuestionKind::MultipleResponse => "multipleresponse",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single authored question. The `type` tag picks the field shape.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Question {
    TrueFalse {
        text: String,
        correct_answer: Option<bool>,
        #[serde(default)]
        difficulty: Difficulty,
    },
    MultipleChoice {
        text: String,
        options: OptionList,
        correct_answer: Option<usize>,
        #[serde(default)]
        difficulty: Difficulty,
    },
    FillInTheBlank {
        text: String,
        correct_answer: String,
        #[serde(default)]
        difficulty: Difficulty,
    },
    MultipleResponse {
        text: String,
        options: OptionList,
        #[serde(default)]
        correct_answers: BTreeSet<usize>,
        #[serde(default)]
        difficulty: Difficulty,
    },
}

impl Question {
    /// Builds a question of `kind` with the authoring defaults.
    pub fn new(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::TrueFalse => Question::TrueFalse {
                text: DEFAULT_TRUE_FALSE_TEXT.to_string(),
                correct_answer: None,
                difficulty: Difficulty::Easy,
            },
            QuestionKind::MultipleChoice => Question::MultipleChoice {
                text: String::new(),
                options: OptionList::blank(DEFAULT_OPTION_SLOTS),
                correct_answer: None,
                difficulty: Difficulty::Easy,
            },
            QuestionKind::FillInTheBlank => Question::FillInTheBlank {
                text: DEFAULT_FILL_IN_THE_BLANK_TEXT.to_string(),
                correct_answer: String::new(),
                difficulty: Difficulty::Easy,
            },
            QuestionKind::MultipleResponse => Question::MultipleResponse {
                text: String::new(),
                options: OptionList::blank(DEFAULT_OPTION_SLOTS),
                correct_answers: BTreeSet::new(),
                difficulty: Difficulty::Easy,
            },
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::TrueFalse { .. } => QuestionKind::TrueFalse,
            Question::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Question::FillInTheBlank { .. } => QuestionKind::FillInTheBlank,
            Question::MultipleResponse { .. } => QuestionKind::MultipleResponse,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Question::TrueFalse { text, .. }
            | Question::MultipleChoice { text, .. }
            | Question::FillInTheBlank { text, .. }
            | Question::MultipleResponse { text, .. } => text,
        }
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        match self {
            Question::TrueFalse { text, .. }
            | Question::MultipleChoice { text, .. }
            | Question::FillInTheBlank { text, .. }
            | Question::MultipleResponse { text, .. } => *text = value.into(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            Question::TrueFalse { difficulty, .. }
            | Question::MultipleChoice { difficulty, .. }
            | Question::FillInTheBlank { difficulty, .. }
            | Question::MultipleResponse { difficulty, .. } => *difficulty,
        }
    }

    pub fn set_difficulty(&mut self, level: Difficulty) {
        match self {
            Question::TrueFalse { difficulty, .. }
            | Question::MultipleChoice { difficulty, .. }
            | Question::FillInTheBlank { difficulty, .. }
            | Question::MultipleResponse { difficulty, .. } => *difficulty = level,
        }
    }

    pub fn options(&self) -> Option<&OptionList> {
        match self {
            Question::MultipleChoice { options, .. } | Question::MultipleResponse { options, .. } => {
                Some(options)
            }
            Question::TrueFalse { .. } | Question::FillInTheBlank { .. } => None,
        }
    }

    fn options_mut(&mut self) -> Option<&mut OptionList> {
        match self {
            Question::MultipleChoice { options, .. } | Question::MultipleResponse { options, .. } => {
                Some(options)
            }
            Question::TrueFalse { .. } | Question::FillInTheBlank { .. } => None,
        }
    }

    /// Writes an option value and re-sizes the option list.
    ///
    /// Returns `false` when the question has no option at `index`.
    pub fn edit_option(&mut self, index: usize, value: impl Into<String>) -> bool {
        let Some(options) = self.options_mut() else {
            return false;
        };
        match options.edit(index, value) {
            Some(removed) => {
                if let Some(removed) = removed {
                    self.reindex_answers_after_removal(removed);
                }
                true
            }
            None => false,
        }
    }

    /// Deletes an option outright, without the blank-slot rule.
    pub fn remove_option(&mut self, index: usize) -> Option<String> {
        let removed = self.options_mut()?.remove(index)?;
        self.reindex_answers_after_removal(index);
        Some(removed)
    }

    /// Keeps stored answer indices pointing at the same option text after `removed` was
    /// taken out of the list. An answer on the removed option is dropped.
    fn reindex_answers_after_removal(&mut self, removed: usize) {
        match self {
            Question::MultipleChoice { correct_answer, .. } => {
                *correct_answer = match *correct_answer {
                    Some(current) if current == removed => None,
                    Some(current) if current > removed => Some(current - 1),
                    other => other,
                };
            }
            Question::MultipleResponse {
                correct_answers, ..
            } => {
                *correct_answers = correct_answers
                    .iter()
                    .filter(|&&current| current != removed)
                    .map(|&current| if current > removed { current - 1 } else { current })
                    .collect();
            }
            Question::TrueFalse { .. } | Question::FillInTheBlank { .. } => {}
        }
    }
}

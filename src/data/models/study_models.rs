use serde::{Deserialize, Serialize};
use validator::Validate;

pub const EXPECTED_FLASHCARDS: usize = 8;
pub const EXPECTED_QUIZ_QUESTIONS: usize = 5;
pub const EXPECTED_TIPS: std::ops::RangeInclusive<usize> = 4..=5;

/// Request body for the generate-study function
#[derive(Debug, Deserialize)]
pub struct GenerateStudyRequest {
    pub topic: Option<serde_json::Value>,
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,
}

/// Study materials returned by the model for one topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterials {
    pub explanation: String,
    pub flashcards: Vec<Flashcard>,
    #[validate(nested)]
    pub quiz: Vec<QuizQuestion>,
    pub study_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    #[validate(length(equal = 4))]
    pub options: Vec<String>,
    #[validate(range(max = 3))]
    pub correct_index: u8,
    pub explanation: String,
}

impl StudyMaterials {
    /// Counts the model was asked for but that are not enforced.
    pub fn count_mismatches(&self) -> Vec<String> {
        let mut mismatches = Vec::new();
        if self.flashcards.len() != EXPECTED_FLASHCARDS {
            mismatches.push(format!(
                "expected {} flashcards, got {}",
                EXPECTED_FLASHCARDS,
                self.flashcards.len()
            ));
        }
        if self.quiz.len() != EXPECTED_QUIZ_QUESTIONS {
            mismatches.push(format!(
                "expected {} quiz questions, got {}",
                EXPECTED_QUIZ_QUESTIONS,
                self.quiz.len()
            ));
        }
        if !EXPECTED_TIPS.contains(&self.study_tips.len()) {
            mismatches.push(format!(
                "expected 4-5 study tips, got {}",
                self.study_tips.len()
            ));
        }
        mismatches
    }
}

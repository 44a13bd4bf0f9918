//! Data models for interview questions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty rating of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!(
                "Invalid difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

/// A single interview question with its self-rated confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub topic: String,
    pub difficulty: Difficulty,
    /// Self-rated mastery, 1 (no idea) to 5 (nailed it)
    pub confidence: i32,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn new(
        question: String,
        answer: Option<String>,
        topic: String,
        difficulty: Difficulty,
        confidence: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            question,
            answer,
            topic,
            difficulty,
            confidence,
            created_at: Utc::now(),
        }
    }

    /// Whether the question is flagged for revision (confidence 2 or below)
    pub fn needs_revision(&self) -> bool {
        self.confidence <= 2
    }
}

/// Fields supplied when creating a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    pub topic: String,
    pub difficulty: Difficulty,
    pub confidence: i32,
}

/// Partial update for a question; absent fields are left untouched.
/// `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionPatch {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub confidence: Option<i32>,
}

impl QuestionPatch {
    /// Apply the patch to a question, preserving identity fields
    pub fn apply(&self, question: &mut Question) {
        if let Some(text) = &self.question {
            question.question = text.clone();
        }
        if let Some(answer) = &self.answer {
            question.answer = Some(answer.clone());
        }
        if let Some(topic) = &self.topic {
            question.topic = topic.clone();
        }
        if let Some(difficulty) = self.difficulty {
            question.difficulty = difficulty;
        }
        if let Some(confidence) = self.confidence {
            question.confidence = confidence;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.answer.is_none()
            && self.topic.is_none()
            && self.difficulty.is_none()
            && self.confidence.is_none()
    }
}

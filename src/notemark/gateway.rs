//! # AI Study Gateway Contract
//!
//! The study features (table of contents, contextual Q&A, quiz generation,
//! chat) are served by an external generative-AI backend. That backend is a
//! black box to this crate: no transport ships here, only the
//! request/response contract and a scripted stand-in.
//!
//! ## Design Rationale
//!
//! The contract is a trait so that:
//! - The command layer stays testable with [`ScriptedGateway`] (no network)
//! - Embedders can wire any backend without changing core logic
//! - Schema validation lives on this side of the boundary, where a
//!   malformed response becomes a typed error instead of a render crash
//!
//! All catalog operations are synchronous and side-effect-free, so a caller
//! may invoke them before or after a gateway round-trip without ordering
//! constraints.

use crate::error::{NoteMarkError, Result};
use crate::model::Topic;
use serde::{Deserialize, Serialize};

/// Who produced a chat turn. Serialized lowercase to match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of a multi-turn conversation, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
        }
    }
}

pub const QUIZ_MIN_QUESTIONS: usize = 3;
pub const QUIZ_MAX_QUESTIONS: usize = 5;
pub const QUIZ_OPTIONS: usize = 4;

/// One multiple-choice question. `answer_index` is zero-based into
/// `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: usize,
    pub explanation: String,
}

/// A generated quiz: 3–5 questions with exactly 4 options each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Checks the response schema the backend promised: question count in
    /// range, exactly four options per question, answer index in bounds.
    pub fn validate(&self) -> Result<()> {
        let count = self.questions.len();
        if !(QUIZ_MIN_QUESTIONS..=QUIZ_MAX_QUESTIONS).contains(&count) {
            return Err(NoteMarkError::Gateway(format!(
                "quiz has {} questions, expected {} to {}",
                count, QUIZ_MIN_QUESTIONS, QUIZ_MAX_QUESTIONS
            )));
        }

        for (i, q) in self.questions.iter().enumerate() {
            if q.options.len() != QUIZ_OPTIONS {
                return Err(NoteMarkError::Gateway(format!(
                    "question {} has {} options, expected {}",
                    i + 1,
                    q.options.len(),
                    QUIZ_OPTIONS
                )));
            }
            if q.answer_index >= q.options.len() {
                return Err(NoteMarkError::Gateway(format!(
                    "question {} answer index {} is out of range",
                    i + 1,
                    q.answer_index
                )));
            }
        }

        Ok(())
    }
}

/// The four flows the study backend serves.
pub trait Gateway {
    /// Generates a table of contents for a page context.
    fn outline(&self, context: &str) -> Result<Vec<String>>;

    /// Answers a question about the given page context.
    fn ask(&self, context: &str, question: &str) -> Result<String>;

    /// Generates a quiz from the given page context.
    fn quiz(&self, context: &str) -> Result<Quiz>;

    /// Continues a multi-turn conversation.
    fn chat(&self, history: &[ChatTurn]) -> Result<String>;
}

/// Flattens a topic into the raw page text handed to the gateway as
/// context. The gateway sees what a reader of the page sees, nothing more.
pub fn page_context(topic: &Topic) -> String {
    let mut text = format!("{}\n{}\n\n{}\n", topic.name, topic.category, topic.description);

    if !topic.how_it_works.is_empty() {
        text.push_str("\nHow it works:\n");
        for (i, step) in topic.how_it_works.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, step));
        }
    }

    if !topic.examples.is_empty() {
        text.push_str("\nExamples:\n");
        for example in &topic.examples {
            text.push_str(&format!("$ {}\n{}\n", example.code, example.text));
        }
    }

    if let Some(note) = &topic.real_world {
        text.push_str(&format!("\nReal world: {}\n", note));
    }

    text
}

/// Canned-response gateway for tests and offline embedding.
///
/// Plays the role `InMemoryStore` plays for storage-backed designs: the
/// command layer is exercised against it without any network in the loop.
#[derive(Debug, Clone)]
pub struct ScriptedGateway {
    outline: Vec<String>,
    answer: String,
    quiz: Quiz,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            outline: vec!["Overview".to_string(), "Usage".to_string()],
            answer: "scripted answer".to_string(),
            quiz: sample_quiz(),
        }
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quiz = quiz;
        self
    }
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway for ScriptedGateway {
    fn outline(&self, _context: &str) -> Result<Vec<String>> {
        Ok(self.outline.clone())
    }

    fn ask(&self, _context: &str, _question: &str) -> Result<String> {
        Ok(self.answer.clone())
    }

    fn quiz(&self, _context: &str) -> Result<Quiz> {
        Ok(self.quiz.clone())
    }

    fn chat(&self, history: &[ChatTurn]) -> Result<String> {
        if history.is_empty() {
            return Err(NoteMarkError::Gateway("empty chat history".to_string()));
        }
        Ok(self.answer.clone())
    }
}

fn sample_quiz() -> Quiz {
    let question = |q: &str, answer_index: usize| QuizQuestion {
        question: q.to_string(),
        options: vec![
            "option a".to_string(),
            "option b".to_string(),
            "option c".to_string(),
            "option d".to_string(),
        ],
        answer_index,
        explanation: "because".to_string(),
    };

    Quiz {
        questions: vec![
            question("first?", 0),
            question("second?", 1),
            question("third?", 2),
        ],
    }
}

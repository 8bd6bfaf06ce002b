//! Study operations: the catalog side of the AI gateway round-trip.
//!
//! Each operation resolves a topic, flattens it into page context, hands it
//! to the gateway, and validates what comes back. Generic over [`Gateway`]
//! so tests (and offline embedders) run against a scripted backend.

use crate::catalog::Collection;
use crate::commands::CmdResult;
use crate::error::{NoteMarkError, Result};
use crate::gateway::{page_context, ChatTurn, Gateway};
use crate::slug;

fn context_for(collection: &Collection, token: &str) -> Result<String> {
    let topic = slug::resolve(collection.topics(), token)
        .ok_or_else(|| NoteMarkError::TopicNotFound(token.to_string()))?;
    Ok(page_context(topic))
}

/// Table of contents for a topic's page.
pub fn outline<G: Gateway>(gateway: &G, collection: &Collection, token: &str) -> Result<CmdResult> {
    let context = context_for(collection, token)?;
    let outline = gateway.outline(&context)?;
    Ok(CmdResult::default().with_outline(outline))
}

/// Contextual Q&A about a topic's page.
pub fn ask<G: Gateway>(
    gateway: &G,
    collection: &Collection,
    token: &str,
    question: &str,
) -> Result<CmdResult> {
    let context = context_for(collection, token)?;
    let answer = gateway.ask(&context, question)?;
    Ok(CmdResult::default().with_answer(answer))
}

/// Quiz generation for a topic's page. The response schema is validated
/// here; a malformed quiz is a gateway error, never a render crash.
pub fn quiz<G: Gateway>(gateway: &G, collection: &Collection, token: &str) -> Result<CmdResult> {
    let context = context_for(collection, token)?;
    let quiz = gateway.quiz(&context)?;
    quiz.validate()?;
    Ok(CmdResult::default().with_quiz(quiz))
}

/// Free-form multi-turn chat, independent of any one page.
pub fn chat<G: Gateway>(gateway: &G, history: &[ChatTurn]) -> Result<CmdResult> {
    let answer = gateway.chat(history)?;
    Ok(CmdResult::default().with_answer(answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Library;
    use crate::gateway::{Quiz, QuizQuestion, ScriptedGateway};
    use crate::model::Domain;

    fn linux() -> Library {
        Library::builtin().unwrap()
    }

    #[test]
    fn outline_runs_against_a_resolved_topic() {
        let library = linux();
        let gateway = ScriptedGateway::new();

        let result = outline(&gateway, library.collection(Domain::Linux), "grep").unwrap();
        assert_eq!(result.outline, vec!["Overview", "Usage"]);
    }

    #[test]
    fn ask_returns_the_gateway_answer() {
        let library = linux();
        let gateway = ScriptedGateway::new().with_answer("use -r for recursive search");

        let result = ask(
            &gateway,
            library.collection(Domain::Linux),
            "grep",
            "how do I search a directory?",
        )
        .unwrap();
        assert_eq!(result.answer.unwrap(), "use -r for recursive search");
    }

    #[test]
    fn quiz_is_validated_before_returning() {
        let library = linux();
        let bad = Quiz {
            questions: vec![QuizQuestion {
                question: "only one?".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                answer_index: 0,
                explanation: String::new(),
            }],
        };
        let gateway = ScriptedGateway::new().with_quiz(bad);

        let err = quiz(&gateway, library.collection(Domain::Linux), "grep").unwrap_err();
        assert!(matches!(err, NoteMarkError::Gateway(_)));
    }

    #[test]
    fn valid_quiz_passes_through() {
        let library = linux();
        let gateway = ScriptedGateway::new();

        let result = quiz(&gateway, library.collection(Domain::Linux), "tar").unwrap();
        assert_eq!(result.quiz.unwrap().questions.len(), 3);
    }

    #[test]
    fn study_on_an_unknown_slug_is_not_found() {
        let library = linux();
        let gateway = ScriptedGateway::new();

        let err = outline(&gateway, library.collection(Domain::Linux), "nonexistent-cmd")
            .unwrap_err();
        assert!(matches!(err, NoteMarkError::TopicNotFound(_)));
    }

    #[test]
    fn chat_forwards_history() {
        let gateway = ScriptedGateway::new().with_answer("pipes connect stdout to stdin");
        let history = vec![
            ChatTurn::user("what do pipes do?"),
            ChatTurn::model("they connect commands."),
            ChatTurn::user("more detail please"),
        ];

        let result = chat(&gateway, &history).unwrap();
        assert!(result.answer.unwrap().contains("stdout"));
    }
}

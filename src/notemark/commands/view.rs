use crate::catalog::Collection;
use crate::commands::CmdResult;
use crate::error::{NoteMarkError, Result};
use crate::slug;

/// Resolves each slug to its topic, in the order given. Any unresolved
/// slug fails the whole call with `TopicNotFound`.
pub fn run<I: AsRef<str>>(collection: &Collection, slugs: &[I]) -> Result<CmdResult> {
    let mut topics = Vec::with_capacity(slugs.len());
    for token in slugs {
        let token = token.as_ref();
        let topic = slug::resolve(collection.topics(), token)
            .ok_or_else(|| NoteMarkError::TopicNotFound(token.to_string()))?;
        topics.push(topic.clone());
    }
    Ok(CmdResult::default().with_listed_topics(topics))
}

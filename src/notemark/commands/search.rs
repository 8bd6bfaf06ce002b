use crate::catalog::Collection;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Topic;

/// Case-insensitive substring filter over name, category, and description.
///
/// The empty term is the identity filter. Result order is collection
/// order; no relevance ranking, so downstream grouping stays stable.
pub fn filter(topics: &[Topic], term: &str) -> Vec<Topic> {
    if term.is_empty() {
        return topics.to_vec();
    }

    let needle = term.to_lowercase();
    topics
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle)
                || t.category.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn run(collection: &Collection, term: &str) -> Result<CmdResult> {
    let matches = filter(collection.topics(), term);
    Ok(CmdResult::default().with_listed_topics(matches))
}

//! Category bucketing for sectioned display.
//!
//! Takes the output of a search/list operation and buckets it by the
//! case-sensitive `category` key. Categories appear in the order their
//! first member was encountered scanning the input left-to-right; members
//! keep their relative order. The adapter never re-sorts — callers that
//! want alphabetical sections pre-sort the input by name and the category
//! order follows from that.

use crate::model::Topic;
use serde::Serialize;

/// One rendered section: a category and its topics, both in input order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub topics: Vec<Topic>,
}

/// Buckets `topics` by category, preserving first-seen category order.
pub fn by_category(topics: &[Topic]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for topic in topics {
        match groups.iter_mut().find(|g| g.category == topic.category) {
            Some(group) => group.topics.push(topic.clone()),
            None => groups.push(CategoryGroup {
                category: topic.category.clone(),
                topics: vec![topic.clone()],
            }),
        }
    }

    groups
}

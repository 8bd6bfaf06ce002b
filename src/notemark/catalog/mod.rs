//! # Catalog Layer
//!
//! This module holds the built-in reference collections, one per [`Domain`].
//!
//! ## Design Rationale
//!
//! Collections are hand-authored, resident, and immutable: they are
//! constructed once by [`Library::builtin`], validated, and only read
//! afterwards. There is no create/update/delete path and no storage backend
//! to abstract over — the data IS the program, so a `Library` value can be
//! shared freely across threads and requests without synchronization.
//!
//! ## Validation
//!
//! Slug resolution assumes that no two topics of one collection collapse to
//! the same slug. Nothing in the authoring format enforces that, so
//! [`Library::builtin`] runs an integrity pass before handing out the
//! library and refuses to construct on:
//!
//! - a duplicate derived slug within a collection
//! - an empty topic name or category
//!
//! A collision is a build-time defect in the shipped data, never a runtime
//! user-facing error.

use crate::error::{NoteMarkError, Result};
use crate::model::{Domain, Topic};
use crate::slug::to_slug;
use std::collections::HashMap;

mod data;

/// The full ordered set of topics for one domain.
#[derive(Debug, Clone)]
pub struct Collection {
    domain: Domain,
    topics: Vec<Topic>,
}

impl Collection {
    fn new(domain: Domain, topics: Vec<Topic>) -> Self {
        Self { domain, topics }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Read-only view of the topics in authoring order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// All six collections, validated and ready for lookup.
#[derive(Debug, Clone)]
pub struct Library {
    collections: Vec<Collection>,
}

impl Library {
    /// Builds the built-in catalogs, failing hard on any integrity defect.
    pub fn builtin() -> Result<Library> {
        let mut collections = Vec::with_capacity(Domain::ALL.len());
        for domain in Domain::ALL {
            let topics = data::topics(domain);
            validate(domain, &topics)?;
            collections.push(Collection::new(domain, topics));
        }
        Ok(Library { collections })
    }

    pub fn collection(&self, domain: Domain) -> &Collection {
        &self.collections[index_of(domain)]
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }
}

// Construction order in builtin() follows Domain::ALL, so indexing is total.
fn index_of(domain: Domain) -> usize {
    match domain {
        Domain::Linux => 0,
        Domain::Git => 1,
        Domain::GitAdvanced => 2,
        Domain::Vim => 3,
        Domain::Networking => 4,
        Domain::ShellScripting => 5,
    }
}

fn validate(domain: Domain, topics: &[Topic]) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for topic in topics {
        if topic.name.trim().is_empty() {
            return Err(NoteMarkError::Integrity(format!(
                "{}: topic with empty name",
                domain
            )));
        }
        if topic.category.trim().is_empty() {
            return Err(NoteMarkError::Integrity(format!(
                "{}: topic '{}' has an empty category",
                domain, topic.name
            )));
        }

        let slug = to_slug(&topic.name);
        if let Some(first) = seen.insert(slug.clone(), &topic.name) {
            return Err(NoteMarkError::Integrity(format!(
                "{}: '{}' and '{}' both slug to '{}'",
                domain, first, topic.name, slug
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_library_validates() {
        let library = Library::builtin().unwrap();
        for collection in library.collections() {
            assert!(
                !collection.is_empty(),
                "{} collection is empty",
                collection.domain()
            );
        }
    }

    #[test]
    fn every_domain_is_reachable() {
        let library = Library::builtin().unwrap();
        for domain in Domain::ALL {
            assert_eq!(library.collection(domain).domain(), domain);
        }
    }

    #[test]
    fn duplicate_slugs_are_a_hard_failure() {
        let topics = vec![
            Topic::new("Git Rebase", "History", "one"),
            Topic::new("git   rebase", "History", "two"),
        ];

        let err = validate(Domain::GitAdvanced, &topics).unwrap_err();
        assert!(err.to_string().contains("git-rebase"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let topics = vec![Topic::new("  ", "History", "blank")];
        assert!(validate(Domain::Git, &topics).is_err());
    }

    #[test]
    fn empty_categories_are_rejected() {
        let topics = vec![Topic::new("git rebase", "", "no category")];
        assert!(validate(Domain::Git, &topics).is_err());
    }
}

use crate::catalog::Collection;
use crate::commands::{search, CmdResult};
use crate::error::Result;
use crate::group;

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Sort topics alphabetically by name before grouping. Category order
    /// then follows the sort instead of authoring order.
    pub sort: bool,
    pub search_term: Option<String>,
}

pub fn run(collection: &Collection, options: ListOptions) -> Result<CmdResult> {
    let mut topics = match &options.search_term {
        Some(term) => search::filter(collection.topics(), term),
        None => collection.topics().to_vec(),
    };

    if options.sort {
        topics.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let groups = group::by_category(&topics);
    Ok(CmdResult::default()
        .with_listed_topics(topics)
        .with_groups(groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Library;
    use crate::model::Domain;

    #[test]
    fn default_listing_groups_in_authoring_order() {
        let library = Library::builtin().unwrap();
        let linux = library.collection(Domain::Linux);

        let result = run(linux, ListOptions::default()).unwrap();
        assert_eq!(result.listed_topics.len(), linux.len());
        assert_eq!(result.groups[0].category, "File Management");
    }

    #[test]
    fn sorted_listing_orders_topics_by_name() {
        let library = Library::builtin().unwrap();
        let linux = library.collection(Domain::Linux);

        let result = run(
            linux,
            ListOptions {
                sort: true,
                search_term: None,
            },
        )
        .unwrap();

        let names: Vec<&str> = result
            .listed_topics
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn search_term_filters_before_grouping() {
        let library = Library::builtin().unwrap();
        let linux = library.collection(Domain::Linux);

        let result = run(
            linux,
            ListOptions {
                sort: false,
                search_term: Some("compress".to_string()),
            },
        )
        .unwrap();

        assert!(!result.listed_topics.is_empty());
        for group in &result.groups {
            assert_eq!(group.category, "Archiving & Compression");
        }
    }

    #[test]
    fn no_matches_yields_empty_groups() {
        let library = Library::builtin().unwrap();
        let linux = library.collection(Domain::Linux);

        let result = run(
            linux,
            ListOptions {
                sort: false,
                search_term: Some("plan9".to_string()),
            },
        )
        .unwrap();

        assert!(result.listed_topics.is_empty());
        assert!(result.groups.is_empty());
    }
}

//! Property-style assertions over the shipped catalogs. Authoring mistakes
//! (slug collisions, search regressions) surface here rather than as
//! broken links at render time.

use notemark::catalog::Library;
use notemark::commands::{search, view};
use notemark::model::Domain;
use notemark::slug::to_slug;
use std::collections::HashSet;

fn library() -> Library {
    Library::builtin().expect("built-in catalogs must validate")
}

#[test]
fn every_topic_resolves_from_its_own_slug() {
    let library = library();

    for collection in library.collections() {
        for topic in collection.topics() {
            let token = to_slug(&topic.name);
            let result = view::run(collection, &[token.as_str()]).unwrap_or_else(|_| {
                panic!("{}: '{}' did not resolve", collection.domain(), topic.name)
            });
            assert_eq!(&result.listed_topics[0], topic);
        }
    }
}

#[test]
fn no_two_topics_share_a_slug() {
    let library = library();

    for collection in library.collections() {
        let mut seen = HashSet::new();
        for topic in collection.topics() {
            assert!(
                seen.insert(to_slug(&topic.name)),
                "{}: duplicate slug for '{}'",
                collection.domain(),
                topic.name
            );
        }
    }
}

#[test]
fn empty_search_is_the_identity_filter() {
    let library = library();

    for collection in library.collections() {
        let hits = search::filter(collection.topics(), "");
        assert_eq!(hits, collection.topics());
    }
}

#[test]
fn search_is_case_insensitive() {
    let library = library();
    let vim = library.collection(Domain::Vim);

    let lower = search::filter(vim.topics(), "mode");
    let upper = search::filter(vim.topics(), "MODE");
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
}

#[test]
fn search_results_are_a_matching_subset() {
    let library = library();

    for collection in library.collections() {
        let term = "re";
        let needle = term.to_lowercase();
        for hit in search::filter(collection.topics(), term) {
            assert!(
                collection.topics().contains(&hit),
                "{}: search invented a topic",
                collection.domain()
            );
            assert!(
                hit.name.to_lowercase().contains(&needle)
                    || hit.category.to_lowercase().contains(&needle)
                    || hit.description.to_lowercase().contains(&needle)
            );
        }
    }
}

#[test]
fn grep_scenario() {
    let library = library();
    let linux = library.collection(Domain::Linux);

    let hits = search::filter(linux.topics(), "pattern");
    assert!(hits.iter().any(|t| t.name == "grep"));

    let result = view::run(linux, &["grep"]).unwrap();
    let grep = &result.listed_topics[0];
    assert_eq!(grep.name, "grep");
    assert_eq!(grep.category, "Text Processing");

    assert!(view::run(linux, &["nonexistent-cmd"]).is_err());
}

#[test]
fn git_rebase_scenario() {
    let library = library();
    let advanced = library.collection(Domain::GitAdvanced);

    assert_eq!(to_slug("git rebase"), "git-rebase");
    let result = view::run(advanced, &["git-rebase"]).unwrap();
    assert_eq!(result.listed_topics[0].name, "git rebase");
}

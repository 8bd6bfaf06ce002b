use crate::catalog::Collection;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::group;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Category names with topic counts, in first-seen collection order.
pub fn run(collection: &Collection) -> Result<CmdResult> {
    let counts = group::by_category(collection.topics())
        .into_iter()
        .map(|g| CategoryCount {
            name: g.category,
            count: g.topics.len(),
        })
        .collect();

    Ok(CmdResult::default().with_category_counts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Library;
    use crate::model::Domain;

    #[test]
    fn counts_cover_the_whole_collection() {
        let library = Library::builtin().unwrap();
        let linux = library.collection(Domain::Linux);

        let result = run(linux).unwrap();
        let total: usize = result.category_counts.iter().map(|c| c.count).sum();
        assert_eq!(total, linux.len());
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let library = Library::builtin().unwrap();
        let result = run(library.collection(Domain::Linux)).unwrap();

        let names: Vec<&str> = result
            .category_counts
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names[0], "File Management");
        assert!(names.contains(&"Text Processing"));
    }
}

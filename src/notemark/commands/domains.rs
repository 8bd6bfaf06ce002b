use crate::catalog::Library;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Domain;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: Domain,
    pub title: String,
    pub count: usize,
}

/// The six domains with their topic counts, in canonical order.
pub fn run(library: &Library) -> Result<CmdResult> {
    let counts = library
        .collections()
        .iter()
        .map(|c| DomainCount {
            domain: c.domain(),
            title: c.domain().title().to_string(),
            count: c.len(),
        })
        .collect();

    Ok(CmdResult::default().with_domain_counts(counts))
}

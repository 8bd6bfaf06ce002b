//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all notemark operations, regardless of the UI
//! being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (domain selection, slug tokens)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or terminal formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over Gateway
//!
//! Catalog operations need no abstraction — the library is resident and
//! immutable. The study operations are generic over [`Gateway`] the same
//! way a storage-backed design is generic over its store:
//! - Production: whatever backend the embedder wires
//! - Testing: `ScriptedGateway`

use crate::catalog::Library;
use crate::commands;
use crate::error::Result;
use crate::gateway::{ChatTurn, Gateway};
use crate::model::Domain;
use std::path::PathBuf;

/// The main API facade for notemark operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct NoteMarkApi {
    library: Library,
    config_dir: PathBuf,
}

impl NoteMarkApi {
    pub fn new(library: Library, config_dir: PathBuf) -> Self {
        Self {
            library,
            config_dir,
        }
    }

    pub fn list_topics(
        &self,
        domain: Domain,
        options: commands::list::ListOptions,
    ) -> Result<commands::CmdResult> {
        commands::list::run(self.library.collection(domain), options)
    }

    pub fn search_topics(&self, domain: Domain, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(self.library.collection(domain), term)
    }

    pub fn view_topics<I: AsRef<str>>(
        &self,
        domain: Domain,
        slugs: &[I],
    ) -> Result<commands::CmdResult> {
        commands::view::run(self.library.collection(domain), slugs)
    }

    pub fn categories(&self, domain: Domain) -> Result<commands::CmdResult> {
        commands::categories::run(self.library.collection(domain))
    }

    pub fn domains(&self) -> Result<commands::CmdResult> {
        commands::domains::run(&self.library)
    }

    pub fn demo(&self, name: &str, events: &[String]) -> Result<commands::CmdResult> {
        commands::demo::run(name, events)
    }

    pub fn demos(&self) -> Result<commands::CmdResult> {
        commands::demo::list()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn study_outline<G: Gateway>(
        &self,
        gateway: &G,
        domain: Domain,
        slug: &str,
    ) -> Result<commands::CmdResult> {
        commands::study::outline(gateway, self.library.collection(domain), slug)
    }

    pub fn study_ask<G: Gateway>(
        &self,
        gateway: &G,
        domain: Domain,
        slug: &str,
        question: &str,
    ) -> Result<commands::CmdResult> {
        commands::study::ask(gateway, self.library.collection(domain), slug, question)
    }

    pub fn study_quiz<G: Gateway>(
        &self,
        gateway: &G,
        domain: Domain,
        slug: &str,
    ) -> Result<commands::CmdResult> {
        commands::study::quiz(gateway, self.library.collection(domain), slug)
    }

    pub fn study_chat<G: Gateway>(
        &self,
        gateway: &G,
        history: &[ChatTurn],
    ) -> Result<commands::CmdResult> {
        commands::study::chat(gateway, history)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListOptions;
pub use crate::commands::{
    CategoryCount, CmdMessage, CmdResult, DemoFrame, DomainCount, MessageLevel,
};

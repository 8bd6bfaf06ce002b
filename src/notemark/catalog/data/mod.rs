//! Built-in collection definitions, one module per domain.

use crate::model::{Domain, Topic};

mod git;
mod git_advanced;
mod linux;
mod networking;
mod shell_scripting;
mod vim;

pub(super) fn topics(domain: Domain) -> Vec<Topic> {
    match domain {
        Domain::Linux => linux::topics(),
        Domain::Git => git::topics(),
        Domain::GitAdvanced => git_advanced::topics(),
        Domain::Vim => vim::topics(),
        Domain::Networking => networking::topics(),
        Domain::ShellScripting => shell_scripting::topics(),
    }
}

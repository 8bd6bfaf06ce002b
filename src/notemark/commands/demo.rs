use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NoteMarkError, Result};
use crate::practical;

/// One step of a demo run: the event fired, the state it landed in, and
/// that state's mock terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoFrame {
    pub event: String,
    pub state: String,
    pub output: String,
}

/// Runs a simulation through the given events, or its default walkthrough
/// when no events are given, and returns the transcript.
pub fn run(name: &str, events: &[String]) -> Result<CmdResult> {
    let mut sim = practical::by_name(name).ok_or_else(|| {
        NoteMarkError::Api(format!(
            "Unknown simulation: {} (available: {})",
            name,
            names().join(", ")
        ))
    })?;

    let script: Vec<String> = if events.is_empty() {
        sim.walkthrough().iter().map(|e| e.to_string()).collect()
    } else {
        events.to_vec()
    };

    let mut transcript = vec![DemoFrame {
        event: String::new(),
        state: sim.state().name.to_string(),
        output: sim.output().to_string(),
    }];

    for event in &script {
        let state = sim.fire(event)?;
        transcript.push(DemoFrame {
            event: event.clone(),
            state: state.name.to_string(),
            output: state.output.to_string(),
        });
    }

    Ok(CmdResult::default().with_transcript(transcript))
}

/// Names the available simulations.
pub fn list() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for sim in practical::all() {
        result.add_message(CmdMessage::info(format!(
            "{}  (walkthrough: {})",
            sim.name(),
            sim.walkthrough().join(" → ")
        )));
    }
    Ok(result)
}

fn names() -> Vec<&'static str> {
    practical::all().into_iter().map(|s| s.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_walkthrough_produces_a_transcript() {
        let result = run("gzip", &[]).unwrap();
        // Initial frame plus one per walkthrough event.
        assert_eq!(result.transcript.len(), 3);
        assert_eq!(result.transcript[0].state, "original");
        assert_eq!(result.transcript[1].state, "compressed");
        assert!(result.transcript[1].output.contains("access.log.gz"));
    }

    #[test]
    fn explicit_events_drive_the_machine() {
        let result = run("ssh", &["connect".to_string(), "authenticate".to_string()]).unwrap();
        assert_eq!(result.transcript.last().unwrap().state, "connected");
    }

    #[test]
    fn unknown_simulation_names_the_alternatives() {
        let err = run("telnet", &[]).unwrap_err();
        assert!(err.to_string().contains("gzip"));
    }

    #[test]
    fn illegal_event_fails_the_run() {
        assert!(run("curl", &["disconnect".to_string()]).is_err());
    }

    #[test]
    fn list_names_every_simulation() {
        let result = list().unwrap();
        assert_eq!(result.messages.len(), 3);
    }
}

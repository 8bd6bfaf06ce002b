//! # Practical Simulations
//!
//! The reference pages carry small animated demos that mimic what a command
//! does (compressing a file, opening an SSH session, issuing an HTTP
//! request). Each demo is a finite-state machine: a handful of named states
//! with fixed mock-terminal output, and a `(state, event)` transition
//! table. Keeping the table explicit makes every demo independently
//! testable — drive events, assert output — with no UI in the loop.
//!
//! Outputs are deterministic per state: the same walk always produces the
//! same transcript.

use crate::error::{NoteMarkError, Result};

/// One state of a simulation and the mock terminal text shown in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimState {
    pub name: &'static str,
    pub output: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    from: &'static str,
    event: &'static str,
    to: &'static str,
}

/// A running simulation: current state plus the transition table.
#[derive(Debug, Clone)]
pub struct Simulation {
    name: &'static str,
    states: Vec<SimState>,
    rules: Vec<Rule>,
    walkthrough: &'static [&'static str],
    current: usize,
}

impl Simulation {
    fn new(
        name: &'static str,
        states: Vec<SimState>,
        rules: Vec<Rule>,
        walkthrough: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            states,
            rules,
            walkthrough,
            current: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &SimState {
        &self.states[self.current]
    }

    pub fn output(&self) -> &'static str {
        self.states[self.current].output
    }

    /// The demo event sequence the hosting page plays by default.
    pub fn walkthrough(&self) -> &'static [&'static str] {
        self.walkthrough
    }

    /// Events legal in the current state, in table order.
    pub fn events(&self) -> Vec<&'static str> {
        let here = self.state().name;
        self.rules
            .iter()
            .filter(|r| r.from == here)
            .map(|r| r.event)
            .collect()
    }

    /// Fires an event. Unknown events leave the state untouched and error,
    /// naming the events that would have been legal.
    pub fn fire(&mut self, event: &str) -> Result<&SimState> {
        let here = self.state().name;
        let rule = self
            .rules
            .iter()
            .find(|r| r.from == here && r.event == event)
            .ok_or_else(|| {
                NoteMarkError::Api(format!(
                    "simulation '{}' has no event '{}' in state '{}' (expected one of: {})",
                    self.name,
                    event,
                    here,
                    self.events().join(", ")
                ))
            })?;

        let target = rule.to;
        let next = self
            .states
            .iter()
            .position(|s| s.name == target)
            .ok_or_else(|| {
                NoteMarkError::Api(format!(
                    "simulation '{}' transition targets unknown state '{}'",
                    self.name, target
                ))
            })?;

        self.current = next;
        Ok(self.state())
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// All built-in simulations, in display order.
pub fn all() -> Vec<Simulation> {
    vec![gzip(), ssh(), curl()]
}

/// Looks up a built-in simulation by name.
pub fn by_name(name: &str) -> Option<Simulation> {
    all().into_iter().find(|s| s.name == name)
}

/// Compress-and-restore walkthrough for the gzip page.
pub fn gzip() -> Simulation {
    Simulation::new(
        "gzip",
        vec![
            SimState {
                name: "original",
                output: "$ ls -lh\n-rw-r--r-- 1 dev dev  48M access.log",
            },
            SimState {
                name: "compressed",
                output: "$ gzip access.log\n$ ls -lh\n-rw-r--r-- 1 dev dev 3.2M access.log.gz",
            },
        ],
        vec![
            Rule {
                from: "original",
                event: "compress",
                to: "compressed",
            },
            Rule {
                from: "compressed",
                event: "restore",
                to: "original",
            },
        ],
        &["compress", "restore"],
    )
}

/// Connection lifecycle walkthrough for the ssh page.
pub fn ssh() -> Simulation {
    Simulation::new(
        "ssh",
        vec![
            SimState {
                name: "disconnected",
                output: "$ ssh deploy@web1.example.com",
            },
            SimState {
                name: "connecting",
                output: "Verifying host key for web1.example.com...\nAuthenticating with public key 'deploy@laptop'",
            },
            SimState {
                name: "connected",
                output: "Welcome to web1 (Ubuntu 22.04 LTS)\nLast login: from 10.0.4.12\ndeploy@web1:~$",
            },
        ],
        vec![
            Rule {
                from: "disconnected",
                event: "connect",
                to: "connecting",
            },
            Rule {
                from: "connecting",
                event: "authenticate",
                to: "connected",
            },
            Rule {
                from: "connected",
                event: "disconnect",
                to: "disconnected",
            },
        ],
        &["connect", "authenticate", "disconnect"],
    )
}

/// Request/response walkthrough for the curl page.
pub fn curl() -> Simulation {
    Simulation::new(
        "curl",
        vec![
            SimState {
                name: "prompt",
                output: "$ curl -i https://api.example.com/health",
            },
            SimState {
                name: "sending",
                output: "> GET /health HTTP/1.1\n> Host: api.example.com\n> Accept: */*",
            },
            SimState {
                name: "response",
                output: "< HTTP/1.1 200 OK\n< Content-Type: application/json\n\n{\"status\":\"ok\"}",
            },
        ],
        vec![
            Rule {
                from: "prompt",
                event: "send",
                to: "sending",
            },
            Rule {
                from: "sending",
                event: "receive",
                to: "response",
            },
            Rule {
                from: "response",
                event: "reset",
                to: "prompt",
            },
        ],
        &["send", "receive", "reset"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_round_trips() {
        let mut sim = gzip();
        assert_eq!(sim.state().name, "original");

        sim.fire("compress").unwrap();
        assert_eq!(sim.state().name, "compressed");
        assert!(sim.output().contains("access.log.gz"));

        sim.fire("restore").unwrap();
        assert_eq!(sim.state().name, "original");
    }

    #[test]
    fn unknown_event_errors_without_moving() {
        let mut sim = ssh();
        let err = sim.fire("reboot").unwrap_err();
        assert!(err.to_string().contains("connect"));
        assert_eq!(sim.state().name, "disconnected");
    }

    #[test]
    fn walkthroughs_are_legal_paths() {
        for mut sim in all() {
            for event in sim.walkthrough().to_vec() {
                sim.fire(event).unwrap();
            }
        }
    }

    #[test]
    fn outputs_are_deterministic() {
        let run = |mut sim: Simulation| -> Vec<String> {
            sim.walkthrough()
                .to_vec()
                .into_iter()
                .map(|e| sim.fire(e).unwrap().output.to_string())
                .collect()
        };
        assert_eq!(run(curl()), run(curl()));
    }

    #[test]
    fn events_reflect_current_state() {
        let mut sim = curl();
        assert_eq!(sim.events(), vec!["send"]);
        sim.fire("send").unwrap();
        assert_eq!(sim.events(), vec!["receive"]);
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let mut sim = ssh();
        sim.fire("connect").unwrap();
        sim.reset();
        assert_eq!(sim.state().name, "disconnected");
    }

    #[test]
    fn names_are_unique_and_resolvable() {
        let sims = all();
        for sim in &sims {
            assert_eq!(by_name(sim.name()).unwrap().name(), sim.name());
        }
        assert!(by_name("telnet").is_none());
    }
}

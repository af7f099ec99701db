//! One-shot automation check.
//!
//! macOS asks the user to allow automation of another app the first time a
//! process scripts it. Running every target once from the account that hosts
//! the bridge gets those prompts out of the way.

use crate::player::controller::common::process_check;
use crate::player::{scripts_for, Source};
use crate::runner::{RunError, ScriptRunner};

pub struct CheckStep {
    pub label: &'static str,
    pub outcome: Result<String, RunError>,
}

impl CheckStep {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub fn check_automation(runner: &dyn ScriptRunner) -> Vec<CheckStep> {
    let mut steps = vec![CheckStep {
        label: "System Events",
        outcome: runner.run(&process_check(Source::Streaming.app_name()).invocation()),
    }];

    for source in [Source::Library, Source::Streaming] {
        let scripts = scripts_for(source);
        steps.push(CheckStep {
            label: scripts.source().app_name(),
            outcome: runner.run(&scripts.probe().invocation()),
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Invocation;
    use std::sync::Mutex;

    struct Scripted {
        calls: Mutex<Vec<Invocation>>,
        fail_on: usize,
    }

    impl ScriptRunner for Scripted {
        fn run(&self, invocation: &Invocation) -> Result<String, RunError> {
            let mut calls = self.calls.lock().unwrap();
            calls.push(invocation.clone());
            if calls.len() == self.fail_on {
                return Err(RunError::Spawn {
                    program: "osascript".into(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            Ok("true".into())
        }
    }

    #[test]
    fn test_runs_every_target_in_order() {
        let runner = Scripted {
            calls: Mutex::new(Vec::new()),
            fail_on: 2,
        };
        let steps = check_automation(&runner);

        let labels: Vec<_> = steps.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["System Events", "Music", "Spotify"]);
        assert!(steps[0].passed());
        assert!(!steps[1].passed());
        assert!(steps[2].passed());

        let calls = runner.calls.lock().unwrap();
        assert!(calls[0].args[1].contains("System Events"));
        assert!(calls[1].args[1].contains("tell application \"Music\""));
    }
}

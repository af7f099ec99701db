use super::controller::common::AutomationScript;
use super::controller::scripts_for;
use super::request::PlayerRequest;
use super::traits::{Action, Source};

/// What a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Transport control; output is ignored.
    Control {
        source: Source,
        action: Action,
        script: AutomationScript,
    },
    /// List query; output is `"a","b"` text.
    Query {
        source: Source,
        action: Action,
        script: AutomationScript,
    },
    /// Play a specific selection.
    Play {
        source: Source,
        action: Action,
        script: AutomationScript,
    },
    /// No player command: report now-playing state through the helper.
    Helper,
    /// Nothing runs.
    Unsupported {
        source: Option<Source>,
        action: Option<Action>,
    },
}

/// Map a request to the script to run, the helper, or nothing.
pub fn dispatch(request: &PlayerRequest) -> Dispatch {
    let source = request.parsed_source();
    let action = request.parsed_action();

    let (source, action) = match (source, action) {
        (None, None) => return Dispatch::Helper,
        (Some(source), Some(action)) => (source, action),
        (source, action) => return Dispatch::Unsupported { source, action },
    };

    let scripts = scripts_for(source);
    let selected = match action {
        Action::Transport(t) => Some(scripts.transport(t)),
        Action::Query(q) => scripts.query(q, request),
        Action::Play(p) => scripts.play(p, request),
    };

    match selected.filter(|script| !script.is_empty()) {
        Some(script) => match action {
            Action::Transport(_) => Dispatch::Control { source, action, script },
            Action::Query(_) => Dispatch::Query { source, action, script },
            Action::Play(_) => Dispatch::Play { source, action, script },
        },
        None => Dispatch::Unsupported {
            source: Some(source),
            action: Some(action),
        },
    }
}

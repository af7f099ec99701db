use crate::runner::Invocation;

/// Interpreter for AppleScript source.
pub const OSASCRIPT: &str = "osascript";

/// An AppleScript program plus the values handed to its `on run argv`
/// handler.
///
/// The script source is fixed per command; request text only ever travels in
/// `args`, as separate process arguments, so it is never parsed as
/// AppleScript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomationScript {
    pub source: String,
    pub args: Vec<String>,
}

impl AutomationScript {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            args: Vec::new(),
        }
    }

    /// One-line `tell application "<app>" to <statement>`.
    pub fn tell(app: &str, statement: &str) -> Self {
        Self::new(format!("tell application \"{app}\" to {statement}"))
    }

    pub fn arg(mut self, value: &str) -> Self {
        self.args.push(value.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// `osascript -e <source> <arg>...`
    pub fn invocation(&self) -> Invocation {
        Invocation::new(OSASCRIPT)
            .arg("-e")
            .arg(self.source.clone())
            .args(self.args.iter().cloned())
    }
}

/// Handlers shared by the list queries.
///
/// `joinQuoted` renders a list as `"a","b"`: every item wrapped in quotes,
/// embedded quotes replaced by the `\"` placeholder, items joined with commas.
/// With `uniqueOnly` set, repeated and empty items are skipped.
pub const LIST_HANDLERS: &str = r#"
on escapeQuotes(theText)
    set savedDelims to AppleScript's text item delimiters
    set AppleScript's text item delimiters to quote
    set parts to text items of theText
    set AppleScript's text item delimiters to "\\" & quote
    set escaped to parts as text
    set AppleScript's text item delimiters to savedDelims
    return escaped
end escapeQuotes

on joinQuoted(theItems, uniqueOnly)
    set seen to {}
    set quotedItems to {}
    repeat with anItem in theItems
        set itemText to anItem as text
        if uniqueOnly then
            if itemText is not "" and itemText is not in seen then
                set end of seen to itemText
                set end of quotedItems to quote & my escapeQuotes(itemText) & quote
            end if
        else
            set end of quotedItems to quote & my escapeQuotes(itemText) & quote
        end if
    end repeat
    set savedDelims to AppleScript's text item delimiters
    set AppleScript's text item delimiters to ","
    set joined to quotedItems as text
    set AppleScript's text item delimiters to savedDelims
    return joined
end joinQuoted
"#;

/// Prefix `body` (a `on run argv ... end run` block) with the list handlers.
pub fn with_list_handlers(body: &str) -> String {
    format!("{LIST_HANDLERS}\n{body}")
}

/// Asks System Events whether an app process exists.
pub fn process_check(app: &str) -> AutomationScript {
    AutomationScript::new(format!(
        "tell application \"System Events\" to (name of processes) contains \"{app}\""
    ))
}

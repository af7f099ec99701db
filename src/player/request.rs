use super::traits::{Action, Source};

/// Fields of one bridge request, as posted by the display clients.
///
/// Every field is optional on the wire and defaults to empty. Older clients
/// send the command as `code` instead of `action`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRequest {
    pub source: String,
    pub action: String,
    pub search: String,
    pub detail: String,
    pub detail2: String,
}

impl PlayerRequest {
    pub fn new(source: &str, action: &str) -> Self {
        Self {
            source: source.to_string(),
            action: action.to_string(),
            ..Self::default()
        }
    }

    /// Build from decoded form pairs. A repeated field keeps its last value,
    /// unknown fields are ignored, and `code` only fills an empty `action`.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut request = Self::default();
        let mut code = String::new();
        for (name, value) in fields {
            match name.as_str() {
                "source" => request.source = value,
                "action" => request.action = value,
                "code" => code = value,
                "search" => request.search = value,
                "detail" => request.detail = value,
                "detail2" => request.detail2 = value,
                _ => {}
            }
        }
        if request.action.is_empty() {
            request.action = code;
        }
        request
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = detail.to_string();
        self
    }

    pub fn with_detail2(mut self, detail2: &str) -> Self {
        self.detail2 = detail2.to_string();
        self
    }

    pub fn parsed_source(&self) -> Option<Source> {
        Source::from_field(&self.source)
    }

    pub fn parsed_action(&self) -> Option<Action> {
        Action::from_field(&self.action)
    }
}

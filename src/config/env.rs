/// Environment variables the bridge consults, read once at start-up.
///
/// | Variable        | Used for                                   |
/// |-----------------|--------------------------------------------|
/// | `PIPENV_PYTHON` | helper interpreter, verbatim               |
/// | `PYENV_ROOT`    | helper interpreter, `<root>/shims/python`  |
/// | `USER`          | user name for fallback paths               |
/// | `HOME`          | user name when `USER` is unset             |
/// | `DOCUMENT_ROOT` | site directory of a legacy web deployment  |
/// | `SCRIPT_NAME`   | endpoint path under `DOCUMENT_ROOT`        |
///
/// Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub pipenv_python: Option<String>,
    pub pyenv_root: Option<String>,
    pub user: Option<String>,
    pub home: Option<String>,
    pub document_root: Option<String>,
    pub script_name: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            pipenv_python: get("PIPENV_PYTHON"),
            pyenv_root: get("PYENV_ROOT"),
            user: get("USER"),
            home: get("HOME"),
            document_root: get("DOCUMENT_ROOT"),
            script_name: get("SCRIPT_NAME"),
        }
    }
}

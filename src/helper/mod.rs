//! The external metadata helper: a script that prints the now-playing state
//! of every zone as JSON-ish text and maintains the cover cache.

pub mod paths;

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{AppConfig, Environment};
use crate::runner::Invocation;

pub use paths::{HelperPaths, PathError};

#[derive(Debug, Error)]
pub enum HelperError {
    #[error(transparent)]
    Paths(#[from] PathError),

    #[error("cannot create cover directory {dir}: {source}")]
    Covers {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Create the cover directory if it is missing.
pub fn ensure_covers_dir(paths: &HelperPaths) -> Result<(), HelperError> {
    fs::create_dir_all(&paths.covers_dir).map_err(|source| HelperError::Covers {
        dir: paths.covers_dir.clone(),
        source,
    })
}

/// `<interpreter> <script>`, run from the directory holding `covers`.
pub fn invocation(paths: &HelperPaths) -> Invocation {
    let invocation = Invocation::new(&paths.interpreter).arg(paths.script.display().to_string());
    match paths.covers_dir.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => invocation.current_dir(dir),
        _ => invocation,
    }
}

/// Resolve paths, make sure the cover directory exists, and build the
/// invocation.
pub fn prepare(config: &AppConfig, env: &Environment) -> Result<Invocation, HelperError> {
    let paths = paths::resolve(config, env)?;
    ensure_covers_dir(&paths)?;
    Ok(invocation(&paths))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_creates_covers_and_runs_from_site() {
        let site = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.helper.site_dir = Some(site.path().to_path_buf());
        config.helper.interpreter = Some("/usr/bin/python3".into());

        let inv = prepare(&config, &Environment::default()).unwrap();

        assert!(site.path().join("covers").is_dir());
        assert_eq!(inv.program, PathBuf::from("/usr/bin/python3"));
        assert_eq!(inv.current_dir.as_deref(), Some(site.path()));
        assert!(inv.args[0].ends_with("python/now_playing.py"));
    }

    #[test]
    fn test_prepare_fails_on_unwritable_covers() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        let mut config = AppConfig::default();
        config.helper.interpreter = Some("/usr/bin/python3".into());
        config.helper.script = Some("/srv/now_playing.py".into());
        config.covers.dir = blocker.join("covers");

        let err = prepare(&config, &Environment::default()).unwrap_err();
        assert!(matches!(err, HelperError::Covers { .. }));
    }

    #[test]
    fn test_relative_covers_keep_working_dir() {
        let paths = HelperPaths {
            interpreter: "/usr/bin/python3".into(),
            script: "/srv/now_playing.py".into(),
            covers_dir: "covers".into(),
        };
        assert_eq!(invocation(&paths).current_dir, None);
    }
}

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{AppConfig, Environment, HelperConfig};

const HELPER_DIR: &str = "python";
const HELPER_SCRIPT: &str = "now_playing.py";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("cannot resolve the user name (set USER or HOME) to locate the {0}")]
    UnknownUser(&'static str),
}

/// Where the metadata helper lives and where it keeps its covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperPaths {
    pub interpreter: PathBuf,
    pub script: PathBuf,
    pub covers_dir: PathBuf,
}

/// `USER`, else the last segment of `HOME`.
pub fn resolve_user(env: &Environment) -> Option<String> {
    env.user.clone().or_else(|| {
        env.home
            .as_deref()
            .and_then(|home| Path::new(home).file_name())
            .map(|name| name.to_string_lossy().into_owned())
    })
}

/// Config file, then `PIPENV_PYTHON`, then `PYENV_ROOT/shims/python`, then
/// the per-user pyenv shim.
pub fn resolve_interpreter(config: &HelperConfig, env: &Environment) -> Result<PathBuf, PathError> {
    if let Some(path) = &config.interpreter {
        return Ok(path.clone());
    }
    if let Some(path) = &env.pipenv_python {
        return Ok(PathBuf::from(path));
    }
    if let Some(root) = &env.pyenv_root {
        return Ok(Path::new(root).join("shims").join("python"));
    }
    let user = resolve_user(env).ok_or(PathError::UnknownUser("helper interpreter"))?;
    Ok(PathBuf::from(format!("/Users/{user}/.pyenv/shims/python")))
}

/// Directory the endpoint is published from: configured, or `DOCUMENT_ROOT`
/// joined with the directory part of `SCRIPT_NAME`.
pub fn resolve_site_dir(config: &HelperConfig, env: &Environment) -> Option<PathBuf> {
    if let Some(dir) = &config.site_dir {
        return Some(dir.clone());
    }
    let root = env.document_root.as_deref()?;
    let script_name = env.script_name.as_deref()?;
    let relative = Path::new(script_name.trim_start_matches('/')).parent()?;
    Some(Path::new(root).join(relative))
}

/// Config file, then `python/now_playing.py` beside the site directory, then
/// the per-user default site.
pub fn resolve_script(config: &HelperConfig, env: &Environment) -> Result<PathBuf, PathError> {
    if let Some(path) = &config.script {
        return Ok(path.clone());
    }
    if let Some(site) = resolve_site_dir(config, env) {
        let base = site.parent().unwrap_or(&site);
        return Ok(base.join(HELPER_DIR).join(HELPER_SCRIPT));
    }
    let user = resolve_user(env).ok_or(PathError::UnknownUser("helper script"))?;
    Ok(PathBuf::from(format!(
        "/Users/{user}/websites/{HELPER_DIR}/{HELPER_SCRIPT}"
    )))
}

/// Absolute cover directories are used as is; relative ones hang off the
/// site directory, or the working directory without one.
pub fn resolve_covers_dir(config: &AppConfig, env: &Environment) -> PathBuf {
    let dir = &config.covers.dir;
    if dir.is_absolute() {
        return dir.clone();
    }
    match resolve_site_dir(&config.helper, env) {
        Some(site) => site.join(dir),
        None => dir.clone(),
    }
}

pub fn resolve(config: &AppConfig, env: &Environment) -> Result<HelperPaths, PathError> {
    Ok(HelperPaths {
        interpreter: resolve_interpreter(&config.helper, env)?,
        script: resolve_script(&config.helper, env)?,
        covers_dir: resolve_covers_dir(config, env),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment::default()
    }

    #[test]
    fn test_pipenv_python_wins() {
        let env = Environment {
            pipenv_python: Some("/x/python".into()),
            pyenv_root: Some("/opt/pyenv".into()),
            user: Some("bob".into()),
            ..env()
        };
        let path = resolve_interpreter(&HelperConfig::default(), &env).unwrap();
        assert_eq!(path, PathBuf::from("/x/python"));
    }

    #[test]
    fn test_pyenv_root_shim() {
        let env = Environment {
            pyenv_root: Some("/opt/pyenv".into()),
            user: Some("bob".into()),
            ..env()
        };
        let path = resolve_interpreter(&HelperConfig::default(), &env).unwrap();
        assert_eq!(path, PathBuf::from("/opt/pyenv/shims/python"));
    }

    #[test]
    fn test_user_fallback() {
        let env = Environment {
            user: Some("alice".into()),
            ..env()
        };
        let path = resolve_interpreter(&HelperConfig::default(), &env).unwrap();
        assert_eq!(path, PathBuf::from("/Users/alice/.pyenv/shims/python"));
    }

    #[test]
    fn test_user_from_home() {
        let env = Environment {
            home: Some("/Users/carol/".into()),
            ..env()
        };
        assert_eq!(resolve_user(&env).as_deref(), Some("carol"));
        let path = resolve_interpreter(&HelperConfig::default(), &env).unwrap();
        assert_eq!(path, PathBuf::from("/Users/carol/.pyenv/shims/python"));
    }

    #[test]
    fn test_config_overrides_environment() {
        let config = HelperConfig {
            interpreter: Some("/usr/local/bin/python3".into()),
            ..HelperConfig::default()
        };
        let env = Environment {
            pipenv_python: Some("/x/python".into()),
            ..env()
        };
        assert_eq!(
            resolve_interpreter(&config, &env).unwrap(),
            PathBuf::from("/usr/local/bin/python3")
        );
    }

    #[test]
    fn test_unresolvable_user_fails() {
        assert_eq!(
            resolve_interpreter(&HelperConfig::default(), &env()),
            Err(PathError::UnknownUser("helper interpreter"))
        );
        assert!(resolve_script(&HelperConfig::default(), &env()).is_err());
    }

    #[test]
    fn test_script_beside_document_root_site() {
        let env = Environment {
            document_root: Some("/Users/alice/websites".into()),
            script_name: Some("/roonmatrix/now_playing.php".into()),
            ..env()
        };
        let script = resolve_script(&HelperConfig::default(), &env).unwrap();
        assert_eq!(
            script,
            PathBuf::from("/Users/alice/websites/python/now_playing.py")
        );
    }

    #[test]
    fn test_script_user_fallback() {
        let env = Environment {
            user: Some("alice".into()),
            ..env()
        };
        let script = resolve_script(&HelperConfig::default(), &env).unwrap();
        assert_eq!(
            script,
            PathBuf::from("/Users/alice/websites/python/now_playing.py")
        );
    }

    #[test]
    fn test_covers_follow_site_dir() {
        let mut config = AppConfig::default();
        config.helper.site_dir = Some("/srv/site/roonmatrix".into());
        let covers = resolve_covers_dir(&config, &env());
        assert_eq!(covers, PathBuf::from("/srv/site/roonmatrix/covers"));

        config.covers.dir = "/tmp/covers".into();
        assert_eq!(resolve_covers_dir(&config, &env()), PathBuf::from("/tmp/covers"));
    }

    #[test]
    fn test_covers_relative_to_working_dir_without_site() {
        let covers = resolve_covers_dir(&AppConfig::default(), &env());
        assert_eq!(covers, PathBuf::from("covers"));
    }
}

use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::aur::DEFAULT_API_URL;
use crate::runtime::Runtime;

/// Settings shared by all subcommands.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository store directory
    pub root: PathBuf,
    /// Base URL of the package API and of the recipe repositories
    pub api_url: String,
    /// Answer yes to every prompt
    pub yes: bool,
}

impl Config {
    pub fn new<R: Runtime>(
        runtime: &R,
        root: Option<PathBuf>,
        api_url: Option<String>,
        yes: bool,
    ) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => default_root(runtime)?,
        };
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        debug!("Using store {:?} and API {}", root, api_url);

        Ok(Self {
            root,
            api_url,
            yes,
        })
    }

    #[cfg(test)]
    pub fn for_test(root: PathBuf) -> Self {
        Self {
            root,
            api_url: "http://aur.test".to_string(),
            yes: true,
        }
    }
}

/// `<cache dir>/aurh`, falling back to `~/.cache/aurh`.
#[tracing::instrument(skip(runtime))]
pub fn default_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let cache = match runtime.cache_dir() {
        Some(dir) => dir,
        None => runtime
            .home_dir()
            .context("Could not find home directory")?
            .join(".cache"),
    };
    Ok(cache.join("aurh"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_home;

    #[test]
    fn test_default_root_uses_cache_dir() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_cache_dir()
            .returning(|| Some(test_home().join(".cache")));

        let root = default_root(&runtime).unwrap();
        assert_eq!(root, test_home().join(".cache").join("aurh"));
    }

    #[test]
    fn test_default_root_falls_back_to_home() {
        let mut runtime = MockRuntime::new();
        runtime.expect_cache_dir().returning(|| None);
        runtime.expect_home_dir().returning(|| Some(test_home()));

        let root = default_root(&runtime).unwrap();
        assert_eq!(root, test_home().join(".cache").join("aurh"));
    }

    #[test]
    fn test_default_root_no_home() {
        let mut runtime = MockRuntime::new();
        runtime.expect_cache_dir().returning(|| None);
        runtime.expect_home_dir().returning(|| None);

        assert!(default_root(&runtime).is_err());
    }

    #[test]
    fn test_config_explicit_values() {
        // No expectations: explicit root bypasses the defaults
        let runtime = MockRuntime::new();

        let config = Config::new(
            &runtime,
            Some(PathBuf::from("/custom")),
            Some("http://localhost:1234".into()),
            true,
        )
        .unwrap();

        assert_eq!(config.root, PathBuf::from("/custom"));
        assert_eq!(config.api_url, "http://localhost:1234");
        assert!(config.yes);
    }

    #[test]
    fn test_config_default_api_url() {
        let runtime = MockRuntime::new();
        let config = Config::new(&runtime, Some(PathBuf::from("/custom")), None, false).unwrap();
        assert_eq!(config.api_url, "https://aur.archlinux.org");
        assert!(!config.yes);
    }
}

//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILENAMES: [&str; 2] = ["consult.toml", ".consult.toml"];

/// Prefix of environment variable overrides (`CONSULT_COMPLETION__MODEL`, ...)
pub const ENV_PREFIX: &str = "CONSULT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CONSULT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./consult.toml` or `./.consult.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/expert-consult/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(Self::global_config_path().as_deref(), config_path)
    }

    /// Same as [`load`](Self::load) with the global config file at `global_path`
    pub fn load_from(
        global_path: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/expert-consult/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("expert-consult").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [  ENV] {}* environment variables", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:>5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./consult.toml or ./.consult.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::{Model, Persona};
    use figment::Jail;

    // Every test that reads files or CONSULT_* runs inside a Jail: a fresh
    // working directory, env vars restored afterwards, one jail at a time.

    fn load_in(
        jail: &Jail,
        global: Option<&str>,
        explicit: Option<&str>,
    ) -> Result<FileConfig, figment::Error> {
        let global = global.map(|name| jail.directory().join(name));
        let explicit = explicit.map(|name| jail.directory().join(name));
        ConfigLoader::load_from(global.as_deref(), explicit.as_deref()).map_err(|e| *e)
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.completion.model, Model::Gpt4oMini);
        assert!(config.form.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("expert-consult"));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        Jail::expect_with(|jail| {
            let config = load_in(jail, Some("global.toml"), None)?;
            assert_eq!(config.completion.model, Model::Gpt4oMini);
            assert_eq!(config.completion.timeout_seconds, 60);
            assert_eq!(config.form.default_persona, Persona::Childcare);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "explicit.toml",
                r#"
[completion]
model = "gpt-4.1-mini"
timeout_seconds = 7

[form]
default_persona = "B"
"#,
            )?;

            let config = load_in(jail, None, Some("explicit.toml"))?;
            assert_eq!(config.completion.model, Model::Gpt41Mini);
            assert_eq!(config.completion.timeout_seconds, 7);
            assert_eq!(config.form.default_persona, Persona::ElderCare);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_outranks_global() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "global.toml",
                r#"
[completion]
model = "gpt-4.1"
timeout_seconds = 30

[output]
color = false
"#,
            )?;
            jail.create_file(
                "consult.toml",
                r#"
[completion]
model = "gpt-4o"
"#,
            )?;

            let config = load_in(jail, Some("global.toml"), None)?;
            assert_eq!(config.completion.model, Model::Gpt4o);
            // Keys the project file leaves out still come from the global file
            assert_eq!(config.completion.timeout_seconds, 30);
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "explicit.toml",
                r#"
[completion]
model = "gpt-4.1-mini"
timeout_seconds = 7
"#,
            )?;
            jail.set_env("CONSULT_COMPLETION__MODEL", "gpt-4o");
            jail.set_env("CONSULT_FORM__DEFAULT_PERSONA", "B");

            let config = load_in(jail, None, Some("explicit.toml"))?;
            assert_eq!(config.completion.model, Model::Gpt4o);
            assert_eq!(config.completion.timeout_seconds, 7);
            assert_eq!(config.form.default_persona, Persona::ElderCare);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            assert!(load_in(jail, None, Some("nope.toml")).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("broken.toml", "[completion\nmodel = ")?;
            assert!(load_in(jail, None, Some("broken.toml")).is_err());
            Ok(())
        });
    }
}

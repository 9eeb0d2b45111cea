//! Scaffolding orchestrator
//!
//! Drives a whole bootstrap run: target directory, install backend, base
//! framework, adapters, entry artifact, dotenv, extra packages, manifest,
//! and the plugin source directory, strictly in that order. The pipeline
//! is forward-only; nothing is rolled back when a later step fails.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::backend::Backend;
use crate::{adapter, entry, manifest, output};

/// Environment-variable file written into the target directory.
pub const ENV_FILE: &str = ".env";
/// Project manifest filename.
pub const MANIFEST_FILE: &str = "pyproject.toml";
/// Plugin source directory, created empty.
pub const PLUGIN_DIR: &str = "src/plugins";

const DOTENV_DEV: &str = "HOST=127.0.0.1
PORT=8080
DEBUG=true
FASTAPI_RELOAD=true";

const DOTENV_PROD: &str = "HOST=127.0.0.1
PORT=8080";

const DOTENV_COMMON: &str = "
SUPERUSERS=[]
COMMAND_START=[\"/\", \"\"]
";

/// Which runtime-settings block the `.env` file starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EnvStyle {
    Dev,
    Prod,
}

/// Everything one bootstrap run needs, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the project is generated into.
    pub target: PathBuf,
    /// Extra packages to install, in order, duplicates allowed.
    pub packages: Vec<String>,
    /// Requested adapter identifiers; empty means no entry artifact.
    pub adapters: Vec<String>,
    /// `.env` style.
    pub env_style: EnvStyle,
    /// Foreign interpreter binary; takes precedence over venv mode.
    pub embed: Option<PathBuf>,
    /// Create and install into `<target>/.venv`.
    pub use_venv: bool,
    /// Host interpreter, used for venv creation, direct installs, and
    /// entry compilation.
    pub python: PathBuf,
}

/// Render the `.env` content: the style-specific block immediately
/// followed by the common block.
pub fn dotenv(style: EnvStyle) -> String {
    let specific = match style {
        EnvStyle::Dev => DOTENV_DEV,
        EnvStyle::Prod => DOTENV_PROD,
    };
    format!("{specific}{DOTENV_COMMON}")
}

/// One bootstrap run.
pub struct Scaffold {
    config: Config,
}

impl Scaffold {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the full bootstrap sequence.
    ///
    /// Individual installs are best-effort, but a step that cannot run at
    /// all (unwritable target, missing interpreter) aborts the remainder
    /// and leaves whatever was already produced in place.
    pub fn run(&self) -> Result<()> {
        let cfg = &self.config;

        fs::create_dir_all(&cfg.target)
            .with_context(|| format!("failed to create {}", cfg.target.display()))?;

        let backend = Backend::select(cfg)?;

        output::action("Installing nonebot2...");
        backend.install("nonebot2")?;

        if !cfg.adapters.is_empty() {
            output::action("Installing adapters for nonebot2...");
            let mut bindings = Vec::with_capacity(cfg.adapters.len());
            for name in &cfg.adapters {
                let binding = adapter::resolve(name);
                backend.install(&binding.package)?;
                bindings.push(binding);
            }

            output::action("Creating entry file for the bot...");
            entry::synthesize(&cfg.target, &cfg.python, &bindings, backend.is_embedded())?;
        }

        output::action("Generating misc files...");
        let env_path = cfg.target.join(ENV_FILE);
        fs::write(&env_path, dotenv(cfg.env_style))
            .with_context(|| format!("failed to write {}", env_path.display()))?;

        for pkg in &cfg.packages {
            backend.install(pkg)?;
        }

        let manifest_path = cfg.target.join(MANIFEST_FILE);
        fs::write(&manifest_path, manifest::render(&cfg.packages))
            .with_context(|| format!("failed to write {}", manifest_path.display()))?;

        let plugin_dir = cfg.target.join(PLUGIN_DIR);
        fs::create_dir_all(&plugin_dir)
            .with_context(|| format!("failed to create {}", plugin_dir.display()))?;

        output::success("Done!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotenv_dev_blocks_join_without_separator_changes() {
        let text = dotenv(EnvStyle::Dev);
        assert!(text.starts_with(
            "HOST=127.0.0.1\nPORT=8080\nDEBUG=true\nFASTAPI_RELOAD=true\nSUPERUSERS=[]"
        ));
        assert!(text.ends_with("COMMAND_START=[\"/\", \"\"]\n"));
    }

    #[test]
    fn test_dotenv_prod_swaps_only_the_specific_block() {
        let text = dotenv(EnvStyle::Prod);
        assert!(text.starts_with("HOST=127.0.0.1\nPORT=8080\nSUPERUSERS=[]"));
        assert!(!text.contains("DEBUG"));
        assert!(!text.contains("FASTAPI_RELOAD"));
        assert!(text.ends_with("COMMAND_START=[\"/\", \"\"]\n"));
    }

    #[test]
    fn test_dotenv_common_block_identical_across_styles() {
        let dev = dotenv(EnvStyle::Dev);
        let prod = dotenv(EnvStyle::Prod);
        let dev_tail = dev.strip_prefix(DOTENV_DEV).unwrap();
        let prod_tail = prod.strip_prefix(DOTENV_PROD).unwrap();
        assert_eq!(dev_tail, prod_tail);
    }
}

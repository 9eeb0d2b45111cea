//! Installation backends
//!
//! One of three interchangeable strategies for "install package P":
//! into a fresh virtual environment, directly against the host
//! interpreter, or through an embedded (foreign) interpreter binary.
//! The backend is selected once per run and threaded through the rest
//! of the pipeline.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::Command;

use crate::output;
use crate::scaffold::Config;

/// Scripts directory inside a virtual environment.
#[cfg(windows)]
const VENV_BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const VENV_BIN_DIR: &str = "bin";

/// The install strategy chosen for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Install through the virtual environment's own pip.
    Venv { root: PathBuf },
    /// Install through the host interpreter's pip.
    Direct { python: PathBuf },
    /// Install through a foreign interpreter binary supplied by the
    /// operator; run under wine on non-Windows hosts.
    Embedded { python: PathBuf },
}

impl Backend {
    /// Select and prepare the backend for a run.
    ///
    /// `--embed` wins over venv mode. In venv mode the environment is
    /// created fresh under `<target>/.venv`; an existing one is reused
    /// with a notice rather than treated as an error.
    pub fn select(config: &Config) -> Result<Backend> {
        if let Some(python) = &config.embed {
            return Ok(Backend::Embedded {
                python: python.clone(),
            });
        }

        if config.use_venv {
            let root = config.target.join(".venv");
            if root.exists() {
                output::info(
                    "Virtual environment already exists. Delete .venv manually if you don't need it.",
                );
            } else {
                let status = Command::new(&config.python)
                    .args(["-m", "venv"])
                    .arg(&root)
                    .status()
                    .with_context(|| {
                        format!("failed to run {} -m venv", config.python.display())
                    })?;
                if !status.success() {
                    bail!("venv creation failed at {}", root.display());
                }
                output::info("Successfully created a new virtual environment.");
            }
            return Ok(Backend::Venv { root });
        }

        Ok(Backend::Direct {
            python: config.python.clone(),
        })
    }

    /// Whether this run installs through an embedded interpreter.
    pub fn is_embedded(&self) -> bool {
        matches!(self, Backend::Embedded { .. })
    }

    /// Build the installer invocation for one package without running it.
    ///
    /// All three variants end up at `pip install -U <package>`; they only
    /// differ in how pip is located and launched.
    pub fn install_command(&self, package: &str) -> Command {
        match self {
            Backend::Venv { root } => {
                let mut cmd = Command::new(root.join(VENV_BIN_DIR).join("pip"));
                cmd.args(["install", "-U", package]);
                cmd
            }
            Backend::Direct { python } => {
                let mut cmd = Command::new(python);
                cmd.args(["-m", "pip", "install", "-U", package]);
                cmd
            }
            Backend::Embedded { python } => {
                let mut cmd = if cfg!(windows) {
                    Command::new(python)
                } else {
                    output::warning(
                        "Detected you are not running Windows, attempting to use wine.",
                    );
                    let mut cmd = Command::new("wine");
                    cmd.arg(python);
                    cmd
                };
                cmd.args(["-m", "pip", "install", "-U", package]);
                cmd
            }
        }
    }

    /// Install one package, blocking until the installer exits.
    ///
    /// Best-effort: the installer's exit status is not inspected and a
    /// failed install does not stop the run. Only a failure to launch the
    /// installer at all is propagated.
    pub fn install(&self, package: &str) -> Result<()> {
        self.install_command(package)
            .status()
            .with_context(|| format!("failed to launch installer for {package}"))?;
        Ok(())
    }
}

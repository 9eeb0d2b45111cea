//! One-shot bootstrap generator for NoneBot2 projects
//!
//! Given a target directory, nonestrap provisions an installation
//! environment, installs the `nonebot2` framework plus any requested
//! adapters and extra packages, compiles a `bot.pyc` entry artifact that
//! registers the adapters with the driver, and writes the accompanying
//! `.env`, `pyproject.toml`, and `src/plugins/` scaffolding.
//!
//! # Example
//!
//! ```no_run
//! use nonestrap::{Config, EnvStyle, Scaffold};
//!
//! let config = Config {
//!     target: "mybot".into(),
//!     packages: vec!["nonebot-plugin-apscheduler".into()],
//!     adapters: vec!["onebot-v11".into()],
//!     env_style: EnvStyle::Dev,
//!     embed: None,
//!     use_venv: true,
//!     python: "python3".into(),
//! };
//! Scaffold::new(config).run().unwrap();
//! ```
//!
//! # Install backends
//!
//! Exactly one of three strategies is chosen per run:
//!
//! - **Venv** (default): a fresh `.venv` inside the target directory,
//!   installs go through its own `pip`.
//! - **Direct** (`--no-venv`): installs go through the host interpreter's
//!   `pip`, no environment isolation.
//! - **Embedded** (`--embed <python>`): installs go through a foreign
//!   interpreter binary, run under `wine` on non-Windows hosts.
//!
//! Install calls are best-effort: a non-zero installer exit does not stop
//! the run. The pipeline is forward-only and performs no rollback.

pub mod adapter;
pub mod backend;
pub mod entry;
pub mod manifest;
pub mod output;
pub mod scaffold;

pub use adapter::{AdapterBinding, SUPPORTED_ADAPTERS};
pub use backend::Backend;
pub use scaffold::{Config, EnvStyle, Scaffold};

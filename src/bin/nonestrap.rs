//! nonestrap CLI - NoneBot2 bootstrap generator
//!
//! Usage:
//!   nonestrap mybot                          Bootstrap into ./mybot
//!   nonestrap -a onebot-v11 mybot            Register an adapter
//!   nonestrap -e prod mybot                  Production .env style
//!   nonestrap -V mybot                       Install against the host, no venv
//!   nonestrap -E /path/python.exe mybot      Install through an embedded interpreter
//!   nonestrap mybot nonebot-plugin-foo ...   Install extra packages

use anyhow::Result;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use nonestrap::{Config, EnvStyle, SUPPORTED_ADAPTERS, Scaffold};
use std::path::PathBuf;

#[cfg(windows)]
const DEFAULT_PYTHON: &str = "python";
#[cfg(not(windows))]
const DEFAULT_PYTHON: &str = "python3";

#[derive(Parser)]
#[command(name = "nonestrap")]
#[command(about = "NoneBot2 bootstrap file generating tool")]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Bootstrap target directory
    target: PathBuf,

    /// Extra packages to install
    package: Vec<String>,

    /// Adapter to register (repeatable)
    #[arg(
        short,
        long = "adapter",
        value_parser = PossibleValuesParser::new(SUPPORTED_ADAPTERS.iter().copied())
    )]
    adapter: Vec<String>,

    /// Choose .env style
    #[arg(short = 'e', long, value_enum, default_value = "dev")]
    dotenv: EnvStyle,

    /// Install through an embedded python instead of the system one;
    /// path to the interpreter binary
    #[arg(short = 'E', long, value_name = "PATH")]
    embed: Option<PathBuf>,

    /// Do not create a virtual environment in the target directory
    #[arg(short = 'V', long = "no-venv", visible_alias = "in-venv")]
    no_venv: bool,

    /// Host interpreter used for venv creation, direct installs, and
    /// entry compilation
    #[arg(long, env = "NONESTRAP_PYTHON", default_value = DEFAULT_PYTHON, value_name = "PATH")]
    python: PathBuf,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            target: self.target,
            packages: self.package,
            adapters: self.adapter,
            env_style: self.dotenv,
            embed: self.embed,
            use_venv: !self.no_venv,
            python: self.python,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    Scaffold::new(cli.into_config()).run()
}

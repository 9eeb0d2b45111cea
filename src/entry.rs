//! Entry artifact synthesis
//!
//! Renders the bot entry program with the requested adapter registrations
//! embedded, byte-compiles it, and leaves only the compiled `bot.pyc` in
//! the target directory. The intermediate `bot.py` never survives the
//! operation, whether compilation ran or not.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::adapter::AdapterBinding;

/// Intermediate source filename, removed after compilation.
pub const ENTRY_SOURCE: &str = "bot.py";
/// Compiled entry artifact filename.
pub const ENTRY_ARTIFACT: &str = "bot.pyc";

const BOT_TEMPLATE: &str = r#"{embed_cd}

import nonebot

nonebot.init()

app = nonebot.get_asgi()
driver = nonebot.get_driver()

{adapter_load}

nonebot.load_from_toml("pyproject.toml")

if __name__ == "__main__":
    nonebot.run(app="__mp_main__:app")"#;

/// One-liner handed to the host interpreter: argv[1] is the source,
/// argv[2] the compiled output.
const PY_COMPILE: &str = "import py_compile, sys; py_compile.compile(sys.argv[1], cfile=sys.argv[2])";

/// Render the entry program text.
///
/// Statement pairs land two lines per adapter, in request order. `chdir`
/// is given only for the embedded backend, whose foreign interpreter does
/// not start in the target directory; the other backends already do, so
/// the prefix is omitted for them.
pub fn render(bindings: &[AdapterBinding], chdir: Option<&Path>) -> String {
    let adapter_load: Vec<&str> = bindings
        .iter()
        .flat_map(|b| [b.import_stmt.as_str(), b.register_stmt.as_str()])
        .collect();

    let embed_cd = match chdir {
        Some(target) => format!("__import__(\"os\").chdir(r\"{}\")", target.display()),
        None => String::new(),
    };

    BOT_TEMPLATE
        .replace("{embed_cd}", &embed_cd)
        .replace("{adapter_load}", &adapter_load.join("\n"))
}

/// Render, compile, and clean up the entry program.
///
/// The rendered text goes to `<target>/bot.py`, the compiler produces
/// `<target>/bot.pyc`, and the source is removed unconditionally before
/// any compile launch failure propagates. The compiler's exit status is
/// not inspected; the rendered program gets no semantic validation.
pub fn synthesize(
    target: &Path,
    python: &Path,
    bindings: &[AdapterBinding],
    chdir: bool,
) -> Result<PathBuf> {
    let source = target.join(ENTRY_SOURCE);
    let artifact = target.join(ENTRY_ARTIFACT);

    let rendered = render(bindings, chdir.then_some(target));
    fs::write(&source, rendered)
        .with_context(|| format!("failed to write {}", source.display()))?;

    let compiled = Command::new(python)
        .arg("-c")
        .arg(PY_COMPILE)
        .arg(&source)
        .arg(&artifact)
        .status();

    fs::remove_file(&source)
        .with_context(|| format!("failed to remove {}", source.display()))?;

    compiled.with_context(|| format!("failed to launch {} for py_compile", python.display()))?;
    Ok(artifact)
}

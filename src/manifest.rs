//! Project manifest generation
//!
//! Writes the `[tool.nonebot]` table of `pyproject.toml`: the plugin list
//! derived from the requested extra packages plus the fixed plugin source
//! directory.

/// Prefix marking an extra package as a NoneBot plugin.
const PLUGIN_PREFIX: &str = "nonebot-plugin-";

const PYPROJECT_TEMPLATE: &str = r#"[tool.nonebot]
plugins = [{plugins}]
plugin_dirs = ["src/plugins"]"#;

/// Select the plugin subset of the extra packages.
///
/// Retains packages starting with `nonebot-plugin-`, rewriting hyphens to
/// underscores to obtain the importable module name. Input order is
/// preserved; duplicates are not collapsed.
pub fn plugin_list(packages: &[String]) -> Vec<String> {
    packages
        .iter()
        .filter(|p| p.starts_with(PLUGIN_PREFIX))
        .map(|p| p.replace('-', "_"))
        .collect()
}

/// Render the manifest text for the given extra packages.
pub fn render(packages: &[String]) -> String {
    let plugins = plugin_list(packages)
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join(", ");
    PYPROJECT_TEMPLATE.replace("{plugins}", &plugins)
}

//! Adapter name resolution
//!
//! Maps a short adapter identifier to the package to install and the pair
//! of statements the entry file needs to register it with the driver.

/// Adapter identifiers accepted by the CLI.
pub const SUPPORTED_ADAPTERS: &[&str] = &[
    "onebot-v11",
    "ding",
    "feishu",
    "telegram",
    "qqguild",
    "kaiheila",
    "mirai2",
    "onebot-v12",
    "console",
    "github",
    "ntchat",
];

/// Everything derived from one adapter identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterBinding {
    /// Installable package name, e.g. `nonebot-adapter-onebot`
    pub package: String,
    /// Dotted import path under `nonebot.adapters`, e.g. `onebot.v11`
    pub module_path: String,
    /// Identifier the Adapter class is bound to, e.g. `onebot_v11`
    pub binding: String,
    /// Generated import statement
    pub import_stmt: String,
    /// Generated registration-call statement
    pub register_stmt: String,
}

/// Resolve an adapter identifier into its binding.
///
/// The `onebot-` family shares a single distribution package, so its
/// identifiers get hyphen-to-dot (import path) and hyphen-to-underscore
/// (binding identifier) rewrites and a fixed `onebot` package suffix. All
/// other identifiers pass through verbatim into every derived field,
/// hyphens included.
pub fn resolve(name: &str) -> AdapterBinding {
    let (module_path, binding, suffix) = if name.starts_with("onebot-") {
        (
            name.replace('-', "."),
            name.replace('-', "_"),
            "onebot".to_string(),
        )
    } else {
        (name.to_string(), name.to_string(), name.to_string())
    };

    let import_stmt = format!("from nonebot.adapters.{module_path} import Adapter as {binding}");
    let register_stmt = format!("driver.register_adapter({binding})");

    AdapterBinding {
        package: format!("nonebot-adapter-{suffix}"),
        module_path,
        binding,
        import_stmt,
        register_stmt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifier_passes_through() {
        let b = resolve("telegram");
        assert_eq!(b.package, "nonebot-adapter-telegram");
        assert_eq!(b.module_path, "telegram");
        assert_eq!(b.binding, "telegram");
        assert_eq!(
            b.import_stmt,
            "from nonebot.adapters.telegram import Adapter as telegram"
        );
        assert_eq!(b.register_stmt, "driver.register_adapter(telegram)");
    }

    #[test]
    fn test_onebot_family_rewrites() {
        let b = resolve("onebot-v11");
        assert_eq!(b.package, "nonebot-adapter-onebot");
        assert_eq!(b.module_path, "onebot.v11");
        assert_eq!(b.binding, "onebot_v11");
        assert_eq!(
            b.import_stmt,
            "from nonebot.adapters.onebot.v11 import Adapter as onebot_v11"
        );
        assert_eq!(b.register_stmt, "driver.register_adapter(onebot_v11)");

        let b = resolve("onebot-v12");
        assert_eq!(b.package, "nonebot-adapter-onebot");
        assert_eq!(b.module_path, "onebot.v12");
        assert_eq!(b.binding, "onebot_v12");
    }

    #[test]
    fn test_onebot_family_shares_one_package() {
        assert_eq!(resolve("onebot-v11").package, resolve("onebot-v12").package);
    }

    #[test]
    fn test_hyphenated_identifier_outside_family_not_rewritten() {
        // Identifiers outside the onebot- family keep their hyphens in every
        // derived field, even where that yields odd generated code. The
        // supported set never triggers this, but the passthrough is the
        // contract.
        let b = resolve("some-thing");
        assert_eq!(b.package, "nonebot-adapter-some-thing");
        assert_eq!(b.module_path, "some-thing");
        assert_eq!(b.binding, "some-thing");
        assert_eq!(
            b.import_stmt,
            "from nonebot.adapters.some-thing import Adapter as some-thing"
        );
    }

    #[test]
    fn test_every_supported_adapter_resolves() {
        for name in SUPPORTED_ADAPTERS {
            let b = resolve(name);
            assert!(b.package.starts_with("nonebot-adapter-"));
            assert!(!b.module_path.is_empty());
            assert!(!b.binding.is_empty());
        }
    }
}

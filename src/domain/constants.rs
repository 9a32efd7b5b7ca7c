//! Built-in defaults: the module lists and templates used when no
//! `amalgamate.toml` is present in the project root.

pub const MANIFEST_FILE_NAME: &str = "amalgamate.toml";

pub const DEFAULT_LIB_VERSION: &str = "Unreleased";
pub const DEFAULT_NAMESPACE: &str = "mine";
pub const DEFAULT_GUARD: &str = "MINE_CRYPTO_H";

pub const DEFAULT_HEADER_OUTPUT: &str = "package/mine.h";
pub const DEFAULT_SOURCE_OUTPUT: &str = "package/mine.cc";

pub const DEFAULT_HEADER_MODULES: &[&str] = &[
    "src/base16.h",
    "src/base64.h",
    "src/aes.h",
    "src/rsa.h",
    "src/zlib.h",
];

pub const DEFAULT_SOURCE_MODULES: &[&str] = &[
    "src/base16.cc",
    "src/base64.cc",
    "src/aes.cc",
    "src/zlib.cc",
];

pub const HEADER_TEMPLATE: &str = include_str!("../templates/header.tpl");
pub const SOURCE_TEMPLATE: &str = include_str!("../templates/source.tpl");

/// Origin reported for errors in the built-in manifest.
pub const BUILTIN_MANIFEST_ORIGIN: &str = "<built-in>";

pub const INCLUDE_DIRECTIVE: &str = "#include";

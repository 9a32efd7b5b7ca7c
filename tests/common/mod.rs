#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BASE16_H: &str = r#"//
//  base16.h
//  Part of Mine crypto library
//
//  You should not use this file, use include/mine.h
//  instead which is automatically generated and includes this file
//

#ifdef MINE_CRYPTO_H
#   error "Please use mine.h file. this file is only to aid the development"
#endif

#ifndef Base16_H
#define Base16_H

#include <string>
#include <unordered_map>

namespace mine {

using byte = unsigned char;

class Base16 {
public:
    static const std::string kValidChars;
};
} // end namespace mine

#endif // Base16_H
"#;

pub const BASE64_H: &str = r#"//
//  base64.h
//  Part of Mine crypto library
//

#ifndef Base64_H
#define Base64_H

#include <string>
#include <unordered_map>
#include <stdexcept>

namespace mine {

class Base64 {
public:
    static const std::string kValidChars;
};
} // end namespace mine

#endif // Base64_H
"#;

pub const ZLIB_H: &str = r#"//
//  zlib.h
//  Part of Mine crypto library
//

#ifndef ZLib_H
#define ZLib_H

#include <string>
#include <vector>

namespace mine {

class ZLib {
public:
    static std::string compressString(const std::string& str);
};
} // end namespace mine

#endif // ZLib_H
"#;

pub const BASE16_CC: &str = r#"//
//  base16.cc
//  Part of Mine crypto library
//

#include <sstream>
#include <stdexcept>
#include "src/base16.h"

using namespace mine;

const std::string Base16::kValidChars = "0123456789ABCDEF";
"#;

pub const ZLIB_CC: &str = r#"//
//  zlib.cc
//  Part of Mine crypto library
//

#include <sstream>
#include <zlib.h>
#include "src/zlib.h"

using namespace mine;

std::string ZLib::compressString(const std::string& str)
{
    return str;
}
"#;

pub const MANIFEST: &str = r#"version = "1.0.0"
namespace = "mine"

[header]
output = "package/mine.h"
guard = "MINE_CRYPTO_H"
modules = ["src/base16.h", "src/base64.h", "src/zlib.h"]

[source]
output = "package/mine.cc"
modules = ["src/base16.cc", "src/zlib.cc"]
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("mine");
        make_fixture_project(&root);
        Self { _tmp: tmp, root }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read output")
    }

    pub fn write(&self, rel: &str, text: &str) {
        write_file(&self.root, rel, text);
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("amalgamate");
        cmd.arg("--quiet")
            .arg("--root")
            .arg(&self.root)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

fn write_file(root: &Path, rel: &str, text: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().expect("fixture parent")).expect("create fixture dir");
    fs::write(p, text).expect("write fixture file");
}

fn make_fixture_project(root: &Path) {
    write_file(root, "src/base16.h", BASE16_H);
    write_file(root, "src/base64.h", BASE64_H);
    write_file(root, "src/zlib.h", ZLIB_H);
    write_file(root, "src/base16.cc", BASE16_CC);
    write_file(root, "src/zlib.cc", ZLIB_CC);
    write_file(root, "amalgamate.toml", MANIFEST);
}

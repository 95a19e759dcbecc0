//! A C build of the three entry points, compiled into a shared library at
//! test time.
//!
//! `InitSDK` rejects the api key `bad-key`, `GenerateQuery` always answers
//! with a count query on `orders`, and `GetVersion` reports `9.9.9`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

pub const STUB_VERSION: &str = "9.9.9";

const STUB_SOURCE: &str = r##"
#include <stddef.h>
#include <string.h>

const char *InitSDK(const char *config_json) {
    if (strstr(config_json, "\"api_key\":\"bad-key\"") != NULL) {
        return "{\"error\":\"invalid api key\"}";
    }
    return "{}";
}

const char *GenerateQuery(const char *prompt) {
    (void)prompt;
    return "{\"query\":\"{\\\"operation\\\":\\\"count\\\",\\\"collection\\\":\\\"orders\\\"}\"}";
}

#ifndef OMIT_GET_VERSION
const char *GetVersion(void) {
    return "9.9.9";
}
#endif
"##;

/// Which entry points the compiled library exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubExports {
    All,
    WithoutGetVersion,
}

/// Compile the stub into `dir/file_name` and return its path
pub fn build_stub_library(dir: &Path, file_name: &str, exports: StubExports) -> PathBuf {
    let source = dir.join(format!("{file_name}.c"));
    std::fs::write(&source, STUB_SOURCE).unwrap();
    let output = dir.join(file_name);

    let target = host_target();
    let compiler = cc::Build::new()
        .cargo_metadata(false)
        .cargo_warnings(false)
        .opt_level(0)
        .target(&target)
        .host(&target)
        .try_get_compiler()
        .expect("a C compiler is needed to build the stub library");

    let mut cmd = Command::new(compiler.path());
    cmd.args(["-shared", "-fPIC", "-o"]).arg(&output).arg(&source);
    if exports == StubExports::WithoutGetVersion {
        cmd.arg("-DOMIT_GET_VERSION");
    }

    let result = cmd.output().unwrap();
    assert!(
        result.status.success(),
        "compiling the stub library failed:\n{}",
        String::from_utf8_lossy(&result.stderr)
    );
    output
}

fn host_target() -> String {
    let env = if cfg!(target_env = "musl") { "musl" } else { "gnu" };
    format!("{}-unknown-linux-{env}", std::env::consts::ARCH)
}

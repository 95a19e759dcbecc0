//! Binding against a real shared library built from C.

#![cfg(target_os = "linux")]
#![allow(non_snake_case)]

#[path = "support/stub_library.rs"]
mod stub_library;

use prompttoquery_core::{EntryPoints, QueryError};
use prompttoquery_native::{
    ArtifactNames, LibraryLoader, NativeLibrary, PlatformDescriptor, SearchPath,
};
use stub_library::{STUB_VERSION, StubExports, build_stub_library};
use tempfile::TempDir;

fn host_artifact_name() -> String {
    ArtifactNames::default()
        .candidates(&PlatformDescriptor::current())
        .unwrap()
        .iter()
        .next()
        .unwrap()
        .to_string()
}

#[test]
fn NativeLibrary___open___binds_all_three_entry_points() {
    let temp = TempDir::new().unwrap();
    let path = build_stub_library(temp.path(), "libstub_full.so", StubExports::All);

    let library = NativeLibrary::open(&path).unwrap();

    assert_eq!(library.path(), path);
    assert_eq!(library.init_sdk(c"{}").unwrap(), b"{}");
    let response = String::from_utf8(library.generate_query(c"count orders").unwrap()).unwrap();
    assert!(response.contains(r#"\"operation\":\"count\""#));
    assert_eq!(library.version().unwrap(), STUB_VERSION);
}

#[test]
fn NativeLibrary___init_sdk___reports_boundary_error_text() {
    let temp = TempDir::new().unwrap();
    let path = build_stub_library(temp.path(), "libstub_key.so", StubExports::All);
    let library = NativeLibrary::open(path).unwrap();

    let response = library
        .init_sdk(cr#"{"llm_provider":"openai","api_key":"bad-key","db_schema":"{}"}"#)
        .unwrap();

    assert_eq!(response, br#"{"error":"invalid api key"}"#);
}

#[test]
fn NativeLibrary___open___partial_exports_bind_nothing() {
    let temp = TempDir::new().unwrap();
    let path = build_stub_library(
        temp.path(),
        "libstub_partial.so",
        StubExports::WithoutGetVersion,
    );

    let err = NativeLibrary::open(&path).unwrap_err();

    assert!(
        matches!(err, QueryError::MissingSymbol { ref symbol, .. } if symbol == "GetVersion"),
        "got {err:?}"
    );
    assert_eq!(err.error_code(), 4);
}

#[test]
fn LibraryLoader___load___skips_missing_directories_and_binds_host_artifact() {
    let temp = TempDir::new().unwrap();
    let name = host_artifact_name();
    let expected = build_stub_library(temp.path(), &name, StubExports::All);

    let library = LibraryLoader::new()
        .with_search_path(SearchPath::from_dirs([
            temp.path().join("missing-pkg"),
            temp.path().to_path_buf(),
        ]))
        .load()
        .unwrap();

    assert_eq!(library.path(), expected);
    assert_eq!(library.version().unwrap(), STUB_VERSION);
}

#[test]
fn NativeLibrary___open___same_file_twice_shares_the_mapping() {
    let temp = TempDir::new().unwrap();
    let path = build_stub_library(temp.path(), "libstub_twice.so", StubExports::All);

    let first = NativeLibrary::open(&path).unwrap();
    let second = NativeLibrary::open(&path).unwrap();
    drop(first);

    assert_eq!(second.version().unwrap(), STUB_VERSION);
}

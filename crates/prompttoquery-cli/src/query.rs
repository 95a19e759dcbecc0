//! Commands that call into the native library

use anyhow::{Context, Result};
use prompttoquery::{Configuration, EntryPoints, LibraryLoader, NativeLibrary, QueryClient};
use std::path::{Path, PathBuf};

/// Flags of `ptq generate` other than the prompt
pub struct GenerateArgs {
    pub provider: String,
    pub api_key: String,
    pub schema: PathBuf,
    pub model: Option<String>,
    pub lib: Option<PathBuf>,
}

impl GenerateArgs {
    /// Build the library configuration, reading the schema file
    pub fn configuration(&self) -> Result<Configuration> {
        let schema = read_schema(&self.schema)?;
        let mut config = Configuration::new(&self.provider, &self.api_key, schema);
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        Ok(config)
    }
}

/// Print the version reported by the library
///
/// Talks to the binding directly; the library does not need to be initialized.
pub fn version(lib: Option<PathBuf>) -> Result<()> {
    let library = open_library(lib.as_deref())?;
    let version = library.version()?;

    println!("{version}");
    tracing::debug!(path = %library.path().display(), "version reported");
    Ok(())
}

/// Initialize the library and print the generated query as JSON
pub fn generate(args: &GenerateArgs, prompt: &str) -> Result<()> {
    let config = args.configuration()?;

    let mut client = QueryClient::with_entry_points(open_library(args.lib.as_deref())?);
    client.initialize(&config)?;
    let result = client.generate_query(prompt)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn open_library(lib: Option<&Path>) -> Result<NativeLibrary> {
    let library = match lib {
        Some(path) => LibraryLoader::load_from_path(path)?,
        None => LibraryLoader::new().load()?,
    };
    Ok(library)
}

/// Read and parse a JSON schema document
pub fn read_schema(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse schema: {}", path.display()))
}

//! Serialized symbol graphs.
//!
//! A host running in another process can dump its resolved program as a
//! [`CompilationSnapshot`] and hand it over as JSON or YAML.
//!
//! ```ignore
//! use std::path::Path;
//! use autonotify::model::{Json, SnapshotFormat};
//!
//! let compilation = Json.read_file(Path::new("program.json"))?;
//! let output = autonotify::Generator::default().execute(&compilation);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::base::SymbolId;
use crate::error::{Error, Result};

use super::compilation::Compilation;
use super::graph::SymbolGraph;
use super::symbols::{FieldDeclaration, Symbol};

/// One symbol with its id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub id: SymbolId,
    pub symbol: Symbol,
}

/// Serializable form of a [`Compilation`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationSnapshot {
    pub symbols: Vec<SymbolEntry>,
    #[serde(default)]
    pub declarations: Vec<FieldDeclaration>,
}

impl CompilationSnapshot {
    pub fn from_compilation(compilation: &Compilation) -> Self {
        Self {
            symbols: compilation
                .symbols()
                .map(|(id, symbol)| SymbolEntry {
                    id,
                    symbol: symbol.clone(),
                })
                .collect(),
            declarations: compilation.field_declarations().to_vec(),
        }
    }

    /// Rebuild and validate the graph.
    pub fn into_compilation(self) -> Result<Compilation> {
        let mut builder = Compilation::builder();
        for entry in self.symbols {
            builder.insert(entry.id, entry.symbol)?;
        }
        for declaration in self.declarations {
            builder.push_declaration(declaration);
        }
        builder.build()
    }
}

/// Trait for snapshot encodings.
pub trait SnapshotFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// Read and validate a compilation from bytes.
    fn read(&self, input: &[u8]) -> Result<Compilation>;

    /// Write a compilation to bytes.
    fn write(&self, compilation: &Compilation) -> Result<Vec<u8>>;

    /// Read a compilation from a file on disk.
    fn read_file(&self, path: &Path) -> Result<Compilation> {
        let bytes = std::fs::read(path)?;
        tracing::debug!(format = self.name(), path = %path.display(), "reading snapshot");
        self.read(&bytes)
    }
}

/// JSON snapshots.
#[derive(Clone, Copy, Debug, Default)]
pub struct Json;

impl SnapshotFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn read(&self, input: &[u8]) -> Result<Compilation> {
        let snapshot: CompilationSnapshot =
            serde_json::from_slice(input).map_err(|e| Error::json(e.to_string()))?;
        snapshot.into_compilation()
    }

    fn write(&self, compilation: &Compilation) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(&CompilationSnapshot::from_compilation(compilation))
            .map_err(|e| Error::json(e.to_string()))
    }
}

/// YAML snapshots.
#[derive(Clone, Copy, Debug, Default)]
pub struct Yaml;

impl SnapshotFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn read(&self, input: &[u8]) -> Result<Compilation> {
        let snapshot: CompilationSnapshot =
            serde_yaml::from_slice(input).map_err(|e| Error::yaml(e.to_string()))?;
        snapshot.into_compilation()
    }

    fn write(&self, compilation: &Compilation) -> Result<Vec<u8>> {
        serde_yaml::to_string(&CompilationSnapshot::from_compilation(compilation))
            .map(String::into_bytes)
            .map_err(|e| Error::yaml(e.to_string()))
    }
}

//! # Schema Catalog
//!
//! The full set of exchange schemas, one per [`ExchangeType`], indexed by
//! schema `id`. Embedding systems register these alongside their own
//! `topology` schema so that `$ref: "topology"` in binding schemas resolves.
//!
//! ## File Layout
//!
//! Exported schemas are written as `<id>.schema.json`, e.g.
//! `topicExchange.schema.json`, one file per exchange type.

use std::path::{Path, PathBuf};

use topo_core::{ExchangeType, TopoError};

use crate::document::ExchangeSchemaDocument;
use crate::generate::exchange_schema;

/// All generated exchange schemas, in [`ExchangeType::all`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCatalog {
    documents: Vec<ExchangeSchemaDocument>,
}

impl SchemaCatalog {
    /// Generate the schema for every exchange type.
    pub fn generate() -> Self {
        let documents = ExchangeType::all()
            .iter()
            .map(|t| exchange_schema(*t))
            .collect();
        Self { documents }
    }

    /// Returns the number of schemas in the catalog.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the catalog holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Schema ids in catalog order.
    pub fn ids(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.id.as_str()).collect()
    }

    /// Look up a schema by its `id` (e.g. `"x-lvcExchange"`).
    pub fn get(&self, id: &str) -> Option<&ExchangeSchemaDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Iterate over all schemas in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ExchangeSchemaDocument> {
        self.documents.iter()
    }

    /// Write every schema into `dir` as pretty-printed JSON.
    ///
    /// Creates `dir` if needed and overwrites existing files of the same
    /// name. Returns the written paths in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `TopoError::Io` if the directory or a file cannot be written,
    /// and `TopoError::Serialization` if a document cannot be encoded.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, TopoError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.documents.len());
        for document in &self.documents {
            let path = dir.join(document.file_name());
            let mut content = document.to_json_pretty()?;
            content.push('\n');
            std::fs::write(&path, content)?;
            tracing::debug!(path = %path.display(), "wrote schema");
            written.push(path);
        }

        tracing::info!(
            count = written.len(),
            dir = %dir.display(),
            "exported exchange schemas"
        );
        Ok(written)
    }
}

impl<'a> IntoIterator for &'a SchemaCatalog {
    type Item = &'a ExchangeSchemaDocument;
    type IntoIter = std::slice::Iter<'a, ExchangeSchemaDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

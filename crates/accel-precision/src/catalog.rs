//! Read-only board and precision catalog.

use std::collections::BTreeMap;

use tracing::debug;

use crate::board::BoardInfo;
use crate::error::CatalogError;
use crate::parse;
use crate::types::NumericType;

/// Lookup surface consulted by configuration resolution.
///
/// Implementations are read-only: no method may mutate catalog state.
pub trait PrecisionCatalog {
    /// Look up a board by name.
    fn resolve_board(&self, name: &str) -> Result<BoardInfo, CatalogError>;

    /// Convert a textual precision into a numeric type.
    fn parse_precision(&self, spec: &str) -> Result<NumericType, CatalogError> {
        parse::parse_precision(spec)
    }

    /// Names of all known boards, sorted.
    fn board_names(&self) -> Vec<String>;
}

/// In-memory catalog keyed by board name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    boards: BTreeMap<String, BoardInfo>,
}

impl StaticCatalog {
    /// Create an empty catalog (every lookup fails).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a board and return `self` (builder pattern).
    pub fn with_board(mut self, name: impl Into<String>, info: BoardInfo) -> Self {
        self.boards.insert(name.into(), info);
        self
    }

    pub fn from_boards<I, S>(boards: I) -> Self
    where
        I: IntoIterator<Item = (S, BoardInfo)>,
        S: Into<String>,
    {
        Self {
            boards: boards
                .into_iter()
                .map(|(name, info)| (name.into(), info))
                .collect(),
        }
    }

    /// Load from the registry JSON shape `{ "<board>": { "part": .., "tcl_scripts": {..} } }`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let boards: BTreeMap<String, BoardInfo> = serde_json::from_str(json)?;
        debug!(boards = boards.len(), "loaded board registry");
        Ok(Self { boards })
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Iterate over `(name, info)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoardInfo)> {
        self.boards.iter().map(|(name, info)| (name.as_str(), info))
    }
}

impl PrecisionCatalog for StaticCatalog {
    fn resolve_board(&self, name: &str) -> Result<BoardInfo, CatalogError> {
        self.boards
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownBoard {
                board: name.to_string(),
            })
    }

    fn board_names(&self) -> Vec<String> {
        self.boards.keys().cloned().collect()
    }
}

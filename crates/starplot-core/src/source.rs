//! Shared plot data source
//!
//! Column-oriented data bound to a renderer. Controllers write whole columns
//! (`color`, `x`, `y`) in place; the renderer reads whatever is current.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Handle to a source shared between controllers and the renderer.
pub type SharedSource = Arc<RwLock<ColumnDataSource>>;

/// One column of plot data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(v) => Some(v.as_slice()),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            Self::Text(v) => Some(v.as_slice()),
            Self::Numeric(_) => None,
        }
    }
}

/// Column name → column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDataSource {
    pub data: BTreeMap<String, Column>,
}

impl ColumnDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh empty source wrapped for sharing
    pub fn shared() -> SharedSource {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Replace (or create) a column
    pub fn set_column(&mut self, name: impl Into<String>, column: Column) {
        self.data.insert(name.into(), column);
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.data.get(name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }
}

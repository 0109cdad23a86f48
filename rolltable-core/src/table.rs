//! Structured experiment output consumed by the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::combo::Combination;

/// One table row: the combination it describes plus its formatted cells,
/// one per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub combination: Combination,
    pub values: Vec<String>,
}

/// A titled comparison table. Rows are appended in display order during
/// aggregation and the table is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    title: String,
    columns: Vec<String>,
    rows: Vec<ResultRow>,
}

impl ResultTable {
    #[must_use]
    pub(crate) fn new(title: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, combination: Combination, values: Vec<String>) {
        self.rows.push(ResultRow {
            combination,
            values,
        });
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }
}

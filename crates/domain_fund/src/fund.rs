//! Fund definition
//!
//! This module defines the Fund entity and its category.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::FundId;

/// Fund categories, serialized with their Chinese labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundType {
    /// Equity fund
    #[serde(rename = "股票型")]
    Equity,
    /// Mixed equity/bond fund
    #[serde(rename = "混合型")]
    Mixed,
    /// Index tracking fund
    #[serde(rename = "指数型")]
    Index,
    /// Fixed income fund
    #[serde(rename = "债券型")]
    Bond,
}

impl FundType {
    /// Chinese label of the category
    pub fn label(&self) -> &'static str {
        match self {
            FundType::Equity => "股票型",
            FundType::Mixed => "混合型",
            FundType::Index => "指数型",
            FundType::Bond => "债券型",
        }
    }
}

impl fmt::Display for FundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A mutual fund a user can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Unique identifier
    pub id: FundId,
    /// Exchange fund code (e.g. `110022`)
    pub code: String,
    /// Fund name
    pub name: String,
    /// Fund category
    #[serde(rename = "type")]
    pub fund_type: FundType,
    /// Fund manager
    pub manager: String,
}

impl Fund {
    /// Creates a new fund
    ///
    /// # Arguments
    ///
    /// * `id` - Store identifier
    /// * `code` - Exchange fund code
    /// * `name` - Fund name
    /// * `fund_type` - Fund category
    /// * `manager` - Fund manager
    pub fn new(
        id: FundId,
        code: impl Into<String>,
        name: impl Into<String>,
        fund_type: FundType,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            fund_type,
            manager: manager.into(),
        }
    }

    /// Checks whether a free-text fund name refers to this fund
    ///
    /// Matches when either name contains the other, so both a partial
    /// name ("消费精选") and a phrase with leading words ("今天易方达消费精选")
    /// find `易方达消费精选`.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        self.name.contains(query) || query.contains(self.name.as_str())
    }
}

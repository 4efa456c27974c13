//! Chat messages and chart payloads

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::MessageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// A named value in a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: Decimal,
}

/// Chart rendered by the front end next to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    pub data: Vec<ChartPoint>,
}

impl ChartData {
    pub fn new(kind: ChartKind, title: impl Into<String>, data: Vec<ChartPoint>) -> Self {
        Self {
            kind,
            title: title.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<Vec<ChartData>>,
}

impl ChatMessage {
    /// A message typed by the user
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), None)
    }

    /// An assistant reply; an empty chart list is omitted
    pub fn assistant(content: impl Into<String>, charts: Vec<ChartData>) -> Self {
        let charts = if charts.is_empty() { None } else { Some(charts) };
        Self::new(Role::Assistant, content.into(), charts)
    }

    fn new(role: Role, content: String, charts: Option<Vec<ChartData>>) -> Self {
        Self {
            id: MessageId::new_v7(),
            role,
            content,
            timestamp: Utc::now(),
            charts,
        }
    }
}

//! Frontend Models
//!
//! Data structures matching backend entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Todo priority (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion state of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Completion {
    #[default]
    #[serde(rename = "In-progress", alias = "In-Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl Completion {
    pub const ALL: [Completion; 2] = [Completion::InProgress, Completion::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Completion::InProgress => "In-progress",
            Completion::Completed => "Completed",
        }
    }
}

impl FromStr for Completion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In-progress" | "In-Progress" => Ok(Completion::InProgress),
            "Completed" => Ok(Completion::Completed),
            other => Err(format!("unknown completion state '{}'", other)),
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Todo data structure (matches backend)
///
/// `id` stays empty until the data layer assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Last submission time, RFC 3339
    pub created_at: String,
    pub priority: Priority,
    pub completed: Completion,
}

/// Loading flag shared by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
}

impl LoadingStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingStatus::Loading)
    }
}

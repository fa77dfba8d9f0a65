//! Input shapes shared by the listing operations.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Page window for listing operations.
///
/// Both fields are optional. A caller-supplied pager replaces the default
/// pager as a whole, so `PagerInput { limit: Some(3), offset: None }` sends
/// `{"limit": 3}` with no offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PagerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl PagerInput {
    /// A pager with only a limit.
    #[must_use]
    pub const fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    /// A pager with both a limit and an offset.
    #[must_use]
    pub const fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SortInput {
    pub direction: SortDirection,
}

impl SortInput {
    #[must_use]
    pub const fn ascending() -> Self {
        Self {
            direction: SortDirection::Asc,
        }
    }

    #[must_use]
    pub const fn descending() -> Self {
        Self {
            direction: SortDirection::Desc,
        }
    }
}

/// Time window filter. Bounds are passed through as the server expects them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DateRangeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToggleSwitch {
    On,
    Off,
}

/// Accepts an identifier sent either as a JSON string or as a number.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

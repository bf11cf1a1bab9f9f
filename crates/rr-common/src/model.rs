//! Domain inputs and the processed item view.

use serde::{Deserialize, Serialize};

/// Viewing role, determining item visibility and annotation rules.
///
/// Unrecognized role strings deserialize to [`Role::Unknown`], which sees an
/// empty report by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum Role {
    /// Sees every item, each annotated with a priority flag.
    Admin,
    /// Sees only items at or below the value limit.
    User,
    /// Any other role; sees nothing.
    Unknown,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl Role {
    /// Parse a role from its wire name.
    ///
    /// Anything other than `ADMIN` or `USER` maps to [`Role::Unknown`];
    /// an unrecognized role is not an error.
    pub fn parse(s: &str) -> Role {
        match s {
            "ADMIN" => Role::Admin,
            "USER" => Role::User,
            _ => Role::Unknown,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::User => write!(f, "USER"),
            Role::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The user a report is generated for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name. Identifies who the report was generated for and is
    /// repeated on every delimited-text row.
    pub name: String,
    /// Viewing role.
    pub role: Role,
}

impl User {
    /// Create a new user.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// A business record candidate for inclusion in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Record identifier.
    pub id: u64,
    /// Record name.
    pub name: String,
    /// Record value.
    pub value: f64,
}

impl Item {
    /// Create a new item.
    pub fn new(id: u64, name: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }
}

/// The processed, view-only form of an item after role selection.
///
/// `priority` is a transient rendering annotation, present only when the
/// admin path produced the item. It never affects filtering or totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleItem {
    /// Record identifier.
    pub id: u64,
    /// Record name.
    pub name: String,
    /// Record value.
    pub value: f64,
    /// Priority annotation (admin path only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
}

impl VisibleItem {
    /// An item visible without annotation (user path).
    pub fn plain(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            value: item.value,
            priority: None,
        }
    }

    /// An item visible with a priority flag (admin path).
    pub fn flagged(item: &Item, priority: bool) -> Self {
        Self {
            priority: Some(priority),
            ..Self::plain(item)
        }
    }

    /// Whether the item renders with priority styling.
    pub fn is_priority(&self) -> bool {
        self.priority == Some(true)
    }
}

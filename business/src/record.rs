//! User records as shown in the directory, and the wire payload they come from.

use std::fmt;

use rand::Rng;
use serde::Deserialize;

/// Account status tag shown in the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Pending];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a record gets its status when it is created from the payload.
///
/// The endpoint carries no status field, so it is assigned client-side and
/// fixed on the record for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum StatusPolicy {
    /// Uniformly random per record.
    #[default]
    #[serde(rename = "random")]
    Random,
    /// Derived from the id, so the same user always gets the same status.
    #[serde(rename = "stable")]
    StableById,
}

impl StatusPolicy {
    pub fn assign(self, id: u64) -> Status {
        let index = match self {
            Self::Random => rand::thread_rng().gen_range(0..Status::ALL.len()),
            Self::StableById => (id % Status::ALL.len() as u64) as usize,
        };
        Status::ALL[index]
    }
}

/// One user entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: Status,
}

impl Record {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status,
        }
    }

    pub fn from_raw(raw: RawUser, status: Status) -> Self {
        Self {
            id: raw.id,
            name: format!("{} {}", raw.first_name, raw.last_name),
            email: raw.email,
            role: raw.role,
            status,
        }
    }
}

/// A user as returned by `GET /users`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Envelope of `GET /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<RawUser>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl UsersResponse {
    /// Keeps at most `limit` users, in payload order.
    pub fn into_records(self, policy: StatusPolicy, limit: usize) -> Vec<Record> {
        self.users
            .into_iter()
            .take(limit)
            .map(|raw| {
                let status = policy.assign(raw.id);
                Record::from_raw(raw, status)
            })
            .collect()
    }
}

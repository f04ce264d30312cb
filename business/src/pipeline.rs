//! Filter and sort over the fetched snapshot.
//!
//! Everything here is a pure function of its inputs. Pagination is a later,
//! separate slice over the output (see `pagination`).

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::Record;

/// Column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Name,
    Email,
    Role,
    Status,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Role, Self::Status];

    /// Column header text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
            Self::Status => "Status",
        }
    }

    fn field(self, record: &Record) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Email => &record.email,
            Self::Role => &record.role,
            Self::Status => record.status.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Case-insensitive substring match on name or email; an empty query
/// matches everything.
pub fn matches(record: &Record, query: &str) -> bool {
    matches_lowercase(record, &query.to_lowercase())
}

fn matches_lowercase(record: &Record, query: &str) -> bool {
    query.is_empty()
        || record.name.to_lowercase().contains(query)
        || record.email.to_lowercase().contains(query)
}

/// Lowercased letters with diacritics stripped.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased letters with diacritics kept as separate marks.
fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Collation used for every string column.
///
/// Three levels, as in a root-locale collation:
/// 1. base letters, ignoring accents and case (`Émile` < `Zoe`)
/// 2. accents (`Elan` < `Élan`)
/// 3. case, lowercase first (`a` < `A`)
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
}

/// Stable sort: equal keys keep their input order in both directions.
pub fn sort_records(records: &mut [Record], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| direction.apply(locale_cmp(key.field(a), key.field(b))));
}

/// Filter by `search_text`, then sort.
pub fn derive_view(
    records: &[Record],
    search_text: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<Record> {
    let query = search_text.to_lowercase();
    let mut rows: Vec<Record> = records
        .iter()
        .filter(|record| matches_lowercase(record, &query))
        .cloned()
        .collect();
    sort_records(&mut rows, key, direction);
    rows
}

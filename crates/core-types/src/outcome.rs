/// Result of an operation that targets a single user by id.
///
/// A zero-row match is not an error: it is reported as `NotFound` and the
/// transport layer decides what status that becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Found(T),
    NotFound,
}

impl<T> Outcome<T> {
    /// Builds an outcome from an optional row, e.g. `fetch_optional`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::Found(value),
            None => Outcome::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

impl Outcome<()> {
    /// Interprets the affected-row count of a `DELETE ... WHERE id = $1`.
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 { Outcome::Found(()) } else { Outcome::NotFound }
    }
}

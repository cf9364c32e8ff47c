use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, SecondsFormat, Utc};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Position in the published feed: the `published_at` of the last item the
/// client has already seen. The wire form is the plain RFC 3339 timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedCursor {
    pub published_at: DateTime<Utc>,
}

impl PublishedCursor {
    pub fn new(published_at: DateTime<Utc>) -> Self {
        Self { published_at }
    }

    /// Full sub-second precision is kept so that `published_at < cursor`
    /// never skips rows that share the truncated prefix.
    pub fn encode(&self) -> String {
        self.published_at
            .to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let published_at = DateTime::parse_from_rfc3339(token.trim())
            .map_err(|_| DomainError::Validation("invalid cursor".into()))?
            .with_timezone(&Utc);
        Ok(Self::new(published_at))
    }
}

/// Bounded query window for one feed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub before: Option<DateTime<Utc>>,
    pub limit: u32,
}

fn is_unsigned_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

impl PageWindow {
    pub fn new(cursor: Option<PublishedCursor>, limit: u32) -> Self {
        Self {
            before: cursor.map(|c| c.published_at),
            limit: limit.max(1),
        }
    }

    /// Resolve the raw `limit` query value. Absent or non-numeric input
    /// falls back to [`DEFAULT_PAGE_SIZE`]; numbers are clamped to `1..=max`,
    /// including digit strings too long for an integer.
    pub fn limit_from_param(raw: Option<&str>, max: u32) -> u32 {
        let max = max.max(1);
        let Some(value) = raw.map(str::trim) else {
            return DEFAULT_PAGE_SIZE.min(max);
        };
        match value.parse::<i64>() {
            Ok(n) => u32::try_from(n.clamp(1, i64::from(max))).unwrap_or(max),
            Err(_) if is_unsigned_digits(value.strip_prefix('+').unwrap_or(value)) => max,
            Err(_) if is_unsigned_digits(value.strip_prefix('-').unwrap_or("")) => 1,
            Err(_) => DEFAULT_PAGE_SIZE.min(max),
        }
    }

    /// One extra row tells us whether another page exists.
    pub fn fetch_limit(&self) -> u32 {
        self.limit.saturating_add(1)
    }

    pub fn admits(&self, published_at: DateTime<Utc>) -> bool {
        self.before.is_none_or(|before| published_at < before)
    }

    /// Truncate an over-fetched, descending row set to `limit` and derive
    /// the next cursor from the new last row.
    pub fn split_page<T>(
        &self,
        mut rows: Vec<T>,
        published_at: impl Fn(&T) -> DateTime<Utc>,
    ) -> (Vec<T>, Option<PublishedCursor>) {
        let limit = self.limit as usize;
        if rows.len() <= limit {
            return (rows, None);
        }
        rows.truncate(limit);
        let next = rows.last().map(|last| PublishedCursor::new(published_at(last)));
        (rows, next)
    }
}

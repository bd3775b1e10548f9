//! Extract the collection segment and record id from `/:path_segment/:id`.

use async_trait::async_trait;
use axum::{
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};

/// Collection path segment plus the id parsed from the path.
/// `id` is `None` when the segment holds no leading integer; such ids never match a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordId {
    pub path_segment: String,
    pub id: Option<i64>,
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((path_segment, raw_id)) = Path::<(String, String)>::from_request_parts(parts, state).await?;
        Ok(RecordId {
            id: parse_leading_int(&raw_id),
            path_segment,
        })
    }
}

/// Lenient base-10 parse: optional leading whitespace and sign, then the
/// leading run of digits. `"12abc"` is 12, `"abc"` and `"-"` are `None`.
/// Values beyond `i64` are `None` as well.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

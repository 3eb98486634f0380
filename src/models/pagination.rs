// src/models/pagination.rs

use std::num::IntErrorKind;

use serde::Deserialize;

/// `?page=` query parameter shared by the listing endpoints.
///
/// Kept as a raw string so that junk like `?page=abc` or `?page=-3` falls back
/// to the first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// 1-based page number; anything missing, non-numeric or below 1 is page 1.
    /// Numbers too large for `usize` saturate, so they still land past the end.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| match raw.trim().parse::<usize>() {
                Ok(page) => Some(page),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
                Err(_) => None,
            })
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: Option<&str>) -> PageParams {
        PageParams {
            page: raw.map(str::to_string),
        }
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(params(None).page(), 1);
        assert_eq!(params(Some("")).page(), 1);
        assert_eq!(params(Some("abc")).page(), 1);
        assert_eq!(params(Some("0")).page(), 1);
        assert_eq!(params(Some("-4")).page(), 1);
        assert_eq!(params(Some("-99999999999999999999999")).page(), 1);
    }

    #[test]
    fn page_parses_positive_integers() {
        assert_eq!(params(Some("3")).page(), 3);
        assert_eq!(params(Some(" 999 ")).page(), 999);
        assert_eq!(params(Some("18446744073709551616")).page(), usize::MAX);
        assert_eq!(
            params(Some("99999999999999999999999999999999")).page(),
            usize::MAX
        );
    }
}

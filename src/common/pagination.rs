use std::num::IntErrorKind;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page number. Anything that is not a positive integer reads as page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(usize);

impl PageNumber {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn parse(raw: Option<&str>) -> Self {
        let Some(value) = raw else {
            return Self::first();
        };

        match value.trim().parse::<usize>() {
            Ok(n) => Self::from(n),
            // All digits but too large: a real page, just far past the end.
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Self(usize::MAX),
            Err(_) => Self::first(),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for PageNumber {
    fn from(value: usize) -> Self {
        Self(value.max(1))
    }
}

pub fn paginate<T: Clone>(records: &[T], page: PageNumber, page_size: usize) -> Vec<T> {
    let start = (page.get() - 1).saturating_mul(page_size);
    if start >= records.len() {
        return Vec::new();
    }

    let end = start.saturating_add(page_size).min(records.len());
    records[start..end].to_vec()
}

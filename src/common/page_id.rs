//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// Identifies a virtual page in a reference stream.
///
/// Pages have no internal structure; they are compared by value only.
/// `u32` keeps identifiers non-negative by construction.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(PageId::from)
            .map_err(|_| Error::InvalidPageId(s.trim().to_string()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(PageId::from(42), pid);
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
        assert_eq!(format!("{}", PageId::new(u32::MAX)), "4294967295");
    }

    #[test]
    fn test_page_id_parse() {
        assert_eq!(" 7 ".parse::<PageId>().unwrap(), PageId::new(7));
        assert!(matches!("x".parse::<PageId>(), Err(Error::InvalidPageId(_))));
        assert!(matches!("-3".parse::<PageId>(), Err(Error::InvalidPageId(_))));
        // Every u32 is a legal page, including the largest.
        assert_eq!(
            u32::MAX.to_string().parse::<PageId>().unwrap(),
            PageId::new(u32::MAX)
        );
    }
}

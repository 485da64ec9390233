//! Gene copy counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of copies of the gene variant an individual carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    /// All copy counts, highest first (the order results are reported in).
    pub const DESCENDING: [GeneCount; 3] = [GeneCount::Two, GeneCount::One, GeneCount::Zero];

    pub fn copies(self) -> u8 {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }
}

impl From<GeneCount> for u8 {
    fn from(count: GeneCount) -> Self {
        count.copies()
    }
}

impl TryFrom<u8> for GeneCount {
    type Error = String;

    fn try_from(copies: u8) -> Result<Self, Self::Error> {
        match copies {
            0 => Ok(GeneCount::Zero),
            1 => Ok(GeneCount::One),
            2 => Ok(GeneCount::Two),
            other => Err(format!("gene copy count must be 0, 1 or 2, got {other}")),
        }
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_order() {
        let copies: Vec<u8> = GeneCount::DESCENDING.iter().map(|g| g.copies()).collect();
        assert_eq!(copies, vec![2, 1, 0]);
    }

    #[test]
    fn try_from_rejects_three() {
        assert!(GeneCount::try_from(3).is_err());
        assert_eq!(GeneCount::try_from(2), Ok(GeneCount::Two));
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&GeneCount::One).unwrap();
        assert_eq!(json, "1");
        let back: GeneCount = serde_json::from_str("2").unwrap();
        assert_eq!(back, GeneCount::Two);
    }
}

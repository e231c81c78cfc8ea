//! Letter grades and their grade points

use std::fmt;
use std::str::FromStr;

/// Closed set of letter grades, each carrying a fixed grade-point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// 10 points
    S,
    /// 9 points
    A,
    /// 8 points
    B,
    /// 7 points
    C,
    /// 6 points
    D,
    /// 5 points
    E,
    /// Fail, 0 points
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 7] = [
        Self::S,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
    ];

    /// Grade points used for GPA weighting
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::S => 10.0,
            Self::A => 9.0,
            Self::B => 8.0,
            Self::C => 7.0,
            Self::D => 6.0,
            Self::E => 5.0,
            Self::F => 0.0,
        }
    }

    /// Letter as a static string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown grade: '{trimmed}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_table() {
        let points: Vec<f64> = Grade::ALL.iter().map(|g| g.points()).collect();
        assert_eq!(points, vec![10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 0.0]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("a".parse::<Grade>(), Ok(Grade::A));
        assert_eq!(" S ".parse::<Grade>(), Ok(Grade::S));
        assert_eq!("f".parse::<Grade>(), Ok(Grade::F));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("G".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
        assert!("AB".parse::<Grade>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Grade::B.to_string(), "B");
    }
}

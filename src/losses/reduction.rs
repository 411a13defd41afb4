//! Loss reduction modes

/// Reduction applied to an elementwise loss map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Return the elementwise loss map unreduced
    None,
    /// Average over all elements (weighted average when weights are given)
    #[default]
    Mean,
    /// Sum over all elements
    Sum,
}

impl std::fmt::Display for Reduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Reduction::None => "none",
            Reduction::Mean => "mean",
            Reduction::Sum => "sum",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Reduction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Reduction::None),
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            other => Err(format!(
                "Unsupported reduction mode: {other}. Supported ones are: none, mean, sum"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_reduction() {
        assert_eq!(Reduction::from_str("none"), Ok(Reduction::None));
        assert_eq!(Reduction::from_str("Mean"), Ok(Reduction::Mean));
        assert_eq!(Reduction::from_str("SUM"), Ok(Reduction::Sum));
        assert!(Reduction::from_str("max").is_err());
    }

    #[test]
    fn test_default_is_mean() {
        assert_eq!(Reduction::default(), Reduction::Mean);
    }

    #[test]
    fn test_display_roundtrip() {
        for r in [Reduction::None, Reduction::Mean, Reduction::Sum] {
            assert_eq!(Reduction::from_str(&r.to_string()), Ok(r));
        }
    }
}

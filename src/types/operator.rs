use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::EvalError;

/// The comparison operators a rule or condition may carry. Closed set; any
/// other token is a configuration error, never a silent no-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Gte,
    Gt,
    Lte,
    Lt,
    Eq,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Gte,
        Operator::Gt,
        Operator::Lte,
        Operator::Lt,
        Operator::Eq,
    ];

    /// The token as written in rule tables and host configuration.
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Gte => ">=",
            Operator::Gt => ">",
            Operator::Lte => "<=",
            Operator::Lt => "<",
            Operator::Eq => "==",
        }
    }

    /// Resolve an operator token, trimming surrounding whitespace.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Operator> {
        match token.trim() {
            ">=" => Some(Operator::Gte),
            ">" => Some(Operator::Gt),
            "<=" => Some(Operator::Lte),
            "<" => Some(Operator::Lt),
            "==" => Some(Operator::Eq),
            _ => None,
        }
    }

    /// Apply this operator to the ordering of a measured value against a
    /// threshold (`measured cmp threshold`).
    #[must_use]
    pub fn holds(&self, ord: Ordering) -> bool {
        match self {
            Operator::Gte => ord != Ordering::Less,
            Operator::Gt => ord == Ordering::Greater,
            Operator::Lte => ord != Ordering::Greater,
            Operator::Lt => ord == Ordering::Less,
            Operator::Eq => ord == Ordering::Equal,
        }
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_token(s).ok_or_else(|| EvalError::InvalidOperator {
            token: s.trim().to_owned(),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.token()), Some(op));
        }
    }

    #[test]
    fn from_token_trims_whitespace() {
        assert_eq!(Operator::from_token(" >= "), Some(Operator::Gte));
        assert_eq!(Operator::from_token("\t<"), Some(Operator::Lt));
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(Operator::from_token("!="), None);
        assert_eq!(Operator::from_token("=>"), None);
        assert_eq!(Operator::from_token(""), None);
    }

    #[test]
    fn from_str_reports_invalid_operator() {
        let err = "!=".parse::<Operator>().unwrap_err();
        assert_eq!(err.to_string(), "invalid operator '!='");
    }

    #[test]
    fn holds_on_equal() {
        assert!(Operator::Gte.holds(Ordering::Equal));
        assert!(Operator::Lte.holds(Ordering::Equal));
        assert!(Operator::Eq.holds(Ordering::Equal));
        assert!(!Operator::Gt.holds(Ordering::Equal));
        assert!(!Operator::Lt.holds(Ordering::Equal));
    }

    #[test]
    fn holds_on_greater() {
        assert!(Operator::Gte.holds(Ordering::Greater));
        assert!(Operator::Gt.holds(Ordering::Greater));
        assert!(!Operator::Lte.holds(Ordering::Greater));
        assert!(!Operator::Lt.holds(Ordering::Greater));
        assert!(!Operator::Eq.holds(Ordering::Greater));
    }

    #[test]
    fn holds_on_less() {
        assert!(Operator::Lte.holds(Ordering::Less));
        assert!(Operator::Lt.holds(Ordering::Less));
        assert!(!Operator::Gte.holds(Ordering::Less));
        assert!(!Operator::Gt.holds(Ordering::Less));
        assert!(!Operator::Eq.holds(Ordering::Less));
    }
}

use std::str::FromStr;

/// A player's response to one question.
///
/// This is the closed set of answers the state machine accepts. Free-text
/// validation and re-prompting happen at the prompt boundary; by the time an
/// `Answer` exists it is already valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    ProbablyYes,
    ProbablyNo,
    /// "i dont know" - narrows exactly like [`Answer::No`].
    Unknown,
}

impl Answer {
    /// Whether this answer keeps the rows matching the reference value.
    ///
    /// Yes and probably-yes keep the matching rows; no, probably-no and
    /// unknown keep the rest.
    #[must_use]
    pub fn keeps_matching(self) -> bool {
        matches!(self, Self::Yes | Self::ProbablyYes)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unrecognized answer: {text:?}")]
pub struct ParseAnswerError {
    text: String,
}

impl FromStr for Answer {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "probably yes" => Ok(Self::ProbablyYes),
            "probably no" => Ok(Self::ProbablyNo),
            "i dont know" => Ok(Self::Unknown),
            _ => Err(ParseAnswerError { text: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_the_five_answers() {
        assert_eq!("yes".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!("no".parse::<Answer>().unwrap(), Answer::No);
        assert_eq!("probably yes".parse::<Answer>().unwrap(), Answer::ProbablyYes);
        assert_eq!("probably no".parse::<Answer>().unwrap(), Answer::ProbablyNo);
        assert_eq!("i dont know".parse::<Answer>().unwrap(), Answer::Unknown);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!("  YES ".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!("Probably No".parse::<Answer>().unwrap(), Answer::ProbablyNo);
        assert_eq!("I Dont Know".parse::<Answer>().unwrap(), Answer::Unknown);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for text in ["", "maybe", "y", "probably", "i don't know"] {
            assert!(text.parse::<Answer>().is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_narrowing_direction() {
        assert!(Answer::Yes.keeps_matching());
        assert!(Answer::ProbablyYes.keeps_matching());
        assert!(!Answer::No.keeps_matching());
        assert!(!Answer::ProbablyNo.keeps_matching());
        assert!(!Answer::Unknown.keeps_matching());
    }
}

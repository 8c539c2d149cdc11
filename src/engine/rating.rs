use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    Encouraging,
}

impl Rating {
    /// `score >= total / 2` en reales, sin redondeo: 2·score >= total.
    /// Saturado para que nunca desborde.
    pub fn from_score(score: usize, total: usize) -> Self {
        if score == total {
            Rating::Excellent
        } else if score.saturating_mul(2) >= total {
            Rating::Good
        } else {
            Rating::Encouraging
        }
    }

    pub fn stars(self) -> u8 {
        match self {
            Rating::Excellent => 3,
            Rating::Good => 2,
            Rating::Encouraging => 1,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rating::Excellent => "Great job!",
            Rating::Good => "Keep going!",
            Rating::Encouraging => "You can do it!",
        }
    }

    pub fn label(self) -> String {
        format!("{} {}", "⭐".repeat(self.stars() as usize), self.message())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_question_boundaries() {
        assert_eq!(Rating::from_score(2, 2), Rating::Excellent);
        assert_eq!(Rating::from_score(1, 2), Rating::Good);
        assert_eq!(Rating::from_score(0, 2), Rating::Encouraging);
    }

    #[test]
    fn odd_totals_use_exact_half() {
        // 1 < 1.5 y 2 >= 1.5
        assert_eq!(Rating::from_score(1, 3), Rating::Encouraging);
        assert_eq!(Rating::from_score(2, 3), Rating::Good);
        assert_eq!(Rating::from_score(2, 5), Rating::Encouraging);
        assert_eq!(Rating::from_score(3, 5), Rating::Good);
    }

    #[test]
    fn huge_scores_do_not_overflow() {
        assert_eq!(Rating::from_score(usize::MAX / 2 + 1, usize::MAX), Rating::Good);
        assert_eq!(Rating::from_score(usize::MAX / 2, usize::MAX), Rating::Encouraging);
        assert_eq!(Rating::from_score(usize::MAX, usize::MAX), Rating::Excellent);
    }

    #[test]
    fn labels() {
        assert_eq!(Rating::Excellent.label(), "⭐⭐⭐ Great job!");
        assert_eq!(Rating::Good.to_string(), "⭐⭐ Keep going!");
        assert_eq!(Rating::Encouraging.label(), "⭐ You can do it!");
    }
}

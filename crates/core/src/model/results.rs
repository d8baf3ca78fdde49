use crate::model::{ScoreRecord, exercise_xp};

/// Qualitative band for a finished exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Perfect,
    Great,
    Good,
    KeepPracticing,
}

impl ResultTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => Self::Perfect,
            80.. => Self::Great,
            60.. => Self::Good,
            _ => Self::KeepPracticing,
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Perfect => "🏆",
            Self::Great => "🌟",
            Self::Good => "👍",
            Self::KeepPracticing => "💪",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score!",
            Self::Great => "Great job!",
            Self::Good => "Good effort!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Results screen data for a finished exercise attempt.
///
/// `xp_earned` uses the same formula as the progress award, so it is what a
/// first completion earns. A repeat earns nothing; the recorded
/// `ExerciseCompletion::xp_awarded` is the authoritative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub tier: ResultTier,
    pub xp_earned: u32,
}

impl ResultSummary {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            let ratio = f64::from(score) / f64::from(total);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let pct = (ratio * 100.0).round() as u32;
            pct
        };
        Self {
            score,
            total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
            xp_earned: exercise_xp(score, total),
        }
    }
}

impl From<ScoreRecord> for ResultSummary {
    fn from(record: ScoreRecord) -> Self {
        Self::new(record.score, record.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_percentage_bands() {
        assert_eq!(ResultSummary::new(5, 5).tier, ResultTier::Perfect);
        assert_eq!(ResultSummary::new(4, 5).tier, ResultTier::Great);
        assert_eq!(ResultSummary::new(3, 5).tier, ResultTier::Good);
        assert_eq!(ResultSummary::new(2, 5).tier, ResultTier::KeepPracticing);
    }

    #[test]
    fn percentage_is_rounded() {
        let summary = ResultSummary::new(2, 3);
        assert_eq!(summary.percentage, 67);
        assert_eq!(summary.tier, ResultTier::Good);
        assert_eq!(summary.xp_earned, 13);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(ResultTier::Perfect.message(), "Perfect score!");
        assert_eq!(ResultTier::KeepPracticing.emoji(), "💪");
    }

    #[test]
    fn empty_total_reports_zero() {
        let summary = ResultSummary::new(0, 0);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.xp_earned, 0);
    }
}

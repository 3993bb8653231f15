use crate::model::Difficulty;

/// Rates a recipe from its cook and prep durations, in minutes.
///
/// Returns the rating together with the raw total so the aggregation step
/// can reuse it. An unknown duration on either side makes the whole rating
/// unknown. Boundaries: a total of exactly 30 or exactly 60 is `Medium`;
/// only strictly more than 60 is `Hard`.
pub fn classify(cook_minutes: Option<f64>, prep_minutes: Option<f64>) -> (Difficulty, Option<f64>) {
    let total = match (cook_minutes, prep_minutes) {
        (Some(cook), Some(prep)) => cook + prep,
        _ => return (Difficulty::Unknown, None),
    };

    let difficulty = if total > 60.0 {
        Difficulty::Hard
    } else if total >= 30.0 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    };
    (difficulty, Some(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy() {
        assert_eq!(classify(Some(10.0), Some(15.0)), (Difficulty::Easy, Some(25.0)));
    }

    #[test]
    fn test_medium() {
        assert_eq!(classify(Some(20.0), Some(15.0)), (Difficulty::Medium, Some(35.0)));
    }

    #[test]
    fn test_hard() {
        assert_eq!(classify(Some(50.0), Some(20.0)), (Difficulty::Hard, Some(70.0)));
    }

    #[test]
    fn test_boundary_easy_to_medium() {
        assert_eq!(classify(Some(15.0), Some(15.0)), (Difficulty::Medium, Some(30.0)));
    }

    #[test]
    fn test_boundary_medium_to_hard() {
        assert_eq!(classify(Some(30.0), Some(30.0)), (Difficulty::Medium, Some(60.0)));
        assert_eq!(classify(Some(30.0), Some(31.0)), (Difficulty::Hard, Some(61.0)));
    }

    #[test]
    fn test_unknown_inputs() {
        assert_eq!(classify(None, Some(10.0)), (Difficulty::Unknown, None));
        assert_eq!(classify(Some(10.0), None), (Difficulty::Unknown, None));
        assert_eq!(classify(None, None), (Difficulty::Unknown, None));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Unknown.to_string(), "Unknown Difficulty");
    }
}

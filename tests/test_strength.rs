use passgenk::charset::Category;
use passgenk::error::PassgenError;
use passgenk::strength::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_single_char_is_weak() {
        let report = analyze("aaaaaaaaaa").unwrap();
        assert!(report.repetition);
        assert!(!report.high_uniqueness);
        assert_eq!(report.length_tiers, 1);
        assert_eq!(report.categories, vec![Category::Lowercase]);
        assert_eq!(report.score, 1);
        assert_eq!(score("aaaaaaaaaa").unwrap(), StrengthLabel::Weak);
    }

    #[test]
    fn test_ascending_run_penalty_applied() {
        let report = analyze("abcDEF12").unwrap();
        assert!(report.ascending_run);
        assert_eq!(report.score, 4);
        assert_eq!(report.label, StrengthLabel::Medium);

        let report = analyze("xyz9!!").unwrap();
        assert!(report.ascending_run);
        assert!(report.repetition);
        assert_eq!(report.score, 2);
        assert_eq!(report.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_no_ascending_run() {
        let report = analyze("qm4$9!").unwrap();
        assert!(!report.ascending_run);
        assert!(!report.repetition);
        assert_eq!(report.score, 4);
        assert_eq!(report.label, StrengthLabel::Medium);
    }

    #[test]
    fn test_run_is_counted_once() {
        let one = analyze("abcqwe").unwrap();
        let many = analyze("abcxyz").unwrap();
        assert!(one.ascending_run && many.ascending_run);
        assert_eq!(one.score, many.score);
    }

    #[test]
    fn test_strong_and_very_strong() {
        assert_eq!(score("Kp7#mWq2").unwrap(), StrengthLabel::Strong);
        let report = analyze("Tr0ub4dor&3xQ!zP#wK9").unwrap();
        assert_eq!(report.length_tiers, 4);
        assert_eq!(report.categories.len(), 4);
        assert_eq!(report.score, 9);
        assert_eq!(report.label, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_negative_score_is_weak() {
        let report = analyze("abcabc").unwrap();
        assert_eq!(report.score, -1);
        assert_eq!(report.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_longer_password_scores_at_least_as_high() {
        let short = analyze("kP4#zQ8").unwrap();
        let long = analyze("kP4#zQ8!mR7%wT5&yN2@").unwrap();
        assert_eq!(short.length, 7);
        assert_eq!(long.length, 20);
        assert_eq!(short.ascending_run, long.ascending_run);
        assert_eq!(short.repetition, long.repetition);
        assert!(long.score >= short.score);
    }

    #[test]
    fn test_score_is_deterministic() {
        for password in ["hunter2", "Kp7#mWq2", "aaaa", "Z"] {
            assert_eq!(score(password).unwrap(), score(password).unwrap());
            assert_eq!(analyze(password).unwrap(), analyze(password).unwrap());
        }
    }

    #[test]
    fn test_empty_password_is_not_scored() {
        assert!(matches!(score(""), Err(PassgenError::EmptyPassword)));
        assert!(matches!(analyze(""), Err(PassgenError::EmptyPassword)));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }
}

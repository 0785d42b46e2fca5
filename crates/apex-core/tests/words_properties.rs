// Property-based tests for amounts in words
//
// The words are one-way, so these check shape rather than a round trip:
// suffixes, the paise clause, and that grouping never leaks raw digits.

use apex_core::money::Paise;
use apex_core::words::{paise_in_words, MAX_RUPEES_IN_WORDS};
use apex_core::CoreError;
use proptest::prelude::*;

const MAX_PAISE: i64 = (MAX_RUPEES_IN_WORDS as i64) * 100;

proptest! {
    #[test]
    fn test_always_ends_with_only(paise in 0i64..MAX_PAISE) {
        let words = paise_in_words(Paise::from_paise(paise)).unwrap();
        prop_assert!(words.ends_with(" Only"), "{}", words);
    }

    #[test]
    fn test_no_digits_or_double_spaces(paise in 0i64..MAX_PAISE) {
        let words = paise_in_words(Paise::from_paise(paise)).unwrap();
        prop_assert!(!words.chars().any(|c| c.is_ascii_digit()), "{}", words);
        prop_assert!(!words.contains("  "), "{}", words);
        prop_assert_eq!(words.trim(), words.as_str());
    }

    #[test]
    fn test_rupees_clause_iff_whole_rupees(paise in 0i64..MAX_PAISE) {
        let amount = Paise::from_paise(paise);
        let words = paise_in_words(amount).unwrap();

        let expect_rupees = amount.rupees() > 0 || amount.is_zero();
        prop_assert_eq!(words.contains("Rupees"), expect_rupees, "{}", words);
    }

    #[test]
    fn test_paise_clause_iff_fraction(rupees in 1i64..1_000_000_000, paise in 0i64..100) {
        let words = paise_in_words(Paise::from_rupees_paise(rupees, paise)).unwrap();
        prop_assert_eq!(words.contains(" and "), paise > 0, "{}", words);
        prop_assert_eq!(words.ends_with("Paise Only"), paise > 0, "{}", words);
    }

    #[test]
    fn test_is_deterministic(paise in 0i64..MAX_PAISE) {
        let amount = Paise::from_paise(paise);
        prop_assert_eq!(paise_in_words(amount).unwrap(), paise_in_words(amount).unwrap());
    }

    #[test]
    fn test_out_of_range_is_refused(paise in MAX_PAISE..i64::MAX) {
        let refused = matches!(
            paise_in_words(Paise::from_paise(paise)),
            Err(CoreError::AmountTooLarge { .. })
        );
        prop_assert!(refused);
    }
}

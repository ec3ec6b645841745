/// Locale-aware string ordering for sidebar ids.
///
/// Root-locale Unicode collation at tertiary strength, the ordering the site toolchain's
/// `localeCompare` produces: accents and case break ties only after the base letters,
/// punctuation sorts before digits and letters, and there is no numeric collation
/// (`C10` < `C2`).
///
/// Distinct ids can still compare `Equal` (canonically equivalent spellings); callers that
/// need a total order rely on a stable sort to keep input order for those.
use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

pub struct IdCollator {
    collator: CollatorBorrowed<'static>,
}

impl IdCollator {
    pub fn new() -> Self {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(Default::default(), options)
            .expect("root collation data is compiled in");
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl Default for IdCollator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut ids: Vec<&str>) -> Vec<&str> {
        let collator = IdCollator::new();
        ids.sort_by(|a, b| collator.compare(a, b));
        ids
    }

    #[test]
    fn case_does_not_dominate_order() {
        // byte order would put every upper-case id first
        assert_eq!(sorted(vec!["b", "A", "a", "B"]), vec!["a", "A", "b", "B"]);
        assert_eq!(sorted(vec!["beta", "Alpha"]), vec!["Alpha", "beta"]);
    }

    #[test]
    fn accents_sort_next_to_base_letter() {
        let collator = IdCollator::new();
        assert_eq!(sorted(vec!["eb", "éa", "ea"]), vec!["ea", "éa", "eb"]);
        assert_eq!(sorted(vec!["z", "ö", "o"]), vec!["o", "ö", "z"]);
        assert_eq!(collator.compare("e", "é"), Ordering::Less);
    }

    #[test]
    fn digits_before_letters_and_no_numeric_collation() {
        assert_eq!(sorted(vec!["C2", "C10", "C1"]), vec!["C1", "C10", "C2"]);
        assert_eq!(sorted(vec!["a", "1"]), vec!["1", "a"]);
        assert_eq!(sorted(vec!["a1", "a-1", "a 1"]), vec!["a 1", "a-1", "a1"]);
    }

    #[test]
    fn punctuation_follows_collation_not_code_points() {
        assert_eq!(
            sorted(vec!["a.1", "a-1", "a_1", "a 1"]),
            vec!["a 1", "a_1", "a-1", "a.1"]
        );
        assert_eq!(
            sorted(vec!["Kz", "K+1", "K#1", "K/1", "K–1", "K-1"]),
            vec!["K-1", "K–1", "K/1", "K#1", "K+1", "Kz"]
        );
    }

    #[test]
    fn non_ascii_letters_sort_with_their_expansions() {
        assert_eq!(sorted(vec!["z", "ß", "st", "ss"]), vec!["ss", "ß", "st", "z"]);
    }

    #[test]
    fn identical_strings_are_equal() {
        let collator = IdCollator::new();
        assert_eq!(collator.compare("K-07", "K-07"), Ordering::Equal);
        assert_eq!(collator.compare("", ""), Ordering::Equal);
        assert_eq!(collator.compare("", "a"), Ordering::Less);
    }
}

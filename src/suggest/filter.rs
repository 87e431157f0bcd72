//! Candidate filtering

use super::Constraints;
use crate::core::Word;
use rayon::prelude::*;

/// Candidates consistent with `constraints` and not in `exclude`
///
/// Input order is preserved.
#[must_use]
pub fn suggest<'a>(
    constraints: &Constraints,
    exclude: &[Word],
    candidates: &'a [Word],
) -> Vec<&'a Word> {
    candidates
        .par_iter()
        .filter(|word| constraints.matches(word) && !exclude.contains(word))
        .collect()
}

/// Number of candidates still consistent with `constraints`
#[must_use]
pub fn count_matching(constraints: &Constraints, candidates: &[Word]) -> usize {
    candidates
        .par_iter()
        .filter(|word| constraints.matches(word))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Evaluation;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn filters_and_excludes() {
        let candidates = words_from_slice(&["crane", "trace", "grace", "tower", "brace"]);
        let constraints = Constraints::new()
            .with_correct(2, b'A')
            .with_wrong_position(b'R', 0)
            .with_absent(b'T');

        let result = suggest(&constraints, &[word("grace")], &candidates);
        assert_eq!(result, vec![&candidates[0], &candidates[4]]);
    }

    #[test]
    fn never_returns_absent_letters_or_excluded_pairs() {
        let candidates = words_from_slice(WORDS);
        let target = word("crane");
        let guess = word("slate");
        let evaluation = Evaluation::calculate(&guess, &target);
        let constraints = Constraints::from_rows([(&guess, &evaluation)]);

        let result = suggest(&constraints, &[], &candidates);
        assert!(result.contains(&&target));
        for candidate in &result {
            assert!(!candidate.has_letter(b'S'));
            assert!(!candidate.has_letter(b'L'));
            assert!(!candidate.has_letter(b'T'));
            assert_eq!(candidate.char_at(2), b'A');
            assert_eq!(candidate.char_at(4), b'E');
        }
        assert_eq!(count_matching(&constraints, &candidates), result.len());
    }

    #[test]
    fn empty_candidates() {
        assert!(suggest(&Constraints::new(), &[], &[]).is_empty());
    }
}

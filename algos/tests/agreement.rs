use algos::{Algorithm, BM, HashParams, KMP, RK, StringSearch};
use proptest::prelude::*;

fn naive_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len()).position(|w| w == pattern)
}

fn run_all(params: &HashParams, text: &[u8], pattern: &[u8]) -> [Option<usize>; 3] {
    Algorithm::ALL.map(|algo| algo.find_symbols(params, text, pattern))
}

#[test]
fn article_substrings() {
    let text = "Від охорони здоров’я до фінансів, системи ШІ покращують ефективність.";
    let params = HashParams::default();

    let expected = text
        .find("системи ШІ")
        .map(|byte_idx| text[..byte_idx].chars().count());
    assert!(expected.is_some());

    assert_eq!(BM::find(&(), text, "системи ШІ"), expected);
    assert_eq!(KMP::find(&(), text, "системи ШІ"), expected);
    assert_eq!(RK::find(&params, text, "системи ШІ"), expected);

    assert_eq!(BM::find(&(), text, "вигаданий"), None);
    assert_eq!(KMP::find(&(), text, "вигаданий"), None);
    assert_eq!(RK::find(&params, text, "вигаданий"), None);
}

#[test]
fn repeated_calls_are_identical() {
    let params = HashParams::default();
    let first = run_all(&params, b"abracadabra", b"cad");
    for _ in 0..100 {
        assert_eq!(run_all(&params, b"abracadabra", b"cad"), first);
    }
    assert_eq!(first, [Some(4); 3]);
}

proptest! {
    #[test]
    fn searchers_agree_with_naive(
        text in proptest::collection::vec(0u8..4, 0..200),
        pattern in proptest::collection::vec(0u8..4, 0..8),
    ) {
        let expected = naive_find(&text, &pattern);
        for result in run_all(&HashParams::default(), &text, &pattern) {
            prop_assert_eq!(result, expected);
        }
    }

    #[test]
    fn planted_pattern_is_found_leftmost(
        prefix in "[ab]{0,40}",
        pattern in "[ab]{1,6}",
        suffix in "[ab]{0,40}",
    ) {
        let text = format!("{prefix}{pattern}{suffix}");
        let expected = naive_find(text.as_bytes(), pattern.as_bytes());
        prop_assert!(expected.is_some());
        prop_assert!(expected.unwrap() <= prefix.len());

        let params = HashParams::new(256, 1_000_000_007).unwrap();
        for result in run_all(&params, text.as_bytes(), pattern.as_bytes()) {
            prop_assert_eq!(result, expected);
        }
    }

    #[test]
    fn tiny_modulus_never_reports_false_positive(
        text in proptest::collection::vec(any::<u8>(), 1..120),
        pattern in proptest::collection::vec(any::<u8>(), 1..5),
    ) {
        let params = HashParams::new(256, 2).unwrap();
        prop_assert_eq!(RK::find_bytes(&params, &text, &pattern), naive_find(&text, &pattern));
    }
}

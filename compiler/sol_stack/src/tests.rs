use super::ensure_sufficient_stack;

/// Mimics a parser descending through nested parentheses.
fn nesting_depth(input: &[u8]) -> usize {
    ensure_sufficient_stack(|| match input.split_first() {
        Some((b'(', rest)) => 1 + nesting_depth(rest),
        _ => 0,
    })
}

#[test]
fn shallow_nesting() {
    assert_eq!(nesting_depth(b"(((x"), 3);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let input = vec![b'('; 200_000];
    assert_eq!(nesting_depth(&input), 200_000);
}

#[test]
fn passes_through_result() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("nope"));
    assert_eq!(result, Err("nope"));
}

//! Helper combinators for chaining side effects.
//!
//! - [`tap`]: Runs a side effect on a value and hands the value back

/// Applies `function` to `value` for its side effect and returns `value`.
///
/// This is the "do something, then give me the thing back" combinator. It
/// lets a mutating method be written as a single expression that still
/// yields the receiver, which is how the chainable mutators of
/// [`UniqueCollection`](crate::collection::UniqueCollection) are built.
///
/// The function receives the value mutably. When `T` is itself a mutable
/// reference, the function sees `&mut &mut U`, and field access and method
/// calls auto-dereference through it.
///
/// # Laws
///
/// - **No-op identity**: `tap(x, |_| {}) == x`
/// - **Sequencing**: `tap(tap(x, f), g)` runs `f` then `g` on the same value
///
/// # Examples
///
/// ```
/// use unique_collection::compose::tap;
///
/// let values = tap(vec![3, 1, 2], |values| values.sort_unstable());
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
///
/// Observing without changing:
///
/// ```
/// use unique_collection::compose::tap;
///
/// let mut seen = None;
/// let value = tap(42, |value| seen = Some(*value));
/// assert_eq!(value, 42);
/// assert_eq!(seen, Some(42));
/// ```
#[inline]
pub fn tap<T, F>(mut value: T, function: F) -> T
where
    F: FnOnce(&mut T),
{
    function(&mut value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_tap_returns_value_unchanged_for_noop() {
        assert_eq!(tap(7, |_| {}), 7);
        assert_eq!(tap("hello", |_| {}), "hello");
    }

    #[rstest]
    fn test_tap_applies_mutation() {
        let result = tap(String::from("ab"), |text| text.push('c'));
        assert_eq!(result, "abc");
    }

    #[rstest]
    fn test_tap_through_mutable_reference() {
        let mut values = vec![1];
        let reference = tap(&mut values, |values| values.push(2));
        reference.push(3);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_tap_runs_functions_in_order() {
        let mut log = Vec::new();
        let value = tap(tap(0, |_| log.push("first")), |_| log.push("second"));
        assert_eq!(value, 0);
        assert_eq!(log, vec!["first", "second"]);
    }
}

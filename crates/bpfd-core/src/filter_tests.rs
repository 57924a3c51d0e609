use super::*;
use yare::parameterized;

#[parameterized(
    exact_match = { &["value"], "value", true },
    substring_hit = { &["thing", "blah", "value"], "value", true },
    no_hit = { &["thing", "blah"], "value", false },
    empty_values = { &[], "value", false },
)]
fn matches_iff_any_value_is_a_substring(values: &[&str], field: &str, expected: bool) {
    let filter = Filter::new(values.iter().copied());
    assert_eq!(filter.matches(field), expected);
}

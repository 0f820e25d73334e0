//! Indexed dispatch over the regression suite
//!
//! Each case has a stable name and a stable index. Probing an index
//! without executing returns the name; an out-of-range index returns
//! None, which is how a driver discovers the end of the suite.

use super::{api, rounding};

pub const SUITE: &[(&str, fn())] = &[("TestAPI", api::run), ("TestRounding", rounding::run)];

pub fn run_indexed_test(index: usize, exec: bool) -> Option<&'static str> {
    let (name, case) = SUITE.get(index).copied()?;
    if exec {
        case();
    }
    Some(name)
}

#[test]
fn test_names_enumerate_in_order() {
    assert_eq!(run_indexed_test(0, false), Some("TestAPI"));
    assert_eq!(run_indexed_test(1, false), Some("TestRounding"));
}

#[test]
fn test_out_of_range_index_yields_none() {
    assert_eq!(run_indexed_test(SUITE.len(), false), None);
    assert_eq!(run_indexed_test(usize::MAX, false), None);
}

#[test]
fn test_probing_does_not_execute() {
    // Enumerating every name must be side-effect free and total
    let names: Vec<&str> = (0..)
        .map_while(|index| run_indexed_test(index, false))
        .collect();
    assert_eq!(names, ["TestAPI", "TestRounding"]);
}

#[test]
fn test_full_suite_executes() {
    for index in 0..SUITE.len() {
        assert!(run_indexed_test(index, true).is_some());
    }
}

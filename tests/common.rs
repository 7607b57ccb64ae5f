#![allow(dead_code)]

use std::cmp::Ordering;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render an ordering the way the comparison tables are written
pub fn sign(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Version labels compared in both directions, `lhs < rhs` in every row
pub const VERSION_LOWER: &[(&str, &str)] = &[
    ("1.0", "1.1"),
    ("1.1", "1.2.3"),
    ("1.0a", "1.0b"),
    ("2.5", "2.50"),
    // leading zeroes are ignored
    ("1.9", "1.0010"),
    // 'A' (ASCII 65) < 'a' (ASCII 97)
    ("2.1.7A", "2.1.7a"),
    // numbers are considered newer than letters
    ("2a", "2.0"),
    ("0.5.0.post1", "0.5.0.1"),
    ("0.5.0.post1", "0.5.1"),
    // more segments win when all previous ones are equal
    ("1.0", "1.0a"),
    ("1", "1.0"),
    ("1.1~201601", "1.1"),
    ("1.1", "1.1^201601"),
];

/// Version labels which compare equal in both directions
pub const VERSION_EQUAL: &[(&str, &str)] = &[
    ("1.05", "1.5"),
    ("fc4", "fc.4"),
    ("3.0.0_fc", "3.0.0.fc"),
];

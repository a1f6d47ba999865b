use procbind_types::{FieldError, PortSpec};
use std::str::FromStr;

fn valid(expr: &str) -> bool {
    PortSpec::from_str(expr).is_ok()
}

// ── Single ports ─────────────────────────────────────────────────

#[test]
fn accepts_single_ports() {
    assert!(valid("1"));
    assert!(valid("80"));
    assert!(valid("8080"));
    assert!(valid("65535"));
}

#[test]
fn rejects_zero_and_out_of_range() {
    assert!(!valid("0"));
    assert!(!valid("65536"));
    assert!(!valid("99999999999"));
}

#[test]
fn rejects_non_numeric() {
    assert!(!valid(""));
    assert!(!valid("http"));
    assert!(!valid("+80"));
    assert!(!valid("-80"));
    assert!(!valid(" 80"));
    assert!(!valid("80 "));
}

// ── Ranges ───────────────────────────────────────────────────────

#[test]
fn accepts_ranges() {
    assert!(valid("8080-8090"));
    assert!(valid("1-65535"));
    assert!(valid("443-443"));
}

#[test]
fn rejects_inverted_and_partial_ranges() {
    assert!(!valid("8090-8080"));
    assert!(!valid("8080-"));
    assert!(!valid("-8080"));
    assert!(!valid("80-90-100"));
}

// ── Lists ────────────────────────────────────────────────────────

#[test]
fn accepts_lists_of_ports_and_ranges() {
    assert!(valid("80,443"));
    assert!(valid("80,443,9000-9010"));
}

#[test]
fn rejects_empty_list_segments() {
    assert!(!valid("80,"));
    assert!(!valid(",80"));
    assert!(!valid("80,,443"));
}

// ── Error reporting ──────────────────────────────────────────────

#[test]
fn error_carries_the_whole_expression() {
    let err = PortSpec::from_str("80,bad,443").unwrap_err();
    match err {
        FieldError::InvalidPort(expr) => assert_eq!(expr, "80,bad,443"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn new_does_not_validate() {
    // Decoded documents may carry junk; validation is a separate pass.
    let spec = PortSpec::new("not-a-port");
    assert_eq!(spec.as_str(), "not-a-port");
}

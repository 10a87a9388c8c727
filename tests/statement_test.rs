mod common;
use calc::lang::ErrorKind;
use calc::mach::{Event, Runtime};
use common::*;

#[test]
fn test_assignment_prints_nothing() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "x = 10"), "");
    assert_eq!(exec(&mut r, "x"), "10.000000");
    assert!(r.state().stack().is_empty());
}

#[test]
fn test_round_trip() {
    let mut r = Runtime::default();
    assert_eq!(r.evaluate("x = 5").unwrap(), None);
    assert_eq!(r.evaluate("x").unwrap(), Some(5.0));
}

#[test]
fn test_variables_persist() {
    let mut r = Runtime::default();
    exec(&mut r, "rate = 1.5");
    exec(&mut r, "hours2 = 4");
    assert_eq!(exec(&mut r, "rate * hours2"), "6.000000");
    exec(&mut r, "rate = rate + 1");
    assert_eq!(exec(&mut r, "rate"), "2.500000");
    assert_eq!(r.state().vars().len(), 2);
}

#[test]
fn test_unset_variable_reads_zero() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "nothing"), "0.000000");
    assert_eq!(exec(&mut r, "nothing + 2"), "2.000000");
    assert!(r.state().vars().is_empty());
}

#[test]
fn test_failed_assignment_does_not_store() {
    let mut r = Runtime::default();
    exec(&mut r, "x = 1");
    assert_eq!(
        exec(&mut r, "x = 2 +"),
        "UNEXPECTED END OF INPUT IN (7..7); EXPECTED EXPRESSION"
    );
    assert_eq!(
        exec(&mut r, "x = 3 $"),
        "UNKNOWN SYMBOL IN (6..7); NOT AN OPERATOR, NUMBER OR NAME"
    );
    assert_eq!(exec(&mut r, "x"), "1.000000");
}

#[test]
fn test_bad_assignment_target() {
    let mut r = Runtime::default();
    let error = r.evaluate("3 = 4").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(
        error.to_string(),
        "SYNTAX ERROR IN (0..1); EXPECTED IDENTIFIER BEFORE '='"
    );
    assert_eq!(
        exec(&mut r, "x = y = 3"),
        "SYNTAX ERROR IN (6..7); UNEXPECTED TOKEN AFTER EXPRESSION"
    );
}

#[test]
fn test_quit_and_blank_skip_pipeline() {
    let mut r = Runtime::default();
    assert!(matches!(r.enter("quit"), Event::Quit));
    assert!(matches!(r.enter(""), Event::Stopped));
    assert!(matches!(r.enter("   "), Event::Stopped));
    assert!(r.state().vars().is_empty());
    assert!(r.state().stack().is_empty());
}

#[test]
fn test_padded_quit_is_a_name() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "  quit "), "0.000000");
    assert_eq!(exec(&mut r, "quit = 4"), "");
    assert_eq!(exec(&mut r, "quit\t"), "4.000000");
    assert!(matches!(r.enter("quit"), Event::Quit));
}

#[test]
fn test_error_kinds() {
    let mut r = Runtime::default();
    assert_eq!(r.evaluate("#").unwrap_err().kind(), ErrorKind::Lex);
    assert_eq!(r.evaluate("(").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(r.evaluate("1 1").unwrap_err().kind(), ErrorKind::Parse);
}

//! Concrete end-to-end scenarios exercising the public surface together:
//! parsing, formatting, multiplication, division, exponentiation, and gcd.

use crate::BigInt;

fn p(s: &str) -> BigInt {
    crate::cache::init();
    s.parse().unwrap()
}

#[test]
fn scenario_1_huge_exponent_times_zero_and_cancellation() {
    assert_eq!((p("1e100") * p("0")).to_string(), "0");
    assert_eq!((p("1e100") + p("-1e100")).to_string(), "0");
}

#[test]
fn scenario_2_hex_multiplication_and_formatting() {
    assert_eq!((p("0xff") * p("0xff")).to_string(), "65025");
    assert_eq!((p("0xff") * p("0xff")).to_radix_string(16), "0xfe01");
}

#[test]
fn scenario_3_negative_division_truncates_toward_zero() {
    let (q, r) = p("-7").div_rem(&p("2")).unwrap();
    assert_eq!(q.to_string(), "-3");
    assert_eq!(r.to_string(), "-1");
}

#[test]
fn scenario_4_power_sign_rules_and_negative_exponent_error() {
    assert_eq!(p("-2").pow(&p("10")).unwrap().to_string(), "1024");
    assert_eq!(p("-2").pow(&p("11")).unwrap().to_string(), "-2048");
    assert!(p("-2").pow(&p("-1")).is_err());
}

#[test]
fn scenario_5_scientific_notation_truncation_and_fraction_pointer() {
    crate::cache::init();
    let (value, tail) = crate::bigint::parse::parse("3.14e2").unwrap();
    assert_eq!(value.to_string(), "314");
    assert_eq!(tail, None);

    let (value, tail) = crate::bigint::parse::parse("3.141e2").unwrap();
    assert_eq!(value.to_string(), "314");
    assert_eq!(tail.as_deref(), Some("1"));
}

#[test]
fn scenario_6_gcd_and_integer_log() {
    assert_eq!(p("462").gcd(&p("1071")).to_string(), "21");
    assert_eq!(p("1000000").log(10).unwrap(), 6);
    assert_eq!(p("1024").log(2).unwrap(), 10);
}

//! Division identity and truncating sign rules.

use crate::BigInt;
use rand::Rng;

#[test]
fn division_identity_holds_for_random_operands() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let n = BigInt::from_i64(rng.gen());
        let d = BigInt::from_i64(rng.gen_range(1..=i64::MAX));
        let d = if rng.gen_bool(0.5) { d.negated() } else { d };

        let (q, r) = n.div_rem(&d).unwrap();
        assert_eq!(q.clone() * d.clone() + r.clone(), n, "n = q*d + r must hold");
        assert!(r.abs() < d.abs() || r.is_zero(), "|r| < |d|");
        assert!(r.is_zero() || r.is_negative() == n.is_negative(), "sign(r) = sign(n) or r = 0");
        assert!(q.is_zero() || q.is_negative() == (n.is_negative() != d.is_negative()), "sign(q) = sign(n)*sign(d) or q = 0");
    }
}

#[test]
fn division_by_zero_is_an_error() {
    let n = BigInt::from_i64(5);
    assert_eq!(n.div_rem(&BigInt::zero()).unwrap_err(), crate::Error::DivisionByZero);
    assert_eq!(n.rem(&BigInt::zero()).unwrap_err(), crate::Error::DivisionByZero);
}

#[test]
fn negative_seven_over_two_truncates_toward_zero() {
    let (q, r) = BigInt::from_i64(-7).div_rem(&BigInt::from_i64(2)).unwrap();
    assert_eq!(q, BigInt::from_i64(-3));
    assert_eq!(r, BigInt::from_i64(-1));
}

#[test]
fn division_by_power_of_two_matches_right_shift() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let n = BigInt::from_i64(rng.gen_range(0..1_000_000_000));
        for k in 0u64..10 {
            let d = BigInt::from_u64(1u64 << k);
            let (q, r) = n.div_rem(&d).unwrap();
            assert_eq!(q, n.clone() >> k);
            assert!(r.is_zero());
        }
    }
}

#[test]
fn fast_paths_agree_with_general_division() {
    // |d| == 1
    let n = BigInt::from_i64(-42);
    let (q, r) = n.div_rem(&BigInt::from_i64(1)).unwrap();
    assert_eq!((q, r), (BigInt::from_i64(-42), BigInt::zero()));

    // |n| == |d|
    let (q, r) = BigInt::from_i64(7).div_rem(&BigInt::from_i64(-7)).unwrap();
    assert_eq!((q, r), (BigInt::from_i64(-1), BigInt::zero()));

    // |n| < |d|
    let (q, r) = BigInt::from_i64(3).div_rem(&BigInt::from_i64(10)).unwrap();
    assert_eq!((q, r), (BigInt::zero(), BigInt::from_i64(3)));
}

#[test]
fn large_operand_division_matches_schoolbook_by_hand() {
    // 2^130 / (2^65 + 1), chosen to force the general restoring-division
    // path (neither a power-of-two divisor nor a single-digit divisor).
    let n = BigInt::from_u64(1) << 130u64;
    let d = (BigInt::from_u64(1) << 65u64) + BigInt::from_u64(1);
    let (q, r) = n.div_rem(&d).unwrap();
    assert_eq!(q.clone() * d + r.clone(), n);
    assert!(r.abs() < BigInt::from_u64(1) << 65u64);
}

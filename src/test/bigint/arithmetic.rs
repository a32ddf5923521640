//! Algebraic properties of add/sub/mul: identities, inverses,
//! commutativity, and associativity.

use crate::BigInt;
use rand::Rng;

fn random_bigints(n: usize) -> Vec<BigInt> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| BigInt::from_i64(rng.gen())).collect()
}

#[test]
fn additive_identity_and_inverse() {
    for x in random_bigints(50) {
        assert_eq!(x.clone() + BigInt::zero(), x);
        assert_eq!(x.clone() + x.negated(), BigInt::zero());
    }
}

#[test]
fn multiplicative_identity_and_zero() {
    for x in random_bigints(50) {
        assert_eq!(x.clone() * BigInt::from_u64(1), x);
        assert_eq!(x.clone() * BigInt::zero(), BigInt::zero());
    }
}

#[test]
fn addition_is_commutative_and_associative() {
    let values = random_bigints(30);
    for pair in values.chunks(2) {
        if let [a, b] = pair {
            assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }
    }
    for triple in values.chunks(3) {
        if let [a, b, c] = triple {
            assert_eq!((a.clone() + b.clone()) + c.clone(), a.clone() + (b.clone() + c.clone()));
        }
    }
}

#[test]
fn multiplication_is_commutative_and_associative() {
    let values = random_bigints(30);
    for pair in values.chunks(2) {
        if let [a, b] = pair {
            assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        }
    }
    for triple in values.chunks(3) {
        if let [a, b, c] = triple {
            assert_eq!((a.clone() * b.clone()) * c.clone(), a.clone() * (b.clone() * c.clone()));
        }
    }
}

#[test]
fn shift_matches_multiply_by_power_of_two() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let x = BigInt::from_i64(rng.gen_range(-1_000_000..1_000_000));
        for k in 0u64..10 {
            let shifted = x.clone() << k;
            let multiplied = x.clone() * BigInt::from_u64(1u64 << k);
            assert_eq!(shifted, multiplied);
        }
    }
}

#[test]
fn is_power_of_two_matches_bit_trick_definition() {
    for k in 0u32..40 {
        let x = BigInt::from_u64(1u64 << k);
        assert!(x.is_power_of_two());
    }
    for v in [0u64, 3, 5, 6, 7, 100, 1023] {
        assert!(!BigInt::from_u64(v).is_power_of_two());
    }
}

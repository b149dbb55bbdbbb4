//! Property-based tests for the Fountain generator.

use num_bigint::BigInt;
use proptest::prelude::*;

use fountain_core::Fountain;

/// Reference rule: the arithmetic progression mapped through the label
/// function, computed with plain machine integers.
fn reference_labels(fizz: i64, buzz: i64, start: i64, stop: i64, step: i64) -> Vec<String> {
    let mut out = Vec::new();
    let mut n = start;
    while (step > 0 && n < stop) || (step < 0 && n > stop) {
        let mut label = String::new();
        if n % fizz == 0 {
            label.push_str("Fizz");
        }
        if n % buzz == 0 {
            label.push_str("Buzz");
        }
        if label.is_empty() {
            label = n.to_string();
        }
        out.push(label);
        n += step;
    }
    out
}

fn collect(f: &Fountain, start: i64, stop: i64, step: i64) -> Vec<String> {
    f.generate(start, Some(BigInt::from(stop)), step)
        .expect("nonzero step")
        .collect::<Result<_, _>>()
        .expect("nonzero divisors")
}

fn divisor() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..30, -30i64..-1]
}

fn nonzero_step() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..10, -10i64..-1]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// `generate` agrees with the reference arithmetic-progression rule.
    #[test]
    fn generate_matches_reference(
        fizz in divisor(),
        buzz in divisor(),
        start in -200i64..200,
        stop in -200i64..200,
        step in nonzero_step(),
    ) {
        let f = Fountain::new(fizz, buzz);
        prop_assert_eq!(
            collect(&f, start, stop, step),
            reference_labels(fizz, buzz, start, stop, step)
        );
    }

    /// Label classification: FizzBuzz / Fizz / Buzz / decimal, by
    /// exact divisibility.
    #[test]
    fn label_classification(fizz in divisor(), buzz in divisor(), n in -10_000i64..10_000) {
        let got = Fountain::new(fizz, buzz).at(n).unwrap();
        let expected = match (n % fizz == 0, n % buzz == 0) {
            (true, true) => "FizzBuzz".to_owned(),
            (true, false) => "Fizz".to_owned(),
            (false, true) => "Buzz".to_owned(),
            (false, false) => n.to_string(),
        };
        prop_assert_eq!(got, expected);
    }

    /// `at(i)` is the first element of `generate(i, None, 1)`.
    #[test]
    fn at_equals_first_generated(fizz in divisor(), buzz in divisor(), i in -10_000i64..10_000) {
        let f = Fountain::new(fizz, buzz);
        let mut cursor = f.generate(i, None, 1).unwrap();
        prop_assert_eq!(Some(f.at(i)), cursor.next());
    }

    /// `slice` materializes exactly what `generate` yields lazily.
    #[test]
    fn slice_equals_generate(
        fizz in divisor(),
        buzz in divisor(),
        start in -200i64..200,
        stop in -200i64..200,
        step in nonzero_step(),
    ) {
        let f = Fountain::new(fizz, buzz);
        let sliced = f
            .slice(
                Some(BigInt::from(start)),
                Some(BigInt::from(stop)),
                Some(BigInt::from(step)),
            )
            .unwrap();
        prop_assert_eq!(sliced, collect(&f, start, stop, step));
    }

    /// A fully consumed cursor yields nothing afterwards.
    #[test]
    fn exhausted_cursor_is_empty(
        start in -50i64..50,
        stop in -50i64..50,
        step in nonzero_step(),
    ) {
        let f = Fountain::new(3, 5);
        let mut cursor = f.generate(start, Some(BigInt::from(stop)), step).unwrap();
        cursor.by_ref().for_each(drop);
        prop_assert!(cursor.next().is_none());
        prop_assert!(cursor.next().is_none());
    }

    /// Sibling cursors never share position state.
    #[test]
    fn cursors_are_independent(advance in 0usize..20) {
        let f = Fountain::new(3, 5);
        let mut a = f.iter();
        let mut b = f.iter();
        for _ in 0..advance {
            a.next();
        }
        prop_assert_eq!(b.next(), Some(Ok("FizzBuzz".to_owned())));
    }
}

/// Default-divisor idempotence: shape reports exactly what was configured.
#[test]
fn shape_roundtrip() {
    let f = Fountain::new(3, 5);
    assert_eq!(f.shape(), (&BigInt::from(3), &BigInt::from(5)));
    assert_eq!(f, Fountain::default());
}

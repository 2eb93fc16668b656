use decima::{BigDecimal, BigInt, Error, RoundingMode};

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[test]
fn decimal_parse_plain_forms() {
    assert_eq!(dec("1.23").to_plain_string(), "1.23");
    assert_eq!(dec("-0.5").to_plain_string(), "-0.5");
    assert_eq!(dec(".5").to_plain_string(), "0.5");
    assert_eq!(dec("1.").to_plain_string(), "1");
    assert_eq!(dec("007").to_plain_string(), "7");
    assert_eq!(dec("0.000").to_plain_string(), "0.000");
}

#[test]
fn decimal_parse_separators() {
    assert_eq!(dec("1_000,000 000").to_plain_string(), "1000000000");
    assert_eq!(dec("1_2.3_4").to_plain_string(), "12.34");
}

#[test]
fn decimal_parse_exponents() {
    assert_eq!(dec("1.23e5").to_plain_string(), "123000");
    assert_eq!(dec("1.23E-5").to_plain_string(), "0.0000123");
    assert_eq!(dec("5e0").to_plain_string(), "5");
    assert_eq!(dec("1.2345e2").to_plain_string(), "123.45");
    assert_eq!(dec("-2e+3").to_plain_string(), "-2000");
}

#[test]
fn decimal_parse_rejects_garbage() {
    for bad in ["", ".", "+", "e5", "1e", "1..2", "1.2.3", "abc", "_1", "1ee2"] {
        assert!(
            matches!(bad.parse::<BigDecimal>(), Err(Error::InvalidString { .. })),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn decimal_negative_zero_normalizes() {
    let z = dec("-0.00");
    assert!(z.is_zero());
    assert!(!z.is_negative());
    assert_eq!(z.signum(), 0);
}

#[test]
fn decimal_addition_aligns_scales() {
    assert_eq!(dec("1.50").add(&dec("0.25")).to_plain_string(), "1.75");
    assert_eq!(dec("1.0").add(&dec("2.00")).to_plain_string(), "3.00");
    assert_eq!(dec("0.1").add(&dec("0.2")).to_plain_string(), "0.3");
    assert_eq!(dec("12").add(&dec("0.005")).to_plain_string(), "12.005");
}

#[test]
fn decimal_addition_of_scientific_inputs() {
    let sum = dec("1.23e5").add(&dec("4.56e4"));
    assert_eq!(sum.to_plain_string(), "168600");
    assert_eq!(sum.to_scientific_string(), "1.686E+5");
}

#[test]
fn decimal_subtraction_keeps_scale_and_kills_sign() {
    let z = dec("5.5").sub(&dec("5.5"));
    assert!(z.is_zero());
    assert!(!z.is_negative());
    assert_eq!(z.to_plain_string(), "0.0");

    assert_eq!(dec("1.00").sub(&dec("0.999")).to_plain_string(), "0.001");
}

#[test]
fn decimal_multiplication_scale_is_sum() {
    assert_eq!(dec("1.2").mul(&dec("0.34")).to_plain_string(), "0.408");
    assert_eq!(dec("2.0").mul(&dec("3.0")).to_plain_string(), "6.00");
    assert_eq!(dec("-1.5").mul(&dec("2")).to_plain_string(), "-3.0");
    let product = dec("0.001").mul(&dec("0.001"));
    assert_eq!(product.scale(), 6);
    assert_eq!(product.to_plain_string(), "0.000001");
}

#[test]
fn decimal_divide_one_seventh() {
    let q = dec("1")
        .divide(&dec("7"), 28, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(q.to_plain_string(), "0.1428571428571428571428571429");
}

#[test]
fn decimal_divide_hundred_thirds() {
    let q = dec("100")
        .divide(&dec("3"), 28, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(q.to_plain_string(), "33.33333333333333333333333333");
}

#[test]
fn decimal_divide_exact_trims_to_ideal_scale() {
    let q = dec("10")
        .divide(&dec("2"), 28, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(q.to_plain_string(), "5");

    let q = dec("10.00")
        .divide(&dec("4"), 10, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(q.to_plain_string(), "2.50");
}

#[test]
fn decimal_divide_rounding_modes() {
    let q = dec("2")
        .divide(&dec("3"), 5, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(q.to_plain_string(), "0.66667");

    let q = dec("2").divide(&dec("3"), 5, RoundingMode::Down).unwrap();
    assert_eq!(q.to_plain_string(), "0.66666");

    let q = dec("-1")
        .divide(&dec("7"), 28, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(q.to_plain_string(), "-0.1428571428571428571428571429");
}

#[test]
fn decimal_divide_small_quotient_precision() {
    // dividend much larger than precision: the quotient becomes an
    // integer with trailing zeros folded into the coefficient
    let q = dec("100000000000000000000000000000000000000000000000000")
        .divide(&dec("3"), 5, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(q.to_scientific_string(), "3.3333E+49");
}

#[test]
fn decimal_divide_by_zero() {
    assert!(matches!(
        dec("1").divide(&dec("0"), 10, RoundingMode::HalfEven),
        Err(Error::DivisionByZero { .. })
    ));
    assert!(matches!(
        dec("1").divide(&dec("0.000"), 10, RoundingMode::HalfEven),
        Err(Error::DivisionByZero { .. })
    ));
}

#[test]
fn decimal_divide_newton_kernel_exact() {
    // a 2260-digit divisor pushes the division through the
    // Newton-reciprocal kernel; an exactly divisible dividend must come
    // back as the bare quotient
    let b_digits = "987654321123456789".repeat(126); // 2268 digits
    let q_digits = "314159265358979323".repeat(17); // 306 digits
    let b: BigInt = b_digits.parse().unwrap();
    let q: BigInt = q_digits.parse().unwrap();
    let a = &b * &q;

    let result = BigDecimal::from(a)
        .divide(&BigDecimal::from(b), 320, RoundingMode::HalfEven)
        .unwrap();
    assert_eq!(result, BigDecimal::from(q));
}

#[test]
fn decimal_round_modes_at_the_half() {
    let two_five = dec("2.5");
    let cases = [
        (RoundingMode::Down, "2"),
        (RoundingMode::Up, "3"),
        (RoundingMode::HalfDown, "2"),
        (RoundingMode::HalfUp, "3"),
        (RoundingMode::HalfEven, "2"),
        (RoundingMode::HalfOdd, "3"),
        (RoundingMode::Ceiling, "3"),
        (RoundingMode::Floor, "2"),
        (RoundingMode::ZeroFiveUp, "2"),
    ];
    for (mode, expected) in cases {
        assert_eq!(
            two_five.round(0, mode).to_plain_string(),
            expected,
            "2.5 under {mode:?}"
        );
    }

    assert_eq!(dec("3.5").round(0, RoundingMode::HalfEven).to_plain_string(), "4");
    assert_eq!(dec("3.5").round(0, RoundingMode::HalfOdd).to_plain_string(), "3");
    assert_eq!(dec("3.5").round(0, RoundingMode::HalfDown).to_plain_string(), "3");
}

#[test]
fn decimal_round_negative_values() {
    assert_eq!(dec("-2.5").round(0, RoundingMode::Ceiling).to_plain_string(), "-2");
    assert_eq!(dec("-2.5").round(0, RoundingMode::Floor).to_plain_string(), "-3");
    assert_eq!(dec("-2.5").round(0, RoundingMode::HalfEven).to_plain_string(), "-2");
    assert_eq!(dec("-2.5").round(0, RoundingMode::HalfUp).to_plain_string(), "-3");
    assert_eq!(dec("-0.1").round(0, RoundingMode::Ceiling).to_plain_string(), "0");
}

#[test]
fn decimal_round_zero_five_up() {
    assert_eq!(dec("5.01").round(0, RoundingMode::ZeroFiveUp).to_plain_string(), "6");
    assert_eq!(dec("0.05").round(1, RoundingMode::ZeroFiveUp).to_plain_string(), "0.1");
    assert_eq!(dec("2.01").round(0, RoundingMode::ZeroFiveUp).to_plain_string(), "2");
}

#[test]
fn decimal_round_pads_when_asked_for_more() {
    let padded = dec("1.5").round(3, RoundingMode::HalfEven);
    assert_eq!(padded.to_plain_string(), "1.500");
    assert_eq!(padded.scale(), 3);
}

#[test]
fn decimal_round_carry_propagates() {
    assert_eq!(dec("0.99").round(1, RoundingMode::HalfUp).to_plain_string(), "1.0");
    assert_eq!(dec("9.99").round(0, RoundingMode::Up).to_plain_string(), "10");
}

#[test]
fn decimal_rounding_commutes_with_negation() {
    let modes = [
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::HalfDown,
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::ZeroFiveUp,
    ];
    for value in ["2.5", "0.15", "7.77", "123.456", "0.05"] {
        let x = dec(value);
        let neg = x.negate();
        for mode in modes {
            assert_eq!(
                neg.round(1, mode),
                x.round(1, mode.negation_dual()).negate(),
                "{value} under {mode:?}"
            );
        }
    }
}

#[test]
fn decimal_comparison_is_numeric() {
    assert_eq!(dec("1.0"), dec("1.00"));
    assert_eq!(dec("5"), dec("5.000"));
    assert!(dec("0.5") < dec("0.75"));
    assert!(dec("-1.5") < dec("-1.25"));
    assert!(dec("-1") < dec("0.001"));
    assert!(dec("10") > dec("9.999999999"));
}

#[test]
fn decimal_predicates() {
    assert!(dec("5.00").is_integer());
    assert!(!dec("5.01").is_integer());
    assert!(dec("0.000").is_integer());
    assert!(dec("-3").is_negative());
    assert_eq!(dec("-3.5").signum(), -1);
    assert_eq!(dec("1234.5").digit_count(), 5);
}

#[test]
fn decimal_integer_conversions() {
    assert_eq!(dec("42.00").to_bigint().unwrap().to_string(), "42");
    assert_eq!(dec("-7").to_bigint().unwrap().to_string(), "-7");
    assert!(matches!(
        dec("1.5").to_bigint(),
        Err(Error::PrecisionExceeded { .. })
    ));

    assert_eq!(i64::try_from(&dec("-100")).unwrap(), -100);
    assert!(matches!(
        i64::try_from(&dec("99999999999999999999")),
        Err(Error::Overflow { .. })
    ));
    assert_eq!(
        i128::try_from(&dec("99999999999999999999")).unwrap(),
        99999999999999999999i128
    );
}

#[test]
fn decimal_from_float_is_shortest_form() {
    assert_eq!(BigDecimal::from_float(0.5).unwrap().to_plain_string(), "0.5");
    assert_eq!(BigDecimal::from_float(125.0).unwrap(), dec("125"));
    assert_eq!(BigDecimal::from_float(-0.1).unwrap().to_plain_string(), "-0.1");
    assert!(matches!(
        BigDecimal::from_float(f64::NAN),
        Err(Error::InvalidString { .. })
    ));
    assert!(matches!(
        BigDecimal::from_float(f64::INFINITY),
        Err(Error::InvalidString { .. })
    ));
}

#[test]
fn decimal_display_switches_to_scientific() {
    assert_eq!(dec("1e25").to_string(), "1E+25");
    assert_eq!(dec("0.0000001").to_string(), "1E-7");
    assert_eq!(dec("100000000000000000000").to_string(), "100000000000000000000");
    assert_eq!(dec("0.000001").to_string(), "0.000001");
    assert_eq!(dec("-12.5").to_string(), "-12.5");
}

#[test]
fn decimal_scientific_form_keeps_fractional_zeros() {
    assert_eq!(dec("1.6860").to_scientific_string(), "1.6860E+0");
    assert_eq!(dec("0.00123").to_scientific_string(), "1.23E-3");
    assert_eq!(dec("0").to_scientific_string(), "0E+0");
    assert_eq!(dec("-168600").to_scientific_string(), "-1.686E+5");
}

#[test]
fn decimal_operators() {
    assert_eq!(&dec("1.5") + &dec("2.5"), dec("4"));
    assert_eq!(&dec("1.5") - &dec("2.5"), dec("-1"));
    assert_eq!(&dec("1.5") * &dec("4"), dec("6"));
    assert_eq!(-&dec("1.5"), dec("-1.5"));
}

use decima::{BigInt, Error};

fn parse(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn bigint_parse_and_display() {
    assert_eq!(parse("-123").to_string(), "-123");
    assert_eq!(parse("+42").to_string(), "42");
    assert_eq!(parse("0").to_string(), "0");
    assert!(matches!(
        "12x".parse::<BigInt>(),
        Err(Error::InvalidString { .. })
    ));
}

#[test]
fn bigint_no_negative_zero() {
    assert_eq!(parse("-0").to_string(), "0");
    assert!(!parse("-0").is_negative());

    let a = parse("123456789123456789");
    let sum = &a + &(-&a);
    assert!(sum.is_zero());
    assert!(!sum.is_negative());
    assert_eq!(sum.signum(), 0);
}

#[test]
fn bigint_signed_addition() {
    assert_eq!((&parse("-5") + &parse("3")).to_string(), "-2");
    assert_eq!((&parse("5") + &parse("-3")).to_string(), "2");
    assert_eq!((&parse("-5") + &parse("-3")).to_string(), "-8");
    assert_eq!((&parse("3") - &parse("5")).to_string(), "-2");
}

#[test]
fn bigint_multiplication_sign() {
    assert_eq!((&parse("-4") * &parse("6")).to_string(), "-24");
    assert_eq!((&parse("-4") * &parse("-6")).to_string(), "24");
    assert!((&parse("-4") * &BigInt::zero()).is_zero());
}

#[test]
fn bigint_truncating_division_signs() {
    let cases = [
        ("7", "3", "2", "1"),
        ("-7", "3", "-2", "-1"),
        ("7", "-3", "-2", "1"),
        ("-7", "-3", "2", "-1"),
    ];
    for (a, b, q, r) in cases {
        let (qq, rr) = parse(a).divmod(&parse(b)).unwrap();
        assert_eq!(qq.to_string(), q, "{a} / {b}");
        assert_eq!(rr.to_string(), r, "{a} % {b}");
        // divmod identity
        let rebuilt = &(&qq * &parse(b)) + &rr;
        assert_eq!(rebuilt, parse(a));
    }
}

#[test]
fn bigint_flooring_division_signs() {
    let cases = [
        ("7", "3", "2", "1"),
        ("-7", "3", "-3", "2"),
        ("7", "-3", "-3", "-2"),
        ("-7", "-3", "2", "-1"),
    ];
    for (a, b, q, r) in cases {
        let (qq, rr) = parse(a).divmod_floor(&parse(b)).unwrap();
        assert_eq!(qq.to_string(), q, "{a} floordiv {b}");
        assert_eq!(rr.to_string(), r, "{a} floormod {b}");
        // the remainder carries the divisor's sign whenever non-zero
        if !rr.is_zero() {
            assert_eq!(rr.signum(), parse(b).signum());
        }
        let rebuilt = &(&qq * &parse(b)) + &rr;
        assert_eq!(rebuilt, parse(a));
    }
}

#[test]
fn bigint_division_by_zero() {
    assert!(matches!(
        parse("1").divmod(&BigInt::zero()),
        Err(Error::DivisionByZero { .. })
    ));
    assert!(matches!(
        parse("1").mod_floor(&BigInt::zero()),
        Err(Error::DivisionByZero { .. })
    ));
}

#[test]
fn bigint_gcd_lcm() {
    assert_eq!(parse("48").gcd(&parse("18")).to_string(), "6");
    assert_eq!(parse("-48").gcd(&parse("18")).to_string(), "6");
    assert_eq!(parse("0").gcd(&parse("0")).to_string(), "0");
    assert_eq!(parse("17").gcd(&parse("5")).to_string(), "1");

    assert_eq!(parse("4").lcm(&parse("6")).to_string(), "12");
    assert_eq!(parse("-4").lcm(&parse("6")).to_string(), "12");
    assert!(parse("0").lcm(&parse("7")).is_zero());
}

#[test]
fn bigint_pow() {
    assert_eq!(parse("2").pow(10).unwrap().to_string(), "1024");
    assert_eq!(parse("-2").pow(3).unwrap().to_string(), "-8");
    assert_eq!(parse("-2").pow(4).unwrap().to_string(), "16");
    assert_eq!(parse("7").pow(0).unwrap().to_string(), "1");
    assert!(matches!(
        parse("2").pow(-1),
        Err(Error::NegativeExponent { exponent: -1 })
    ));
}

#[test]
fn bigint_mod_pow() {
    let m = parse("1000");
    assert_eq!(
        parse("2").mod_pow(&parse("10"), &m).unwrap().to_string(),
        "24"
    );
    assert_eq!(
        parse("3").mod_pow(&parse("0"), &parse("7")).unwrap().to_string(),
        "1"
    );
    // 7^256 mod 13: by Fermat 7^12 = 1, 256 = 12*21 + 4, 7^4 = 2401 = 9 (mod 13)
    assert_eq!(
        parse("7").mod_pow(&parse("256"), &parse("13")).unwrap().to_string(),
        "9"
    );
    // negative exponent resolves through the inverse: 3^-1 mod 7 == 5
    assert_eq!(
        parse("3").mod_pow(&parse("-1"), &parse("7")).unwrap().to_string(),
        "5"
    );
}

#[test]
fn bigint_mod_inverse() {
    assert_eq!(parse("3").mod_inverse(&parse("7")).unwrap().to_string(), "5");
    assert_eq!(
        parse("10").mod_inverse(&parse("17")).unwrap().to_string(),
        "12"
    );
    assert!(matches!(
        parse("2").mod_inverse(&parse("4")),
        Err(Error::InvalidDomain { .. })
    ));
}

#[test]
fn bigint_conversions() {
    assert_eq!(BigInt::from(-123456789012345678i64).to_string(), "-123456789012345678");
    assert_eq!(i64::try_from(&parse("-123456789012345678")).unwrap(), -123456789012345678);
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)).unwrap(), i64::MIN);
    assert_eq!(i64::try_from(&BigInt::from(i64::MAX)).unwrap(), i64::MAX);

    let too_big = parse("9223372036854775808"); // i64::MAX + 1
    assert!(matches!(i64::try_from(&too_big), Err(Error::Overflow { .. })));
    assert_eq!(i128::try_from(&too_big).unwrap(), 9223372036854775808i128);

    assert_eq!(BigInt::from(-1i128 << 100).to_string(), "-1267650600228229401496703205376");
}

#[test]
fn bigint_digit_count_and_abs() {
    assert_eq!(parse("-12345").digit_count(), 5);
    assert_eq!(parse("0").digit_count(), 1);
    assert_eq!(parse("-12345").abs().to_string(), "12345");
    assert!(parse("-4").is_even());
    assert!(!parse("7").is_even());
}

use decima::{BigInt, BinInt, Error};

fn parse(s: &str) -> BinInt {
    s.parse().unwrap()
}

#[test]
fn binint_small_values_round_trip() {
    assert_eq!(BinInt::from(0u32).to_string(), "0");
    assert_eq!(BinInt::from(1u64 << 40).to_string(), "1099511627776");
    assert_eq!(BinInt::from(-42i64).to_string(), "-42");
    assert_eq!(parse("-9999999999").to_string(), "-9999999999");
}

#[test]
fn binint_shifts() {
    let one = BinInt::one();
    let big = one.shl_bits(100);
    assert_eq!(big.to_string(), "1267650600228229401496703205376");
    assert_eq!(big.bit_length(), 101);

    let back = big.shr_bits(50);
    assert_eq!(back.to_string(), "1125899906842624");

    // shifting out everything gives zero
    assert!(parse("12345").shr_bits(64).is_zero());
    // sub-word shift with carry
    assert_eq!(parse("3").shl_bits(31).to_string(), "6442450944");
}

#[test]
fn binint_add_sub_cross_word() {
    let max64 = BinInt::from(u64::MAX);
    let sum = &max64 + &BinInt::one();
    assert_eq!(sum.to_string(), "18446744073709551616");
    assert_eq!((&sum - &BinInt::one()), max64);
}

#[test]
fn binint_mul_cross_word_carry() {
    let max64 = BinInt::from(u64::MAX);
    assert_eq!(
        (&max64 * &max64).to_string(),
        "340282366920938463426481119284349108225"
    );
    assert_eq!((&max64 * &BinInt::zero()), BinInt::zero());
}

#[test]
fn binint_divmod_equal_operands() {
    // one hundred nines divided by itself
    let n = parse(&"9".repeat(100));
    let (q, r) = n.divmod_floor(&n).unwrap();
    assert_eq!(q, BinInt::one());
    assert!(r.is_zero());
}

#[test]
fn binint_divmod_signs_match_integer_carrier() {
    let (q, r) = parse("-7").divmod(&parse("3")).unwrap();
    assert_eq!(q.to_string(), "-2");
    assert_eq!(r.to_string(), "-1");

    let (q, r) = parse("-7").divmod_floor(&parse("3")).unwrap();
    assert_eq!(q.to_string(), "-3");
    assert_eq!(r.to_string(), "2");
}

#[test]
fn binint_divmod_large_identity() {
    // 3600-digit dividend over a 720-digit divisor lands in the binary
    // Burnikel-Ziegler kernel
    let a = parse(&"123456789".repeat(400));
    let b = parse(&"987654321".repeat(80));
    let (q, r) = a.divmod(&b).unwrap();
    assert!(r < b);
    assert_eq!(&(&q * &b) + &r, a);
}

#[test]
fn binint_division_by_zero() {
    assert!(matches!(
        parse("1").divmod(&BinInt::zero()),
        Err(Error::DivisionByZero { .. })
    ));
}

#[test]
fn binint_isqrt_power_of_two() {
    let x = BinInt::one().shl_bits(100);
    assert_eq!(x.isqrt().unwrap().to_string(), "1125899906842624");
}

#[test]
fn binint_isqrt_small() {
    assert_eq!(BinInt::from(0u32).isqrt().unwrap(), BinInt::zero());
    assert_eq!(BinInt::from(1u32).isqrt().unwrap(), BinInt::one());
    assert_eq!(BinInt::from(99u32).isqrt().unwrap().to_string(), "9");
    assert_eq!(BinInt::from(100u32).isqrt().unwrap().to_string(), "10");
    assert_eq!(
        BinInt::from(1u64 << 62).isqrt().unwrap().to_string(),
        "2147483648"
    );
}

#[test]
fn binint_isqrt_around_perfect_squares() {
    // 10^50 = (10^25)^2 exercises the u64 and u128 phases
    let root = format!("1{}", "0".repeat(25));
    let square = parse(&format!("1{}", "0".repeat(50)));
    assert_eq!(square.isqrt().unwrap().to_string(), root);

    let minus_one = &square - &BinInt::one();
    let root_minus_one = format!("{}", "9".repeat(25));
    assert_eq!(minus_one.isqrt().unwrap().to_string(), root_minus_one);

    let plus_one = &square + &BinInt::one();
    assert_eq!(plus_one.isqrt().unwrap().to_string(), root);
}

#[test]
fn binint_isqrt_wide_operand() {
    // 10^400 = (10^200)^2 forces the word-vector tail of the loop
    let square = parse(&format!("1{}", "0".repeat(400)));
    let root = format!("1{}", "0".repeat(200));
    assert_eq!(square.isqrt().unwrap().to_string(), root);

    let minus_one = &square - &BinInt::one();
    assert_eq!(minus_one.isqrt().unwrap().to_string(), "9".repeat(200));
}

#[test]
fn binint_isqrt_negative_errors() {
    assert!(matches!(
        parse("-4").isqrt(),
        Err(Error::NegativeSqrt)
    ));
}

#[test]
fn binint_radix_round_trip_small() {
    for s in ["0", "1", "999999999", "1000000000", "18446744073709551615"] {
        assert_eq!(parse(s).to_string(), s);
    }
}

#[test]
fn binint_radix_round_trip_large() {
    // 2700 digits crosses the divide-and-conquer thresholds both ways
    let s = "123456789".repeat(300);
    assert_eq!(parse(&s).to_string(), s);

    let t = format!("-1{}7", "0".repeat(2000));
    assert_eq!(parse(&t).to_string(), t);
}

#[test]
fn binint_base_conversion_inverts() {
    let cases = vec![
        "0".to_string(),
        "7".to_string(),
        "1000000000000000000000000000001".to_string(),
        "271828182845904523".repeat(40),
    ];
    for s in &cases {
        let dec: BigInt = s.parse().unwrap();
        let bin = BinInt::from(&dec);
        assert_eq!(BigInt::from(&bin), dec);
    }
}

#[test]
fn binint_bitwise_on_magnitudes() {
    let a = BinInt::from(0b1100u32);
    let b = BinInt::from(0b1010u32);
    assert_eq!((&a & &b), BinInt::from(0b1000u32));
    assert_eq!((&a | &b), BinInt::from(0b1110u32));
    assert_eq!((&a ^ &b), BinInt::from(0b0110u32));

    let wide = BinInt::from(u64::MAX);
    assert_eq!((&wide & &BinInt::from(1u32)), BinInt::one());
    assert_eq!((&wide ^ &wide), BinInt::zero());
}

#[test]
fn binint_bit_probing() {
    let v = BinInt::from(1u64 << 33);
    assert!(v.bit(33));
    assert!(!v.bit(32));
    assert!(!v.bit(200));
    assert_eq!(v.bit_length(), 34);
    assert_eq!(BinInt::zero().bit_length(), 0);
}

use decima::{BigUint, Error};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn parse(s: &str) -> BigUint {
    s.parse().unwrap()
}

#[test]
fn biguint_zero_and_one() {
    assert!(BigUint::zero().is_zero());
    assert!(BigUint::one().is_one());
    assert_eq!(BigUint::zero().to_string(), "0");
    assert_eq!(BigUint::zero().digit_count(), 1);
}

#[test]
fn biguint_add_carries_across_words() {
    let a = parse("999999999");
    let b = BigUint::one();
    assert_eq!((&a + &b).to_string(), "1000000000");

    let c = parse("999999999999999999");
    assert_eq!((&c + &c).to_string(), "1999999999999999998");
}

#[test]
fn biguint_sub_borrows_across_words() {
    let a = parse("1000000000000000000");
    let b = BigUint::one();
    assert_eq!((&a - &b).to_string(), "999999999999999999");

    assert!(a.checked_sub(&parse("1000000000000000001")).is_none());
    assert_eq!(a.checked_sub(&a).unwrap(), BigUint::zero());
}

#[test]
#[should_panic(expected = "subtraction underflow")]
fn biguint_sub_underflow_panics() {
    let _ = BigUint::one() - parse("2");
}

#[test]
fn biguint_ordering() {
    assert!(parse("999999999") < parse("1000000000"));
    assert!(parse("123456789123456789") > parse("123456789123456788"));
    assert_eq!(parse("42"), parse("42"));
}

#[test]
fn biguint_mul_small() {
    let a = parse("123456789");
    let b = parse("987654321");
    assert_eq!((&a * &b).to_string(), "121932631112635269");

    assert!((&a * &BigUint::zero()).is_zero());
    assert_eq!(&a * &BigUint::one(), a);
}

#[test]
fn biguint_mul_karatsuba_matches_closed_form() {
    // (10^k - 1)^2 == 10^2k - 2*10^k + 1, which has the digit pattern
    // 9…980…01; 1440 digits is 160 words, far above the threshold
    let k = 1440;
    let nines = parse(&"9".repeat(k));
    let expected = format!("{}8{}1", "9".repeat(k - 1), "0".repeat(k - 1));
    assert_eq!((&nines * &nines).to_string(), expected);
}

#[test]
fn biguint_divmod_small_cases() {
    let (q, r) = parse("100").divmod(&parse("7")).unwrap();
    assert_eq!(q.to_string(), "14");
    assert_eq!(r.to_string(), "2");

    let (q, r) = parse("5").divmod(&parse("10")).unwrap();
    assert!(q.is_zero());
    assert_eq!(r.to_string(), "5");

    let ten_pow_30 = BigUint::power_of_ten(30);
    let (q, r) = ten_pow_30.divmod(&parse("3")).unwrap();
    assert_eq!(q.to_string(), "3".repeat(30));
    assert_eq!(r, BigUint::one());
}

#[test]
fn biguint_divmod_multiword_reconstructs() {
    let b = &BigUint::power_of_ten(20) + &parse("7");
    let q = &BigUint::power_of_ten(40) + &parse("123");
    let r = parse("5");
    let a = &(&q * &b) + &r;

    let (qq, rr) = a.divmod(&b).unwrap();
    assert_eq!(qq, q);
    assert_eq!(rr, r);
}

#[test]
fn biguint_divmod_burnikel_ziegler_path() {
    // divisor of 70 words and a dividend over twice as long selects the
    // block-recursive kernel
    let b = parse(&"987654321".repeat(70));
    let q = parse(&"123456789".repeat(200));
    let r = parse(&"5".repeat(100));
    let a = &(&q * &b) + &r;

    let (qq, rr) = a.divmod(&b).unwrap();
    assert_eq!(qq, q);
    assert_eq!(rr, r);
}

#[test]
fn biguint_divmod_randomized_identity() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let aw: Vec<u32> = (0..300).map(|_| rng.gen_range(0..1_000_000_000)).collect();
        let mut bw: Vec<u32> = (0..70).map(|_| rng.gen_range(0..1_000_000_000)).collect();
        *bw.last_mut().unwrap() = rng.gen_range(1..1_000_000_000);

        let a = BigUint::from_words(aw);
        let b = BigUint::from_words(bw);
        let (q, r) = a.divmod(&b).unwrap();
        assert!(r < b);
        assert_eq!(&(&q * &b) + &r, a);
    }
}

#[test]
fn biguint_division_by_zero() {
    assert!(matches!(
        parse("1").divmod(&BigUint::zero()),
        Err(Error::DivisionByZero { .. })
    ));
    assert!(matches!(
        parse("1").div_word(0),
        Err(Error::DivisionByZero { .. })
    ));
}

#[test]
#[should_panic(expected = "division by zero")]
fn biguint_div_operator_by_zero_panics() {
    let _ = parse("1") / BigUint::zero();
}

#[test]
fn biguint_power_of_ten_and_word_shifts() {
    assert_eq!(BigUint::power_of_ten(0), BigUint::one());
    assert_eq!(BigUint::power_of_ten(9).to_string(), "1000000000");
    assert_eq!(BigUint::power_of_ten(12).to_string(), "1000000000000");

    let v = parse("123456789987654321");
    assert_eq!(
        v.shift_words_up(1).to_string(),
        "123456789987654321000000000"
    );
    assert_eq!(v.shift_words_down(1).to_string(), "123456789");
    assert!(v.shift_words_down(5).is_zero());
}

#[test]
fn biguint_digits_round_trip() {
    let digits = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 0, 9, 8, 7, 6, 5, 4, 3, 2, 1];
    let v = BigUint::from_digits(&digits);
    assert_eq!(v.to_string(), "1234567890987654321");
    assert_eq!(v.to_digits(), digits);
    assert_eq!(v.digit_count(), 19);

    // leading zeros collapse
    let v = BigUint::from_digits(&[0, 0, 4, 2]);
    assert_eq!(v.to_string(), "42");
}

#[test]
fn biguint_mul_word_and_div_word() {
    let v = parse("999999999999999999");
    assert_eq!(v.mul_word(2).to_string(), "1999999999999999998");

    let (q, r) = parse("1000000007").div_word(3).unwrap();
    assert_eq!(q.to_string(), "333333335");
    assert_eq!(r, 2);
}

#[test]
fn biguint_from_str_rejects_garbage() {
    assert!(matches!(
        "12a34".parse::<BigUint>(),
        Err(Error::InvalidString { .. })
    ));
    assert!(matches!(
        "".parse::<BigUint>(),
        Err(Error::InvalidString { .. })
    ));
}

use duit::core::*;
use rust_decimal_macros::dec;

// --- Construction ---

#[test]
fn parse_accepts_integer_text() {
    let m = Money::parse("10600", Currency::MYR).unwrap();
    assert_eq!(m, Money::myr(10600));
    assert_eq!(m.currency().code(), "MYR");
}

#[test]
fn parse_accepts_zero_fraction() {
    assert_eq!(Money::parse("250.000", Currency::MYR).unwrap().amount(), 250);
}

#[test]
fn parse_rejects_fractional_sen() {
    let err = Money::parse("10.01", Currency::MYR).unwrap_err();
    assert!(matches!(err, MoneyError::InvalidAmount(_)));
    assert!(err.to_string().contains("fractional"));
}

#[test]
fn currency_from_code() {
    let usd: Currency = "usd".parse().unwrap();
    assert_eq!(usd.code(), "USD");
    assert!("XXX".parse::<Currency>().is_err());
}

// --- Arithmetic ---

#[test]
fn multiply_and_divide_use_half_up() {
    let m = Money::myr(10000);
    assert_eq!(m.multiply(dec!(0.06)).unwrap(), Money::myr(600));
    assert_eq!(m.multiply(dec!(1.06)).unwrap(), Money::myr(10600));
    assert_eq!(Money::myr(10600).divide(dec!(1.06)).unwrap(), Money::myr(10000));
    // 15 * 0.1 = 1.5
    assert_eq!(Money::myr(15).multiply(dec!(0.1)).unwrap(), Money::myr(2));
}

#[test]
fn add_overflow_is_error() {
    let err = Money::myr(i64::MAX).add(&Money::myr(1)).unwrap_err();
    assert!(matches!(err, MoneyError::Overflow(_)));
}

#[test]
fn subtract_across_currencies_fails() {
    let sgd = Money::new(100, "SGD".parse().unwrap());
    assert!(matches!(
        Money::myr(100).subtract(&sgd),
        Err(MoneyError::CurrencyMismatch { .. })
    ));
    assert!(matches!(
        Money::myr(100).compare(&sgd),
        Err(MoneyError::CurrencyMismatch { .. })
    ));
}

// --- Allocation ---

#[test]
fn allocate_sums_exactly() {
    let shares = Money::myr(10001).allocate(&[dec!(33.3), dec!(33.3), dec!(33.4)]).unwrap();
    let sum: i64 = shares.iter().map(Money::amount).sum();
    assert_eq!(sum, 10001);
    assert!(shares.iter().all(|s| s.currency() == Currency::MYR));
}

#[test]
fn allocate_classic_seventy_thirty() {
    // 0.05 split 70/30: 3.5 and 1.5, the tie goes to the first share
    let shares = Money::myr(5).allocate(&[70u32, 30]).unwrap();
    assert_eq!(shares, vec![Money::myr(4), Money::myr(1)]);
}

#[test]
fn allocate_ratios_beyond_decimal_product_range() {
    let shares = Money::myr(1_060_000_000_000)
        .allocate(&[1u64, 100_000_000_000_000_000])
        .unwrap();
    assert_eq!(shares, vec![Money::myr(0), Money::myr(1_060_000_000_000)]);
}

#[test]
fn parse_rejects_empty_fraction() {
    assert!(matches!(
        Money::parse("100.", Currency::MYR),
        Err(MoneyError::InvalidAmount(_))
    ));
}

#[test]
fn currency_lookup_ignores_case() {
    assert!(is_known_currency_code("myr"));
    assert!(is_known_currency_code(" Myr "));
}

#[test]
fn allocate_zero_amount() {
    let shares = Money::myr(0).allocate(&[1u32, 2, 3]).unwrap();
    assert!(shares.iter().all(Money::is_zero));
}

#[test]
fn allocate_to_many_targets_small_amount() {
    let shares = Money::myr(2).allocate_to(5).unwrap();
    let amounts: Vec<i64> = shares.iter().map(Money::amount).collect();
    assert_eq!(amounts, vec![1, 1, 0, 0, 0]);
}

#[test]
fn allocate_to_negative_amount() {
    let shares = Money::myr(-10).allocate_to(3).unwrap();
    let amounts: Vec<i64> = shares.iter().map(Money::amount).collect();
    assert_eq!(amounts, vec![-3, -3, -4]);
}

#[test]
fn allocate_to_rejects_zero() {
    let err = Money::myr(100).allocate_to(0).unwrap_err();
    assert!(matches!(err, MoneyError::InvalidArgument(_)));
}

// --- Serde ---

#[test]
fn money_serializes_currency_as_code() {
    let json = serde_json::to_string(&Money::myr(10600)).unwrap();
    assert_eq!(json, r#"{"amount":10600,"currency":"MYR"}"#);

    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Money::myr(10600));
}

#[test]
fn money_deserializes_from_owned_string() {
    let json = format!(r#"{{"amount":{},"currency":"{}"}}"#, 250, "myr");
    let money: Money = serde_json::from_str(&json).unwrap();
    drop(json);
    assert_eq!(money, Money::myr(250));
}

#[test]
fn currency_deserializes_from_reader() {
    let currency: Currency = serde_json::from_reader(&br#""SGD""#[..]).unwrap();
    assert_eq!(currency.code(), "SGD");
}

#[test]
fn unknown_currency_fails_to_deserialize() {
    let res: Result<Money, _> = serde_json::from_str(r#"{"amount":1,"currency":"ABC"}"#);
    assert!(res.is_err());
}

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i64, Vec<u16>)| {
    let (amount, ratios) = input;
    let money = duit::core::Money::myr(amount);
    if let Ok(shares) = money.allocate(&ratios) {
        let sum: i128 = shares.iter().map(|s| i128::from(s.amount())).sum();
        assert_eq!(sum, i128::from(amount), "shares must add up to the amount");
        assert_eq!(shares.len(), ratios.len());
    }
    if let Ok(shares) = money.allocate_to(ratios.len()) {
        let sum: i128 = shares.iter().map(|s| i128::from(s.amount())).sum();
        assert_eq!(sum, i128::from(amount));
    }
});

use duit::core::*;
use rust_decimal::Decimal;

fn main() {
    // ── 1. Amount parsing ─────────────────────────────────────────────
    println!("=== Amount Parsing ===");
    for input in ["10600", "106.00", "106.50", "RM106", ""] {
        match Money::parse(input, Currency::MYR) {
            Ok(m) => println!("  {input:?} => {m}"),
            Err(e) => println!("  {input:?} => {e}"),
        }
    }

    // ── 2. Allocation arguments ───────────────────────────────────────
    println!("\n=== Allocation ===");
    let money = Money::myr(10000);
    if let Err(e) = money.allocate_to(0) {
        println!("  allocate_to(0): {e}");
    }
    if let Err(e) = money.allocate(&[0u32, 0]) {
        println!("  allocate([0, 0]): {e}");
    }
    if let Err(e) = money.divide(Decimal::ZERO) {
        println!("  divide(0): {e}");
    }

    // ── 3. Currency mismatch ──────────────────────────────────────────
    println!("\n=== Currencies ===");
    let sgd: Currency = "SGD".parse().unwrap();
    match money.add(&Money::new(500, sgd)) {
        Ok(sum) => println!("  sum: {sum}"),
        Err(e) => println!("  add: {e}"),
    }
    if let Err(e) = "RM".parse::<Currency>() {
        println!("  parse: {e}");
    }

    // ── 4. Overflow ───────────────────────────────────────────────────
    println!("\n=== Overflow ===");
    if let Err(e) = Money::myr(i64::MAX).add(&Money::myr(1)) {
        println!("  add: {e}");
    }
}

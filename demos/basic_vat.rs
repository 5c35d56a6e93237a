use duit::vat::*;

fn sen(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("RM {sign}{}.{:02}", abs / 100, abs % 100)
}

fn main() {
    println!("=== Construction Modes (GST {}%) ===\n", GST_RATE * rust_decimal::Decimal::ONE_HUNDRED);

    let quoted = VatMoney::before_vat(10000);
    println!(
        "  before_vat  base {:>10}  gst {:>9}  payable {:>10}",
        sen(quoted.amount()),
        sen(quoted.vat_amount().unwrap()),
        sen(quoted.amount_with_vat().unwrap()),
    );

    let receipt = VatMoney::after_vat(10600).unwrap();
    println!(
        "  after_vat   base {:>10}  gst {:>9}  payable {:>10}",
        sen(receipt.amount()),
        sen(receipt.vat_amount().unwrap()),
        sen(receipt.amount_with_vat().unwrap()),
    );

    let exempt = VatMoney::without_vat(10000);
    println!(
        "  without_vat base {:>10}  gst {:>9}  payable {:>10}",
        sen(exempt.amount()),
        sen(exempt.vat_amount().unwrap()),
        sen(exempt.amount_with_vat().unwrap()),
    );

    println!("\n=== Toggling GST ===\n");

    let mut item = VatMoney::without_vat(4990);
    println!("  disabled: {}", sen(item.amount_with_vat().unwrap()));
    println!("  enabled:  {}", sen(item.enable_vat().amount_with_vat().unwrap()));
    println!("  disabled: {}", sen(item.disable_vat().amount_with_vat().unwrap()));
}

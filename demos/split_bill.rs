use duit::vat::VatMoney;

fn main() {
    // RM 250.00 dinner, GST on top
    let bill = VatMoney::before_vat(25000);
    let total = bill.amount_with_vat().unwrap();
    println!("Bill: {total} sen incl. GST\n");

    println!("=== Equal split, 3 people ===\n");
    for (i, share) in bill.allocate_with_vat_to(3).unwrap().iter().enumerate() {
        println!(
            "  person {}: pays {:>6}  (base {:>6}, gst {:>4})",
            i + 1,
            share.amount_with_vat().unwrap(),
            share.amount(),
            share.vat_amount().unwrap(),
        );
    }

    println!("\n=== Weighted split 50/30/20 ===\n");
    for (ratio, share) in [50u32, 30, 20]
        .iter()
        .zip(bill.allocate_with_vat(&[50u32, 30, 20]).unwrap())
    {
        println!(
            "  {ratio:>2}%: pays {:>6}  (base {:>6}, gst {:>4})",
            share.amount_with_vat().unwrap(),
            share.amount(),
            share.vat_amount().unwrap(),
        );
    }
}

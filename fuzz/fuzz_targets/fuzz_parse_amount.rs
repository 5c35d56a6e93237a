#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(m) = duit::vat::VatMoney::parse_after_vat(s) {
            let _ = m.amount_with_vat();
            let _ = m.vat_amount();
        }
    }
});

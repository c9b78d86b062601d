#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Rejections are expected; a successful parse always carries a region.
    if let Ok(invoice) = fatura::qr::parse_bytes(data) {
        assert!(!invoice.tax_country_regions.is_empty());
    }
});

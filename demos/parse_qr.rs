use fatura::qr;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "A:500000000*B:123456789*C:PT*D:FT*E:N*F:20240115*G:FT AT2024/15*H:JFJ2PPTD-15*I1:PT*I7:200.00*I8:46.00*J1:PT-AC*J7:80.00*J8:12.80*N:58.80*O:338.80*Q:ab1C*R:1234";

fn main() {
    // RUST_LOG=fatura=debug shows pipeline events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let payload = std::env::args().nth(1).unwrap_or_else(|| SAMPLE.to_string());

    println!("=== QR Code Payload ===\n");
    println!("  {payload}\n");

    match qr::parse(&payload) {
        Ok(invoice) => {
            println!("=== Invoice ===\n");
            println!("  Issuer NIF:   {}", invoice.remitent_nif);
            println!("  Client NIF:   {} ({})", invoice.client_nif, invoice.client_country);
            println!(
                "  Document:     {} {} (status {})",
                invoice.document_type, invoice.document_id, invoice.document_status
            );
            match invoice.document_date_parsed() {
                Some(date) => println!("  Date:         {date}"),
                None => println!("  Date:         {} (not a calendar date)", invoice.document_date),
            }
            println!("  ATCUD:        {}", invoice.atcud);

            for region in &invoice.tax_country_regions {
                println!(
                    "  Region {:<6} taxable base {} / VAT {}",
                    region.tax_country_region,
                    region.total_taxable_base(),
                    region.total_vat()
                );
                for (field, value) in region.amounts() {
                    println!("    {:<18} {value}", format!("{field:?} ({})", field.index()));
                }
            }

            println!("  Total taxes:  {}", invoice.total_taxes);
            println!("  Total:        {}", invoice.total_document_with_taxes);
            println!("  Withholding:  {}", invoice.withholding_taxes);
            println!("  Hash:         {}", invoice.hash);
            println!("  Certificate:  {}", invoice.certificate_number);
        }
        Err(e) => {
            println!("  Rejected ({:?}): {e}", e.kind());
            std::process::exit(1);
        }
    }
}

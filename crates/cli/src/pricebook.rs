//! Price table loading from CSV. The table carries two required
//! columns, `Size` and `Price/Pack`; anything else is passed over.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::warn;

use offerly_core::errors::{ApplicationError, DomainError};
use offerly_core::{PackSize, PriceTable};

pub fn load_price_table(path: &Path) -> Result<PriceTable, ApplicationError> {
    let raw = fs::read_to_string(path)
        .map_err(|error| ApplicationError::Io(format!("could not read `{}`: {error}", path.display())))?;
    parse_price_table(&raw).map_err(ApplicationError::from)
}

pub fn parse_price_table(csv_text: &str) -> Result<PriceTable, DomainError> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|error| DomainError::InvalidPriceTable(format!("unreadable headers: {error}")))?
        .clone();

    let column = |name: &str| headers.iter().position(|header| header.eq_ignore_ascii_case(name));
    let size_column = column("Size")
        .ok_or_else(|| DomainError::InvalidPriceTable("missing `Size` column".to_string()))?;
    let price_column = column("Price/Pack")
        .ok_or_else(|| DomainError::InvalidPriceTable("missing `Price/Pack` column".to_string()))?;

    let mut table = PriceTable::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                warn!(%error, "skipping malformed price table record");
                continue;
            }
        };

        let size_field = record.get(size_column).map(str::trim).unwrap_or_default();
        let price_field = record.get(price_column).map(str::trim).unwrap_or_default();
        if size_field.is_empty() && price_field.is_empty() {
            continue;
        }

        let size: PackSize = size_field.parse()?;
        let unit_price = parse_price(price_field)?;
        if unit_price <= Decimal::ZERO {
            return Err(DomainError::InvalidPriceTable(format!(
                "non-positive price `{price_field}` for size `{size}`"
            )));
        }
        table.set(size, unit_price);
    }

    if table.is_empty() {
        return Err(DomainError::InvalidPriceTable("no price rows found".to_string()));
    }

    Ok(table)
}

fn parse_price(field: &str) -> Result<Decimal, DomainError> {
    let cleaned = field.trim_start_matches('$').replace(',', "");
    cleaned.parse::<Decimal>().map_err(|_| {
        DomainError::InvalidPriceTable(format!("unparseable price `{field}`"))
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use offerly_core::errors::DomainError;
    use offerly_core::PackSize;

    use super::parse_price_table;

    #[test]
    fn parses_the_standard_two_column_table() {
        let table = parse_price_table("Size,Price/Pack\n50g,32.80\n250g,160.00\n1kg,580.00\n")
            .expect("valid table");

        assert_eq!(table.price(PackSize::G50), Some(Decimal::new(3280, 2)));
        assert_eq!(table.price(PackSize::Kg1), Some(Decimal::new(58000, 2)));
    }

    #[test]
    fn tolerates_dollar_signs_and_extra_columns() {
        let table =
            parse_price_table("Sku,Size,Price/Pack\nAF-50,50g,$32.80\nAF-1K,1kg,\"$1,080.00\"\n")
                .expect("valid table");

        assert_eq!(table.price(PackSize::G50), Some(Decimal::new(3280, 2)));
        assert_eq!(table.price(PackSize::Kg1), Some(Decimal::new(108000, 2)));
    }

    #[test]
    fn missing_required_column_fails_fast() {
        let error = parse_price_table("Size,Price\n50g,32.80\n").unwrap_err();
        assert_eq!(error, DomainError::InvalidPriceTable("missing `Price/Pack` column".into()));
    }

    #[test]
    fn unknown_size_label_is_rejected() {
        let error = parse_price_table("Size,Price/Pack\n100g,49.00\n").unwrap_err();
        assert!(matches!(error, DomainError::InvalidPriceTable(_)));
    }

    #[test]
    fn empty_table_is_rejected() {
        let error = parse_price_table("Size,Price/Pack\n").unwrap_err();
        assert_eq!(error, DomainError::InvalidPriceTable("no price rows found".into()));
    }
}

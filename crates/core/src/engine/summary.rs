use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::order::{OrderRecord, PackSize, PriceTable};
use crate::errors::DomainError;

/// Build an immutable order record from a price table and requested pack
/// counts. Sizes missing from the request count as zero; a nonzero
/// request for a size the table cannot price is a data error, never a
/// silent zero price.
pub fn summarize_order(
    prices: &PriceTable,
    quantities: &BTreeMap<PackSize, u32>,
) -> Result<OrderRecord, DomainError> {
    let mut priced_quantities = BTreeMap::new();
    let mut priced = BTreeMap::new();
    let mut total_value = Decimal::ZERO;

    for size in PackSize::ALL {
        let quantity = quantities.get(&size).copied().unwrap_or(0);
        priced_quantities.insert(size, quantity);

        match prices.price(size) {
            Some(unit_price) => {
                priced.insert(size, unit_price);
                total_value += Decimal::from(quantity) * unit_price;
            }
            None if quantity > 0 => return Err(DomainError::MissingPrice { size }),
            None => {}
        }
    }

    Ok(OrderRecord { quantities: priced_quantities, prices: priced, total_value })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use crate::domain::order::{PackSize, PriceTable};
    use crate::errors::DomainError;

    use super::summarize_order;

    fn full_price_table() -> PriceTable {
        [
            (PackSize::G50, Decimal::new(3280, 2)),
            (PackSize::G250, Decimal::new(16000, 2)),
            (PackSize::Kg1, Decimal::new(58000, 2)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn totals_line_values_across_sizes() {
        let quantities =
            BTreeMap::from([(PackSize::G50, 10u32), (PackSize::G250, 2), (PackSize::Kg1, 1)]);
        let record = summarize_order(&full_price_table(), &quantities).unwrap();

        // 10 * 32.80 + 2 * 160.00 + 1 * 580.00
        assert_eq!(record.total_value, Decimal::new(122800, 2));
        assert_eq!(record.quantity(PackSize::G50), 10);
    }

    #[test]
    fn missing_requested_size_is_a_data_error() {
        let prices: PriceTable =
            [(PackSize::G50, Decimal::new(3280, 2))].into_iter().collect();
        let quantities = BTreeMap::from([(PackSize::Kg1, 1u32)]);

        let error = summarize_order(&prices, &quantities).unwrap_err();
        assert_eq!(error, DomainError::MissingPrice { size: PackSize::Kg1 });
    }

    #[test]
    fn unpriced_size_is_fine_when_not_requested() {
        let prices: PriceTable =
            [(PackSize::G50, Decimal::new(3280, 2))].into_iter().collect();
        let quantities = BTreeMap::from([(PackSize::G50, 10u32)]);

        let record = summarize_order(&prices, &quantities).unwrap();
        assert_eq!(record.total_value, Decimal::new(32800, 2));
        assert_eq!(record.quantity(PackSize::Kg1), 0);
    }

    #[test]
    fn empty_order_has_zero_value() {
        let record = summarize_order(&full_price_table(), &BTreeMap::new()).unwrap();
        assert_eq!(record.total_value, Decimal::ZERO);
        assert_eq!(record.total_packs(), 0);
    }
}

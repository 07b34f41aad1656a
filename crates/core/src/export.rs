//! Flat labeled export record for a selected offer, the field set the
//! downstream spreadsheet export renders. Core builds the rows; the
//! caller decides the output format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerCategory;
use crate::domain::gift::GiftKind;
use crate::domain::offer::Offer;
use crate::domain::order::{OrderRecord, PackSize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub category: CustomerCategory,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub rows: Vec<ExportRow>,
}

impl ExportRecord {
    fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(ExportRow { label: label.into(), value: value.into() });
    }
}

pub fn build_export(customer: &CustomerInfo, order: &OrderRecord, offer: &Offer) -> ExportRecord {
    let mut record = ExportRecord::default();
    let order_value = order.total_value;
    let gifts = &offer.gifts;

    record.push("Customer Name", customer.name.clone());
    record.push("Customer Type", customer.category.to_string());
    record.push("Address", customer.address.clone());
    record.push("Order Total", format!("${:.2}", order_value));
    record.push("Selected Tier", offer.tier.label());

    record.push(
        GiftKind::Hookah.label(),
        format!("{} (${:.2})", gifts.hookah, gifts.cost_of(GiftKind::Hookah, order_value)),
    );
    record.push(
        GiftKind::PackFoc.label(),
        format!("{} (${:.2})", gifts.pack_foc, gifts.cost_of(GiftKind::PackFoc, order_value)),
    );
    record.push(
        GiftKind::AfPoints.label(),
        format!("{} (${:.2})", gifts.af_points, gifts.cost_of(GiftKind::AfPoints, order_value)),
    );
    record.push(
        "Cash Back",
        format!(
            "{}% (${:.2})",
            gifts.cash_back_pct,
            gifts.cost_of(GiftKind::CashBack, order_value)
        ),
    );

    let gift_total = gifts.total_cost(order_value);
    record.push("Gift Total", format!("${gift_total:.2}"));

    let usage_pct = if offer.budget > Decimal::ZERO {
        gift_total / offer.budget * Decimal::from(100u32)
    } else {
        Decimal::ZERO
    };
    record.push("Budget Usage", format!("{:.1}%", usage_pct));

    for size in PackSize::ALL {
        let quantity = order.quantity(size);
        if quantity == 0 {
            continue;
        }
        if let Some(unit_price) = order.prices.get(&size) {
            record.push(
                format!("Order {size}"),
                format!("{quantity} x ${unit_price:.2} = ${:.2}", Decimal::from(quantity) * unit_price),
            );
        }
    }

    record
}

pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod export;

pub use domain::customer::CustomerCategory;
pub use domain::gift::{GiftAllocation, GiftChange, GiftKind, HOOKAH_MAX_UNITS};
pub use domain::offer::{Offer, Tier};
pub use domain::order::{OrderRecord, PackSize, PriceTable};
pub use engine::{
    classify_tier, compute_roi, derive_budget, generate_offers, is_gift_eligible,
    max_gift_quantities, optimize_budget, rebalance, recommend_gifts, summarize_order,
    DeterministicOfferEngine, GiftCaps, OfferEngine,
};
pub use errors::{ApplicationError, DomainError};
pub use export::{build_export, CustomerInfo, ExportRecord, ExportRow};

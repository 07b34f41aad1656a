pub mod customer;
pub mod gift;
pub mod offer;
pub mod order;

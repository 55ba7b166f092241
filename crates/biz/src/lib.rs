//! Acme business module: products, vendors and the vendor repository.
//!
//! Business rules are plain synchronous domain logic. Side effects (email,
//! action logging) go through the injected [`acme_common::Services`] bundle.

pub mod product;
pub mod repository;
pub mod vendor;

pub use product::{INCHES_PER_METER, Product};
pub use repository::{SampleVendors, VendorIter, VendorRepository, VendorSource};
pub use vendor::{IncludeAddress, PlaceOrder, SendCopy, Vendor};

use chrono::NaiveDate;

/// Short US-style date (`M/D/YYYY`) used in greetings and order text.
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

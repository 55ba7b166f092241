use std::cell::OnceCell;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use acme_common::{AcmeConfig, Services};
use acme_core::{DomainError, DomainResult, Entity, OperationResult};

use crate::{Vendor, short_date};

pub const INCHES_PER_METER: f64 = 39.37;

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 20;
const DEFAULT_CATEGORY: &str = "Tools";
const BULK_PREFIX: &str = "Bulk";

/// A product carried in inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    product_id: i32,
    product_name: Option<String>,
    description: String,
    cost: Decimal,
    vendor: OnceCell<Vendor>,
    availability_date: Option<NaiveDate>,
    category: String,
    sequence_number: i32,
    minimum_price: Decimal,
    validation_message: Option<String>,
}

impl Default for Product {
    fn default() -> Self {
        Self::new()
    }
}

impl Product {
    /// Empty product in the default category.
    pub fn new() -> Self {
        Self {
            product_id: 0,
            product_name: None,
            description: String::new(),
            cost: Decimal::ZERO,
            vendor: OnceCell::new(),
            availability_date: None,
            category: DEFAULT_CATEGORY.to_string(),
            sequence_number: 1,
            minimum_price: Decimal::new(96, 2),
            validation_message: None,
        }
    }

    /// Product with identity and description.
    ///
    /// A rejected name leaves the product unnamed with its validation message
    /// set; construction itself never fails.
    pub fn with_details(product_id: i32, product_name: &str, description: impl Into<String>) -> Self {
        let mut product = Self::new();
        product.product_id = product_id;
        // Rejections are kept on the instance via `validation_message`.
        let _ = product.set_product_name(product_name);
        product.description = description.into();

        if product.product_name().starts_with(BULK_PREFIX) {
            product.minimum_price = Decimal::new(999, 2);
        }

        tracing::debug!(product_id, product_name = product.product_name(), "product created");
        product
    }

    pub fn product_id(&self) -> i32 {
        self.product_id
    }

    pub fn set_product_id(&mut self, product_id: i32) {
        self.product_id = product_id;
    }

    /// Trimmed product name; empty while no name has been accepted.
    pub fn product_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or_default()
    }

    /// Assign a new name (trimmed, 3 to 20 characters).
    ///
    /// On rejection the previous name is kept and the reason is recorded in
    /// [`validation_message`](Self::validation_message) as well as returned.
    pub fn set_product_name(&mut self, product_name: &str) -> DomainResult<()> {
        let trimmed = product_name.trim();
        let len = trimmed.chars().count();

        let rejection = if len < MIN_NAME_LEN {
            Some(format!("Product Name must be at least {MIN_NAME_LEN} characters"))
        } else if len > MAX_NAME_LEN {
            Some(format!("Product Name cannot be more than {MAX_NAME_LEN} characters"))
        } else {
            None
        };

        if let Some(message) = rejection {
            tracing::warn!(len, reason = %message, "product name rejected");
            self.validation_message = Some(message.clone());
            return Err(DomainError::validation(message));
        }

        self.product_name = Some(trimmed.to_string());
        self.validation_message = None;
        Ok(())
    }

    /// Why the last name assignment was rejected, if it was.
    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn set_cost(&mut self, cost: Decimal) {
        self.cost = cost;
    }

    pub fn minimum_price(&self) -> Decimal {
        self.minimum_price
    }

    /// Supplying vendor; an empty vendor is created on first access.
    pub fn vendor(&self) -> &Vendor {
        self.vendor.get_or_init(Vendor::default)
    }

    pub fn set_vendor(&mut self, vendor: Vendor) {
        self.vendor = OnceCell::from(vendor);
    }

    pub fn availability_date(&self) -> Option<NaiveDate> {
        self.availability_date
    }

    pub fn set_availability_date(&mut self, date: Option<NaiveDate>) {
        self.availability_date = date;
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sequence_number(&self) -> i32 {
        self.sequence_number
    }

    pub fn set_sequence_number(&mut self, sequence_number: i32) {
        self.sequence_number = sequence_number;
    }

    /// `{category}-{sequence}` with the sequence zero-padded to four digits.
    pub fn product_code(&self) -> String {
        format!("{}-{:04}", self.category, self.sequence_number)
    }

    /// Cost marked up by `markup_percent`.
    ///
    /// The price is always computed; a non-positive markup or one below the
    /// configured recommendation is reported through the message. If the
    /// markup overflows the decimal range the cost is returned unchanged.
    pub fn calculate_suggested_price(
        &self,
        markup_percent: Decimal,
        config: &AcmeConfig,
    ) -> OperationResult<Decimal> {
        let message = if markup_percent <= Decimal::ZERO {
            "Invalid markup percentage"
        } else if markup_percent < config.recommended_markup {
            "Below recommended markup percentage"
        } else {
            ""
        };

        let marked_up = self
            .cost
            .checked_mul(markup_percent)
            .and_then(|m| m.checked_div(Decimal::ONE_HUNDRED))
            .and_then(|markup| self.cost.checked_add(markup));

        match marked_up {
            Some(value) => OperationResult::new(value, message),
            None => {
                tracing::warn!(cost = %self.cost, %markup_percent, "suggested price overflowed");
                OperationResult::new(self.cost, "Suggested price out of range")
            }
        }
    }

    /// Announce the product to sales and return a display greeting.
    pub fn say_hello(&self, services: &Services) -> String {
        let confirmation = services.email().send_message(
            "New Product",
            self.product_name(),
            &services.config().sales_email,
        );
        tracing::debug!(product_id = self.product_id, %confirmation, "product announced");
        services.actions().log_action("saying Hello");

        let available = self.availability_date.map(short_date).unwrap_or_default();
        format!(
            "Hello {} ({}): {} Available on: {}",
            self.product_name(),
            self.product_id,
            self.description,
            available
        )
    }
}

impl Entity for Product {
    type Id = i32;

    fn id(&self) -> Self::Id {
        self.product_id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.product_name(), self.product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acme_common::{InMemoryEmailService, TracingActionLog};
    use std::sync::Arc;

    fn saw() -> Product {
        Product::with_details(1, "Saw", "15-inch steel blade hand saw")
    }

    #[test]
    fn new_product_has_default_code() {
        let product = Product::new();
        assert_eq!(product.category(), "Tools");
        assert_eq!(product.sequence_number(), 1);
        assert_eq!(product.product_code(), "Tools-0001");
        assert_eq!(product.minimum_price(), Decimal::new(96, 2));
        assert_eq!(product.product_name(), "");
    }

    #[test]
    fn product_code_pads_sequence() {
        let mut product = Product::new();
        product.set_sequence_number(42);
        assert_eq!(product.product_code(), "Tools-0042");
        product.set_sequence_number(12345);
        assert_eq!(product.product_code(), "Tools-12345");
    }

    #[test]
    fn bulk_products_get_higher_minimum_price() {
        let product = Product::with_details(2, "Bulk Nails", "Box of 1000");
        assert_eq!(product.minimum_price(), Decimal::new(999, 2));
        assert_eq!(saw().minimum_price(), Decimal::new(96, 2));
    }

    #[test]
    fn name_is_trimmed_on_assignment() {
        let mut product = Product::new();
        product.set_product_name("  Hammer  ").unwrap();
        assert_eq!(product.product_name(), "Hammer");
        assert_eq!(product.validation_message(), None);
    }

    #[test]
    fn short_name_is_rejected_and_previous_kept() {
        let mut product = saw();
        let err = product.set_product_name("ab").unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(product.product_name(), "Saw");
        assert_eq!(
            product.validation_message(),
            Some("Product Name must be at least 3 characters")
        );
    }

    #[test]
    fn long_name_is_rejected_and_previous_kept() {
        let mut product = saw();
        product
            .set_product_name("Adjustable Pipe Wrench XL")
            .unwrap_err();

        assert_eq!(product.product_name(), "Saw");
        assert_eq!(
            product.validation_message(),
            Some("Product Name cannot be more than 20 characters")
        );
    }

    #[test]
    fn padded_short_name_is_rejected() {
        let mut product = saw();
        product.set_product_name("  ab  ").unwrap_err();
        assert_eq!(product.product_name(), "Saw");
        assert_eq!(
            product.validation_message(),
            Some("Product Name must be at least 3 characters")
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut product = Product::new();
        let twenty = "é".repeat(20);
        assert_eq!(twenty.len(), 40);

        product.set_product_name(&twenty).unwrap();
        assert_eq!(product.product_name(), twenty);

        product.set_product_name(&"é".repeat(21)).unwrap_err();
        assert_eq!(product.product_name(), twenty);
        assert_eq!(
            product.validation_message(),
            Some("Product Name cannot be more than 20 characters")
        );
    }

    #[test]
    fn accepted_name_clears_previous_validation_message() {
        let mut product = saw();
        product.set_product_name("x").unwrap_err();
        assert!(product.validation_message().is_some());

        product.set_product_name("Rake").unwrap();
        assert_eq!(product.validation_message(), None);
    }

    #[test]
    fn constructor_keeps_rejected_name_as_message() {
        let product = Product::with_details(3, "AB", "too short");
        assert_eq!(product.product_name(), "");
        assert!(product.validation_message().is_some());
    }

    #[test]
    fn vendor_defaults_lazily_to_empty() {
        let product = Product::new();
        assert_eq!(product.vendor(), &Vendor::default());
    }

    #[test]
    fn vendor_can_be_replaced() {
        let mut product = Product::new();
        let vendor = Vendor::new(1, "ABC Corp", "abc@abc.com");
        product.set_vendor(vendor.clone());
        assert_eq!(product.vendor(), &vendor);
    }

    #[test]
    fn suggested_price_with_recommended_markup_has_no_message() {
        let mut product = saw();
        product.set_cost(Decimal::from(10));

        let result = product.calculate_suggested_price(Decimal::from(15), &AcmeConfig::default());
        assert_eq!(*result.value(), Decimal::from(10) * Decimal::new(115, 2));
        assert_eq!(result.message(), "");
    }

    #[test]
    fn suggested_price_below_recommendation_warns() {
        let mut product = saw();
        product.set_cost(Decimal::from(100));

        let result = product.calculate_suggested_price(Decimal::from(5), &AcmeConfig::default());
        assert_eq!(*result.value(), Decimal::from(105));
        assert_eq!(result.message(), "Below recommended markup percentage");
    }

    #[test]
    fn suggested_price_with_non_positive_markup_is_invalid_but_computed() {
        let mut product = saw();
        product.set_cost(Decimal::from(100));
        let config = AcmeConfig::default();

        let zero = product.calculate_suggested_price(Decimal::ZERO, &config);
        assert_eq!(*zero.value(), Decimal::from(100));
        assert_eq!(zero.message(), "Invalid markup percentage");

        let negative = product.calculate_suggested_price(Decimal::from(-5), &config);
        assert_eq!(*negative.value(), Decimal::from(95));
        assert_eq!(negative.message(), "Invalid markup percentage");
    }

    #[test]
    fn suggested_price_overflow_keeps_cost() {
        let mut product = saw();
        product.set_cost(Decimal::MAX);

        let result = product.calculate_suggested_price(Decimal::from(15), &AcmeConfig::default());
        assert_eq!(*result.value(), Decimal::MAX);
        assert_eq!(result.message(), "Suggested price out of range");

        product.set_cost(Decimal::MIN);
        let result = product.calculate_suggested_price(Decimal::from(50), &AcmeConfig::default());
        assert_eq!(*result.value(), Decimal::MIN);
        assert!(result.has_message());
    }

    #[test]
    fn recommended_markup_comes_from_config() {
        let mut product = saw();
        product.set_cost(Decimal::from(100));
        let config = AcmeConfig {
            recommended_markup: Decimal::from(20),
            ..AcmeConfig::default()
        };

        let result = product.calculate_suggested_price(Decimal::from(15), &config);
        assert_eq!(result.message(), "Below recommended markup percentage");
    }

    #[test]
    fn say_hello_announces_and_formats_greeting() {
        let email = Arc::new(InMemoryEmailService::new());
        let services = Services::new(email.clone(), Arc::new(TracingActionLog));

        let mut product = saw();
        product.set_availability_date(NaiveDate::from_ymd_opt(2026, 3, 7));

        let greeting = product.say_hello(&services);
        assert_eq!(
            greeting,
            "Hello Saw (1): 15-inch steel blade hand saw Available on: 3/7/2026"
        );

        let sent = email.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Product");
        assert_eq!(sent[0].message, "Saw");
        assert_eq!(sent[0].recipient, "sales@abc.com");
    }

    #[test]
    fn say_hello_without_availability_date() {
        let greeting = saw().say_hello(&Services::default());
        assert!(greeting.ends_with("Available on: "));
    }

    #[test]
    fn display_shows_name_and_id() {
        assert_eq!(saw().to_string(), "Saw (1)");
        assert_eq!(saw().id(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Names of 3 to 20 characters (after trimming) are always accepted.
            #[test]
            fn names_within_bounds_are_accepted(
                name in "[A-Za-z0-9é][A-Za-z0-9é ]{1,18}[A-Za-z0-9é]",
                padding in " {0,3}"
            ) {
                let mut product = Product::new();
                let input = format!("{padding}{name}{padding}");

                prop_assert!(product.set_product_name(&input).is_ok());
                prop_assert_eq!(product.product_name(), name.as_str());
                prop_assert_eq!(product.validation_message(), None);
            }

            /// Names outside the bounds (after trimming) never replace the current name.
            #[test]
            fn names_outside_bounds_keep_previous(
                name in prop_oneof!["[A-Za-zé]{0,2}", "[A-Za-zé]{21,40}"],
                padding in " {0,6}"
            ) {
                let mut product = Product::with_details(1, "Saw", "");
                let input = format!("{padding}{name}{padding}");

                prop_assert!(product.set_product_name(&input).is_err());
                prop_assert_eq!(product.product_name(), "Saw");
                prop_assert!(product.validation_message().is_some());
            }

            /// The suggested price is computed even when the message flags a problem.
            #[test]
            fn suggested_price_always_computed(
                cost in 0i64..1_000_000,
                markup in -100i64..200
            ) {
                let mut product = Product::new();
                product.set_cost(Decimal::new(cost, 2));
                let markup = Decimal::from(markup);

                let result = product.calculate_suggested_price(markup, &AcmeConfig::default());
                let expected = product.cost() + product.cost() * markup / Decimal::ONE_HUNDRED;
                prop_assert_eq!(*result.value(), expected);
                prop_assert_eq!(result.has_message(), markup < Decimal::from(10));
            }
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use acme_common::{SENT_PREFIX, Services};
use acme_core::{DomainError, DomainResult, Entity, OperationResult};

use crate::{Product, short_date};

/// Whether an order should carry the shipping address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncludeAddress {
    Yes,
    No,
}

/// Whether a copy of the order goes to the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendCopy {
    Yes,
    No,
}

/// A vendor from whom inventory is purchased.
///
/// Two vendors are equal when id, company name and email all match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vendor {
    pub vendor_id: i32,
    pub company_name: String,
    pub email: String,
}

/// Command: place an order with a vendor.
#[derive(Debug, Clone)]
pub struct PlaceOrder<'a> {
    pub product: Option<&'a Product>,
    pub quantity: i32,
    /// Requested delivery date; must be after `placed_at`.
    pub deliver_by: Option<DateTime<Utc>>,
    /// `None` uses the configured default; blank omits the line.
    pub instructions: Option<String>,
    /// Instant the delivery date is checked against; `None` means the moment
    /// `place_order` runs.
    pub placed_at: Option<DateTime<Utc>>,
}

impl<'a> PlaceOrder<'a> {
    pub fn new(product: Option<&'a Product>, quantity: i32) -> Self {
        Self {
            product,
            quantity,
            deliver_by: None,
            instructions: None,
            placed_at: None,
        }
    }

    pub fn deliver_by(mut self, deliver_by: DateTime<Utc>) -> Self {
        self.deliver_by = Some(deliver_by);
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn placed_at(mut self, placed_at: DateTime<Utc>) -> Self {
        self.placed_at = Some(placed_at);
        self
    }
}

fn ensure_positive_quantity(quantity: i32) -> DomainResult<()> {
    if quantity <= 0 {
        tracing::warn!(quantity, "order rejected: quantity must be positive");
        return Err(DomainError::out_of_range("quantity"));
    }
    Ok(())
}

impl Vendor {
    pub fn new(vendor_id: i32, company_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            vendor_id,
            company_name: company_name.into(),
            email: email.into(),
        }
    }

    fn order_lines(&self, company_name: &str, product: &Product, quantity: i32) -> Vec<String> {
        vec![
            format!("Order from {company_name}"),
            format!("Product: {}", product.product_code()),
            format!("Quantity: {quantity}"),
        ]
    }

    /// Send a welcome message to this vendor, returning the confirmation.
    pub fn send_welcome_email(&self, message: &str, services: &Services) -> String {
        let subject = format!("Hello {}", self.company_name);
        services
            .email()
            .send_message(subject.trim(), message, &self.email)
    }

    /// Build order text for `product` using address/copy flags.
    ///
    /// Nothing is sent; the order is always reported as successful.
    pub fn place_order_with_options(
        &self,
        product: &Product,
        quantity: i32,
        include_address: IncludeAddress,
        send_copy: SendCopy,
        services: &Services,
    ) -> DomainResult<OperationResult<bool>> {
        ensure_positive_quantity(quantity)?;

        let mut lines = self.order_lines(&services.config().company_name, product, quantity);
        if include_address == IncludeAddress::Yes {
            lines.push("With Address".to_string());
        }
        if send_copy == SendCopy::Yes {
            lines.push("With Copy".to_string());
        }

        Ok(OperationResult::new(true, lines.join("\n")))
    }

    /// Email an order to this vendor.
    ///
    /// Fails on a missing product, a non-positive quantity, or a delivery date
    /// that is not strictly after `placed_at` (the current time when unset).
    /// Otherwise the value reports whether delivery was confirmed and the
    /// message holds the order text.
    pub fn place_order(
        &self,
        order: PlaceOrder<'_>,
        services: &Services,
    ) -> DomainResult<OperationResult<bool>> {
        let product = order.product.ok_or_else(|| DomainError::missing("product"))?;
        ensure_positive_quantity(order.quantity)?;
        let placed_at = order.placed_at.unwrap_or_else(Utc::now);
        if let Some(deliver_by) = order.deliver_by
            && deliver_by <= placed_at
        {
            tracing::warn!(%deliver_by, %placed_at, "order rejected: delivery date not in the future");
            return Err(DomainError::out_of_range("deliver_by"));
        }

        let config = services.config();
        let mut lines = self.order_lines(&config.company_name, product, order.quantity);

        if let Some(deliver_by) = order.deliver_by {
            lines.push(format!("Deliver By: {}", short_date(deliver_by.date_naive())));
        }

        let instructions = order
            .instructions
            .as_deref()
            .unwrap_or(&config.default_instructions);
        if !instructions.trim().is_empty() {
            lines.push(format!("Instructions: {instructions}"));
        }

        let order_text = lines.join("\n");
        let confirmation = services
            .email()
            .send_message("New Order", &order_text, &self.email);
        let success = confirmation.starts_with(SENT_PREFIX);

        tracing::info!(
            vendor_id = self.vendor_id,
            product_code = %product.product_code(),
            quantity = order.quantity,
            success,
            "order placed"
        );

        Ok(OperationResult::new(success, order_text))
    }

    /// Send the same message to every vendor, one confirmation per vendor in
    /// input order.
    pub fn send_email(vendors: &[Vendor], message: &str, services: &Services) -> Vec<String> {
        tracing::debug!(count = vendors.len(), "sending vendor emails");
        vendors
            .iter()
            .map(|vendor| {
                let subject = format!("Important message for: {}", vendor.company_name);
                services.email().send_message(&subject, message, &vendor.email)
            })
            .collect()
    }
}

impl Entity for Vendor {
    type Id = i32;

    fn id(&self) -> Self::Id {
        self.vendor_id
    }
}

impl core::fmt::Display for Vendor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vendor: {}", self.company_name)
    }
}

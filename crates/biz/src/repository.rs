//! Vendor repository over a pluggable data source.

use std::cell::OnceCell;
use std::iter::FusedIterator;

use acme_core::{DomainResult, Entity};

use crate::Vendor;

/// Where vendor records come from.
pub trait VendorSource {
    /// Single-record lookup.
    fn lookup(&self, vendor_id: i32) -> Option<Vendor>;

    /// All approved vendors, in display order.
    fn load_all(&self) -> Vec<Vendor>;
}

/// Fixed sample data used until a real data source exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleVendors;

impl SampleVendors {
    fn abc_corp() -> Vendor {
        Vendor::new(1, "ABC Corp", "abc@abc.com")
    }
}

impl VendorSource for SampleVendors {
    /// Only the ABC Corp record is available for single lookups.
    fn lookup(&self, vendor_id: i32) -> Option<Vendor> {
        (vendor_id == 1).then(Self::abc_corp)
    }

    fn load_all(&self) -> Vec<Vendor> {
        vec![Self::abc_corp(), Vendor::new(2, "XYZ Inc", "xyz@xyz.com")]
    }
}

impl VendorSource for Vec<Vendor> {
    fn lookup(&self, vendor_id: i32) -> Option<Vendor> {
        self.iter().find(|v| v.id() == vendor_id).cloned()
    }

    fn load_all(&self) -> Vec<Vendor> {
        self.clone()
    }
}

/// Vendor repository.
///
/// The full vendor list is loaded from the source at most once, on first use.
#[derive(Debug)]
pub struct VendorRepository<S = SampleVendors> {
    source: S,
    vendors: OnceCell<Vec<Vendor>>,
}

impl VendorRepository<SampleVendors> {
    pub fn new() -> Self {
        Self::with_source(SampleVendors)
    }
}

impl Default for VendorRepository<SampleVendors> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: VendorSource> VendorRepository<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            vendors: OnceCell::new(),
        }
    }

    /// Retrieve one vendor; unknown ids yield an empty vendor.
    pub fn retrieve(&self, vendor_id: i32) -> Vendor {
        self.source.lookup(vendor_id).unwrap_or_default()
    }

    /// Retrieve all approved vendors.
    pub fn retrieve_all(&self) -> &[Vendor] {
        self.vendors.get_or_init(|| {
            let vendors = self.source.load_all();
            tracing::debug!(count = vendors.len(), "vendors loaded");
            vendors
        })
    }

    /// Retrieve all approved vendors one at a time.
    ///
    /// Nothing is loaded until the first element is requested. Each call
    /// starts again from the first vendor.
    pub fn iter(&self) -> VendorIter<'_, S> {
        VendorIter {
            repository: self,
            position: 0,
        }
    }

    pub fn save(&self, vendor: &Vendor) -> DomainResult<()> {
        tracing::info!(vendor_id = vendor.id(), "vendor saved");
        Ok(())
    }

    /// Scalar lookup; no backing query exists yet, so `default_value` is
    /// always returned.
    pub fn retrieve_value<T>(&self, query: &str, default_value: T) -> T {
        tracing::debug!(query, "scalar lookup falling back to default");
        default_value
    }
}

/// Lazy iterator over a repository's vendors.
#[derive(Debug)]
pub struct VendorIter<'a, S> {
    repository: &'a VendorRepository<S>,
    position: usize,
}

impl<'a, S: VendorSource> Iterator for VendorIter<'a, S> {
    type Item = &'a Vendor;

    fn next(&mut self) -> Option<Self::Item> {
        let vendor = self.repository.retrieve_all().get(self.position)?;
        self.position += 1;
        tracing::debug!(vendor_id = vendor.id(), "vendor yielded");
        Some(vendor)
    }
}

impl<S: VendorSource> FusedIterator for VendorIter<'_, S> {}

impl<'a, S: VendorSource> IntoIterator for &'a VendorRepository<S> {
    type Item = &'a Vendor;
    type IntoIter = VendorIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Dataset loading and validation.
//!
//! A [`Dataset`] is the single input of every query: the customers (with
//! their orders), the suppliers and the products. It is validated once when
//! built and never mutated afterwards.

use crate::entity::{Customer, Order, Product, Supplier};
use relq_core::{AsQuery, Error, Query, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Immutable collection of entities.
///
/// Deserializing goes through [`Dataset::new`], so a `Dataset` obtained from
/// any serde format has passed validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
}

/// Wire shape of a dataset before validation.
#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    suppliers: Vec<Supplier>,
    #[serde(default)]
    products: Vec<Product>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = Error;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.customers, raw.suppliers, raw.products)
    }
}

impl Dataset {
    /// Build and validate a dataset.
    ///
    /// Fails with [`Error::DuplicateKey`] on repeated customer, supplier or
    /// product ids (or order ids within one customer), and with
    /// [`Error::InvalidData`] on negative order totals or unit prices, or when
    /// the order totals together exceed the decimal range.
    pub fn new(
        customers: Vec<Customer>,
        suppliers: Vec<Supplier>,
        products: Vec<Product>,
    ) -> Result<Self> {
        let dataset = Self {
            customers,
            suppliers,
            products,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse a dataset from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDataset =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        let dataset = Dataset::try_from(raw)?;
        info!(
            customers = dataset.customers.len(),
            suppliers = dataset.suppliers.len(),
            products = dataset.products.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Read a JSON dataset from `path`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading dataset");
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// All customers, in load order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All suppliers, in load order.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// All products, in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Every order paired with its customer, customer by customer.
    pub fn orders(&self) -> Query<'_, (&Customer, &Order)> {
        self.customers
            .query()
            .flat_map(|c| c.orders.iter().map(move |o| (c, o)))
    }

    /// Look up a customer by id.
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    fn validate(&self) -> Result<()> {
        unique("customer", self.customers.iter().map(|c| c.id.as_str()))?;
        unique("supplier", self.suppliers.iter().map(|s| s.id.as_str()))?;
        unique("product", self.products.iter().map(|p| p.id))?;

        for customer in &self.customers {
            unique(
                &format!("order of customer {}", customer.id),
                customer.orders.iter().map(|o| o.id),
            )?;
            if let Some(order) = customer.orders.iter().find(|o| o.total.is_sign_negative()) {
                return Err(Error::InvalidData(format!(
                    "order {} of customer {} has negative total {}",
                    order.id, customer.id, order.total
                )));
            }
        }

        // Totals are non-negative, so when the grand total fits every
        // per-customer, per-city and per-period sum fits as well.
        self.orders()
            .checked_sum(|(_, order)| order.total)
            .map_err(|_| Error::InvalidData("order totals exceed the decimal range".into()))?;

        if let Some(product) = self
            .products
            .iter()
            .find(|p| p.unit_price.is_sign_negative())
        {
            return Err(Error::InvalidData(format!(
                "product {} has negative unit price {}",
                product.id, product.unit_price
            )));
        }
        Ok(())
    }
}

fn unique<K, I>(what: &str, ids: I) -> Result<()>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(Error::DuplicateKey(format!("{} id {}", what, id)));
        }
        seen.insert(id);
    }
    Ok(())
}

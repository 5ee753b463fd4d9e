//! Entity records.
//!
//! Field names follow the JSON shape accepted by
//! [`Dataset::from_json`](crate::Dataset::from_json). Nullable contact fields
//! are `Option<String>`; an empty string and `None` are both "blank" to the
//! predicate library.

use crate::keys::{CountryCity, YearMonth};
use chrono::NaiveDateTime;
use relq_core::{AsQuery, Query, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single order placed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique within the owning customer
    pub id: u32,
    /// Order total, never negative
    pub total: Decimal,
    /// Local date and time the order was placed
    pub order_date: NaiveDateTime,
}

impl Order {
    /// Build an order.
    pub fn new(id: u32, total: Decimal, order_date: NaiveDateTime) -> Self {
        Self {
            id,
            total,
            order_date,
        }
    }

    /// Calendar month the order was placed in.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(&self.order_date)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} total={}",
            self.id,
            self.order_date.format("%Y-%m-%d"),
            self.total
        )
    }
}

/// A customer and the orders it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer id
    pub id: String,
    /// Company name
    pub company_name: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// City
    pub city: String,
    /// Region or state, if any
    #[serde(default)]
    pub region: Option<String>,
    /// Postal code, if any
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Country
    pub country: String,
    /// Phone number, if any
    #[serde(default)]
    pub phone: Option<String>,
    /// Orders in placement order
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Build a customer with no contact details and no orders.
    pub fn new(
        id: impl Into<String>,
        company_name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            company_name: company_name.into(),
            address: String::new(),
            city: city.into(),
            region: None,
            postal_code: None,
            country: country.into(),
            phone: None,
            orders: Vec::new(),
        }
    }

    /// Set the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the postal code.
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Append an order.
    pub fn with_order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    /// Location key for supplier joins.
    pub fn location(&self) -> CountryCity<'_> {
        CountryCity::new(&self.country, &self.city)
    }

    /// Region as a string slice.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Postal code as a string slice.
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Phone number as a string slice.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Query over this customer's orders.
    pub fn orders(&self) -> Query<'_, &Order> {
        self.orders.query()
    }

    /// Sum of all order totals; zero without orders.
    pub fn turnover(&self) -> Decimal {
        self.orders().sum(|o| o.total)
    }

    /// True when the customer has placed at least one order.
    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }

    /// Month of the earliest order.
    ///
    /// Fails with `EmptySequence` for a customer without orders.
    pub fn first_order_month(&self) -> Result<YearMonth> {
        self.orders()
            .min(|o| o.order_date)
            .map(|date| YearMonth::of(&date))
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.id, self.company_name, self.city, self.country
        )
    }
}

/// A supplier of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique supplier id
    pub id: String,
    /// Supplier name
    pub supplier_name: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// City
    pub city: String,
    /// Country
    pub country: String,
}

impl Supplier {
    /// Build a supplier.
    pub fn new(
        id: impl Into<String>,
        supplier_name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            supplier_name: supplier_name.into(),
            address: String::new(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// Set the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Location key for customer joins.
    pub fn location(&self) -> CountryCity<'_> {
        CountryCity::new(&self.country, &self.city)
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.supplier_name, self.city, self.country)
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id
    pub id: u32,
    /// Product name
    pub product_name: String,
    /// Category name
    pub category: String,
    /// Price per unit, never negative
    pub unit_price: Decimal,
    /// Units on hand
    pub units_in_stock: u32,
}

impl Product {
    /// Build a product.
    pub fn new(
        id: u32,
        product_name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Decimal,
        units_in_stock: u32,
    ) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            category: category.into(),
            unit_price,
            units_in_stock,
        }
    }

    /// At least one unit on hand.
    pub fn in_stock(&self) -> bool {
        self.units_in_stock > 0
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] price={} stock={}",
            self.id, self.product_name, self.category, self.unit_price, self.units_in_stock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use relq_core::Error;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_customer_turnover_and_first_order() {
        let customer = Customer::new("AROUT", "Around the Horn", "UK", "London")
            .with_order(Order::new(10383, dec!(899.00), at(1996, 12, 16)))
            .with_order(Order::new(10355, dec!(480.00), at(1996, 11, 15)));

        assert_eq!(customer.turnover(), dec!(1379.00));
        assert_eq!(customer.first_order_month().unwrap(), YearMonth::new(1996, 11));
        assert!(customer.has_orders());
    }

    #[test]
    fn test_customer_without_orders() {
        let customer = Customer::new("FISSA", "FISSA Fabrica", "Spain", "Madrid");
        assert_eq!(customer.turnover(), Decimal::ZERO);
        assert!(!customer.has_orders());
        assert!(matches!(
            customer.first_order_month(),
            Err(Error::EmptySequence("min"))
        ));
    }

    #[test]
    fn test_locations_join_across_entities() {
        let customer = Customer::new("BSBEV", "B's Beverages", "UK", "London");
        let supplier = Supplier::new("1", "Exotic Liquids", "UK", "London");
        assert_eq!(customer.location(), supplier.location());
    }

    #[test]
    fn test_display_forms() {
        let product = Product::new(1, "Chai", "Beverages", dec!(18.00), 39);
        assert_eq!(product.to_string(), "#1 Chai [Beverages] price=18.00 stock=39");
        assert!(product.in_stock());

        let order = Order::new(10643, dec!(814.50), at(1997, 8, 25));
        assert_eq!(order.to_string(), "#10643 1997-08-25 total=814.50");
    }
}

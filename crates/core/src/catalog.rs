//! Static product catalog.
//!
//! The catalog is compiled into the binary and never mutated. [`BUILTIN`]
//! holds the process-wide instance; tests build their own with
//! [`Catalog::new`].

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::CoreError;
use crate::specs::{SpecValue, Specs};

/// A purchasable catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub product_type: String,
    pub specs: Specs,
}

/// A product together with the other listings of the same type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub alternatives: Vec<Product>,
}

/// Ordered, read-only product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Every product in declaration order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product and collect its alternatives.
    ///
    /// Alternatives are all other products sharing the same `type`, in catalog
    /// order. The queried product itself is never included.
    pub fn get_by_id(&self, id: &str) -> Result<ProductDetail, CoreError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("Product", id))?;

        let alternatives = self
            .products
            .iter()
            .filter(|p| p.product_type == product.product_type && p.id != id)
            .cloned()
            .collect();

        Ok(ProductDetail {
            product: product.clone(),
            alternatives,
        })
    }

    /// Names of every spec attribute that appears on at least one product.
    pub fn spec_attributes(&self) -> BTreeSet<&str> {
        self.products
            .iter()
            .flat_map(|p| p.specs.keys().map(String::as_str))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Built-in catalog data
// ---------------------------------------------------------------------------

/// The catalog served by the API.
pub static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(builtin_products()));

fn num(value: f64) -> SpecValue {
    SpecValue::Number(value)
}

fn text(value: &str) -> SpecValue {
    SpecValue::Text(value.to_string())
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    product_type: &str,
    specs: Vec<(&str, SpecValue)>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        product_type: product_type.to_string(),
        specs: specs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Solar Panel 400W",
            "High-efficiency monocrystalline solar panel",
            299.99,
            "solar",
            vec![("power", num(400.0)), ("efficiency", num(0.21)), ("area", num(1.95))],
        ),
        product(
            "2",
            "Lithium Battery 5kWh",
            "Deep cycle lithium battery for energy storage",
            3499.99,
            "battery",
            vec![
                ("capacity", num(5000.0)),
                ("voltage", num(48.0)),
                ("maxChargePower", num(2500.0)),
            ],
        ),
        product(
            "3",
            "Solar Panel 200W",
            "Compact monocrystalline panel for small arrays",
            169.99,
            "solar",
            vec![("power", num(200.0)), ("efficiency", num(0.21)), ("area", num(0.98))],
        ),
        product(
            "4",
            "Solar Panel 100W",
            "Portable polycrystalline panel",
            99.99,
            "solar",
            vec![("power", num(100.0)), ("efficiency", num(0.20)), ("area", num(0.49))],
        ),
        product(
            "5",
            "Wind Turbine 2kW",
            "Horizontal-axis turbine for residential sites",
            2499.00,
            "wind",
            vec![
                ("power", num(2000.0)),
                ("cutInSpeed", num(3.0)),
                ("ratedSpeed", num(12.0)),
            ],
        ),
        product(
            "6",
            "AGM Battery 100Ah",
            "Sealed lead-acid battery, 12V 100Ah",
            229.99,
            "battery",
            vec![
                ("capacity", num(1200.0)),
                ("voltage", num(12.0)),
                ("maxChargePower", num(600.0)),
            ],
        ),
        product(
            "7",
            "AGM Battery 200Ah",
            "Sealed lead-acid battery, 12V 200Ah",
            429.99,
            "battery",
            vec![
                ("capacity", num(2400.0)),
                ("voltage", num(12.0)),
                ("maxChargePower", num(1200.0)),
            ],
        ),
        product(
            "8",
            "Refrigerator",
            "Energy Star rated household refrigerator",
            899.00,
            "load",
            vec![
                ("name", text("Fridge")),
                ("power", num(500.0)),
                ("voltage", num(230.0)),
                ("phase", text("single")),
            ],
        ),
        product(
            "9",
            "LED Lighting Kit",
            "Set of ten 6W LED bulbs",
            49.99,
            "load",
            vec![
                ("name", text("Lights")),
                ("power", num(60.0)),
                ("voltage", num(230.0)),
                ("phase", text("single")),
            ],
        ),
    ]
}

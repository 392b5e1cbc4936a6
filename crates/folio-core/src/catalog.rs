//! The static reference catalog of asset types.
//!
//! The catalog is compiled into the serving process; it is never persisted
//! and never mutated. Its name column doubles as the closed set of asset
//! names accepted by the ledger's create operation.

use serde::{Deserialize, Serialize};

/// The fixed set of catalog category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
  Equity,
  PublicBond,
  PrivateBond,
  Currency,
  Crypto,
  Commodity,
}

/// A static reference record describing an asset type and its indicative
/// price. Not tied to any client.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
  pub name:            &'static str,
  pub category:        AssetCategory,
  pub reference_price: f64,
}

/// The full reference catalog. Prices are indicative, in BRL.
pub const CATALOG: [CatalogEntry; 15] = [
  CatalogEntry { name: "PETR4",                       category: AssetCategory::Equity,      reference_price: 39.50 },
  CatalogEntry { name: "VALE3",                       category: AssetCategory::Equity,      reference_price: 67.80 },
  CatalogEntry { name: "ITUB4",                       category: AssetCategory::Equity,      reference_price: 30.20 },
  CatalogEntry { name: "Tesouro IPCA+ 2035",          category: AssetCategory::PublicBond,  reference_price: 2900.00 },
  CatalogEntry { name: "Tesouro Selic 2027",          category: AssetCategory::PublicBond,  reference_price: 11800.00 },
  CatalogEntry { name: "CDB Banco Inter (1 ano)",     category: AssetCategory::PrivateBond, reference_price: 1000.00 },
  CatalogEntry { name: "LCI Caixa (2 anos)",          category: AssetCategory::PrivateBond, reference_price: 5000.00 },
  CatalogEntry { name: "USD/BRL",                     category: AssetCategory::Currency,    reference_price: 5.25 },
  CatalogEntry { name: "EUR/BRL",                     category: AssetCategory::Currency,    reference_price: 5.65 },
  CatalogEntry { name: "Bitcoin",                     category: AssetCategory::Crypto,      reference_price: 355000.00 },
  CatalogEntry { name: "Ethereum",                    category: AssetCategory::Crypto,      reference_price: 18000.00 },
  CatalogEntry { name: "Ouro (g)",                    category: AssetCategory::Commodity,   reference_price: 370.00 },
  CatalogEntry { name: "Soja (saca 60kg)",            category: AssetCategory::Commodity,   reference_price: 150.00 },
  CatalogEntry { name: "Milho (saca 60kg)",           category: AssetCategory::Commodity,   reference_price: 65.00 },
  CatalogEntry { name: "Café Arábica (saca 60kg)",    category: AssetCategory::Commodity,   reference_price: 950.00 },
];

/// `true` if `name` is one of the catalog asset names.
pub fn contains_name(name: &str) -> bool {
  CATALOG.iter().any(|entry| entry.name == name)
}

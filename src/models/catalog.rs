use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPackage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub tests: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_true")]
    pub home_collection: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestPackage {
    pub name: String,
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub tests: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_true")]
    pub home_collection: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualTest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub preparation_required: bool,
    #[serde(default = "default_report_time")]
    pub report_time: String,
    #[serde(default = "default_true")]
    pub home_collection: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIndividualTest {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub preparation_required: bool,
    #[serde(default = "default_report_time")]
    pub report_time: String,
    #[serde(default = "default_true")]
    pub home_collection: bool,
}

fn default_true() -> bool {
    true
}

fn default_report_time() -> String {
    "24 hours".to_string()
}

/// Whether a booking is for a bundled package or a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Package,
    Individual,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Package => "package",
            TestType::Individual => "individual",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "package" => TestType::Package,
            _ => TestType::Individual,
        }
    }
}

/// A bookable unit from the catalog. Items are immutable once loaded; a
/// booking copies the price out rather than holding a reference back in.
#[derive(Debug, Clone)]
pub enum CatalogItem {
    Package(TestPackage),
    Test(IndividualTest),
}

impl CatalogItem {
    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Package(p) => &p.id,
            CatalogItem::Test(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Package(p) => &p.name,
            CatalogItem::Test(t) => &t.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CatalogItem::Package(p) => &p.description,
            CatalogItem::Test(t) => &t.description,
        }
    }

    pub fn price(&self) -> i64 {
        match self {
            CatalogItem::Package(p) => p.price,
            CatalogItem::Test(t) => t.price,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            CatalogItem::Package(p) => &p.category,
            CatalogItem::Test(t) => &t.category,
        }
    }

    pub fn test_type(&self) -> TestType {
        match self {
            CatalogItem::Package(_) => TestType::Package,
            CatalogItem::Test(_) => TestType::Individual,
        }
    }

    pub fn home_collection(&self) -> bool {
        match self {
            CatalogItem::Package(p) => p.home_collection,
            CatalogItem::Test(t) => t.home_collection,
        }
    }
}

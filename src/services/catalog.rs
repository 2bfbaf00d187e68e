use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::models::{CatalogItem, Faq, IndividualTest, TestPackage, Testimonial};
use crate::services::fallback;

/// Loads the browsing content once per page-load equivalent. Every list
/// degrades to the embedded fallback on failure so browsing never surfaces
/// an unrecoverable error.
pub struct CatalogProvider {
    base_url: Option<String>,
    client: reqwest::Client,
}

impl CatalogProvider {
    /// `base_url` empty or absent means no backend is configured and the
    /// provider serves fallback content directly.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .filter(|u| !u.trim().is_empty())
            .map(|u| u.trim_end_matches('/').to_string());
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn load(&self) -> CatalogSnapshot {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => return CatalogSnapshot::from_fallback(),
        };

        let packages = match self.fetch_list(&base, "/api/test-packages").await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "package fetch failed, using fallback data");
                fallback::packages()
            }
        };
        let tests = match self.fetch_list(&base, "/api/individual-tests").await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "test fetch failed, using fallback data");
                fallback::tests()
            }
        };
        let testimonials = match self.fetch_list(&base, "/api/testimonials").await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "testimonial fetch failed, using fallback data");
                fallback::testimonials()
            }
        };
        let faqs = match self.fetch_list(&base, "/api/faqs").await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "FAQ fetch failed, using fallback data");
                fallback::faqs()
            }
        };

        CatalogSnapshot {
            packages,
            tests,
            testimonials,
            faqs,
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
    ) -> anyhow::Result<Vec<T>> {
        let url = format!("{base}{path}");
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?
            .error_for_status()
            .with_context(|| format!("{url} returned error status"))?;

        res.json().await.context("failed to decode catalog list")
    }
}

/// One finite, non-restartable view of the catalog. No pagination; search is
/// the only filtering offered.
pub struct CatalogSnapshot {
    packages: Vec<TestPackage>,
    tests: Vec<IndividualTest>,
    testimonials: Vec<Testimonial>,
    faqs: Vec<Faq>,
}

impl CatalogSnapshot {
    pub fn from_fallback() -> Self {
        Self {
            packages: fallback::packages(),
            tests: fallback::tests(),
            testimonials: fallback::testimonials(),
            faqs: fallback::faqs(),
        }
    }

    pub fn packages(&self) -> &[TestPackage] {
        &self.packages
    }

    pub fn tests(&self) -> &[IndividualTest] {
        &self.tests
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// All bookable units, packages first.
    pub fn items(&self) -> Vec<CatalogItem> {
        self.packages
            .iter()
            .cloned()
            .map(CatalogItem::Package)
            .chain(self.tests.iter().cloned().map(CatalogItem::Test))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<CatalogItem> {
        self.items().into_iter().find(|item| item.id() == id)
    }

    /// Case-insensitive substring match over name and description. An empty
    /// term returns everything.
    pub fn search(&self, term: &str) -> Vec<CatalogItem> {
        let needle = term.trim().to_lowercase();
        self.items()
            .into_iter()
            .filter(|item| {
                needle.is_empty()
                    || item.name().to_lowercase().contains(&needle)
                    || item.description().to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_snapshot_counts() {
        let snapshot = CatalogSnapshot::from_fallback();
        assert_eq!(snapshot.packages().len(), 4);
        assert_eq!(snapshot.tests().len(), 5);
        assert_eq!(snapshot.testimonials().len(), 4);
        assert_eq!(snapshot.faqs().len(), 6);
        assert_eq!(snapshot.items().len(), 9);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let snapshot = CatalogSnapshot::from_fallback();

        let hits = snapshot.search("cbc");
        assert!(hits
            .iter()
            .any(|item| item.name() == "Complete Blood Count (CBC)"));

        let hits = snapshot.search("THYROID");
        assert!(hits.iter().any(|item| item.name().contains("Thyroid")));
    }

    #[test]
    fn test_search_matches_description() {
        let snapshot = CatalogSnapshot::from_fallback();

        // "cardiovascular" appears only in the Lipid Profile description
        let hits = snapshot.search("cardiovascular");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Lipid Profile");
    }

    #[test]
    fn test_search_empty_term_returns_everything() {
        let snapshot = CatalogSnapshot::from_fallback();
        assert_eq!(snapshot.search("").len(), 9);
        assert_eq!(snapshot.search("   ").len(), 9);
    }

    #[test]
    fn test_search_no_hits() {
        let snapshot = CatalogSnapshot::from_fallback();
        assert!(snapshot.search("xyzzy").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let snapshot = CatalogSnapshot::from_fallback();

        let item = snapshot.find("test-1").unwrap();
        assert_eq!(item.name(), "Complete Blood Count (CBC)");
        assert_eq!(item.price(), 299);

        assert!(snapshot.find("nope").is_none());
    }

    #[tokio::test]
    async fn test_provider_without_base_url_uses_fallbacks() {
        let provider = CatalogProvider::new(None);
        let snapshot = provider.load().await;
        assert_eq!(snapshot.packages().len(), 4);

        let provider = CatalogProvider::new(Some("".to_string()));
        let snapshot = provider.load().await;
        assert_eq!(snapshot.tests().len(), 5);
    }

    #[tokio::test]
    async fn test_provider_unreachable_backend_degrades_silently() {
        let provider = CatalogProvider::new(Some("http://127.0.0.1:9".to_string()));
        let snapshot = provider.load().await;
        assert_eq!(snapshot.packages().len(), 4);
        assert_eq!(snapshot.faqs().len(), 6);
    }
}

//! Catalog service - listing browse, search, and proximity
//!
//! Read paths degrade to demo fixtures when the backend is unreachable and
//! the policy allows it; the page carries a flag so the UI can say so.

use std::sync::Arc;

use tracing::warn;

use crate::adapters::demo;
use crate::domain::geo;
use crate::domain::result::Result;
use crate::domain::Listing;
use crate::ports::BookingApi;

/// A page of listings, with a marker when fixtures were substituted
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub listings: Vec<Listing>,
    /// True when the backend failed and demo data was shown instead
    pub demo_fallback: bool,
}

pub struct CatalogService {
    api: Arc<dyn BookingApi>,
    degrade_to_demo: bool,
}

impl CatalogService {
    pub fn new(api: Arc<dyn BookingApi>, degrade_to_demo: bool) -> Self {
        Self {
            api,
            degrade_to_demo,
        }
    }

    /// All listings, for the explore view
    pub async fn explore(&self) -> Result<CatalogPage> {
        match self.api.list_listings().await {
            Ok(listings) => Ok(CatalogPage {
                listings,
                demo_fallback: false,
            }),
            Err(e) if self.degrade_to_demo => {
                warn!("Listings fetch failed, using demo data: {e}");
                Ok(CatalogPage {
                    listings: demo::demo_listings(),
                    demo_fallback: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Featured listings, for the home view
    pub async fn featured(&self) -> Result<CatalogPage> {
        match self.api.list_featured().await {
            Ok(listings) => Ok(CatalogPage {
                listings,
                demo_fallback: false,
            }),
            Err(e) if self.degrade_to_demo => {
                warn!("Featured fetch failed, using demo data: {e}");
                Ok(CatalogPage {
                    listings: demo::demo_featured(),
                    demo_fallback: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Explore filtered by a case-insensitive title/city query
    pub async fn search(&self, query: &str) -> Result<CatalogPage> {
        let mut page = self.explore().await?;
        page.listings.retain(|l| l.matches_query(query));
        Ok(page)
    }

    /// Mappable listings within `radius_km` of a point, nearest first
    ///
    /// Listings without coordinates are skipped.
    pub async fn near(&self, lat: f64, lng: f64, radius_km: f64) -> Result<CatalogPage> {
        let page = self.explore().await?;
        let mut with_distance: Vec<(f64, Listing)> = page
            .listings
            .into_iter()
            .filter_map(|l| match (l.lat, l.lng) {
                (Some(llat), Some(llng)) => {
                    Some((geo::distance_km(lat, lng, llat, llng), l))
                }
                _ => None,
            })
            .filter(|(d, _)| *d <= radius_km)
            .collect();
        with_distance.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(CatalogPage {
            listings: with_distance.into_iter().map(|(_, l)| l).collect(),
            demo_fallback: page.demo_fallback,
        })
    }

    /// Look up a single listing by id across the catalog
    pub async fn find(&self, id: u64) -> Result<Option<Listing>> {
        let page = self.explore().await?;
        Ok(page.listings.into_iter().find(|l| l.id == id))
    }
}

pub mod generator;

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::models::Ride;

pub use generator::{generate_mock_rides, random_catalog_size};

/// In-memory ride catalog shared by all handlers.
///
/// Rides are never edited once inserted; publishing only appends. Readers
/// take a cloned snapshot so a search never observes a half-applied insert.
#[derive(Clone, Default)]
pub struct RideCatalog {
    rides: Arc<RwLock<Vec<Ride>>>,
}

impl RideCatalog {
    pub fn new(rides: Vec<Ride>) -> Self {
        Self {
            rides: Arc::new(RwLock::new(rides)),
        }
    }

    /// Seed the catalog with mock rides according to `config`.
    pub fn generate(config: &Config) -> Self {
        let mut rng = match config.catalog_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let count = config
            .catalog_size
            .unwrap_or_else(|| random_catalog_size(&mut rng));

        let rides = generate_mock_rides(count, Utc::now().date_naive(), &mut rng);
        tracing::info!(count = rides.len(), seed = ?config.catalog_seed, "Generated ride catalog");

        Self::new(rides)
    }

    pub async fn snapshot(&self) -> Vec<Ride> {
        self.rides.read().await.clone()
    }

    pub async fn find(&self, id: Uuid) -> Option<Ride> {
        self.rides.read().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn insert(&self, ride: Ride) {
        self.rides.write().await.push(ride);
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.rides.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.rides.read().await.is_empty()
    }
}

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::ports::outbound::{MakeRecord, ModelRecord, TrimRecord, VehicleSource};
use crate::shared::Result;

/// Entries are reused for five minutes, the interval the upstream
/// plan's rate limits were tuned against.
const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// One cached upstream payload with its fetch time.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    stored_at: Instant,
    value: T,
}

impl<T: Clone> CacheEntry<T> {
    fn new(value: T) -> Self {
        Self {
            stored_at: Instant::now(),
            value,
        }
    }

    fn fresh_value(&self, ttl: Duration) -> Option<T> {
        (self.stored_at.elapsed() < ttl).then(|| self.value.clone())
    }
}

/// CachingVehicleSource wraps a VehicleSource and adds a time-based
/// in-memory cache keyed by the request path+query each call maps to.
///
/// Decorator over the port: whether a payload came from the cache or
/// the network is invisible to the use cases. Expired entries are
/// overwritten in place on the next fetch.
pub struct CachingVehicleSource<S: VehicleSource> {
    inner: S,
    ttl: Duration,
    makes: DashMap<String, CacheEntry<Vec<MakeRecord>>>,
    models: DashMap<String, CacheEntry<Vec<ModelRecord>>>,
    trims: DashMap<String, CacheEntry<Vec<TrimRecord>>>,
    vins: DashMap<String, CacheEntry<Option<TrimRecord>>>,
}

impl<S: VehicleSource> CachingVehicleSource<S> {
    /// Creates a caching decorator with the standard five-minute TTL.
    pub fn new(inner: S) -> Self {
        Self::with_ttl(inner, CACHE_TTL)
    }

    fn with_ttl(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            makes: DashMap::new(),
            models: DashMap::new(),
            trims: DashMap::new(),
            vins: DashMap::new(),
        }
    }

    fn trims_key(make: &str, model: &str, year: Option<&str>) -> String {
        match year {
            Some(year) => format!(
                "/api/trims?make={}&model={}&year={}",
                urlencoding::encode(make),
                urlencoding::encode(model),
                urlencoding::encode(year)
            ),
            None => format!(
                "/api/trims?make={}&model={}",
                urlencoding::encode(make),
                urlencoding::encode(model)
            ),
        }
    }
}

#[async_trait]
impl<S: VehicleSource> VehicleSource for CachingVehicleSource<S> {
    async fn list_makes(&self) -> Result<Vec<MakeRecord>> {
        let key = "/api/makes".to_string();
        if let Some(hit) = self.makes.get(&key).and_then(|e| e.fresh_value(self.ttl)) {
            return Ok(hit);
        }

        let fetched = self.inner.list_makes().await?;
        self.makes.insert(key, CacheEntry::new(fetched.clone()));
        Ok(fetched)
    }

    async fn models_for_make(&self, make_id: &str) -> Result<Vec<ModelRecord>> {
        let key = format!("/api/models?make_id={}", urlencoding::encode(make_id));
        if let Some(hit) = self.models.get(&key).and_then(|e| e.fresh_value(self.ttl)) {
            return Ok(hit);
        }

        let fetched = self.inner.models_for_make(make_id).await?;
        self.models.insert(key, CacheEntry::new(fetched.clone()));
        Ok(fetched)
    }

    async fn trims(&self, make: &str, model: &str, year: Option<&str>) -> Result<Vec<TrimRecord>> {
        let key = Self::trims_key(make, model, year);
        if let Some(hit) = self.trims.get(&key).and_then(|e| e.fresh_value(self.ttl)) {
            return Ok(hit);
        }

        let fetched = self.inner.trims(make, model, year).await?;
        self.trims.insert(key, CacheEntry::new(fetched.clone()));
        Ok(fetched)
    }

    async fn lookup_vin(&self, vin: &str) -> Result<Option<TrimRecord>> {
        let key = format!("/api/vin/{}", urlencoding::encode(vin));
        if let Some(hit) = self.vins.get(&key).and_then(|e| e.fresh_value(self.ttl)) {
            return Ok(hit);
        }

        let fetched = self.inner.lookup_vin(vin).await?;
        self.vins.insert(key, CacheEntry::new(fetched.clone()));
        Ok(fetched)
    }
}

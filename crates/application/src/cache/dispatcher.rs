use async_trait::async_trait;
use dashmap::DashMap;
use std::any::{type_name, Any, TypeId};
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use subsweep_domain::DomainError;

/// A registered producer of cacheable values. The source captures its own
/// dependencies (collaborator handles, settings) at construction; the
/// dispatcher only supplies the call-time key.
///
/// Loads must be idempotent: the dispatcher does not single-flight
/// concurrent misses for the same key.
#[async_trait]
pub trait CacheSource: Send + Sync + 'static {
    type Key: Clone + Eq + Hash + Send + Sync + 'static;
    type Value: Clone + Send + Sync + 'static;

    async fn load(&self, key: &Self::Key) -> Result<Self::Value, DomainError>;

    /// How long a loaded value stays servable.
    fn ttl(&self) -> Duration;
}

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

struct CacheSlot<S: CacheSource> {
    source: S,
    entries: DashMap<S::Key, CacheEntry<S::Value>>,
}

/// Type-keyed registry of cache sources with per-entry TTLs.
///
/// Asking for an unregistered source type is a wiring mistake and fails
/// with a configuration error rather than being absorbed. Expired entries
/// are evicted lazily on access; there is no background sweeper.
pub struct CacheDispatcher {
    slots: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl CacheDispatcher {
    pub fn new() -> Self {
        Self { slots: DashMap::new() }
    }

    /// Register a source for its value type. Registering the same source
    /// type twice replaces the earlier registration and drops its entries.
    pub fn register<S: CacheSource>(&self, source: S) {
        let slot: Arc<CacheSlot<S>> = Arc::new(CacheSlot {
            source,
            entries: DashMap::new(),
        });
        self.slots.insert(TypeId::of::<S>(), slot);
    }

    /// Fetch the value for `key` from source `S`, loading it on a miss or
    /// after expiry.
    pub async fn get<S: CacheSource>(&self, key: S::Key) -> Result<S::Value, DomainError> {
        let slot = self.slot::<S>()?;

        if let Some(entry) = slot.entries.get(&key) {
            if Instant::now() <= entry.expires_at {
                return Ok(entry.value.clone());
            }
            drop(entry);
            slot.entries.remove(&key);
        }

        let value = slot.source.load(&key).await?;
        let expires_at = Instant::now() + slot.source.ttl();
        slot.entries.insert(key, CacheEntry { value: value.clone(), expires_at });
        Ok(value)
    }

    /// Drop the cached value for one key, forcing the next `get` to load.
    pub fn invalidate<S: CacheSource>(&self, key: &S::Key) -> Result<(), DomainError> {
        let slot = self.slot::<S>()?;
        slot.entries.remove(key);
        Ok(())
    }

    fn slot<S: CacheSource>(&self) -> Result<Arc<CacheSlot<S>>, DomainError> {
        let slot = self
            .slots
            .get(&TypeId::of::<S>())
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::CacheConfiguration(format!(
                    "no cache source registered for {}",
                    type_name::<S>()
                ))
            })?;

        slot.downcast::<CacheSlot<S>>().map_err(|_| {
            DomainError::CacheConfiguration(format!(
                "cache slot for {} holds an unexpected type",
                type_name::<S>()
            ))
        })
    }
}

impl Default for CacheDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

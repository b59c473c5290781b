//! Cache adapter for API response caching
//!
//! This adapter memoizes execute results using Redis, with an in-memory
//! fallback, so hot lookups (balances, rates) don't hammer the upstream
//! payment API.

use crate::config::CacheConfig;
use crate::domain::command::Command;
use crate::shared::error::{GatewayError, GatewayResult};
use chrono::{DateTime, Utc};
use redis::{aio::ConnectionManager, Client, RedisResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Cache entry for a decoded API payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Decoded response payload
    pub payload: Value,
    /// Cache timestamp
    pub cached_at: DateTime<Utc>,
    /// Time to live in seconds
    pub ttl: u64,
    /// Cache key
    pub key: String,
}

impl CacheEntry {
    /// Whether the entry has outlived its TTL
    fn is_expired(&self) -> bool {
        Utc::now().signed_duration_since(self.cached_at).num_seconds() > self.ttl as i64
    }
}

/// Cache adapter for API response caching
pub struct CacheAdapter {
    /// Redis connection manager
    redis_manager: Option<ConnectionManager>,
    /// In-memory cache fallback
    memory_cache: Arc<RwLock<HashMap<String, CacheEntry>>>,
    /// Cache configuration
    config: CacheConfig,
}

impl CacheAdapter {
    /// Create a new cache adapter
    pub async fn new(config: CacheConfig) -> GatewayResult<Self> {
        let redis_manager = if config.enabled {
            match Self::create_redis_manager(&config.redis_url).await {
                Ok(manager) => {
                    info!("Redis cache connection established successfully");
                    Some(manager)
                }
                Err(e) => {
                    warn!("Failed to connect to Redis cache: {}. Using in-memory fallback only.", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            redis_manager,
            memory_cache: Arc::new(RwLock::new(HashMap::new())),
            config,
        })
    }

    /// Create Redis connection manager
    async fn create_redis_manager(redis_url: &str) -> GatewayResult<ConnectionManager> {
        let client = Client::open(redis_url)
            .map_err(|e| GatewayError::Internal(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| GatewayError::Internal(format!("Failed to create Redis connection manager: {}", e)))?;

        Ok(manager)
    }

    /// TTL policy: how long a command's payload may be served from cache.
    /// Mutating commands and status polls are never cached.
    pub fn ttl_for_command(command: Command) -> Option<u64> {
        match command {
            Command::GetCoinBalances => Some(300),
            Command::GetWithdrawalInformation => Some(60),
            Command::GetRatesWithAccepted => Some(86_400),
            Command::GetPaymentInfo
            | Command::CreateComplexTransaction
            | Command::CreateWithdrawal => None,
        }
    }

    /// Get a cached payload
    pub async fn get(&self, key: &str) -> GatewayResult<Option<CacheEntry>> {
        if !self.config.enabled {
            return Ok(None);
        }

        // Try Redis first
        if let Some(ref manager) = self.redis_manager {
            match self.get_from_redis(manager, key).await {
                Ok(Some(entry)) => {
                    debug!("Cache hit for key: {}", key);
                    return Ok(Some(entry));
                }
                Ok(None) => {
                    debug!("Cache miss for key: {}", key);
                }
                Err(e) => {
                    warn!("Redis cache error: {}. Falling back to memory cache.", e);
                }
            }
        }

        // Fall back to in-memory cache
        self.get_from_memory(key).await
    }

    /// Cache a payload under a key with the given TTL
    pub async fn set(&self, key: &str, payload: Value, ttl: u64) -> GatewayResult<()> {
        if !self.config.enabled {
            return Ok(());
        }

        let entry = CacheEntry {
            payload,
            cached_at: Utc::now(),
            ttl,
            key: key.to_string(),
        };

        // Try Redis first
        if let Some(ref manager) = self.redis_manager {
            match self.set_in_redis(manager, &entry).await {
                Ok(()) => {
                    debug!("Cached payload in Redis for key: {}", entry.key);
                    return Ok(());
                }
                Err(e) => {
                    warn!("Redis cache error: {}. Falling back to memory cache.", e);
                }
            }
        }

        // Fall back to in-memory cache
        self.set_in_memory(entry).await
    }

    /// Get from Redis cache
    async fn get_from_redis(&self, manager: &ConnectionManager, key: &str) -> GatewayResult<Option<CacheEntry>> {
        let mut conn = manager.clone();

        let data: RedisResult<Option<Vec<u8>>> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await;

        match data {
            Ok(Some(data)) => {
                let entry: CacheEntry = serde_json::from_slice(&data)
                    .map_err(|e| GatewayError::Internal(format!("Failed to deserialize cache entry: {}", e)))?;

                if entry.is_expired() {
                    // Entry is expired, remove it
                    let _: () = redis::cmd("DEL")
                        .arg(key)
                        .query_async(&mut conn)
                        .await
                        .unwrap_or_default();
                    Ok(None)
                } else {
                    Ok(Some(entry))
                }
            }
            Ok(None) => Ok(None),
            Err(e) => Err(GatewayError::Internal(format!("Redis get error: {}", e))),
        }
    }

    /// Set in Redis cache
    async fn set_in_redis(&self, manager: &ConnectionManager, entry: &CacheEntry) -> GatewayResult<()> {
        let mut conn = manager.clone();

        let data = serde_json::to_vec(entry)
            .map_err(|e| GatewayError::Internal(format!("Failed to serialize cache entry: {}", e)))?;

        let _: () = redis::cmd("SETEX")
            .arg(&entry.key)
            .arg(entry.ttl)
            .arg(data)
            .query_async(&mut conn)
            .await
            .map_err(|e| GatewayError::Internal(format!("Redis set error: {}", e)))?;

        Ok(())
    }

    /// Get from in-memory cache
    async fn get_from_memory(&self, key: &str) -> GatewayResult<Option<CacheEntry>> {
        let cache = self.memory_cache.read().await;

        if let Some(entry) = cache.get(key) {
            if !entry.is_expired() {
                debug!("Memory cache hit for key: {}", key);
                Ok(Some(entry.clone()))
            } else {
                debug!("Memory cache entry expired for key: {}", key);
                Ok(None)
            }
        } else {
            debug!("Memory cache miss for key: {}", key);
            Ok(None)
        }
    }

    /// Set in in-memory cache
    async fn set_in_memory(&self, entry: CacheEntry) -> GatewayResult<()> {
        let mut cache = self.memory_cache.write().await;

        // Check cache size and evict if necessary
        let entry_size = entry.payload.to_string().len();
        let total_size: usize = cache.values().map(|e| e.payload.to_string().len()).sum();
        if total_size + entry_size > self.config.max_size {
            Self::evict_oldest_entries(&mut cache);
        }

        cache.insert(entry.key.clone(), entry);
        debug!("Cached payload in memory");

        Ok(())
    }

    /// Evict oldest entries from memory cache
    fn evict_oldest_entries(cache: &mut HashMap<String, CacheEntry>) {
        let mut entries: Vec<_> = cache.iter().map(|(k, e)| (k.clone(), e.cached_at)).collect();
        entries.sort_by_key(|(_, cached_at)| *cached_at);

        // Remove oldest 20% of entries
        let to_remove = (entries.len() as f64 * 0.2) as usize;
        for (key, _) in entries.into_iter().take(to_remove) {
            cache.remove(&key);
        }
    }

    /// Generate a cache key from a command and its identifying parameter
    pub fn generate_cache_key(&self, command: Command, discriminator: Option<&str>) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        command.as_str().hash(&mut hasher);
        if let Some(discriminator) = discriminator {
            discriminator.hash(&mut hasher);
        }

        format!("fillbits:{}:{:x}", command, hasher.finish())
    }

    /// Clear all cache entries
    pub async fn clear(&self) -> GatewayResult<()> {
        self.memory_cache.write().await.clear();

        if let Some(ref manager) = self.redis_manager {
            let mut conn = manager.clone();
            let _: () = redis::cmd("FLUSHDB")
                .query_async(&mut conn)
                .await
                .map_err(|e| GatewayError::Internal(format!("Failed to clear Redis cache: {}", e)))?;
        }

        info!("Cache cleared");
        Ok(())
    }
}

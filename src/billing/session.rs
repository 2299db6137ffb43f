//! Session-scoped plan tier.
//!
//! The tier is fetched from the identity/billing provider once per session
//! and cached. An explicit [`PlanSession::refresh`] (for example after the
//! user returns from checkout) replaces the cached value wholesale.
//!
//! Only the most recent refresh may write. A fetch that completes after a
//! newer refresh started, or after [`PlanSession::clear`], is discarded.
//!
//! ```rust,ignore
//! use menukit::billing::{Feature, PlanSession};
//!
//! let session = PlanSession::new(provider, "user_42");
//! session.load().await?;
//!
//! if session.features().has(Feature::Analytics) {
//!     render_analytics();
//! }
//!
//! // Back from the hosted checkout page
//! session.refresh().await?;
//! ```

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::Result;
use super::plans::{FeatureSet, PlanTier};

/// Source of truth for a user's current plan.
///
/// Implement this over your identity or billing backend.
#[async_trait]
pub trait PlanSource: Send + Sync {
    /// Fetch the raw tier string for a user.
    ///
    /// `Ok(None)` means the user has no plan record and is treated as free.
    async fn fetch_tier(&self, user_id: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, Default)]
struct CachedTier {
    tier: PlanTier,
    loaded: bool,
    /// Bumped by every refresh and clear.
    generation: u64,
}

/// A user's plan tier, cached for the lifetime of their session.
pub struct PlanSession<S: PlanSource> {
    source: S,
    user_id: String,
    cached: RwLock<CachedTier>,
}

impl<S: PlanSource> PlanSession<S> {
    /// Start a session. The tier reads as free until [`load`](Self::load) succeeds.
    #[must_use]
    pub fn new(source: S, user_id: impl Into<String>) -> Self {
        Self {
            source,
            user_id: user_id.into(),
            cached: RwLock::new(CachedTier::default()),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Fetch the tier if this session has not loaded it yet.
    ///
    /// On error the cached tier is left untouched.
    pub async fn load(&self) -> Result<PlanTier> {
        let cached = self.snapshot();
        if cached.loaded {
            return Ok(cached.tier);
        }
        self.refresh().await
    }

    /// Re-fetch the tier and replace the cached value.
    ///
    /// On error the cached tier is left untouched. If another refresh or a
    /// [`clear`](Self::clear) happens while this fetch is in flight, the
    /// fetched tier is dropped and the current cached tier is returned.
    pub async fn refresh(&self) -> Result<PlanTier> {
        let generation = self.bump_generation();
        let raw = match self.source.fetch_tier(&self.user_id).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(user_id = %self.user_id, error = %e, "failed to fetch plan tier");
                return Err(e);
            }
        };

        let tier = resolve_tier(&self.user_id, raw.as_deref());
        let previous = match self.replace_if_current(generation, tier) {
            Ok(previous) => previous,
            Err(current) => {
                debug!(
                    user_id = %self.user_id,
                    fetched = %tier,
                    current = %current.tier,
                    "discarding superseded plan tier fetch"
                );
                return Ok(current.tier);
            }
        };

        if previous.loaded && previous.tier != tier {
            info!(user_id = %self.user_id, from = %previous.tier, to = %tier, "plan tier changed");
        } else {
            debug!(user_id = %self.user_id, tier = %tier, "plan tier loaded");
        }
        Ok(tier)
    }

    /// Forget the cached tier, e.g. on sign-out. The next read is free.
    pub fn clear(&self) {
        let mut guard = self.write();
        let generation = guard.generation.wrapping_add(1);
        *guard = CachedTier {
            generation,
            ..CachedTier::default()
        };
    }

    /// The current tier. Free until a load succeeds.
    #[must_use]
    pub fn tier(&self) -> PlanTier {
        self.snapshot().tier
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot().loaded
    }

    /// Features for the current tier, looked up fresh on every call.
    #[must_use]
    pub fn features(&self) -> FeatureSet {
        FeatureSet::for_tier(self.tier())
    }

    fn snapshot(&self) -> CachedTier {
        // The cached value is Copy, so a poisoned lock still holds a whole value.
        *self.cached.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CachedTier> {
        self.cached.write().unwrap_or_else(|e| e.into_inner())
    }

    fn bump_generation(&self) -> u64 {
        let mut guard = self.write();
        guard.generation = guard.generation.wrapping_add(1);
        guard.generation
    }

    /// Store `tier` if no refresh or clear happened since `generation` was
    /// taken. Returns the replaced value, or the current one when superseded.
    fn replace_if_current(
        &self,
        generation: u64,
        tier: PlanTier,
    ) -> std::result::Result<CachedTier, CachedTier> {
        let mut guard = self.write();
        if guard.generation != generation {
            return Err(*guard);
        }
        let next = CachedTier {
            tier,
            loaded: true,
            generation,
        };
        Ok(std::mem::replace(&mut *guard, next))
    }
}

fn resolve_tier(user_id: &str, raw: Option<&str>) -> PlanTier {
    match raw {
        None => PlanTier::Free,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(user_id, tier = raw, "unrecognised plan tier, treating as free");
            PlanTier::Free
        }),
    }
}

/// In-memory plan source for testing.
#[cfg(any(test, feature = "test-session"))]
pub mod test {
    use super::*;
    use crate::error::MenuKitError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory plan source.
    ///
    /// Wraps data in Arc for cheap cloning, so a test can keep a handle and
    /// change a user's tier after handing a clone to a session.
    #[derive(Default, Clone)]
    pub struct InMemoryPlanSource {
        inner: Arc<InMemoryPlanSourceInner>,
    }

    #[derive(Default)]
    struct InMemoryPlanSourceInner {
        tiers: RwLock<HashMap<String, String>>,
        fetches: AtomicUsize,
        failing: AtomicBool,
    }

    impl InMemoryPlanSource {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Set the raw tier string returned for a user.
        pub fn set_tier(&self, user_id: &str, tier: &str) {
            self.inner
                .tiers
                .write()
                .unwrap()
                .insert(user_id.to_string(), tier.to_string());
        }

        /// Make subsequent fetches fail (or succeed again).
        pub fn set_failing(&self, failing: bool) {
            self.inner.failing.store(failing, Ordering::SeqCst);
        }

        /// Number of fetches served so far.
        #[must_use]
        pub fn fetch_count(&self) -> usize {
            self.inner.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PlanSource for InMemoryPlanSource {
        async fn fetch_tier(&self, user_id: &str) -> Result<Option<String>> {
            self.inner.fetches.fetch_add(1, Ordering::SeqCst);
            if self.inner.failing.load(Ordering::SeqCst) {
                return Err(MenuKitError::plan_source("identity provider unavailable"));
            }
            Ok(self.inner.tiers.read().unwrap().get(user_id).cloned())
        }
    }
}

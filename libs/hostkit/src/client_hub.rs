//! Type-safe hub of shared clients with reversible substitution.
//!
//! - Providers register an implementation once under its *interface type* (`dyn Trait`).
//! - Consumers fetch by interface type and keep the returned `Arc` for reuse.
//! - Tests replace a registered client with a double via [`ClientHub::substitute`] and put the
//!   original back with [`ClientHub::restore`]; consumers that resolve after the swap see the
//!   double, `Arc`s obtained before it stay valid.
//!
//! Key = `type_name::<T>()`, which works for `T = dyn Trait`.
//! Value = `Arc<T>` stored as `Box<dyn Any + Send + Sync>` (downcast on read).

use parking_lot::RwLock;
use std::{any::Any, collections::HashMap, fmt, sync::Arc};

/// Stable type key for trait objects.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TypeKey(&'static str);

impl TypeKey {
    #[inline]
    fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(std::any::type_name::<T>())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientHubError {
    #[error("client not found: type={type_key:?}")]
    NotFound { type_key: TypeKey },

    #[error("type mismatch in hub for type={type_key:?}")]
    TypeMismatch { type_key: TypeKey },
}

type Boxed = Box<dyn Any + Send + Sync>;

struct Slot {
    current: Boxed,
    /// Registered client shadowed by a substitute, if any.
    original: Option<Boxed>,
}

/// Registry of clients keyed by interface type.
pub struct ClientHub {
    map: RwLock<HashMap<TypeKey, Slot>>,
}

impl ClientHub {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for ClientHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientHub {
    /// Register a client under the interface type `T`.
    ///
    /// Re-registering overwrites the previous client and forgets any pending substitution.
    pub fn register<T>(&self, client: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let slot = Slot {
            current: Box::new(client),
            original: None,
        };
        self.map.write().insert(TypeKey::of::<T>(), slot);
    }

    /// Fetch the client currently registered under `T`.
    ///
    /// # Errors
    /// `NotFound` if nothing is registered under `T`.
    pub fn get<T>(&self) -> Result<Arc<T>, ClientHubError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let type_key = TypeKey::of::<T>();
        let r = self.map.read();
        let slot = r.get(&type_key).ok_or_else(|| ClientHubError::NotFound {
            type_key: type_key.clone(),
        })?;

        // Stored value is exactly `Arc<T>`.
        slot.current
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or(ClientHubError::TypeMismatch { type_key })
    }

    /// Replace the client registered under `T` with `double`, remembering the original.
    ///
    /// Substituting twice keeps the first original, so a single `restore` always brings back
    /// the registered client.
    ///
    /// # Errors
    /// `NotFound` if nothing is registered under `T`.
    pub fn substitute<T>(&self, double: Arc<T>) -> Result<(), ClientHubError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let type_key = TypeKey::of::<T>();
        let mut w = self.map.write();
        let slot = w
            .get_mut(&type_key)
            .ok_or(ClientHubError::NotFound { type_key })?;

        let previous = std::mem::replace(&mut slot.current, Box::new(double));
        if slot.original.is_none() {
            slot.original = Some(previous);
        }
        tracing::debug!(client = std::any::type_name::<T>(), "client substituted");
        Ok(())
    }

    /// Put back the client shadowed by [`ClientHub::substitute`].
    ///
    /// Returns `false` when `T` was not substituted.
    pub fn restore<T>(&self) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let mut w = self.map.write();
        let Some(slot) = w.get_mut(&TypeKey::of::<T>()) else {
            return false;
        };
        let Some(original) = slot.original.take() else {
            return false;
        };
        slot.current = original;
        tracing::debug!(client = std::any::type_name::<T>(), "client restored");
        true
    }

    #[must_use]
    pub fn is_substituted<T>(&self) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.map
            .read()
            .get(&TypeKey::of::<T>())
            .is_some_and(|slot| slot.original.is_some())
    }

    /// Remove a client; returns the current client if it was present.
    pub fn remove<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let slot = self.map.write().remove(&TypeKey::of::<T>())?;
        slot.current.downcast::<Arc<T>>().ok().map(|b| *b)
    }

    /// Clear everything (useful in tests).
    pub fn clear(&self) {
        self.map.write().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[async_trait::async_trait]
    trait TestApi: Send + Sync {
        async fn id(&self) -> usize;
    }

    struct ImplA(usize);
    #[async_trait::async_trait]
    impl TestApi for ImplA {
        async fn id(&self) -> usize {
            self.0
        }
    }

    #[tokio::test]
    async fn register_and_get_dyn_trait() {
        let hub = ClientHub::new();
        let api: Arc<dyn TestApi> = Arc::new(ImplA(7));
        hub.register::<dyn TestApi>(api.clone());

        let got = hub.get::<dyn TestApi>().unwrap();
        assert_eq!(got.id().await, 7);
        assert!(Arc::ptr_eq(&api, &got));
    }

    #[tokio::test]
    async fn substitute_then_restore() {
        let hub = ClientHub::new();
        hub.register::<dyn TestApi>(Arc::new(ImplA(1)));
        let before = hub.get::<dyn TestApi>().unwrap();

        hub.substitute::<dyn TestApi>(Arc::new(ImplA(2))).unwrap();
        assert!(hub.is_substituted::<dyn TestApi>());
        assert_eq!(hub.get::<dyn TestApi>().unwrap().id().await, 2);
        // Handles taken before the swap keep pointing at the original.
        assert_eq!(before.id().await, 1);

        assert!(hub.restore::<dyn TestApi>());
        assert!(!hub.is_substituted::<dyn TestApi>());
        assert_eq!(hub.get::<dyn TestApi>().unwrap().id().await, 1);
        assert!(!hub.restore::<dyn TestApi>());
    }

    #[tokio::test]
    async fn double_substitution_restores_first_original() {
        let hub = ClientHub::new();
        hub.register::<dyn TestApi>(Arc::new(ImplA(1)));
        hub.substitute::<dyn TestApi>(Arc::new(ImplA(2))).unwrap();
        hub.substitute::<dyn TestApi>(Arc::new(ImplA(3))).unwrap();
        assert_eq!(hub.get::<dyn TestApi>().unwrap().id().await, 3);

        hub.restore::<dyn TestApi>();
        assert_eq!(hub.get::<dyn TestApi>().unwrap().id().await, 1);
    }

    #[test]
    fn substitute_requires_registration() {
        let hub = ClientHub::new();
        let err = hub
            .substitute::<dyn TestApi>(Arc::new(ImplA(1)))
            .unwrap_err();
        assert!(matches!(err, ClientHubError::NotFound { .. }));
    }

    #[test]
    fn get_missing_is_not_found() {
        let hub = ClientHub::new();
        assert!(matches!(
            hub.get::<dyn TestApi>(),
            Err(ClientHubError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn re_registering_forgets_substitution() {
        let hub = ClientHub::new();
        hub.register::<dyn TestApi>(Arc::new(ImplA(1)));
        hub.substitute::<dyn TestApi>(Arc::new(ImplA(2))).unwrap();
        hub.register::<dyn TestApi>(Arc::new(ImplA(3)));

        assert!(!hub.restore::<dyn TestApi>());
        assert_eq!(hub.get::<dyn TestApi>().unwrap().id().await, 3);
    }

    #[test]
    fn remove_and_clear() {
        let hub = ClientHub::new();
        hub.register::<dyn TestApi>(Arc::new(ImplA(1)));
        hub.register::<str>(Arc::from("value"));
        assert_eq!(hub.len(), 2);

        assert!(hub.remove::<dyn TestApi>().is_some());
        assert!(hub.remove::<dyn TestApi>().is_none());

        hub.clear();
        assert!(hub.is_empty());
    }
}

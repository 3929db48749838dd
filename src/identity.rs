use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    sync::Arc,
};

/// Cache key compared by allocation identity instead of value.
/// Two structurally equal objects behind different `Arc`s are different keys,
/// clones of the same `Arc` are the same key.
pub struct IdentityKey<T: ?Sized>(Arc<T>);

impl<T> IdentityKey<T> {
    pub fn new(value: T) -> Self {
        IdentityKey(Arc::new(value))
    }
}

impl<T: ?Sized> IdentityKey<T> {
    pub fn from_arc(value: Arc<T>) -> Self {
        IdentityKey(value)
    }

    /// Get the shared object this key points at
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }
}

impl<T: ?Sized> Clone for IdentityKey<T> {
    fn clone(&self) -> Self {
        IdentityKey(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for IdentityKey<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for IdentityKey<T> {}

impl<T: ?Sized> Hash for IdentityKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Thin pointer only, matches Arc::ptr_eq
        Arc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl<T: ?Sized> From<Arc<T>> for IdentityKey<T> {
    fn from(value: Arc<T>) -> Self {
        IdentityKey(value)
    }
}

impl<T: ?Sized> Deref for IdentityKey<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for IdentityKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IdentityKey({:p}: {:?})", Arc::as_ptr(&self.0).cast::<()>(), &*self.0)
    }
}

//! Reusable composite-type descriptors for decode targets.
//!
//! A [`TypeToken`] names a composite target such as "sequence of `Bean`"
//! once and can be passed to `JsonMapper::from_json_typed` any number of
//! times. The constructor bounds tie the container kind to its element
//! kinds, so a token cannot describe a mismatched pair.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

/// Zero-sized descriptor naming a composite decode target.
pub struct TypeToken<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> TypeToken<T> {
    fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Clone for TypeToken<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for TypeToken<T> {}

/// Descriptor for "sequence of `T`" targets such as `Vec<Bean>`.
pub fn sequence_of<C, T>() -> TypeToken<C>
where
    C: FromIterator<T> + DeserializeOwned,
{
    TypeToken::new()
}

/// Descriptor for key/value mapping targets such as `HashMap<K, V>`.
pub fn mapping_of<M, K, V>() -> TypeToken<M>
where
    M: FromIterator<(K, V)> + DeserializeOwned,
{
    TypeToken::new()
}

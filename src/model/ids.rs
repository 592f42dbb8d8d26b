use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Type-safe row identifier. The phantom type parameter `T` prevents
/// mixing IDs from different record types (e.g., Person ID vs Contact ID).
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: i64,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[test]
    fn ids_with_same_value_are_equal() {
        assert_eq!(Id::<Foo>::new(7), Id::<Foo>::new(7));
        assert_ne!(Id::<Foo>::new(7), Id::<Foo>::new(8));
    }

    #[test]
    fn ids_order_by_value() {
        let mut ids = vec![Id::<Foo>::new(3), Id::new(1), Id::new(2)];
        ids.sort();
        assert_eq!(ids.iter().map(|i| i.value).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&Id::<Foo>::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: Id<Foo> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Id::new(12));
    }
}

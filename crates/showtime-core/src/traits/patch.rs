//! Typed partial updates.

/// A partial update to `T`.
///
/// Each field of an implementing struct is `Option<_>`; `None` leaves the
/// target untouched. Nullable target columns use `Option<Option<_>>` so a
/// patch can distinguish "leave as is" from "clear".
pub trait Patch<T> {
    /// Apply every present field to `target`.
    fn apply_to(&self, target: &mut T);

    /// Whether the patch would change nothing.
    fn is_empty(&self) -> bool;

    /// Return a merged copy of `target`.
    fn merge(&self, target: &T) -> T
    where
        T: Clone,
    {
        let mut merged = target.clone();
        self.apply_to(&mut merged);
        merged
    }
}

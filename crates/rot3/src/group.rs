//! Abstract group structure.

/// The four group operations shared by every element type of a group.
///
/// Composition order is fixed: `a.compose(&b)` applies `b` first and `a` second.
pub trait GroupOps: Sized {
    /// The identity element.
    fn identity() -> Self;

    /// The unique element `b` with `self.compose(&b) == identity()`.
    fn inverse(&self) -> Self;

    /// The group product `self ∘ other`.
    fn compose(&self, other: &Self) -> Self;

    /// The relative element `c` such that `self.compose(&c) == *other`.
    ///
    /// Always `self.inverse().compose(other)`; implementors should not override it.
    #[inline]
    fn between(&self, other: &Self) -> Self {
        self.inverse().compose(other)
    }
}

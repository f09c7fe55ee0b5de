//! Edge -> weight extraction.

/// Pure mapping from an edge value to its weight.
///
/// Aggregating structures only see weights through a mapper, so they stay
/// agnostic to how a concrete edge type stores its weight.
pub trait WeightMapper<E, W> {
    fn map(&self, edge: &E) -> W;
}

/// Adapts a closure into a [`WeightMapper`].
#[derive(Clone, Copy, Debug)]
pub struct MapFn<F>(pub F);

impl<E, W, F> WeightMapper<E, W> for MapFn<F>
where
    F: Fn(&E) -> W,
{
    fn map(&self, edge: &E) -> W {
        (self.0)(edge)
    }
}

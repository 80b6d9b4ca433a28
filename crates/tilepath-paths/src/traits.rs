use tilepath_core::Cell;

/// Obstacle query consumed by the grid search.
///
/// Implementations must be side-effect free and must not change while a
/// single search is running; results are undefined otherwise.
pub trait Obstacles {
    /// Whether `cell` cannot be entered.
    fn is_blocked(&self, cell: Cell) -> bool;
}

impl<F> Obstacles for F
where
    F: Fn(Cell) -> bool,
{
    #[inline]
    fn is_blocked(&self, cell: Cell) -> bool {
        self(cell)
    }
}

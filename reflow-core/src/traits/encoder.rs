//! Quadrature encoder counter trait

/// Hardware quadrature count
///
/// The count moves by one per quadrature transition, so a detent of a
/// typical mechanical encoder advances it by four. The count may be
/// overwritten at any time; subsequent motion continues from the written
/// value.
pub trait QuadratureCounter {
    /// Read the current raw count
    fn count(&self) -> i32;

    /// Overwrite the raw count
    fn set_count(&mut self, count: i32);
}

impl<T: QuadratureCounter + ?Sized> QuadratureCounter for &mut T {
    fn count(&self) -> i32 {
        (**self).count()
    }

    fn set_count(&mut self, count: i32) {
        (**self).set_count(count)
    }
}

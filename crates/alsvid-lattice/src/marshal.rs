//! Boundary transport collaborator interface.
//!
//! The engine never talks to the unprivileged side directly. A transport
//! copies whole record buffers across the trust boundary, atomically: either
//! the full buffer moves or the peer observes nothing. The two failure
//! directions are distinct so callers can tell which side misbehaved, and the
//! engine propagates them unmodified.

use thiserror::Error;

/// Failure of a bulk copy across the trust boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoundaryError {
    /// The source buffer could not be read.
    #[error("Source buffer unreadable")]
    SourceUnreadable,

    /// The destination buffer could not be written.
    #[error("Destination buffer unwritable")]
    DestinationUnwritable,
}

/// Bulk copy-in/copy-out of `T` records across the trust boundary.
///
/// Implementations must fail atomically: a failed `copy_out` leaves the
/// peer's buffer untouched, a failed `copy_in` returns nothing.
pub trait BoundaryTransport<T> {
    /// Copy the peer's records into a fresh working buffer.
    fn copy_in(&mut self) -> Result<Vec<T>, BoundaryError>;

    /// Copy the working buffer back to the peer.
    fn copy_out(&mut self, items: &[T]) -> Result<(), BoundaryError>;
}

/// In-memory transport: the "peer" is a vector on this side of the boundary.
///
/// Used in tests and by embedders that already hold the records locally.
#[derive(Debug, Clone, Default)]
pub struct Loopback<T> {
    items: Vec<T>,
}

impl<T> Loopback<T> {
    /// Wrap a buffer of records.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Borrow the current records.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take the records back out.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> BoundaryTransport<T> for Loopback<T> {
    fn copy_in(&mut self) -> Result<Vec<T>, BoundaryError> {
        Ok(self.items.clone())
    }

    fn copy_out(&mut self, items: &[T]) -> Result<(), BoundaryError> {
        self.items = items.to_vec();
        Ok(())
    }
}

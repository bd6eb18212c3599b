use std::error::Error;

/// Escalates an error to a panic for call sites whose signature can't carry a [`Result`], such
/// as [`Sortable`](crate::sortable::Sortable) comparisons meeting an
/// [`IncompatibleTypes`](crate::sortable::IncompatibleTypes).
pub(crate) trait ResultExtension<T> {
    /// Returns the [`Ok`] value, or panics with the error's own [`Display`](std::fmt::Display)
    /// message, reported at the caller's location.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        self.unwrap_or_else(|err| panic!("{err}"))
    }
}

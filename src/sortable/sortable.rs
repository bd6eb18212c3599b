use std::borrow::Cow;

/// A type that can be ordered and identified without relying on its memory location.
///
/// Implementations must keep the three methods consistent with each other:
/// - `equal` must be an equivalence relation and `less` a strict weak order.
/// - Two values that are `equal` must produce the same `unique` bytes, and two values with the
///   same `unique` bytes must be `equal`.
///
/// Ordered containers rely on this: they binary search with `less` and deduplicate with
/// `unique`. Breaking the contract is a logic error, the container won't be corrupted in a memory
/// safety sense but lookups and removals may miss entries.
pub trait Sortable {
    /// Returns true if `self` and `other` hold the same logical value.
    fn equal(&self, other: &Self) -> bool;

    /// Returns true if `self` sorts strictly before `other`.
    fn less(&self, other: &Self) -> bool;

    /// Returns a byte identity for `self` which is stable across copies.
    fn unique(&self) -> Cow<'_, [u8]>;

    /// The [`unique`](Sortable::unique) identity as a string, used as the index key of ordered
    /// containers and inside edge identities. Invalid UTF-8 is replaced lossily.
    fn unique_key(&self) -> String {
        String::from_utf8_lossy(&self.unique()).into_owned()
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(*other)
    }

    fn less(&self, other: &Self) -> bool {
        (**self).less(*other)
    }

    fn unique(&self) -> Cow<'_, [u8]> {
        (**self).unique()
    }
}

macro_rules! impl_sortable_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sortable for $t {
                fn equal(&self, other: &Self) -> bool {
                    self == other
                }

                fn less(&self, other: &Self) -> bool {
                    self < other
                }

                fn unique(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_string().into_bytes())
                }
            }
        )*
    };
}

impl_sortable_for_primitive!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    char, bool,
);

macro_rules! impl_sortable_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sortable for $t {
                fn equal(&self, other: &Self) -> bool {
                    self == other
                }

                fn less(&self, other: &Self) -> bool {
                    self < other
                }

                // -0.0 == 0.0, so both need the same identity.
                fn unique(&self) -> Cow<'_, [u8]> {
                    let value = if *self == 0.0 { 0.0 } else { *self };
                    Cow::Owned(value.to_string().into_bytes())
                }
            }
        )*
    };
}

// NaN is neither equal nor less than anything, which breaks the Sortable contract. Keep it out of
// containers.
impl_sortable_for_float!(f32, f64);

impl Sortable for str {
    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn less(&self, other: &Self) -> bool {
        self < other
    }

    fn unique(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Sortable for String {
    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn less(&self, other: &Self) -> bool {
        self < other
    }

    fn unique(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

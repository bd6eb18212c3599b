use std::any::{self, Any};
use std::borrow::Cow;

use super::{IncompatibleTypes, Sortable};
use crate::util::result::ResultExtension;

/// The object-safe counterpart of [`Sortable`], implemented for every `'static` Sortable.
///
/// `Box<dyn DynSortable>` is itself Sortable, which allows values of different types to be stored
/// in one container. Comparisons downcast the other operand to the receiver's concrete type and
/// panic with [`IncompatibleTypes`] if that fails.
pub trait DynSortable: Any {
    fn as_any(&self) -> &dyn Any;

    /// The name of the concrete type, for error messages.
    fn type_name(&self) -> &'static str;

    fn dyn_equal(&self, other: &dyn DynSortable) -> bool;

    fn dyn_less(&self, other: &dyn DynSortable) -> bool;

    /// The [`unique`](Sortable::unique) identity prefixed with the concrete type's name and a
    /// `:`, so equal-looking values of different types never share an index key.
    fn dyn_unique(&self) -> Cow<'_, [u8]>;
}

impl<T: Sortable + Any> DynSortable for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn dyn_equal(&self, other: &dyn DynSortable) -> bool {
        self.equal(downcast::<T>(other).throw())
    }

    fn dyn_less(&self, other: &dyn DynSortable) -> bool {
        self.less(downcast::<T>(other).throw())
    }

    fn dyn_unique(&self) -> Cow<'_, [u8]> {
        let mut tagged = any::type_name::<T>().as_bytes().to_vec();
        tagged.push(b':');
        tagged.extend_from_slice(&self.unique());
        Cow::Owned(tagged)
    }
}

/// Downcasts `other` to `T`, reporting both type names on failure.
pub fn downcast<T: Any>(other: &dyn DynSortable) -> Result<&T, IncompatibleTypes> {
    other.as_any().downcast_ref::<T>().ok_or(IncompatibleTypes {
        expected: any::type_name::<T>(),
        found: other.type_name(),
    })
}

// Every call derefs to the trait object explicitly, otherwise the blanket impl above would pick
// up `Box<dyn DynSortable>` itself and recurse.
impl Sortable for Box<dyn DynSortable> {
    fn equal(&self, other: &Self) -> bool {
        (**self).dyn_equal(&**other)
    }

    fn less(&self, other: &Self) -> bool {
        (**self).dyn_less(&**other)
    }

    fn unique(&self) -> Cow<'_, [u8]> {
        (**self).dyn_unique()
    }
}

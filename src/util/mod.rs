#![warn(missing_docs)]

pub mod fmt;
pub mod panic;
pub mod result;
#[cfg(all(test, feature = "sortable"))]
pub mod test_node;

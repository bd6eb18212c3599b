use derive_more::{Display, Error};

/// Two type-erased sortables of different concrete types were compared.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cannot compare a {found} against a {expected}!")]
pub struct IncompatibleTypes {
    pub expected: &'static str,
    pub found: &'static str,
}

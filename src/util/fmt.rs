use std::fmt::Display;

/// Joins the [`Display`] form of every item with `sep`.
pub fn join_display<'a, T, I>(items: I, sep: &str) -> String
where
    T: Display + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

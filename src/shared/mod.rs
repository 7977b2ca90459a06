pub mod distance;
pub mod format;
pub mod money;
pub(crate) mod text;
pub mod time;

pub use distance::*;
pub use money::*;
pub use time::*;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
}

/// Keeps every entry whose normalized name contains the needle, in haystack order.
/// An empty needle matches everything.
pub fn filter_by_name<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Identifiable,
{
    let normalized_needle = text::normalize(needle.trim());
    haystack
        .iter()
        .filter(|hay| hay.normalized_name().contains(normalized_needle.as_str()))
        .collect()
}

use std::collections::BTreeMap;
use std::ops::Bound;

/// Mapping plumbing shared by the store's namespaces.
///
/// Each namespace keeps its entries in a sorted map keyed by file name,
/// which lets prefix lookups walk a contiguous key range.
pub trait BaseStorage<V>: AsRef<BTreeMap<String, V>> {
    /// Create or overwrite an entry in the internal mapping.
    fn set(&mut self, name: String, value: V);

    /// The whole current mapping.
    fn entries(&self) -> &BTreeMap<String, V> {
        self.as_ref()
    }

    /// Look up the entry currently bound to `name`.
    fn get(&self, name: &str) -> Option<&V> {
        self.as_ref().get(name)
    }

    fn contains(&self, name: &str) -> bool {
        self.as_ref().contains_key(name)
    }

    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    /// Entries whose name starts with `prefix`, in ascending name order.
    fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a V)> + 'a
    where
        V: 'a,
    {
        self.as_ref()
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(name, _)| name.starts_with(prefix))
    }
}

/// Builds a [`UniqueCollection`](crate::collection::UniqueCollection) from
/// a list of values.
///
/// Duplicates collapse exactly as with
/// [`UniqueCollection::of`](crate::collection::UniqueCollection::of): the
/// first occurrence keeps its position.
///
/// # Syntax
///
/// ```text
/// unique_collection![]                 // empty collection
/// unique_collection![value, ...]       // collection of the given values
/// ```
///
/// # Examples
///
/// ```
/// use unique_collection::unique_collection;
///
/// let collection = unique_collection![3, 1, 3, 2];
/// assert_eq!(collection.to_vec(), vec![3, 1, 2]);
///
/// let empty: unique_collection::collection::UniqueCollection<i32> = unique_collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! unique_collection {
    () => {
        $crate::collection::UniqueCollection::new()
    };

    ($($value:expr),+ $(,)?) => {
        $crate::collection::UniqueCollection::of([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::collection::UniqueCollection;

    #[test]
    fn test_unique_collection_empty() {
        let collection: UniqueCollection<String> = unique_collection![];
        assert!(collection.is_empty());
    }

    #[test]
    fn test_unique_collection_trailing_comma() {
        let collection = unique_collection![1, 2, 2,];
        assert_eq!(collection.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_unique_collection_expressions() {
        let base = 10;
        let collection = unique_collection![base + 1, base * 2, 11];
        assert_eq!(collection.to_vec(), vec![11, 20]);
    }
}

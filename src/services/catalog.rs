use std::collections::HashMap;
use std::sync::Arc;

use crate::data::ModelContext;
use crate::models::Movie;

/// Ordered catalog of known movies with exact-title lookup
#[derive(Debug, Clone)]
pub struct Catalog {
    context: Arc<ModelContext>,
    /// Title → first row holding that title
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(context: Arc<ModelContext>) -> Self {
        let mut index = HashMap::with_capacity(context.movies().len());
        for (row, movie) in context.movies().iter().enumerate() {
            index.entry(movie.title.clone()).or_insert(row);
        }

        Self { context, index }
    }

    /// Row index of `title`, using the first occurrence when titles repeat
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    /// All titles in dataset order
    pub fn list_titles(&self) -> Vec<String> {
        self.context
            .movies()
            .iter()
            .map(|m| m.title.clone())
            .collect()
    }

    pub fn get(&self, row: usize) -> Option<&Movie> {
        self.context.movies().get(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SimilarityMatrix;

    fn catalog(titles: &[&str]) -> Catalog {
        let movies = titles
            .iter()
            .enumerate()
            .map(|(i, t)| Movie::new(i as i64 + 1, *t))
            .collect::<Vec<_>>();
        let n = movies.len();
        let matrix = SimilarityMatrix::from_rows(vec![vec![0.0; n]; n]).unwrap();
        Catalog::new(Arc::new(ModelContext::new(movies, matrix).unwrap()))
    }

    #[test]
    fn test_list_titles_keeps_insertion_order() {
        let catalog = catalog(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(catalog.list_titles(), vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_list_titles_is_not_sorted() {
        let catalog = catalog(&["Zodiac", "Alien", "Memento"]);
        assert_eq!(catalog.list_titles(), vec!["Zodiac", "Alien", "Memento"]);
    }

    #[test]
    fn test_resolve_exact_match() {
        let catalog = catalog(&["Alien", "Aliens"]);
        assert_eq!(catalog.resolve("Aliens"), Some(1));
        assert_eq!(catalog.resolve("aliens"), None);
        assert_eq!(catalog.resolve("Alien "), None);
    }

    #[test]
    fn test_resolve_duplicate_title_uses_first_row() {
        let catalog = catalog(&["Heat", "Solaris", "Solaris"]);
        assert_eq!(catalog.resolve("Solaris"), Some(1));
    }

    #[test]
    fn test_get_row() {
        let catalog = catalog(&["A", "B"]);
        assert_eq!(catalog.get(1).map(|m| m.movie_id), Some(2));
        assert!(catalog.get(2).is_none());
    }
}

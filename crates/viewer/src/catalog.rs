//! Catalog view state: loaded lists, breed filter, and sample fallback.

use crate::client::DogSource;
use crate::model::Dog;
use crate::sample::sample_dogs;

/// Sentinel accepted by [`BreedFilter::parse`] for "no filter".
pub const ALL_BREEDS: &str = "all";

/// The breed currently selected in the filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BreedFilter {
    #[default]
    All,
    Breed(String),
}

impl BreedFilter {
    /// Parse a filter selection. `"all"` selects every breed; anything
    /// else is an exact breed name.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_BREEDS {
            BreedFilter::All
        } else {
            BreedFilter::Breed(raw.to_string())
        }
    }

    fn matches(&self, dog: &Dog) -> bool {
        match self {
            BreedFilter::All => true,
            BreedFilter::Breed(breed) => dog.breed == *breed,
        }
    }
}

/// Everything the catalog screen shows, fetched once per load.
#[derive(Debug, Clone)]
pub struct Catalog {
    dogs: Vec<Dog>,
    featured: Vec<Dog>,
    selected: BreedFilter,
    using_sample_data: bool,
}

impl Catalog {
    /// Fetch the full list and the featured list concurrently.
    ///
    /// Both lists populate together or not at all: if either call fails
    /// the catalog falls back to the sample set for both.
    pub async fn load<S: DogSource + ?Sized>(source: &S) -> Self {
        match futures::try_join!(source.list_dogs(), source.list_featured_dogs()) {
            Ok((dogs, featured)) => {
                tracing::debug!(
                    dogs = dogs.len(),
                    featured = featured.len(),
                    "Catalog loaded"
                );
                Self::from_lists(dogs, featured)
            }
            Err(e) => {
                tracing::warn!(error = %e, "API not available, using sample data");
                Self::sample()
            }
        }
    }

    /// A catalog over API results.
    pub fn from_lists(dogs: Vec<Dog>, featured: Vec<Dog>) -> Self {
        Self {
            dogs,
            featured,
            selected: BreedFilter::All,
            using_sample_data: false,
        }
    }

    /// A catalog over the fixed sample set, flagged as such.
    pub fn sample() -> Self {
        let dogs = sample_dogs();
        let featured = dogs.iter().filter(|d| d.is_featured).cloned().collect();
        Self {
            dogs,
            featured,
            selected: BreedFilter::All,
            using_sample_data: true,
        }
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn featured(&self) -> &[Dog] {
        &self.featured
    }

    pub fn selected(&self) -> &BreedFilter {
        &self.selected
    }

    /// Whether the sample set stands in for API data.
    pub fn using_sample_data(&self) -> bool {
        self.using_sample_data
    }

    /// Distinct breeds of the loaded dogs, in first-seen order.
    pub fn breeds(&self) -> Vec<&str> {
        let mut breeds: Vec<&str> = Vec::new();
        for dog in &self.dogs {
            if !breeds.contains(&dog.breed.as_str()) {
                breeds.push(&dog.breed);
            }
        }
        breeds
    }

    /// Change the breed filter. Purely local; no request is made.
    pub fn select_breed(&mut self, filter: BreedFilter) {
        self.selected = filter;
    }

    /// Dogs visible under the current filter, in loaded order.
    pub fn visible(&self) -> Vec<&Dog> {
        self.dogs
            .iter()
            .filter(|dog| self.selected.matches(dog))
            .collect()
    }
}

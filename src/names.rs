use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const MALE_NAMES: &[&str] = &[
    "Adam", "Albert", "Arthur", "Benjamin", "Carl", "Daniel", "David", "Edward", "Felix",
    "Frank", "George", "Henry", "Isaac", "Jack", "James", "John", "Leo", "Louis", "Martin",
    "Max", "Oliver", "Oscar", "Paul", "Peter", "Robert", "Samuel", "Thomas", "Victor",
    "William", "Zack",
];

const FEMALE_NAMES: &[&str] = &[
    "Alice", "Anna", "Beatrice", "Clara", "Daisy", "Edith", "Ella", "Emma", "Eva", "Grace",
    "Hannah", "Ida", "Iris", "Julia", "Laura", "Lily", "Lucy", "Maria", "Martha", "Nora",
    "Olivia", "Rose", "Ruby", "Sarah", "Sophia", "Stella", "Vera", "Violet", "Zoe", "Zora",
];

/// Draws display names for new polygons.
///
/// A pool is picked with equal odds, then a name uniformly within it.
#[derive(Debug, Clone)]
pub struct NamePool {
    rng: StdRng,
}

impl NamePool {
    /// Creates a pool seeded from the OS, or deterministically from `seed`.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Returns a randomly chosen display name.
    pub fn draw(&mut self) -> &'static str {
        let pool = if self.rng.gen_bool(0.5) {
            MALE_NAMES
        } else {
            FEMALE_NAMES
        };
        pool.choose(&mut self.rng).copied().unwrap_or("Polygon")
    }
}

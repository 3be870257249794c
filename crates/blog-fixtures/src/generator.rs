//! Lorem-ipsum post generator.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use blog_core::domain::{Author, NewPost};

/// Number of posts seeded before each test.
pub const SEED_BATCH_SIZE: usize = 10;

/// Pool of author first names.
pub const FIRST_NAMES: [&str; 3] = ["Jim", "Bob", "John"];

/// Pool of author last names.
pub const LAST_NAMES: [&str; 4] = ["Smith", "Miller", "Shrute", "Gold"];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis",
    "aute", "irure", "in", "reprehenderit", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non",
    "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id",
    "est", "laborum",
];

const SENTENCE_WORDS_MIN: usize = 3;
const SENTENCE_WORDS_MAX: usize = 10;
const PARAGRAPH_SENTENCES_MIN: usize = 3;
const PARAGRAPH_SENTENCES_MAX: usize = 5;

/// Generates random blog posts from an injected random source.
///
/// # Example
/// ```
/// use blog_fixtures::PostGenerator;
///
/// let mut a = PostGenerator::seeded(7);
/// let mut b = PostGenerator::seeded(7);
/// assert_eq!(a.post(), b.post());
/// ```
pub struct PostGenerator<R: Rng> {
    rng: R,
}

impl PostGenerator<StdRng> {
    /// Deterministic generator for replayable scenarios.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PostGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A capitalized sentence of lorem words ending with a period.
    pub fn sentence(&mut self) -> String {
        let count = self.rng.gen_range(SENTENCE_WORDS_MIN..=SENTENCE_WORDS_MAX);
        let words: Vec<&str> = (0..count).map(|_| self.word()).collect();

        let mut sentence = capitalize(&words.join(" "));
        sentence.push('.');
        sentence
    }

    /// A few sentences joined by spaces.
    pub fn paragraph(&mut self) -> String {
        let count = self
            .rng
            .gen_range(PARAGRAPH_SENTENCES_MIN..=PARAGRAPH_SENTENCES_MAX);
        (0..count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// An author drawn uniformly from the name pools.
    pub fn author(&mut self) -> Author {
        Author::new(self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }

    pub fn post(&mut self) -> NewPost {
        let title = self.sentence();
        let content = self.paragraph();
        let author = self.author();
        NewPost::new(title, content, author)
    }

    pub fn batch(&mut self, size: usize) -> Vec<NewPost> {
        (0..size).map(|_| self.post()).collect()
    }

    /// A batch of [`SEED_BATCH_SIZE`] posts.
    pub fn seed_batch(&mut self) -> Vec<NewPost> {
        self.batch(SEED_BATCH_SIZE)
    }

    fn word(&mut self) -> &'static str {
        self.pick(WORDS)
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        // Pools are non-empty constants.
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

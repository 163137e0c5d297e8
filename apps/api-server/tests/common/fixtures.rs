//! Seed data for integration tests.
//!
//! Posts are generated from small word lists so every run exercises
//! different titles, bodies and author names.

use rand::Rng;
use rand::seq::SliceRandom;

use quill_core::domain::{Author, NewPost};
use quill_shared::dto::{AuthorPayload, CreatePostRequest};

/// Number of posts seeded before each test.
pub const SEED_COUNT: usize = 5;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "Ken", "Linus", "Margaret",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Dijkstra", "Hamilton", "Hopper", "Liskov", "Lovelace", "Ritchie", "Thompson",
    "Torvalds", "Turing",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

fn pick(words: &[&'static str]) -> &'static str {
    words.choose(&mut rand::thread_rng()).copied().unwrap_or("lorem")
}

fn sentence(min_words: usize, max_words: usize) -> String {
    let len = rand::thread_rng().gen_range(min_words..=max_words);
    let mut sentence = (0..len).map(|_| pick(WORDS)).collect::<Vec<_>>().join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

fn paragraph() -> String {
    let sentences = rand::thread_rng().gen_range(3..=6);
    (0..sentences)
        .map(|_| sentence(6, 14))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A complete, random `POST /posts` body.
pub fn generate_post_data() -> CreatePostRequest {
    CreatePostRequest {
        title: Some(sentence(3, 7)),
        content: Some(paragraph()),
        author: Some(AuthorPayload::new(pick(FIRST_NAMES), pick(LAST_NAMES))),
    }
}

/// A random post ready for direct insertion into a store.
pub fn generate_new_post() -> NewPost {
    let author = Author::new(pick(FIRST_NAMES), pick(LAST_NAMES)).expect("word lists are non-blank");
    NewPost::new(author, sentence(3, 7), paragraph()).expect("generated text is non-blank")
}

pub fn seed_data() -> Vec<NewPost> {
    (0..SEED_COUNT).map(|_| generate_new_post()).collect()
}

//! Deterministic corpus of boilerplate-wrapped pages for tests and benches.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const HEADER: &str = "Daily Gazette\nHome | World | Business | Sport | Opinion\n";
pub const FOOTER: &str = "\nShare this article\nCopyright Daily Gazette. All rights reserved.";

const WORDS: &[&str] = &[
    "council", "river", "market", "season", "report", "village", "budget", "station",
    "harbour", "festival", "minister", "weather", "bridge", "school", "league", "museum",
];

fn make_sentence(rng: &mut impl Rng) -> String {
    let n = rng.gen_range(4..10);
    let mut words: Vec<&str> = (0..n).map(|_| WORDS[rng.gen_range(0..WORDS.len())]).collect();
    let first = words[0];
    let mut s = String::new();
    let mut chars = first.chars();
    if let Some(c) = chars.next() {
        s.extend(c.to_uppercase());
        s.push_str(chars.as_str());
    }
    words.remove(0);
    for w in words {
        s.push(' ');
        s.push_str(w);
    }
    s.push('.');
    s
}

/// One page: shared header, a unique title and byline, `body_sentences`
/// random sentences, shared footer.
pub fn make_page(rng: &mut impl Rng, body_sentences: usize) -> String {
    let mut s = String::from(HEADER);
    s.push_str(&format!("Breaking: {}\n", make_sentence(rng)));
    s.push_str(&format!(
        "Published 2024-{:02}-{:02} by staff reporter\n",
        rng.gen_range(1..13),
        rng.gen_range(1..29)
    ));
    for i in 0..body_sentences {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&make_sentence(rng));
    }
    s.push_str(FOOTER);
    s
}

/// `n` pages generated from `seed`. The same seed always yields the same pages.
pub fn generate_pages(seed: u64, n: usize, body_sentences: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| make_page(&mut rng, body_sentences)).collect()
}

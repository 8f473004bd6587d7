use rand::Rng;

/// The fixed set of emphasis adverbs the relation inserts.
pub const EMPHASIS_WORDS: &[&str] = &["really", "very", "absolutely", "definitely", "totally"];

/// Where the emphasis word lands in the sentence.
///
/// `SecondToken` is a naive placeholder — it inserts at token index 1
/// regardless of sentence structure. A syntax-aware variant would be a new
/// arm here; the checker only ever calls `insert`.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertionPolicy {
    SecondToken,
}

impl InsertionPolicy {
    pub fn from_str_loose(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "second-token" | "second_token" | "positional" => Ok(InsertionPolicy::SecondToken),
            _ => Err(format!("Unknown insertion policy: {}", s)),
        }
    }

    /// Insert `word` into `text` under this policy.
    ///
    /// Single-token (or empty) inputs get the word appended with one
    /// separating space; otherwise the word becomes the second token and the
    /// sentence is rejoined with single spaces.
    pub fn insert(&self, text: &str, word: &str) -> String {
        match self {
            InsertionPolicy::SecondToken => {
                let mut words: Vec<&str> = text.split_whitespace().collect();
                if words.len() <= 1 {
                    return format!("{} {}", text, word);
                }
                words.insert(1, word);
                words.join(" ")
            }
        }
    }
}

/// Pick one emphasis word uniformly at random from the fixed set.
///
/// The RNG is injected so batches seeded via `--seed` replay the same
/// word choices.
pub fn pick_emphasis_word<R: Rng>(rng: &mut R) -> &'static str {
    EMPHASIS_WORDS[rng.gen_range(0..EMPHASIS_WORDS.len())]
}

/// Insert `word` (or a random emphasis word when `None`) into `text` at the
/// default second-token position.
pub fn add_emphasis<R: Rng>(text: &str, word: Option<&str>, rng: &mut R) -> String {
    let word = word.unwrap_or_else(|| pick_emphasis_word(rng));
    InsertionPolicy::SecondToken.insert(text, word)
}

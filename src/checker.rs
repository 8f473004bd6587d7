//! Executes one metamorphic comparison: predict the original sentence,
//! insert an emphasis word, predict the variant, and compare labels.

use crate::session::SentimentOracle;
use crate::transform::{pick_emphasis_word, InsertionPolicy};
use crate::verdict::TestVerdict;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

pub struct RelationChecker {
    policy: InsertionPolicy,
    /// Fixed emphasis word; a fresh random word per input when `None`.
    emphasis_word: Option<String>,
    rng: StdRng,
}

impl RelationChecker {
    /// `seed` pins the word-selection RNG for reproducible batches.
    pub fn new(emphasis_word: Option<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RelationChecker {
            policy: InsertionPolicy::SecondToken,
            emphasis_word,
            rng,
        }
    }

    /// Run the relation for one input. Tool failures are recovered here and
    /// downgraded to error verdicts; no retries, nothing fatal to the batch.
    pub async fn check<O: SentimentOracle>(
        &mut self,
        oracle: &mut O,
        original_text: &str,
    ) -> TestVerdict {
        let original_pred = match oracle.predict(original_text).await {
            Ok(pred) => pred,
            Err(e) => {
                warn!(text = original_text, error = %e, "failed to get original prediction");
                return TestVerdict::errored(original_text.to_string(), None, None, e.to_string());
            }
        };

        let word = match &self.emphasis_word {
            Some(w) => w.clone(),
            None => pick_emphasis_word(&mut self.rng).to_string(),
        };
        let transformed_text = self.policy.insert(original_text, &word);

        let transformed_pred = match oracle.predict(&transformed_text).await {
            Ok(pred) => pred,
            Err(e) => {
                warn!(text = %transformed_text, error = %e, "failed to get transformed prediction");
                return TestVerdict::errored(
                    original_text.to_string(),
                    Some(original_pred),
                    Some(transformed_text),
                    e.to_string(),
                );
            }
        };

        TestVerdict::completed(
            original_text.to_string(),
            original_pred,
            transformed_text,
            transformed_pred,
        )
    }
}

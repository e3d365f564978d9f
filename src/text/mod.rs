/*!
 * Word-level text processing.
 *
 * - `normalizer`: canonical comparable form of a raw token
 * - `morphology`: known-word matching of inflected surface forms
 */

pub mod morphology;
pub mod normalizer;

pub use morphology::{KnownWordSet, irregular_base, is_known};
pub use normalizer::normalize;

/*!
 * Sentence context around a subtitle line.
 *
 * - `expander`: automatic sentence-window detection from punctuation
 * - `window`: a window the learner can widen or narrow line by line
 */

pub mod expander;
pub mod window;

// Re-export main types
pub use expander::{DEFAULT_MAX_DEPTH, ExpandedContext, boundaries, ends_with_terminator, expand};
pub use window::SentenceWindow;

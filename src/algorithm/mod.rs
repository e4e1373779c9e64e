/// Word composition and output persistence
pub mod composer;
/// Strip, stack and aspect-fit layout
pub mod layout;
/// Case-driven greedy symbol tokenizer
pub mod tokenizer;

pub use composer::Composer;
pub use tokenizer::{Tokenizer, Word};

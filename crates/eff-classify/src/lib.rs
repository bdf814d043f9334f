#![deny(unsafe_code)]

pub mod error;
pub mod finder;
pub mod harmoniser;
pub mod matcher;

pub use error::{MatchError, Result};
pub use finder::ClassificationFinder;
pub use harmoniser::Harmoniser;
pub use matcher::{ClassificationMatcher, ClassificationRepository};

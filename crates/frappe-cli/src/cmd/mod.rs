pub mod compare;
pub mod ngrams;
pub mod score;

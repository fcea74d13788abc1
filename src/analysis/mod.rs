//! Frequency analysis helpers for classical ciphertexts.

pub mod ngram;

pub use ngram::{
    calculate_ic, find_repeated_ngrams, generate_ngrams, ngram_frequency, sort_by_frequency,
    RepeatWindow,
};

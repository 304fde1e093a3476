use crate::reports;
use clap::Args;
use frappe_core::corpus::ngram_list;
use frappe_core::error::FrResult;
use frappe_core::{export, util};
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct NgramsArgs {
    /// Corpus text file to analyze
    #[arg(short, long)]
    pub corpus: String,

    /// Rows to show per table
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Also write all frequencies to this CSV file
    #[arg(long)]
    pub export: Option<String>,
}

pub fn run(args: &NgramsArgs) -> FrResult<()> {
    info!("corpus sha256 {}", util::file_digest(&args.corpus)?);
    let content = fs::read_to_string(&args.corpus)?;

    let unigrams = ngram_list(&content, 1);
    let bigrams = ngram_list(&content, 2);
    let trigrams = ngram_list(&content, 3);

    reports::print_ngram_table("Unigrams", &unigrams, args.top);
    reports::print_ngram_table("Bigrams", &bigrams, args.top);
    reports::print_ngram_table("Trigrams", &trigrams, args.top);

    if let Some(path) = &args.export {
        export::export_frequencies_csv(path, &unigrams, &bigrams, &trigrams)?;
        info!("frequencies written to {path}");
    }
    Ok(())
}

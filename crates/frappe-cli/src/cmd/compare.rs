use crate::reports;
use clap::Args;
use frappe_core::config::{KeyboardsFile, WeightConfig};
use frappe_core::corpus::ngram_list;
use frappe_core::error::FrResult;
use frappe_core::scorer::Scorer;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub weights: WeightConfig,

    /// Corpus text file to score against
    #[arg(short, long)]
    pub corpus: String,
}

pub fn run(args: &CompareArgs, keyboards_path: &str, weights: WeightConfig) -> FrResult<()> {
    let keyboards = KeyboardsFile::load_from_file(keyboards_path)?;
    info!(
        "comparing {} layouts against {}",
        keyboards.layouts.len(),
        args.corpus
    );

    let content = fs::read_to_string(&args.corpus)?;
    let unigrams = ngram_list(&content, 1);
    let bigrams = ngram_list(&content, 2);
    let trigrams = ngram_list(&content, 3);

    let scorer = Scorer::new(weights);
    let results = scorer.score_all(&keyboards, &unigrams, &bigrams, &trigrams)?;

    reports::print_comparison(&results);
    Ok(())
}

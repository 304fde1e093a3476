use crate::reports;
use clap::Args;
use frappe_core::config::{KeyboardsFile, KeymapFile, WeightConfig};
use frappe_core::corpus::ngram_list;
use frappe_core::error::FrResult;
use frappe_core::scorer::Scorer;
use frappe_core::util;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub weights: WeightConfig,

    /// Layout name from the keyboards file (e.g. FR, EN)
    #[arg(short, long)]
    pub layout: String,

    /// Corpus text file to score against
    #[arg(short, long)]
    pub corpus: String,

    /// Resolve characters through the keymap (multi-keystroke characters)
    #[arg(long, default_value_t = false)]
    pub extended: bool,

    /// Keymap file for --extended
    #[arg(long, default_value = "data/keymap.json")]
    pub keymap: String,

    /// Print the breakdown as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &ScoreArgs, keyboards_path: &str, weights: WeightConfig) -> FrResult<()> {
    let keyboards = KeyboardsFile::load_from_file(keyboards_path)?;

    info!("corpus sha256 {}", util::file_digest(&args.corpus)?);
    let content = fs::read_to_string(&args.corpus)?;
    let unigrams = ngram_list(&content, 1);
    let bigrams = ngram_list(&content, 2);
    let trigrams = ngram_list(&content, 3);

    let scorer = Scorer::new(weights);
    let details = if args.extended {
        let layout = keyboards.build_extended_layout(&args.layout)?;
        let keymap = KeymapFile::load_from_file(&args.keymap)?.build_table();
        scorer.score_extended(&unigrams, &bigrams, &trigrams, &layout, &keymap)
    } else {
        let layout = keyboards.build_layout(&args.layout)?;
        scorer.score_layout(&unigrams, &bigrams, &trigrams, &layout)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        reports::print_score_report(&args.layout, &details);
    }
    Ok(())
}

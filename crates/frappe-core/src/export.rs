use crate::corpus::NGramFrequency;
use crate::error::FrResult;
use itertools::Itertools;
use std::path::Path;

/// Writes the three frequency collections to one CSV file with a `kind`
/// column, each section sorted by descending frequency (ties broken
/// alphabetically so output is stable).
pub fn export_frequencies_csv<P: AsRef<Path>>(
    path: P,
    unigrams: &[NGramFrequency],
    bigrams: &[NGramFrequency],
    trigrams: &[NGramFrequency],
) -> FrResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["kind", "ngram", "frequency"])?;

    write_section(&mut writer, "unigram", unigrams)?;
    write_section(&mut writer, "bigram", bigrams)?;
    write_section(&mut writer, "trigram", trigrams)?;

    writer.flush()?;
    Ok(())
}

fn write_section<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    kind: &str,
    items: &[NGramFrequency],
) -> FrResult<()> {
    let sorted = items
        .iter()
        .sorted_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.ngram.cmp(&b.ngram)));
    for f in sorted {
        let frequency = f.frequency.to_string();
        writer.write_record([kind, f.ngram.as_str(), frequency.as_str()])?;
    }
    Ok(())
}

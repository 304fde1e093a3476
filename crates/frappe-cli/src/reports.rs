use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use frappe_core::corpus::NGramFrequency;
use frappe_core::scorer::ScoreDetails;

pub fn print_ngram_table(title: &str, items: &[NGramFrequency], top: usize) {
    let mut sorted: Vec<&NGramFrequency> = items.iter().collect();
    sorted.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.ngram.cmp(&b.ngram))
    });

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Freq").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for f in sorted.into_iter().take(top) {
        table.add_row(vec![
            Cell::new(&f.ngram),
            Cell::new(f.frequency.to_string()),
        ]);
    }
    println!("\n{table}");
}

pub fn print_score_report(name: &str, d: &ScoreDetails) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Term").add_attribute(Attribute::Bold),
        Cell::new("Weighted").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new("Hand balance"),
        Cell::new(format!("{:.2}", d.hand_balance_penalty)),
        Cell::new(format!("{:.0}% left", d.left_hand_share * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Finger distribution"),
        Cell::new(format!("{:.2}", d.finger_distribution_penalty)),
        Cell::new(""),
    ]);

    let rows: [(&str, f64, u64, Color); 8] = [
        ("SFB", d.sfb, d.stat_sfb, Color::Red),
        ("Ciseau", d.ciseau, d.stat_ciseau, Color::Red),
        ("LSB", d.lsb, d.stat_lsb, Color::Red),
        ("Roulement", d.roulement, d.stat_roulement, Color::Green),
        ("Alternance", d.alternance, d.stat_alternance, Color::Green),
        ("Redirection", d.redirection, d.stat_redirection, Color::Red),
        (
            "Mauvaise redirection",
            d.mauvaise_redirection,
            d.stat_mauvaise_redirection,
            Color::Red,
        ),
        ("Skipgram", d.skipgram, d.stat_skipgram, Color::Red),
    ];
    for (label, weighted, count, color) in rows {
        table.add_row(vec![
            Cell::new(label).fg(color),
            Cell::new(format!("{weighted:.2}")),
            Cell::new(count.to_string()),
        ]);
    }

    table.add_row(vec![
        Cell::new("Skipped occurrences"),
        Cell::new(""),
        Cell::new(d.stat_skipped.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Total occurrences"),
        Cell::new(""),
        Cell::new(d.total_occurrences.to_string()),
    ]);
    table.add_row(vec![
        Cell::new(format!("Score ({name})"))
            .add_attribute(Attribute::Bold)
            .fg(Color::Cyan),
        Cell::new(format!("{:.4}", d.score))
            .add_attribute(Attribute::Bold)
            .fg(Color::Cyan),
        Cell::new(format!("raw {:.2}", d.raw_total)),
    ]);

    println!("\n{table}");
}

pub fn print_comparison(results: &[(String, ScoreDetails)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Hand"),
        Cell::new("Fingers"),
        Cell::new("SFB").fg(Color::Red),
        Cell::new("Ciseau"),
        Cell::new("LSB"),
        Cell::new("Roul").fg(Color::Green),
        Cell::new("Alt").fg(Color::Green),
        Cell::new("Redir"),
        Cell::new("Skip"),
    ]);
    for i in 1..=10 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, d) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", d.score)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", d.hand_balance_penalty)),
            Cell::new(format!("{:.0}", d.finger_distribution_penalty)),
            Cell::new(format!("{:.0}", d.sfb)),
            Cell::new(format!("{:.0}", d.ciseau)),
            Cell::new(format!("{:.0}", d.lsb)),
            Cell::new(format!("{:.0}", d.roulement)),
            Cell::new(format!("{:.0}", d.alternance)),
            Cell::new(format!("{:.0}", d.redirection + d.mauvaise_redirection)),
            Cell::new(format!("{:.0}", d.skipgram)),
        ]);
    }
    println!("\n{table}");
}

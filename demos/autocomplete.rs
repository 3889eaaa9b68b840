//! Filter a list of job titles the way an autocomplete box does, and print
//! each suggestion with the typed terms in brackets.
//!
//! cargo run --example autocomplete -- "pat iere"

use matchlight::{Highlighter, RangeFinder, Result, find_match_ranges, preset};

const LABELS: &[&str] = &[
    "Boulanger / Boulangère",
    "Pâtissier / Pâtissière",
    "Électricien du bâtiment",
    "Aide-soignant / Aide-soignante",
    "Conseiller de vente",
    "Infirmière de bloc opératoire",
    // decomposed accents, as some keyboards and databases produce them
    "Cafe\u{0301}tier",
];

fn main() -> Result<()> {
    let query = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let query = if query.trim().is_empty() {
        "e".to_owned()
    } else {
        query
    };

    let highlighter = Highlighter::new(RangeFinder::new(preset::search()))?;

    println!("query: {query:?}");
    for label in LABELS {
        if find_match_ranges(&query, label).is_empty() {
            continue;
        }
        let ranges = highlighter.ranges(&query, label);
        let rendered = highlighter.render(&query, label, "[", "]");
        let spans: Vec<String> = ranges.iter().map(ToString::to_string).collect();
        println!("  {rendered:<40} {}", spans.join(" "));
    }
    Ok(())
}

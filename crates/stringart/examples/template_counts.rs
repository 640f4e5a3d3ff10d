//! Print primitive counts for a few boards, as a quick sanity check on layouts.
//!
//! Usage:
//!   cargo run -p stringart --example template_counts -- circle
//!   cargo run -p stringart --example template_counts -- star

use stringart::geom::Style;
use stringart::patterns::{CircleParams, PatternSpec, StarParams};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "circle".to_string());
    let specs: Vec<PatternSpec> = match mode.as_str() {
        "circle" => [9, 12, 18, 24]
            .iter()
            .map(|&n| PatternSpec::Circle(CircleParams::new(25.0 + n as f64, n)))
            .collect(),
        "star" => [5, 6, 8]
            .iter()
            .map(|&n| PatternSpec::Star(StarParams::new(45.0, n, 10)))
            .collect(),
        _ => {
            eprintln!("usage: template_counts [circle|star]");
            return;
        }
    };
    for (i, spec) in specs.iter().enumerate() {
        match spec.build() {
            Ok(shape) => println!(
                "{} sample {i}: primitives={}, holes={}",
                spec.kind(),
                shape.primitive_count(),
                shape.count_style(Style::Hole)
            ),
            Err(err) => eprintln!("{} sample {i}: {err}", spec.kind()),
        }
    }
}

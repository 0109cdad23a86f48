mod catalog;
mod html;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use catalog::Catalog;
use rolltable_core::{
    ResultTable, experiment_attribute_test, experiment_hearts, experiment_ranges,
    experiment_shields, experiment_surges,
};

const RANGE_ICON: &str = "<span class=\"icon range\"/>";
const SURGE_ICON: &str = "<span class=\"icon surge\"/>";
const HEART_ICON: &str = "<span class=\"icon heart\"/>";
const SHIELD_ICON: &str = "<span class=\"icon shield\"/>";

#[derive(Debug, Parser)]
#[command(name = "rolltable-report", version)]
#[command(about = "Exact dice probability tables rendered as an HTML report")]
struct Args {
    /// Where to write the rendered report
    #[arg(long, default_value = "dice.html")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = Catalog::standard().context("die catalog definition is invalid")?;
    let tables = build_tables(&catalog);
    let document = html::render_document(&tables);

    fs::write(&args.output, document)
        .with_context(|| format!("writing report to {}", args.output.display()))?;
    log::info!("wrote {} tables to {}", tables.len(), args.output.display());
    Ok(())
}

fn build_tables(catalog: &Catalog) -> Vec<ResultTable> {
    let ranges: Vec<u32> = (1..=11).collect();
    let surges: Vec<u32> = (1..=5).collect();
    let hearts: Vec<u32> = (1..=9).collect();
    let shields: Vec<u32> = (1..=12).collect();
    let tests: Vec<u32> = (0..=6).rev().collect();

    vec![
        experiment_ranges(RANGE_ICON, &ranges, &catalog::range_combinations(catalog)),
        experiment_surges(SURGE_ICON, &surges, &catalog::surge_combinations(catalog)),
        experiment_hearts(HEART_ICON, &hearts, &catalog::heart_combinations(catalog)),
        experiment_shields(
            SHIELD_ICON,
            &shields,
            &catalog::shield_combinations(catalog),
        ),
        experiment_attribute_test(&tests, &catalog::attribute_test_combinations(catalog)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_report_renders_every_table() {
        let catalog = Catalog::standard().expect("catalog definitions are valid");
        let tables = build_tables(&catalog);
        assert_eq!(tables.len(), 5);

        let document = html::render_document(&tables);
        for title in ["Ranges", "Surges", "Hearts", "Shields", "Attribute tests"] {
            assert!(
                document.contains(&format!("<th class=\"title\">{title}</th>")),
                "missing table {title}"
            );
        }
        assert!(document.contains("class=\"die blue\""));
        assert!(document.contains("icon shield"));
    }
}

// Markdown table reporting with head/tail sampling

use std::io::{self, Write};

use balance_core::{clone_cost, GameFamily, Variant};

/// Rows shown from the front of each collection.
const HEAD_ROWS: usize = 15;
/// Rows shown from the back when the collection overflows the head window.
const TAIL_ROWS: usize = 5;
/// Display width of the name column.
const NAME_WIDTH: usize = 20;

/// Derived balance numbers for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantOutcome {
    pub cost: u64,
    pub power: u64,
    /// power / cost rounded to 2 decimals, 0 when cost is 0
    pub ratio: f64,
}

impl VariantOutcome {
    pub fn compute(family: GameFamily, variant: &Variant) -> Self {
        let economy = family.economy();
        let cost = clone_cost(economy.base_cost, variant.clone_index, economy.cost_exponent);
        let power = family.power(variant);
        let ratio = if cost > 0 {
            round2(power as f64 / cost as f64)
        } else {
            0.0
        };
        Self { cost, power, ratio }
    }
}

/// One family's sampled ratios, feeding the cross-game comparison.
#[derive(Debug, Clone, Copy)]
pub struct FamilySummary {
    pub family: GameFamily,
    pub first_ratio: f64,
    pub last_ratio: f64,
    pub average_ratio: f64,
}

impl FamilySummary {
    pub fn from_outcomes(family: GameFamily, outcomes: &[VariantOutcome]) -> Self {
        Self {
            family,
            first_ratio: outcomes.first().map_or(0.0, |o| o.ratio),
            last_ratio: outcomes.last().map_or(0.0, |o| o.ratio),
            average_ratio: average_ratio(outcomes),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn average_ratio(outcomes: &[VariantOutcome]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    outcomes.iter().map(|o| o.ratio).sum::<f64>() / outcomes.len() as f64
}

/// Trend label comparing first and last sampled ratios. Ties count as
/// improving; only a strict drop is declining.
fn trend(first_ratio: f64, last_ratio: f64) -> &'static str {
    if first_ratio > last_ratio {
        "Declining"
    } else {
        "Improving"
    }
}

fn write_row<W: Write>(out: &mut W, variant: &Variant, outcome: &VariantOutcome) -> io::Result<()> {
    let name: String = variant.name.chars().take(NAME_WIDTH).collect();
    let win_info = variant
        .win_value()
        .map_or_else(|| "N/A".to_string(), |v| v.to_string());
    writeln!(
        out,
        "| {} | {} | {} | {} | {} | {:.2} |",
        variant.clone_index, name, win_info, outcome.cost, outcome.power, outcome.ratio
    )
}

/// Report header with the per-family power formulas.
pub fn write_preamble<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "# Comprehensive Balance Analysis\n")?;
    writeln!(out, "**Formulas:**")?;
    writeln!(out, "- Dodge: `(dodges² / (collisions + 1)) × multiplier`")?;
    writeln!(out, "- Snake: `((length³ × 5) / time) × multiplier`")?;
    writeln!(
        out,
        "- Memory: `((matches² × (combo + 1) × 50) / time) × multiplier`\n"
    )
}

/// Print one family's balance table and return the sampled outcomes.
///
/// Head/tail sampling: the first `HEAD_ROWS` variants in file order, then,
/// when the collection is larger, one ellipsis row and the final
/// `TAIL_ROWS` (fewer when head and tail would overlap). The summary
/// statistics below the table cover exactly the sampled rows, not all N.
pub fn analyze_family<W: Write>(
    out: &mut W,
    family: GameFamily,
    variants: &[Variant],
) -> io::Result<Vec<VariantOutcome>> {
    let economy = family.economy();
    writeln!(out, "\n## {} Analysis\n", family.label())?;
    writeln!(
        out,
        "Base cost: {}, Exponent: {}\n",
        economy.base_cost, economy.cost_exponent
    )?;
    writeln!(out, "| Clone | Name | Victory/Cards | Cost | Power | Ratio |")?;
    writeln!(out, "|-------|------|---------------|------|-------|-------|")?;

    let mut outcomes = Vec::new();

    for variant in variants.iter().take(HEAD_ROWS) {
        let outcome = VariantOutcome::compute(family, variant);
        write_row(out, variant, &outcome)?;
        outcomes.push(outcome);
    }

    if variants.len() > HEAD_ROWS {
        writeln!(out, "| ... | ... | ... | ... | ... | ... |")?;
        let tail_start = variants.len().saturating_sub(TAIL_ROWS).max(HEAD_ROWS);
        for variant in &variants[tail_start..] {
            let outcome = VariantOutcome::compute(family, variant);
            write_row(out, variant, &outcome)?;
            outcomes.push(outcome);
        }
    }

    if let (Some(first), Some(last)) = (outcomes.first(), outcomes.last()) {
        writeln!(out, "\n**Average Ratio:** {:.2}", average_ratio(&outcomes))?;
        writeln!(out, "**First Variant Ratio:** {}", first.ratio)?;
        writeln!(out, "**Last Variant Ratio:** {}", last.ratio)?;
    }

    Ok(outcomes)
}

/// Print the cross-game comparison table.
pub fn write_cross_game_summary<W: Write>(
    out: &mut W,
    summaries: &[FamilySummary],
) -> io::Result<()> {
    writeln!(out, "\n\n## Cross-Game Comparison\n")?;
    writeln!(out, "| Game Type | First Ratio | Last Ratio | Average | Trend |")?;
    writeln!(out, "|-----------|-------------|------------|---------|-------|")?;
    for summary in summaries {
        writeln!(
            out,
            "| {} | {:.2} | {:.2} | {:.2} | {} |",
            summary.family.label(),
            summary.first_ratio,
            summary.last_ratio,
            summary.average_ratio,
            trend(summary.first_ratio, summary.last_ratio)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dodge_variants(count: u32) -> Vec<Variant> {
        (0..count)
            .map(|i| Variant {
                name: format!("variant-{i:03}"),
                clone_index: i,
                victory_limit: Some(30 + 2 * i),
                card_count: None,
            })
            .collect()
    }

    fn render(family: GameFamily, variants: &[Variant]) -> (String, Vec<VariantOutcome>) {
        let mut buffer = Vec::new();
        let outcomes = analyze_family(&mut buffer, family, variants).unwrap();
        (String::from_utf8(buffer).unwrap(), outcomes)
    }

    #[test]
    fn baseline_dodge_row_matches_known_values() {
        let variants = vec![Variant {
            name: "Original Dodge".to_string(),
            clone_index: 0,
            victory_limit: Some(30),
            card_count: None,
        }];
        let (output, outcomes) = render(GameFamily::Dodge, &variants);
        assert!(output.contains("| 0 | Original Dodge | 30 | 175 | 900 | 5.14 |"));
        assert_eq!(outcomes[0].cost, 175);
        assert_eq!(outcomes[0].power, 900);
        assert_eq!(outcomes[0].ratio, 5.14);
    }

    #[test]
    fn memory_baseline_row_matches_known_values() {
        let variants = vec![Variant {
            name: "Classic Pairs".to_string(),
            clone_index: 0,
            victory_limit: None,
            card_count: Some(12),
        }];
        let (output, _) = render(GameFamily::MemoryMatch, &variants);
        assert!(output.contains("| 0 | Classic Pairs | 12 | 200 | 840 | 4.20 |"));
        // first/last summary lines print the stored (rounded) ratio raw
        assert!(output.contains("**First Variant Ratio:** 4.2\n"));
    }

    #[test]
    fn small_collection_has_no_ellipsis_row() {
        let (output, outcomes) = render(GameFamily::Dodge, &dodge_variants(15));
        assert!(!output.contains("| ... |"));
        assert_eq!(outcomes.len(), 15);
    }

    #[test]
    fn large_collection_samples_head_and_tail() {
        let (output, outcomes) = render(GameFamily::Dodge, &dodge_variants(23));
        assert!(output.contains("| ... | ... | ... | ... | ... | ... |"));
        // 15 head rows + 5 tail rows
        assert_eq!(outcomes.len(), 20);
        // head ends at 14, tail restarts at 18
        assert!(output.contains("variant-014"));
        assert!(!output.contains("variant-015"));
        assert!(!output.contains("variant-017"));
        assert!(output.contains("variant-018"));
        assert!(output.contains("variant-022"));
    }

    #[test]
    fn overlapping_tail_is_not_duplicated() {
        // 15 < N <= 20: tail starts right after the head window
        let (output, outcomes) = render(GameFamily::Dodge, &dodge_variants(18));
        assert_eq!(outcomes.len(), 18);
        for i in 0..18 {
            let needle = format!("variant-{i:03}");
            assert_eq!(output.matches(&needle).count(), 1, "{needle}");
        }
    }

    #[test]
    fn average_covers_only_the_sampled_rows() {
        let variants = dodge_variants(23);
        let (output, outcomes) = render(GameFamily::Dodge, &variants);
        assert_eq!(outcomes.len(), 20);
        let expected = outcomes.iter().map(|o| o.ratio).sum::<f64>() / 20.0;
        assert!(output.contains(&format!("**Average Ratio:** {expected:.2}")));
    }

    #[test]
    fn long_names_are_truncated_for_display() {
        let variants = vec![Variant {
            name: "An Extremely Long Variant Name".to_string(),
            clone_index: 0,
            victory_limit: Some(30),
            card_count: None,
        }];
        let (output, _) = render(GameFamily::Dodge, &variants);
        assert!(output.contains("| An Extremely Long Va |"));
        assert!(!output.contains("An Extremely Long Variant Name"));
    }

    #[test]
    fn empty_collection_prints_no_summary_lines() {
        let (output, outcomes) = render(GameFamily::Snake, &[]);
        assert!(outcomes.is_empty());
        assert!(!output.contains("Average Ratio"));
    }

    #[test]
    fn equal_first_and_last_ratios_report_improving() {
        let summary = FamilySummary {
            family: GameFamily::Snake,
            first_ratio: 2.0,
            last_ratio: 2.0,
            average_ratio: 2.0,
        };
        let mut buffer = Vec::new();
        write_cross_game_summary(&mut buffer, &[summary]).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("| Snake | 2.00 | 2.00 | 2.00 | Improving |"));
    }

    #[test]
    fn strictly_falling_ratio_reports_declining() {
        let summary = FamilySummary {
            family: GameFamily::Dodge,
            first_ratio: 5.14,
            last_ratio: 3.02,
            average_ratio: 4.1,
        };
        let mut buffer = Vec::new();
        write_cross_game_summary(&mut buffer, &[summary]).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("| Dodge | 5.14 | 3.02 | 4.10 | Declining |"));
    }

    #[test]
    fn summary_of_no_outcomes_is_all_zeroes() {
        let summary = FamilySummary::from_outcomes(GameFamily::Dodge, &[]);
        assert_eq!(summary.first_ratio, 0.0);
        assert_eq!(summary.last_ratio, 0.0);
        assert_eq!(summary.average_ratio, 0.0);
    }
}

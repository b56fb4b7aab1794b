//! Display and formatting utilities for proflevel.
//!
//! This module provides functions for formatting money and printing a
//! levelling plan to the user in a readable format.

use crate::catalog::Catalog;
use crate::models::{Copper, LevelOutcome, LevelStep};

/// Formats an amount of copper as gold, silver and copper.
///
/// # Arguments
///
/// * `copper` - Amount in copper (100 copper = 1 silver, 100 silver = 1 gold)
///
/// # Returns
///
/// A formatted string like "12g 3s 45c", "3s 45c", or "45c"
///
/// # Example
///
/// ```
/// use proflevel::display::format_gold;
///
/// assert_eq!(format_gold(120_345), "12g 3s 45c");
/// assert_eq!(format_gold(345), "3s 45c");
/// assert_eq!(format_gold(45), "45c");
/// ```
pub fn format_gold(copper: Copper) -> String {
    let gold = copper / 10_000;
    let silver = (copper % 10_000) / 100;
    let rest = copper % 100;

    if gold >= 1 {
        format!("{}g {}s {}c", gold, silver, rest)
    } else if silver >= 1 {
        format!("{}s {}c", silver, rest)
    } else {
        format!("{}c", rest)
    }
}

/// Display name of an item, falling back to its id.
fn item_label(catalog: &Catalog, item_id: u32) -> String {
    catalog
        .item_by_id(item_id)
        .ok()
        .filter(|i| !i.name.is_empty())
        .map(|i| i.name.clone())
        .or_else(|| catalog.vendor_item_by_id(item_id).map(|v| v.name.clone()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("item #{}", item_id))
}

/// Collapses consecutive steps that use the same recipe into skill ranges.
///
/// Returns `(first skill, last skill, steps)` for each run.
pub fn group_steps(steps: &[LevelStep]) -> Vec<(u32, u32, &[LevelStep])> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=steps.len() {
        if i == steps.len() || steps[i].recipe_id != steps[start].recipe_id {
            groups.push((steps[start].skill, steps[i - 1].skill, &steps[start..i]));
            start = i;
        }
    }
    groups
}

/// Displays a levelling plan to stdout.
///
/// This function prints:
/// - The crafts to perform, grouped by consecutive recipe
/// - Reagents to buy for each group
/// - Summary (levels reached, total cost, stall point if any)
pub fn display_results(outcome: &LevelOutcome, catalog: &Catalog) {
    println!();
    println!("+================================================================+");
    println!("|             PROFESSION LEVELLING PLAN                          |");
    println!("+================================================================+");
    println!();

    println!("[CHEAPEST CRAFTS]");
    println!("----------------------------------------------------------------");

    if outcome.steps().is_empty() {
        println!("  (none)");
    }

    for (first, last, steps) in group_steps(outcome.steps()) {
        let crafts: u64 = steps.iter().map(|s| u64::from(s.crafts)).sum();
        let cost: Copper = steps.iter().map(|s| s.cost).sum();
        let range = if first == last {
            format!("{}", first)
        } else {
            format!("{}-{}", first, last)
        };
        println!(
            "  {:<9} {} x {} ({})",
            range,
            crafts,
            steps[0].recipe_name,
            format_gold(cost)
        );
        for purchase in &steps[0].purchases.items {
            println!(
                "              buy {} x {} per craft",
                purchase.quantity,
                item_label(catalog, purchase.item_id)
            );
        }
    }

    println!();
    println!("[SUMMARY]");
    println!("----------------------------------------------------------------");
    match outcome {
        LevelOutcome::Completed {
            final_level,
            total_cost,
            ..
        } => {
            println!("  Reached Level:    {}", final_level);
            println!("  Total Cost:       {}", format_gold(*total_cost));
        }
        LevelOutcome::Stalled {
            level,
            partial_cost,
            ..
        } => {
            println!("  [STALLED] No craftable, priceable recipe at level {}", level);
            println!("  Partial Cost:     {}", format_gold(*partial_cost));
        }
    }
    println!("  Skill-ups:        {}", outcome.steps().len());
    println!();
}

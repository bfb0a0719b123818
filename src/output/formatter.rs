use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::calculator::ClassificationResult;
use crate::catalog::{Category, ModItem};
use crate::config::ColorMode;
use crate::saved::SavedStore;
use crate::scoring::describe_indicators;

/// Decide whether to emit ANSI colors for stdout
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Class name rendered as a badge, colored per class
pub fn format_class_badge(class: &str, use_colors: bool) -> String {
    let label = format!(" {} ", class);
    if !use_colors {
        return format!("[{}]", class);
    }
    match class {
        "TTE" => label.on_blue().white().bold().to_string(),
        "TTD" => label.on_green().black().bold().to_string(),
        "TTC" => label.on_yellow().black().bold().to_string(),
        "TTB" => label.on_truecolor(249, 115, 22).black().bold().to_string(),
        "TTA" => label.on_red().white().bold().to_string(),
        "TTX" => label.on_magenta().white().bold().to_string(),
        _ => label.on_bright_black().white().bold().to_string(),
    }
}

/// Signed point value: "+20", "-3", "0"
pub fn format_points(points: i32) -> String {
    if points > 0 {
        format!("+{}", points)
    } else {
        points.to_string()
    }
}

/// Multi-line classification summary
pub fn format_result(result: &ClassificationResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let vehicle = format!("{} {}", result.make, result.model);
    lines.push(if use_colors {
        vehicle.bold().to_string()
    } else {
        vehicle
    });

    lines.push(format!(
        "  Base class: {} ({})",
        format_class_badge(&result.base_class_clean, use_colors),
        result.base_class_raw
    ));
    if let Some(explanation) = describe_indicators(&result.base_class_raw) {
        lines.push(format!("  Special indicators: {}", explanation));
    }
    lines.push(format!(
        "  Base class points: {}",
        format_points(result.base_bonus_points)
    ));
    lines.push(format!(
        "  Modification points: {}",
        format_points(result.modification_points)
    ));
    lines.push(format!("  Total points: {}", result.total_points));
    lines.push(format!(
        "  Final class: {} (up {} {})",
        format_class_badge(&result.final_class, use_colors),
        result.classes_moved,
        if result.classes_moved == 1 { "class" } else { "classes" }
    ));

    lines.join("\n")
}

/// One name per line, or a placeholder when there is nothing to list
pub fn format_name_list(names: &[&str], empty_message: &str) -> String {
    if names.is_empty() {
        return empty_message.to_string();
    }
    names.join("\n")
}

/// A category heading followed by its items, points right-aligned
pub fn format_mod_items(category: Category, items: &[ModItem], use_colors: bool) -> String {
    let heading = category.as_str().to_uppercase();
    let mut lines = vec![if use_colors {
        heading.bold().to_string()
    } else {
        heading
    }];

    if category == Category::Tires {
        lines.push("  (choose exactly one)".to_string());
    }
    for item in items {
        lines.push(format!("  {:>4}  {}", format_points(item.points), item.label));
    }
    lines.join("\n")
}

/// Saved configurations, newest first, 1-based index
pub fn format_saved_list(store: &SavedStore, use_colors: bool) -> String {
    if store.is_empty() {
        return "No saved configurations.".to_string();
    }

    store
        .configs
        .iter()
        .enumerate()
        .map(|(idx, saved)| {
            let r = &saved.result;
            let index_str = format!("{:>2}.", idx + 1);
            let date = saved.saved_at.format("%Y-%m-%d %H:%M").to_string();
            format!(
                "{} {}  {} {}  {} pts  {}",
                if use_colors {
                    index_str.dimmed().to_string()
                } else {
                    index_str
                },
                format_class_badge(&r.final_class, use_colors),
                r.make,
                r.model,
                r.total_points,
                date
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ClassificationResult {
        ClassificationResult {
            make: "Ford".to_string(),
            model: "Mustang GT (S550)".to_string(),
            base_class_raw: "TTC*".to_string(),
            base_class_clean: "TTC".to_string(),
            base_bonus_points: 7,
            modification_points: 20,
            total_points: 27,
            promotion_tier: 1,
            classes_moved: 1,
            final_class: "TTB".to_string(),
        }
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(20), "+20");
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(-3), "-3");
    }

    #[test]
    fn test_badge_without_colors() {
        assert_eq!(format_class_badge("TTX", false), "[TTX]");
    }

    #[test]
    fn test_badge_with_colors_has_escape_codes() {
        let badge = format_class_badge("TTA", true);
        assert!(badge.contains("\u{1b}["));
        assert!(badge.contains("TTA"));
    }

    #[test]
    fn test_format_result_plain() {
        let output = format_result(&sample_result(), false);
        let expected = "Ford Mustang GT (S550)\n  \
Base class: [TTC] (TTC*)\n  \
Special indicators: * adds +7 points\n  \
Base class points: +7\n  \
Modification points: +20\n  \
Total points: 27\n  \
Final class: [TTB] (up 1 class)";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_result_without_indicators() {
        let mut result = sample_result();
        result.base_class_raw = "TTC".to_string();
        result.base_bonus_points = 0;
        result.promotion_tier = 2;
        result.classes_moved = 2;
        let output = format_result(&result, false);
        assert!(!output.contains("Special indicators"));
        assert!(output.contains("Base class points: 0"));
        assert!(output.contains("(up 2 classes)"));
    }

    #[test]
    fn test_format_result_reports_capped_movement() {
        let mut result = sample_result();
        result.base_class_raw = "TTA*".to_string();
        result.base_class_clean = "TTA".to_string();
        result.total_points = 107;
        result.promotion_tier = 6;
        result.classes_moved = 1;
        result.final_class = "TTX".to_string();
        let output = format_result(&result, false);
        assert!(output.ends_with("Final class: [TTX] (up 1 class)"));
        assert!(!output.contains("up 6"));
    }

    #[test]
    fn test_format_name_list() {
        assert_eq!(format_name_list(&["BMW", "Ford"], "none"), "BMW\nFord");
        assert_eq!(format_name_list(&[], "No models for 'Yugo'."), "No models for 'Yugo'.");
    }

    #[test]
    fn test_format_mod_items() {
        let items = vec![
            ModItem {
                label: "OEM (0 points)".to_string(),
                points: 0,
            },
            ModItem {
                label: "Slick (+18 points)".to_string(),
                points: 18,
            },
        ];
        let output = format_mod_items(Category::Tires, &items, false);
        assert_eq!(
            output,
            "TIRES\n  (choose exactly one)\n     0  OEM (0 points)\n   +18  Slick (+18 points)"
        );
    }

    #[test]
    fn test_format_saved_list_empty() {
        assert_eq!(
            format_saved_list(&SavedStore::new(), false),
            "No saved configurations."
        );
    }
}

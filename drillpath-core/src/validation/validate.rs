//! Validation logic for drill configurations and jobs.

use std::cmp::Ordering;

use crate::config::float_cmp::{approx_eq, is_positive};
use crate::config::EPS;
use crate::error::{ProgramError, Result};
use crate::generator::format_coord;
use crate::model::{DrillConfig, DrillType, Hole, Job};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Check a drilling configuration for physical sanity.
///
/// Returns every problem found; an empty list means the configuration can be
/// handed to the generator. Never fails.
pub fn validate_config(config: &DrillConfig) -> Vec<String> {
    let mut problems = Vec::new();

    check_positive(&mut problems, "Diameter", config.diameter);
    check_positive(&mut problems, "Depth", config.depth);

    if config.drill_type == DrillType::Counterbore {
        match (config.cb_diameter, config.diameter) {
            (None, _) => problems.push("Counterbore diameter is required".to_string()),
            (Some(cb_diameter), Some(diameter))
                if cb_diameter.partial_cmp(&diameter) != Some(Ordering::Greater) =>
            {
                problems.push(format!(
                    "Counterbore diameter ({}) must be larger than hole diameter ({})",
                    cb_diameter, diameter
                ));
            }
            (Some(cb_diameter), None) if !is_positive(cb_diameter) => {
                problems.push(format!(
                    "Counterbore diameter must be greater than 0 (got {})",
                    cb_diameter
                ));
            }
            _ => {}
        }
        check_positive(&mut problems, "Counterbore depth", config.cb_depth);
    }

    problems
}

fn check_positive(problems: &mut Vec<String>, name: &str, value: Option<f64>) {
    match value {
        None => problems.push(format!("{} is required", name)),
        Some(v) if !is_positive(v) => {
            problems.push(format!("{} must be greater than 0 (got {})", name, v))
        }
        Some(_) => {}
    }
}

/// Validate a whole job: configuration, patterns, holes and stock.
pub fn validate_job(job: &Job) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for problem in validate_config(&job.config) {
        result.add_error(problem);
    }

    let pattern_problems = job.pattern_problems();
    let patterns_valid = pattern_problems.is_empty();
    for problem in pattern_problems {
        result.add_error(problem);
    }

    if job.hole_count() == 0 {
        result.add_error("No holes to drill");
    }

    result.merge(validate_stock(job));

    // Expanding a rejected pattern would only add noise
    if patterns_valid {
        result.merge(validate_holes(job));
    }

    result
}

/// Compare hole depths against the material thickness.
fn validate_stock(job: &Job) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let config = &job.config;

    let Some(depth) = config.depth.map(f64::abs) else {
        return result;
    };

    if let Some(thickness) = config.material_thickness(&job.settings) {
        match config.drill_type {
            DrillType::Blind if depth >= thickness - EPS => {
                result.add_warning(format!(
                    "Blind hole depth {} reaches material thickness {}",
                    format_coord(depth),
                    format_coord(thickness)
                ));
            }
            DrillType::Through if depth < thickness - EPS => {
                result.add_warning(format!(
                    "Through hole depth {} is less than material thickness {}",
                    format_coord(depth),
                    format_coord(thickness)
                ));
            }
            _ => {}
        }
    }

    if config.drill_type == DrillType::Counterbore {
        if let Some(cb_depth) = config.cb_depth {
            if cb_depth.abs() >= depth - EPS {
                result.add_warning(format!(
                    "Counterbore depth {} is not shallower than pilot depth {}",
                    format_coord(cb_depth.abs()),
                    format_coord(depth)
                ));
            }
        }
    }

    result
}

/// Check resolved holes for duplicates and sizes the configuration overrides.
fn validate_holes(job: &Job) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let holes = job.resolve_holes();
    let first_match = first_duplicates(&holes);

    for (idx, hole) in holes.iter().enumerate() {
        if let Some(dup) = first_match[idx].map(|d| &holes[d]) {
            result.add_warning(format!(
                "Holes {} and {} share position ({}, {})",
                dup.sequence_number,
                hole.sequence_number,
                format_coord(hole.x),
                format_coord(hole.y)
            ));
        }

        let overridden = [
            ("diameter", hole.diameter, job.config.diameter),
            ("depth", hole.depth, job.config.depth),
        ];
        for (name, own, configured) in overridden {
            if let (Some(own), Some(configured)) = (own, configured) {
                if !approx_eq(own, configured) {
                    result.add_warning(format!(
                        "Hole {}: {} {} differs from configured {}; configured value is used",
                        hole.sequence_number,
                        name,
                        format_coord(own),
                        format_coord(configured)
                    ));
                }
            }
        }
    }

    result
}

/// For each hole, the earliest preceding hole at the same position.
///
/// Sorts by X and only compares holes whose X values lie within epsilon.
fn first_duplicates(holes: &[Hole]) -> Vec<Option<usize>> {
    let mut by_x: Vec<usize> = (0..holes.len()).collect();
    by_x.sort_by(|&a, &b| holes[a].x.total_cmp(&holes[b].x));

    let mut first_match: Vec<Option<usize>> = vec![None; holes.len()];
    for (pos, &a) in by_x.iter().enumerate() {
        for &b in &by_x[pos + 1..] {
            if (holes[b].x - holes[a].x).partial_cmp(&EPS) != Some(Ordering::Less) {
                break;
            }
            if holes[a].same_position(&holes[b]) {
                let (earlier, later) = (a.min(b), a.max(b));
                let entry = &mut first_match[later];
                if entry.map_or(true, |current| earlier < current) {
                    *entry = Some(earlier);
                }
            }
        }
    }

    first_match
}

/// Fail fast on the first class of blocking problem in a job.
pub fn quick_validate(job: &Job) -> Result<()> {
    let problems = job.pattern_problems();
    if !problems.is_empty() {
        return Err(ProgramError::InvalidPattern { problems });
    }

    let problems = validate_config(&job.config);
    if !problems.is_empty() {
        return Err(ProgramError::InvalidConfig { problems });
    }

    if job.hole_count() == 0 {
        return Err(ProgramError::NoHoles);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::pattern::PatternSpec;

    fn create_basic_job() -> Job {
        Job::new(
            Settings::default(),
            DrillConfig::new(DrillType::Through, 0.25, 0.75),
            vec![Hole::at(1.0, 1.0), Hole::at(2.0, 1.0)],
        )
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_add_error() {
        let mut result = ValidationResult::ok();
        result.add_error("Something went wrong");
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Something went wrong".to_string()]);
    }

    #[test]
    fn test_validation_result_add_warning() {
        let mut result = ValidationResult::ok();
        result.add_warning("This is a warning");
        assert!(result.passed); // Warnings don't fail validation
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_config tests ====================

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&DrillConfig::new(DrillType::Through, 0.25, 0.5)).is_empty());
        assert!(validate_config(&DrillConfig::counterbore(0.25, 0.5, 0.5, 0.125)).is_empty());
    }

    #[test]
    fn test_validate_config_missing_fields() {
        let problems = validate_config(&DrillConfig::default());
        assert_eq!(
            problems,
            vec!["Diameter is required".to_string(), "Depth is required".to_string()]
        );
    }

    #[test]
    fn test_validate_config_non_positive() {
        let problems = validate_config(&DrillConfig::new(DrillType::Pocket, 0.0, -1.0));
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("Diameter must be greater than 0"));
        assert!(problems[1].contains("Depth must be greater than 0"));

        let problems = validate_config(&DrillConfig::new(DrillType::Pocket, f64::NAN, 1.0));
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn test_validate_config_counterbore_not_wider() {
        let config = DrillConfig::counterbore(0.5, 0.5, 0.4, 0.2);
        let problems = validate_config(&config);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("must be larger than hole diameter"));

        let equal = DrillConfig::counterbore(0.5, 0.5, 0.5, 0.2);
        assert_eq!(validate_config(&equal).len(), 1);
    }

    #[test]
    fn test_validate_config_counterbore_missing_fields() {
        let mut config = DrillConfig::counterbore(0.25, 0.5, 0.5, 0.2);
        config.cb_diameter = None;
        config.cb_depth = None;
        let problems = validate_config(&config);
        assert_eq!(
            problems,
            vec![
                "Counterbore diameter is required".to_string(),
                "Counterbore depth is required".to_string()
            ]
        );
    }

    #[test]
    fn test_validate_config_counterbore_fields_ignored_for_other_types() {
        let mut config = DrillConfig::new(DrillType::Blind, 0.5, 0.25);
        config.cb_diameter = Some(0.1);
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_validate_config_reports_everything() {
        let config = DrillConfig::counterbore(-1.0, 0.0, -2.0, 0.0);
        assert_eq!(validate_config(&config).len(), 4);
    }

    // ==================== validate_job tests ====================

    #[test]
    fn test_validate_job_valid() {
        let result = validate_job(&create_basic_job());
        assert!(result.passed, "{:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_job_no_holes() {
        let mut job = create_basic_job();
        job.holes.clear();
        let result = validate_job(&job);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e == "No holes to drill"));
    }

    #[test]
    fn test_validate_job_pattern_holes_count() {
        let mut job = create_basic_job();
        job.holes.clear();
        job.patterns.push(PatternSpec::Rectangular {
            rows: 2,
            cols: 2,
            spacing_x: 1.0,
            spacing_y: 1.0,
            origin_x: 5.0,
            origin_y: 5.0,
        });
        assert!(validate_job(&job).passed);
    }

    #[test]
    fn test_validate_job_oversized_pattern() {
        let job = crate::parser::parse_job(
            r#"{
                "config": { "type": "through", "diameter": 0.25, "depth": 0.75 },
                "patterns": [
                    { "kind": "rectangular", "rows": 4294967296, "cols": 4294967296,
                      "spacing_x": 1.0, "spacing_y": 1.0 }
                ]
            }"#,
        )
        .expect("Should parse");

        let result = validate_job(&job);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Pattern 1: Array expands to too many holes"));
        assert!(matches!(
            quick_validate(&job),
            Err(ProgramError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_validate_config_nan_counterbore_diameter() {
        let config = DrillConfig::counterbore(0.25, 0.5, f64::NAN, 0.2);
        let problems = validate_config(&config);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("must be larger than hole diameter"));
    }

    #[test]
    fn test_validate_job_bad_pattern() {
        let mut job = create_basic_job();
        job.patterns.push(PatternSpec::Circular {
            count: 1,
            radius: 0.0,
            center_x: 0.0,
            center_y: 0.0,
            start_angle: 0.0,
        });
        let result = validate_job(&job);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors.iter().all(|e| e.starts_with("Pattern 1: ")));
    }

    #[test]
    fn test_validate_job_blind_through_material_warning() {
        let mut job = create_basic_job();
        job.config.drill_type = DrillType::Blind;
        job.config.material_thickness = Some(0.75);
        let result = validate_job(&job);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Blind hole depth 0.750 reaches material thickness 0.750")));
    }

    #[test]
    fn test_validate_job_shallow_through_warning() {
        let mut job = create_basic_job();
        job.settings.material_thickness = Some(1.0);
        let result = validate_job(&job);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("less than material thickness 1.000")));
    }

    #[test]
    fn test_validate_job_counterbore_depth_warning() {
        let mut job = create_basic_job();
        job.config = DrillConfig::counterbore(0.25, 0.5, 0.5, 0.5);
        let result = validate_job(&job);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("not shallower than pilot depth")));
    }

    #[test]
    fn test_validate_job_duplicate_positions() {
        let mut job = create_basic_job();
        job.holes.push(Hole::at(1.0, 1.0));
        let result = validate_job(&job);
        assert!(result.passed); // Duplicates are only a warning
        assert!(result
            .warnings
            .iter()
            .any(|w| w == "Holes 1 and 3 share position (1.000, 1.000)"));
    }

    #[test]
    fn test_validate_job_duplicates_report_earliest_match() {
        let mut job = create_basic_job();
        job.holes = vec![
            Hole::at(5.0, 5.0),
            Hole::at(1.0, 1.0),
            Hole::at(5.00001, 5.0),
            Hole::at(5.0, 5.0),
        ];
        let result = validate_job(&job);
        assert_eq!(
            result.warnings,
            vec![
                "Holes 1 and 3 share position (5.000, 5.000)".to_string(),
                "Holes 1 and 4 share position (5.000, 5.000)".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_job_large_pattern() {
        let mut job = create_basic_job();
        job.holes.clear();
        job.patterns.push(PatternSpec::Rectangular {
            rows: 200,
            cols: 500,
            spacing_x: 0.5,
            spacing_y: 0.5,
            origin_x: 0.0,
            origin_y: 0.0,
        });
        job.patterns.push(PatternSpec::Rectangular {
            rows: 1,
            cols: 1,
            spacing_x: 1.0,
            spacing_y: 1.0,
            origin_x: 10.0,
            origin_y: 10.0,
        });
        let result = validate_job(&job);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].ends_with("share position (10.000, 10.000)"));
    }

    #[test]
    fn test_validate_job_hole_size_differs() {
        let mut job = create_basic_job();
        job.holes[1].diameter = Some(0.5);
        let result = validate_job(&job);
        assert!(result.passed);
        assert_eq!(
            result.warnings,
            vec!["Hole 2: diameter 0.500 differs from configured 0.250; configured value is used"
                .to_string()]
        );
    }

    // ==================== quick_validate tests ====================

    #[test]
    fn test_quick_validate_success() {
        assert!(quick_validate(&create_basic_job()).is_ok());
    }

    #[test]
    fn test_quick_validate_failure() {
        let mut job = create_basic_job();
        job.config.depth = None;
        match quick_validate(&job) {
            Err(ProgramError::InvalidConfig { problems }) => {
                assert_eq!(problems, vec!["Depth is required".to_string()]);
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }

        let mut job = create_basic_job();
        job.holes.clear();
        assert!(matches!(quick_validate(&job), Err(ProgramError::NoHoles)));
    }
}

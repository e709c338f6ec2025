//! Wizard step topology — bounds, categories, and what each step collects.
//!
//! Both branches walk the same eight steps. Steps that mean nothing for a
//! category are still visited as inert placeholders.

use serde::{Deserialize, Serialize};

/// First wizard step.
pub const FIRST_STEP: u8 = 1;
/// Last wizard step, for every category.
pub const MAX_STEPS: u8 = 8;

/// Which kind of listing the draft describes. Chosen at step 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingCategory {
    #[default]
    Unset,
    Property,
    Job,
}

impl std::fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unset => "unset",
            Self::Property => "property",
            Self::Job => "job",
        };
        write!(f, "{s}")
    }
}

/// Description of one wizard step for a given category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub step: u8,
    pub title: &'static str,
    /// False for placeholder steps the category does not use.
    pub applicable: bool,
}

/// Clamp `step` into `FIRST_STEP..=MAX_STEPS`.
pub fn clamp_step(step: u8) -> u8 {
    step.clamp(FIRST_STEP, MAX_STEPS)
}

/// Describe `step` (clamped) for `category`.
pub fn step_info(step: u8, category: ListingCategory) -> StepInfo {
    let step = clamp_step(step);
    let (title, applicable) = match (category, step) {
        (_, 1) => ("Choose a category", true),

        (ListingCategory::Property, 2) => ("Rent or sell", true),
        (ListingCategory::Property, 3) => ("Property type", true),
        (ListingCategory::Property, 4) => ("Address", true),
        (ListingCategory::Property, 5) => ("Rooms and size", true),
        (ListingCategory::Property, 6) => ("Amenities", true),
        (ListingCategory::Property, 7) => ("Photos", true),
        (ListingCategory::Property, _) => ("Price and description", true),

        (ListingCategory::Job, 2) => ("Job title and company", true),
        (ListingCategory::Job, 3) => ("Employment type", true),
        (ListingCategory::Job, 4) => ("Location", true),
        (ListingCategory::Job, 5) => ("Rooms and size", false),
        (ListingCategory::Job, 6) => ("Amenities", false),
        (ListingCategory::Job, 7) => ("Photos", true),
        (ListingCategory::Job, _) => ("Pay and description", true),

        (ListingCategory::Unset, _) => ("Choose a category first", false),
    };

    StepInfo {
        step,
        title,
        applicable,
    }
}

/// All steps for `category`, in order.
pub fn steps_for(category: ListingCategory) -> Vec<StepInfo> {
    (FIRST_STEP..=MAX_STEPS)
        .map(|step| step_info(step, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_bounds() {
        assert_eq!(clamp_step(0), FIRST_STEP);
        assert_eq!(clamp_step(5), 5);
        assert_eq!(clamp_step(200), MAX_STEPS);
    }

    #[test]
    fn every_category_has_eight_steps() {
        for category in [
            ListingCategory::Unset,
            ListingCategory::Property,
            ListingCategory::Job,
        ] {
            let steps = steps_for(category);
            assert_eq!(steps.len(), MAX_STEPS as usize);
            assert_eq!(steps[0].title, "Choose a category");
            assert!(steps[0].applicable);
        }
    }

    #[test]
    fn job_branch_keeps_inert_property_steps() {
        let inert: Vec<u8> = steps_for(ListingCategory::Job)
            .into_iter()
            .filter(|s| !s.applicable)
            .map(|s| s.step)
            .collect();
        assert_eq!(inert, vec![5, 6]);
        assert!(steps_for(ListingCategory::Property).iter().all(|s| s.applicable));
    }

    #[test]
    fn category_serde_matches_display() {
        for category in [
            ListingCategory::Unset,
            ListingCategory::Property,
            ListingCategory::Job,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GradeThresholds;

/// Qualitative command grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Average,
    Fair,
    Poor,
}

/// Short style tag paired with a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassTag {
    Excellent,
    Good,
    Average,
    Fair,
    Poor,
}

impl Grade {
    pub fn from_score(score: u8, thresholds: &GradeThresholds) -> Self {
        if score >= thresholds.excellent {
            Grade::Excellent
        } else if score >= thresholds.very_good {
            Grade::VeryGood
        } else if score >= thresholds.average {
            Grade::Average
        } else if score >= thresholds.fair {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    /// Grade for an unrounded mean; non-finite means grade as 0
    pub fn from_average(average: f64, thresholds: &GradeThresholds) -> Self {
        let average = if average.is_finite() { average } else { 0.0 };
        if average >= f64::from(thresholds.excellent) {
            Grade::Excellent
        } else if average >= f64::from(thresholds.very_good) {
            Grade::VeryGood
        } else if average >= f64::from(thresholds.average) {
            Grade::Average
        } else if average >= f64::from(thresholds.fair) {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::VeryGood => "Very Good",
            Grade::Average => "Average",
            Grade::Fair => "Fair",
            Grade::Poor => "Poor",
        }
    }

    pub fn class_tag(&self) -> ClassTag {
        match self {
            Grade::Excellent => ClassTag::Excellent,
            Grade::VeryGood => ClassTag::Good,
            Grade::Average => ClassTag::Average,
            Grade::Fair => ClassTag::Fair,
            Grade::Poor => ClassTag::Poor,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ClassTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassTag::Excellent => "excellent",
            ClassTag::Good => "good",
            ClassTag::Average => "average",
            ClassTag::Fair => "fair",
            ClassTag::Poor => "poor",
        }
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        let t = GradeThresholds::default();
        let expected = [
            (10, Grade::Excellent),
            (8, Grade::Excellent),
            (7, Grade::VeryGood),
            (6, Grade::VeryGood),
            (5, Grade::Average),
            (4, Grade::Fair),
            (3, Grade::Fair),
            (2, Grade::Poor),
            (1, Grade::Poor),
            (0, Grade::Poor),
        ];
        for (score, grade) in expected {
            assert_eq!(Grade::from_score(score, &t), grade, "score {}", score);
        }
    }

    #[test]
    fn test_average_is_not_rounded_up() {
        let t = GradeThresholds::default();
        assert_eq!(Grade::from_average(7.5, &t), Grade::VeryGood);
        assert_eq!(Grade::from_average(7.99, &t), Grade::VeryGood);
        assert_eq!(Grade::from_average(8.0, &t), Grade::Excellent);
        assert_eq!(Grade::from_average(5.5, &t), Grade::Average);
        assert_eq!(Grade::from_average(2.9, &t), Grade::Poor);
        assert_eq!(Grade::from_average(f64::NAN, &t), Grade::Poor);
    }

    #[test]
    fn test_labels_and_tags() {
        assert_eq!(Grade::VeryGood.to_string(), "Very Good");
        assert_eq!(Grade::VeryGood.class_tag(), ClassTag::Good);
        assert_eq!(Grade::Poor.class_tag().as_str(), "poor");
        assert_eq!(serde_json::to_string(&Grade::VeryGood).unwrap(), "\"Very Good\"");
        assert_eq!(serde_json::to_string(&ClassTag::Good).unwrap(), "\"good\"");
    }
}

//! Waste-sorting validation.
//!
//! A submission carries one front-view photo of the bin row and one
//! top-view photo per bin. The bin detector yields a count from the front
//! view; the classifier yields a label-set per top view. Validation then
//! enforces, in order:
//!
//! 1. the detected bin count matches the number of top views,
//! 2. every bin is pure (a single distinct waste label),
//! 3. no two bins carry the same label-set.
//!
//! Purity is checked before uniqueness, so a submission that fails both
//! reports the impure bin. Bin indices in violations are 1-based to match
//! the order the photos were submitted in.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::CoreError;

/// Maximum number of top-view photos (and therefore bins) per submission.
pub const MAX_TOP_VIEWS: usize = 3;

/// Distinct classification labels observed in one bin, order-insensitive.
pub type LabelSet = BTreeSet<String>;

/// Normalize raw classifier output into a [`LabelSet`].
///
/// Labels are trimmed and lowercased so `"Plastic "` and `"plastic"`
/// count as the same waste category; blank labels are dropped.
pub fn label_set<S: AsRef<str>>(labels: &[S]) -> LabelSet {
    labels
        .iter()
        .map(|l| l.as_ref().trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Detected bin count disagrees with the number of submitted top views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BinCountMismatch {
    pub detected: i64,
    pub submitted: usize,
}

/// Validate that the submitted top views cover exactly the detected bins.
pub fn check_bin_count(detected: i64, submitted: usize) -> Result<(), BinCountMismatch> {
    if detected == submitted as i64 {
        Ok(())
    } else {
        Err(BinCountMismatch { detected, submitted })
    }
}

/// A sorting rule broken by a submission. Bin numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SortingViolation {
    /// One bin holds more than one distinct waste category.
    ImpureBin { bin: usize, labels: Vec<String> },
    /// Two bins hold the same waste category (or category mix).
    DuplicateCategory {
        first_bin: usize,
        second_bin: usize,
        labels: Vec<String>,
    },
}

impl SortingViolation {
    /// Human-readable rejection message for the response body.
    pub fn message(&self) -> String {
        match self {
            SortingViolation::ImpureBin { bin, labels } => format!(
                "Bin {bin} is improperly sorted: contains {}",
                labels.join(", ")
            ),
            SortingViolation::DuplicateCategory {
                first_bin,
                second_bin,
                labels,
            } => format!(
                "Bins {first_bin} and {second_bin} both contain {}",
                labels.join(", ")
            ),
        }
    }
}

/// Run the purity check, then the cross-bin uniqueness check.
///
/// Returns the first violation found: purity failures are reported
/// bin-by-bin in submission order, and only a fully pure submission is
/// checked for duplicate categories.
pub fn validate_sorting(bins: &[LabelSet]) -> Result<(), SortingViolation> {
    for (i, labels) in bins.iter().enumerate() {
        if labels.len() > 1 {
            return Err(SortingViolation::ImpureBin {
                bin: i + 1,
                labels: labels.iter().cloned().collect(),
            });
        }
    }

    for i in 0..bins.len() {
        for j in (i + 1)..bins.len() {
            if bins[i] == bins[j] {
                return Err(SortingViolation::DuplicateCategory {
                    first_bin: i + 1,
                    second_bin: j + 1,
                    labels: bins[i].iter().cloned().collect(),
                });
            }
        }
    }

    Ok(())
}

/// Validate the shape of a submission before any adapter call: at least
/// one top view, at most [`MAX_TOP_VIEWS`].
pub fn validate_top_view_count(submitted: usize) -> Result<(), CoreError> {
    if submitted == 0 {
        return Err(CoreError::Validation(
            "At least one top view image is required".into(),
        ));
    }
    if submitted > MAX_TOP_VIEWS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_TOP_VIEWS} top view images are allowed, got {submitted}"
        )));
    }
    Ok(())
}

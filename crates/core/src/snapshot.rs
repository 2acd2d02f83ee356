//! Snapshot codec for project versioning.
//!
//! A [`VersionSnapshot`] freezes a project's editable fields plus its current
//! generated output into an immutable value that the version store persists.
//! Capture is a pure transformation: it performs no validation and keeps no
//! reference to the live input, so later mutation of the live output can never
//! retroactively change a stored version.

use serde::{Deserialize, Serialize};

use crate::plan::PlanContent;

/// An immutable copy of a project's editable state at version-creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    /// Project title at capture time.
    pub title: String,
    /// Idea description text at capture time.
    pub idea_text: Option<String>,
    /// Premium flag at capture time.
    pub is_premium: bool,
    /// Deep copy of the generated plan content, or `None` if the project had
    /// no generated output yet.
    pub output: Option<PlanContent>,
}

impl VersionSnapshot {
    /// Capture a snapshot from a project's editable fields and its current
    /// generated output.
    ///
    /// The output is cloned into an owned, independent value; the caller's
    /// `PlanContent` can be mutated freely afterwards.
    pub fn capture(
        title: &str,
        idea_text: Option<&str>,
        is_premium: bool,
        output: Option<&PlanContent>,
    ) -> Self {
        Self {
            title: title.to_owned(),
            idea_text: idea_text.map(str::to_owned),
            is_premium,
            output: output.cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> PlanContent {
        PlanContent {
            market_analysis: Some("growing market".to_string()),
            swot: Some(serde_json::json!({
                "strengths": ["first mover"],
                "weaknesses": ["small team"],
            })),
            pitch: Some("the pitch".to_string()),
            ..PlanContent::empty()
        }
    }

    #[test]
    fn capture_copies_all_fields() {
        let output = sample_output();
        let snap = VersionSnapshot::capture("Acme", Some("sell anvils"), true, Some(&output));

        assert_eq!(snap.title, "Acme");
        assert_eq!(snap.idea_text.as_deref(), Some("sell anvils"));
        assert!(snap.is_premium);
        assert_eq!(snap.output.as_ref(), Some(&output));
    }

    #[test]
    fn capture_without_output_marks_none() {
        let snap = VersionSnapshot::capture("Acme", None, false, None);
        assert!(snap.output.is_none());
        assert!(snap.idea_text.is_none());
    }

    #[test]
    fn snapshot_is_independent_of_live_output() {
        let mut output = sample_output();
        let snap = VersionSnapshot::capture("Acme", None, false, Some(&output));

        // Mutate the live output after capture.
        output.market_analysis = Some("shrinking market".to_string());
        output.swot = None;

        let embedded = snap.output.unwrap();
        assert_eq!(
            embedded.market_analysis.as_deref(),
            Some("growing market"),
            "snapshot must not track live mutations"
        );
        assert!(embedded.swot.is_some());
    }

    #[test]
    fn partial_output_preserved_as_is() {
        // Missing sections are stored as-is, not rejected or filled in.
        let output = PlanContent {
            pitch: Some("only a pitch".to_string()),
            ..PlanContent::empty()
        };
        let snap = VersionSnapshot::capture("Acme", None, false, Some(&output));
        let embedded = snap.output.unwrap();
        assert_eq!(embedded.pitch.as_deref(), Some("only a pitch"));
        assert!(embedded.market_analysis.is_none());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snap = VersionSnapshot::capture("Acme", Some("idea"), true, Some(&sample_output()));
        let value = serde_json::to_value(&snap).unwrap();
        let back: VersionSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, snap);
    }
}

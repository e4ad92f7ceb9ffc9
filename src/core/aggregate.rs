//! Aggregator
//!
//! Summary statistics and chart groupings over a fetched record set.
//! Everything here is a pure function over the input slice; records with
//! missing or out-of-range data are excluded from the relevant figures
//! rather than treated as errors.

use super::records::AnalysisRecord;

/// Headline figures for the stats panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Mean of the present compliance scores, rounded to 2 decimals.
    /// Records without a score are excluded from both sum and count.
    pub average_compliance: f64,
    /// Count of all input records, scored or not.
    pub total_calls: usize,
    /// Most frequent raw emotion label. Grouping is case-sensitive on the
    /// exact string value; ties go to the label seen first in input order.
    pub most_common_emotion: Option<String>,
}

/// One emotion label with its occurrence count.
#[derive(Clone, Debug, PartialEq)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: usize,
}

/// One histogram bucket of the score distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreBucket {
    pub label: &'static str,
    pub count: usize,
}

/// Fixed score buckets in display order. Each bucket takes scores from
/// its lower bound (inclusive) up to the next bucket's lower bound; the
/// last bucket is closed at 10.
const SCORE_BUCKETS: [(&str, f64, f64); 5] = [
    ("0-2", 0.0, 2.0),
    ("2-4", 2.0, 4.0),
    ("4-6", 4.0, 6.0),
    ("6-8", 6.0, 8.0),
    ("8-10", 8.0, 10.0),
];

/// Compute the headline summary. Returns `None` when the input is empty
/// or no record carries a numeric score, so callers can distinguish
/// "nothing to show" from a genuine zero average.
pub fn summarize(records: &[AnalysisRecord]) -> Option<Summary> {
    if records.is_empty() {
        return None;
    }

    let scores: Vec<f64> = records.iter().filter_map(|r| r.compliance_score()).collect();
    if scores.is_empty() {
        return None;
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    let average_compliance = (average * 100.0).round() / 100.0;

    let most_common_emotion = group_by_emotion(records)
        .into_iter()
        // max_by_key returns the last maximum; a strict fold keeps the
        // first-seen label on ties.
        .fold(None::<EmotionCount>, |best, candidate| match best {
            Some(b) if b.count >= candidate.count => Some(b),
            _ => Some(candidate),
        })
        .map(|e| e.emotion);

    Some(Summary {
        average_compliance,
        total_calls: records.len(),
        most_common_emotion,
    })
}

/// Count occurrences of each distinct emotion label. Exact string match,
/// no normalization; labels appear in first-seen input order so the chart
/// legend stays stable across refreshes. Records without an analysis, or
/// whose label is the empty string, contribute to no group (and therefore
/// never become the most common emotion).
pub fn group_by_emotion(records: &[AnalysisRecord]) -> Vec<EmotionCount> {
    let mut groups: Vec<EmotionCount> = Vec::new();
    for record in records {
        let Some(emotion) = record.emotion() else {
            continue;
        };
        match groups.iter_mut().find(|g| g.emotion == emotion) {
            Some(group) => group.count += 1,
            None => groups.push(EmotionCount {
                emotion: emotion.to_string(),
                count: 1,
            }),
        }
    }
    groups
}

/// Group scores into the five fixed histogram buckets. Scores outside
/// `[0, 10]` and records without a score are excluded from every bucket.
pub fn bucket_by_score_range(records: &[AnalysisRecord]) -> Vec<ScoreBucket> {
    let mut counts = [0usize; SCORE_BUCKETS.len()];
    let last = SCORE_BUCKETS.len() - 1;
    for score in records.iter().filter_map(|r| r.compliance_score()) {
        let slot = SCORE_BUCKETS.iter().position(|&(_, low, high)| {
            score >= low && score < high
        });
        match slot {
            Some(i) => counts[i] += 1,
            // Exactly 10 belongs to the closed last bucket.
            None if score >= SCORE_BUCKETS[last].1 && score <= 10.0 => counts[last] += 1,
            None => {}
        }
    }

    SCORE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(&(label, _, _), count)| ScoreBucket { label, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::Analysis;

    fn record(contact_id: &str, score: Option<f64>, emotion: &str) -> AnalysisRecord {
        AnalysisRecord {
            contact_id: contact_id.to_string(),
            phone_number: String::new(),
            analysis_timestamp: "2024-01-01 00:00:00".to_string(),
            analysis: Some(Analysis {
                compliance_score: score,
                customer_emotion: emotion.to_string(),
                ..Default::default()
            }),
            customer_info: None,
        }
    }

    fn unanalyzed(contact_id: &str) -> AnalysisRecord {
        AnalysisRecord {
            contact_id: contact_id.to_string(),
            phone_number: String::new(),
            analysis_timestamp: String::new(),
            analysis: None,
            customer_info: None,
        }
    }

    #[test]
    fn test_average_excludes_missing_scores() {
        let records = vec![
            record("a", Some(6.0), "neutral"),
            record("b", Some(8.0), "neutral"),
            record("c", None, "neutral"),
            record("d", Some(10.0), "neutral"),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.average_compliance, 8.0);
        assert_eq!(summary.total_calls, 4);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let records = vec![
            record("a", Some(7.0), "positive"),
            record("b", Some(8.0), "positive"),
            record("c", Some(8.0), "positive"),
        ];
        // 23 / 3 = 7.666..., rounds to 7.67.
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.average_compliance, 7.67);
    }

    #[test]
    fn test_empty_input_is_none_not_zero() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_no_scored_records_is_none() {
        let records = vec![record("a", None, "neutral"), unanalyzed("b")];
        assert_eq!(summarize(&records), None);
    }

    #[test]
    fn test_most_common_emotion_tie_goes_to_first_seen() {
        let records = vec![
            record("a", Some(5.0), "frustrated"),
            record("b", Some(5.0), "calm"),
            record("c", Some(5.0), "calm"),
            record("d", Some(5.0), "frustrated"),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.most_common_emotion.as_deref(), Some("frustrated"));
    }

    #[test]
    fn test_most_common_emotion_is_case_sensitive() {
        // "Positive" and "positive" are distinct groups here, even though
        // the color mapping elsewhere folds case.
        let records = vec![
            record("a", Some(5.0), "Positive"),
            record("b", Some(5.0), "positive"),
            record("c", Some(5.0), "positive"),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.most_common_emotion.as_deref(), Some("positive"));
    }

    #[test]
    fn test_group_by_emotion_preserves_insertion_order() {
        let records = vec![
            record("a", None, "neutral"),
            record("b", None, "positive"),
            record("c", None, "neutral"),
        ];
        let groups = group_by_emotion(&records);
        assert_eq!(
            groups,
            vec![
                EmotionCount { emotion: "neutral".to_string(), count: 2 },
                EmotionCount { emotion: "positive".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_group_by_emotion_skips_unlabeled() {
        let records = vec![record("a", None, ""), unanalyzed("b")];
        assert!(group_by_emotion(&records).is_empty());
    }

    #[test]
    fn test_most_common_emotion_is_none_when_all_unlabeled() {
        // Scored records still produce a summary, but a blank label never
        // forms an empty-string group.
        let records = vec![record("a", Some(6.0), ""), record("b", Some(8.0), "")];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.most_common_emotion, None);
        assert_eq!(summary.average_compliance, 7.0);
    }

    #[test]
    fn test_bucket_boundaries() {
        let records = vec![
            record("two", Some(2.0), ""),
            record("eight", Some(8.0), ""),
            record("ten", Some(10.0), ""),
            record("zero", Some(0.0), ""),
        ];
        let buckets = bucket_by_score_range(&records);
        let count = |label: &str| {
            buckets
                .iter()
                .find(|b| b.label == label)
                .map(|b| b.count)
                .unwrap()
        };
        assert_eq!(count("0-2"), 1); // exactly 0
        assert_eq!(count("2-4"), 1); // exactly 2 goes up, not into 0-2
        assert_eq!(count("6-8"), 0); // exactly 8 goes up, not into 6-8
        assert_eq!(count("8-10"), 2); // 8 and 10
    }

    #[test]
    fn test_bucket_excludes_out_of_range_and_missing() {
        let records = vec![
            record("high", Some(11.0), ""),
            record("low", Some(-1.0), ""),
            record("none", None, ""),
            unanalyzed("pending"),
        ];
        let buckets = bucket_by_score_range(&records);
        assert_eq!(buckets.len(), 5);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_buckets_always_in_display_order() {
        let labels: Vec<_> = bucket_by_score_range(&[]).iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["0-2", "2-4", "4-6", "6-8", "8-10"]);
    }
}

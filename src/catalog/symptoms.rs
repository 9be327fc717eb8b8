//! Symptom modifiers, keyed by normalized symptom name. The symptom set is
//! open-ended; anything without an entry here leaves the plan untouched.

use super::{BucketAdjustment, RecommendationPatch, Severity, SymptomModifier};
use crate::domain::models::{Bucket, Difficulty, Priority, Recommendation, TimeOfDay};

pub(super) fn modifiers() -> Vec<SymptomModifier> {
    vec![
        SymptomModifier {
            symptom: "cramps".into(),
            severity: Severity::Moderate,
            add: vec![Recommendation {
                id: "cramp-relief".into(),
                category: Bucket::Move,
                title: "Gentle Stretching".into(),
                description: "Hip flexor stretches and gentle twists to ease cramping".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Anytime),
                duration: Some("10-15 minutes".into()),
                difficulty: Some(Difficulty::Easy),
            }],
            modify: vec![BucketAdjustment {
                bucket: Bucket::Move,
                patch: RecommendationPatch {
                    difficulty: Some(Difficulty::Easy),
                    duration: Some("15-20 minutes".into()),
                    ..Default::default()
                },
            }],
            avoid: vec!["high-intensity".into(), "core-intensive".into()],
        },
        SymptomModifier {
            symptom: "fatigue".into(),
            severity: Severity::Moderate,
            add: vec![Recommendation {
                id: "energy-boost".into(),
                category: Bucket::Eat,
                title: "Energy-Boosting Snack".into(),
                description: "Apple with almond butter or a handful of nuts for sustained energy".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Afternoon),
                duration: None,
                difficulty: Some(Difficulty::Easy),
            }],
            modify: vec![
                BucketAdjustment {
                    bucket: Bucket::Move,
                    patch: RecommendationPatch {
                        difficulty: Some(Difficulty::Easy),
                        duration: Some("20-30 minutes".into()),
                        ..Default::default()
                    },
                },
                BucketAdjustment {
                    bucket: Bucket::Work,
                    patch: RecommendationPatch {
                        priority: Some(Priority::Medium),
                        ..Default::default()
                    },
                },
            ],
            avoid: vec!["high-intensity".into(), "long-duration".into()],
        },
        SymptomModifier {
            symptom: "mood swings".into(),
            severity: Severity::Moderate,
            add: vec![Recommendation {
                id: "mood-stabilizer".into(),
                category: Bucket::Connect,
                title: "Mindfulness Practice".into(),
                description: "10-minute meditation or journaling to process emotions".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Morning),
                duration: Some("10-15 minutes".into()),
                difficulty: Some(Difficulty::Easy),
            }],
            modify: vec![BucketAdjustment {
                bucket: Bucket::Connect,
                patch: RecommendationPatch {
                    priority: Some(Priority::High),
                    ..Default::default()
                },
            }],
            avoid: vec!["high-stress".into(), "confrontational".into()],
        },
    ]
}

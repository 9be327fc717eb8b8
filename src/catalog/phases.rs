//! Phase template data. Content mirrors the published cycle guidance the
//! product ships with; ids are stable and referenced by modifier tokens.

use super::{ExerciseGuidelines, PhaseTemplate, SocialNeeds, WorkOptimization};
use crate::domain::models::{
    Bucket, CyclePhase, Difficulty, EnergyPattern, Intensity, Priority, Recommendation,
    RecommendationSet, SocialPreference, TimeOfDay,
};

pub(super) fn templates() -> Vec<PhaseTemplate> {
    vec![menstrual(), follicular(), ovulatory(), luteal()]
}

fn menstrual() -> PhaseTemplate {
    PhaseTemplate {
        phase: CyclePhase::Menstrual,
        description: "Menstruation phase - time for rest, reflection, and gentle self-care".into(),
        duration: "3-7 days".into(),
        hormones: vec!["Low estrogen".into(), "Low progesterone".into()],
        energy_pattern: EnergyPattern::Low,
        key_focus: vec![
            "Rest".into(),
            "Gentle movement".into(),
            "Iron-rich nutrition".into(),
            "Emotional support".into(),
        ],
        base_recommendations: RecommendationSet {
            eat: vec![
                Recommendation {
                    id: "menstrual-iron".into(),
                    category: Bucket::Eat,
                    title: "Iron-Rich Foods".into(),
                    description: "Include spinach, lentils, and lean red meat to replenish iron stores".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
                Recommendation {
                    id: "menstrual-magnesium".into(),
                    category: Bucket::Eat,
                    title: "Magnesium for Cramps".into(),
                    description: "Dark chocolate, nuts, and seeds can help reduce cramping".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Evening),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
                Recommendation {
                    id: "menstrual-hydration".into(),
                    category: Bucket::Eat,
                    title: "Stay Hydrated".into(),
                    description: "Drink warm herbal teas like ginger or chamomile for comfort".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
            ],
            movement: vec![
                Recommendation {
                    id: "menstrual-gentle-yoga".into(),
                    category: Bucket::Move,
                    title: "Gentle Yoga".into(),
                    description: "Child's pose, cat-cow, and gentle twists to ease discomfort".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: Some("15-20 minutes".into()),
                    difficulty: Some(Difficulty::Easy),
                },
                Recommendation {
                    id: "menstrual-walking".into(),
                    category: Bucket::Move,
                    title: "Light Walking".into(),
                    description: "Gentle outdoor walk to boost mood and circulation".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Afternoon),
                    duration: Some("20-30 minutes".into()),
                    difficulty: Some(Difficulty::Easy),
                },
            ],
            work: vec![
                Recommendation {
                    id: "menstrual-planning".into(),
                    category: Bucket::Work,
                    title: "Strategic Planning".into(),
                    description: "Use introspective energy for planning and reflection".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
                Recommendation {
                    id: "menstrual-breaks".into(),
                    category: Bucket::Work,
                    title: "Regular Breaks".into(),
                    description: "Take frequent breaks and avoid overcommitting".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
            ],
            connect: vec![Recommendation {
                id: "menstrual-self-care".into(),
                category: Bucket::Connect,
                title: "Self-Care Ritual".into(),
                description: "Warm bath, journaling, or meditation for emotional wellness".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Evening),
                duration: Some("30-45 minutes".into()),
                difficulty: Some(Difficulty::Easy),
            }],
        },
        common_symptoms: vec![
            "cramps".into(),
            "fatigue".into(),
            "mood swings".into(),
            "bloating".into(),
            "back pain".into(),
        ],
        nutritional_priorities: vec![
            "Iron".into(),
            "Magnesium".into(),
            "Vitamin B6".into(),
            "Omega-3 fatty acids".into(),
        ],
        exercise_guidelines: ExerciseGuidelines {
            intensity: Intensity::Low,
            types: vec![
                "Gentle yoga".into(),
                "Walking".into(),
                "Stretching".into(),
                "Light swimming".into(),
            ],
            avoid: vec!["High-intensity training".into(), "Heavy lifting".into()],
        },
        work_optimization: WorkOptimization {
            best_for: vec![
                "Planning".into(),
                "Reflection".into(),
                "Creative thinking".into(),
                "Administrative tasks".into(),
            ],
            avoid: vec!["High-pressure meetings".into(), "Major presentations".into()],
            time_management: "Shorter work blocks with frequent breaks".into(),
        },
        social_needs: SocialNeeds {
            preference: SocialPreference::Solitude,
            activities: vec![
                "Quiet time with close friends".into(),
                "Solo activities".into(),
                "Gentle support".into(),
            ],
        },
    }
}

fn follicular() -> PhaseTemplate {
    PhaseTemplate {
        phase: CyclePhase::Follicular,
        description: "Follicular phase - energy building, new beginnings, and fresh starts".into(),
        duration: "7-10 days".into(),
        hormones: vec!["Rising estrogen".into()],
        energy_pattern: EnergyPattern::Building,
        key_focus: vec![
            "New projects".into(),
            "Learning".into(),
            "Building habits".into(),
            "Social connections".into(),
        ],
        base_recommendations: RecommendationSet {
            eat: vec![
                Recommendation {
                    id: "follicular-protein".into(),
                    category: Bucket::Eat,
                    title: "Lean Proteins".into(),
                    description: "Support muscle building with chicken, fish, and plant proteins".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
                Recommendation {
                    id: "follicular-complex-carbs".into(),
                    category: Bucket::Eat,
                    title: "Complex Carbohydrates".into(),
                    description: "Fuel growing energy with quinoa, sweet potatoes, and oats".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
            ],
            movement: vec![
                Recommendation {
                    id: "follicular-strength".into(),
                    category: Bucket::Move,
                    title: "Strength Training".into(),
                    description: "Build muscle with progressive resistance exercises".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: Some("45-60 minutes".into()),
                    difficulty: Some(Difficulty::Moderate),
                },
                Recommendation {
                    id: "follicular-cardio".into(),
                    category: Bucket::Move,
                    title: "Moderate Cardio".into(),
                    description: "Cycling, jogging, or dance classes to boost energy".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Afternoon),
                    duration: Some("30-45 minutes".into()),
                    difficulty: Some(Difficulty::Moderate),
                },
            ],
            work: vec![
                Recommendation {
                    id: "follicular-new-projects".into(),
                    category: Bucket::Work,
                    title: "Start New Projects".into(),
                    description: "Initiate new ventures and tackle challenging tasks".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: None,
                    difficulty: Some(Difficulty::Moderate),
                },
                Recommendation {
                    id: "follicular-learning".into(),
                    category: Bucket::Work,
                    title: "Skill Development".into(),
                    description: "Take courses, attend workshops, or learn new technologies".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Moderate),
                },
            ],
            connect: vec![Recommendation {
                id: "follicular-networking".into(),
                category: Bucket::Connect,
                title: "Professional Networking".into(),
                description: "Attend events, make new connections, and build relationships".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Evening),
                duration: None,
                difficulty: Some(Difficulty::Moderate),
            }],
        },
        common_symptoms: vec![],
        nutritional_priorities: vec![
            "Protein".into(),
            "Complex carbohydrates".into(),
            "B vitamins".into(),
            "Zinc".into(),
        ],
        exercise_guidelines: ExerciseGuidelines {
            intensity: Intensity::Moderate,
            types: vec![
                "Strength training".into(),
                "Cardio".into(),
                "HIIT".into(),
                "Group fitness classes".into(),
            ],
            avoid: vec![],
        },
        work_optimization: WorkOptimization {
            best_for: vec![
                "New projects".into(),
                "Problem-solving".into(),
                "Learning".into(),
                "Brainstorming".into(),
            ],
            avoid: vec![],
            time_management: "Longer focused work sessions".into(),
        },
        social_needs: SocialNeeds {
            preference: SocialPreference::Social,
            activities: vec![
                "Networking events".into(),
                "Group activities".into(),
                "Meeting new people".into(),
            ],
        },
    }
}

fn ovulatory() -> PhaseTemplate {
    PhaseTemplate {
        phase: CyclePhase::Ovulatory,
        description: "Ovulation phase - peak energy, confidence, and communication".into(),
        duration: "3-5 days".into(),
        hormones: vec!["Peak estrogen".into(), "LH surge".into()],
        energy_pattern: EnergyPattern::Peak,
        key_focus: vec![
            "High-intensity activities".into(),
            "Important meetings".into(),
            "Social events".into(),
            "Challenges".into(),
        ],
        base_recommendations: RecommendationSet {
            eat: vec![
                Recommendation {
                    id: "ovulatory-antioxidants".into(),
                    category: Bucket::Eat,
                    title: "Antioxidant-Rich Foods".into(),
                    description: "Berries, leafy greens, and colorful vegetables for peak performance".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
                Recommendation {
                    id: "ovulatory-healthy-fats".into(),
                    category: Bucket::Eat,
                    title: "Healthy Fats".into(),
                    description: "Avocados, nuts, and olive oil to support hormone production".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
            ],
            movement: vec![
                Recommendation {
                    id: "ovulatory-hiit".into(),
                    category: Bucket::Move,
                    title: "High-Intensity Training".into(),
                    description: "HIIT workouts, sprints, or challenging fitness classes".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: Some("45-60 minutes".into()),
                    difficulty: Some(Difficulty::Challenging),
                },
                Recommendation {
                    id: "ovulatory-team-sports".into(),
                    category: Bucket::Move,
                    title: "Team Sports".into(),
                    description: "Join group fitness classes or recreational sports".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Evening),
                    duration: Some("60-90 minutes".into()),
                    difficulty: Some(Difficulty::Moderate),
                },
            ],
            work: vec![
                Recommendation {
                    id: "ovulatory-presentations".into(),
                    category: Bucket::Work,
                    title: "Important Presentations".into(),
                    description: "Schedule key meetings, presentations, and negotiations".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: None,
                    difficulty: Some(Difficulty::Challenging),
                },
                Recommendation {
                    id: "ovulatory-leadership".into(),
                    category: Bucket::Work,
                    title: "Leadership Tasks".into(),
                    description: "Take on leadership roles and make important decisions".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Challenging),
                },
            ],
            connect: vec![Recommendation {
                id: "ovulatory-social-events".into(),
                category: Bucket::Connect,
                title: "Social Gatherings".into(),
                description: "Host parties, attend events, and engage in group activities".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Evening),
                duration: None,
                difficulty: Some(Difficulty::Easy),
            }],
        },
        common_symptoms: vec![],
        nutritional_priorities: vec![
            "Antioxidants".into(),
            "Healthy fats".into(),
            "Fiber".into(),
            "Vitamin E".into(),
        ],
        exercise_guidelines: ExerciseGuidelines {
            intensity: Intensity::High,
            types: vec![
                "HIIT".into(),
                "Heavy lifting".into(),
                "Competitive sports".into(),
                "Intense cardio".into(),
            ],
            avoid: vec![],
        },
        work_optimization: WorkOptimization {
            best_for: vec![
                "Presentations".into(),
                "Negotiations".into(),
                "Leadership".into(),
                "Public speaking".into(),
            ],
            avoid: vec![],
            time_management: "Peak performance hours for important tasks".into(),
        },
        social_needs: SocialNeeds {
            preference: SocialPreference::HighlySocial,
            activities: vec![
                "Large gatherings".into(),
                "Public speaking".into(),
                "Group leadership".into(),
            ],
        },
    }
}

fn luteal() -> PhaseTemplate {
    PhaseTemplate {
        phase: CyclePhase::Luteal,
        description: "Luteal phase - focus, detail work, and preparation for rest".into(),
        duration: "10-14 days".into(),
        hormones: vec!["High progesterone".into(), "Declining estrogen".into()],
        energy_pattern: EnergyPattern::Declining,
        key_focus: vec![
            "Detail work".into(),
            "Organization".into(),
            "Completion".into(),
            "Self-care preparation".into(),
        ],
        base_recommendations: RecommendationSet {
            eat: vec![
                Recommendation {
                    id: "luteal-complex-carbs".into(),
                    category: Bucket::Eat,
                    title: "Steady Energy Foods".into(),
                    description: "Complex carbs and protein to stabilize blood sugar".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
                Recommendation {
                    id: "luteal-calcium".into(),
                    category: Bucket::Eat,
                    title: "Calcium-Rich Foods".into(),
                    description: "Dairy, leafy greens, and almonds to reduce PMS symptoms".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Anytime),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
            ],
            movement: vec![
                Recommendation {
                    id: "luteal-moderate-exercise".into(),
                    category: Bucket::Move,
                    title: "Moderate Exercise".into(),
                    description: "Steady-state cardio and moderate strength training".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: Some("30-45 minutes".into()),
                    difficulty: Some(Difficulty::Moderate),
                },
                Recommendation {
                    id: "luteal-yoga".into(),
                    category: Bucket::Move,
                    title: "Restorative Yoga".into(),
                    description: "Gentle yoga and stretching to manage stress".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Evening),
                    duration: Some("30-45 minutes".into()),
                    difficulty: Some(Difficulty::Easy),
                },
            ],
            work: vec![
                Recommendation {
                    id: "luteal-detail-work".into(),
                    category: Bucket::Work,
                    title: "Detail-Oriented Tasks".into(),
                    description: "Focus on editing, organizing, and completing projects".into(),
                    priority: Priority::High,
                    time_of_day: Some(TimeOfDay::Morning),
                    duration: None,
                    difficulty: Some(Difficulty::Moderate),
                },
                Recommendation {
                    id: "luteal-organization".into(),
                    category: Bucket::Work,
                    title: "Organization & Planning".into(),
                    description: "Clean workspace, organize files, and plan ahead".into(),
                    priority: Priority::Medium,
                    time_of_day: Some(TimeOfDay::Afternoon),
                    duration: None,
                    difficulty: Some(Difficulty::Easy),
                },
            ],
            connect: vec![Recommendation {
                id: "luteal-close-friends".into(),
                category: Bucket::Connect,
                title: "Quality Time".into(),
                description: "Spend time with close friends and family in small groups".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Evening),
                duration: None,
                difficulty: Some(Difficulty::Easy),
            }],
        },
        common_symptoms: vec![
            "mood swings".into(),
            "bloating".into(),
            "breast tenderness".into(),
            "food cravings".into(),
        ],
        nutritional_priorities: vec![
            "Complex carbohydrates".into(),
            "Calcium".into(),
            "Magnesium".into(),
            "Vitamin D".into(),
        ],
        exercise_guidelines: ExerciseGuidelines {
            intensity: Intensity::Moderate,
            types: vec![
                "Moderate cardio".into(),
                "Yoga".into(),
                "Pilates".into(),
                "Light strength training".into(),
            ],
            avoid: vec!["Excessive high-intensity training".into()],
        },
        work_optimization: WorkOptimization {
            best_for: vec![
                "Detail work".into(),
                "Editing".into(),
                "Organization".into(),
                "Completion tasks".into(),
            ],
            avoid: vec!["High-stress situations".into(), "Major new initiatives".into()],
            time_management: "Structured schedule with built-in flexibility".into(),
        },
        social_needs: SocialNeeds {
            preference: SocialPreference::SmallGroups,
            activities: vec![
                "Intimate gatherings".into(),
                "One-on-one time".into(),
                "Quiet activities".into(),
            ],
        },
    }
}

//! Lifestyle persona modifiers. Each entry is a partial recommendation
//! template; the engine fills in ids and defaults when it injects them.

use super::{LifestyleModifier, RecommendationSeed};
use crate::domain::models::{Bucket, LifestylePersona, Priority};

fn seed(title: &str, description: &str, priority: Option<Priority>) -> RecommendationSeed {
    RecommendationSeed {
        title: title.into(),
        description: description.into(),
        priority,
    }
}

pub(super) fn modifiers() -> Vec<LifestyleModifier> {
    vec![
        LifestyleModifier {
            persona: LifestylePersona::Athlete,
            description: "High-performance athlete focused on training and recovery".into(),
            priorities: vec![
                "Performance optimization".into(),
                "Recovery".into(),
                "Nutrition timing".into(),
            ],
            work_style: "Disciplined and goal-oriented".into(),
            exercise_preference: vec![
                "High-intensity training".into(),
                "Sport-specific drills".into(),
                "Recovery work".into(),
            ],
            nutrition_focus: vec![
                "Performance nutrition".into(),
                "Timing".into(),
                "Recovery foods".into(),
            ],
            social_style: "Team-oriented and competitive".into(),
            modifications: vec![
                (
                    Bucket::Eat,
                    vec![
                        seed(
                            "Pre-Workout Fuel",
                            "Optimize pre and post-workout nutrition",
                            Some(Priority::High),
                        ),
                        seed(
                            "Recovery Nutrition",
                            "Focus on protein and carb timing for recovery",
                            Some(Priority::High),
                        ),
                    ],
                ),
                (
                    Bucket::Move,
                    vec![
                        seed(
                            "Sport-Specific Training",
                            "Include sport-specific drills and techniques",
                            Some(Priority::High),
                        ),
                        seed(
                            "Recovery Sessions",
                            "Active recovery and mobility work",
                            Some(Priority::High),
                        ),
                    ],
                ),
                (
                    Bucket::Work,
                    vec![seed(
                        "Training Schedule",
                        "Plan work around training schedule",
                        Some(Priority::High),
                    )],
                ),
                (
                    Bucket::Connect,
                    vec![seed(
                        "Team Activities",
                        "Engage with training partners and team",
                        Some(Priority::Medium),
                    )],
                ),
            ],
        },
        LifestyleModifier {
            persona: LifestylePersona::Workaholic,
            description: "Career-focused individual with high work demands".into(),
            priorities: vec![
                "Productivity".into(),
                "Stress management".into(),
                "Work-life balance".into(),
            ],
            work_style: "Intense and deadline-driven".into(),
            exercise_preference: vec![
                "Efficient workouts".into(),
                "Stress relief".into(),
                "Time-effective".into(),
            ],
            nutrition_focus: vec![
                "Brain food".into(),
                "Sustained energy".into(),
                "Convenience".into(),
            ],
            social_style: "Professional networking and limited personal time".into(),
            modifications: vec![
                (
                    Bucket::Eat,
                    vec![
                        seed(
                            "Brain-Boosting Foods",
                            "Foods that enhance cognitive function",
                            Some(Priority::High),
                        ),
                        seed(
                            "Meal Prep",
                            "Efficient meal preparation strategies",
                            Some(Priority::High),
                        ),
                    ],
                ),
                (
                    Bucket::Move,
                    vec![
                        seed(
                            "Desk Exercises",
                            "Quick exercises that can be done at work",
                            Some(Priority::High),
                        ),
                        seed(
                            "Efficient Workouts",
                            "High-impact, time-efficient exercise routines",
                            Some(Priority::Medium),
                        ),
                    ],
                ),
                (
                    Bucket::Work,
                    vec![
                        seed(
                            "Productivity Hacks",
                            "Time management and efficiency strategies",
                            Some(Priority::High),
                        ),
                        seed(
                            "Stress Management",
                            "Techniques to manage work stress",
                            Some(Priority::High),
                        ),
                    ],
                ),
                (
                    Bucket::Connect,
                    vec![seed(
                        "Professional Networking",
                        "Strategic relationship building",
                        Some(Priority::Medium),
                    )],
                ),
            ],
        },
        LifestyleModifier {
            persona: LifestylePersona::Researcher,
            description: "Academic or research professional focused on deep work".into(),
            priorities: vec![
                "Deep focus".into(),
                "Mental clarity".into(),
                "Sustained concentration".into(),
            ],
            work_style: "Methodical and detail-oriented".into(),
            exercise_preference: vec![
                "Mind-body connection".into(),
                "Stress relief".into(),
                "Gentle movement".into(),
            ],
            nutrition_focus: vec![
                "Brain health".into(),
                "Anti-inflammatory".into(),
                "Sustained energy".into(),
            ],
            social_style: "Intellectual discussions and quiet social time".into(),
            modifications: vec![
                (
                    Bucket::Eat,
                    vec![
                        seed(
                            "Brain Health Foods",
                            "Omega-3 rich foods and antioxidants",
                            Some(Priority::High),
                        ),
                        seed(
                            "Focus Foods",
                            "Foods that support concentration and memory",
                            Some(Priority::Medium),
                        ),
                    ],
                ),
                (
                    Bucket::Move,
                    vec![
                        seed(
                            "Movement Breaks",
                            "Regular movement to break up long study sessions",
                            Some(Priority::High),
                        ),
                        seed(
                            "Mind-Body Exercises",
                            "Yoga, tai chi, or meditative movement",
                            Some(Priority::Medium),
                        ),
                    ],
                ),
                (
                    Bucket::Work,
                    vec![
                        seed(
                            "Deep Work Blocks",
                            "Extended periods of focused work",
                            Some(Priority::High),
                        ),
                        seed(
                            "Research Optimization",
                            "Strategies for effective research and writing",
                            Some(Priority::Medium),
                        ),
                    ],
                ),
                (
                    Bucket::Connect,
                    vec![seed(
                        "Intellectual Discussions",
                        "Engage in stimulating conversations",
                        Some(Priority::Medium),
                    )],
                ),
            ],
        },
        LifestyleModifier {
            persona: LifestylePersona::Engineer,
            description: "Technical professional focused on problem-solving and innovation".into(),
            priorities: vec![
                "Problem-solving".into(),
                "Technical skills".into(),
                "Innovation".into(),
            ],
            work_style: "Logical and systematic".into(),
            exercise_preference: vec![
                "Structured workouts".into(),
                "Goal-oriented fitness".into(),
                "Technical sports".into(),
            ],
            nutrition_focus: vec![
                "Sustained energy".into(),
                "Mental clarity".into(),
                "Consistent routine".into(),
            ],
            social_style: "Technical communities and collaborative projects".into(),
            modifications: vec![
                (
                    Bucket::Eat,
                    vec![
                        seed(
                            "Consistent Nutrition",
                            "Regular meal timing for sustained energy",
                            Some(Priority::High),
                        ),
                        seed(
                            "Cognitive Support",
                            "Foods that support problem-solving abilities",
                            Some(Priority::Medium),
                        ),
                    ],
                ),
                (
                    Bucket::Move,
                    vec![
                        seed(
                            "Structured Fitness",
                            "Systematic approach to fitness with measurable goals",
                            Some(Priority::High),
                        ),
                        seed(
                            "Posture Correction",
                            "Exercises to counteract desk work",
                            Some(Priority::Medium),
                        ),
                    ],
                ),
                (
                    Bucket::Work,
                    vec![
                        seed(
                            "Problem-Solving Time",
                            "Dedicated time for complex technical challenges",
                            Some(Priority::High),
                        ),
                        seed(
                            "Skill Development",
                            "Learning new technologies and methodologies",
                            Some(Priority::Medium),
                        ),
                    ],
                ),
                (
                    Bucket::Connect,
                    vec![seed(
                        "Tech Communities",
                        "Engage with technical communities and forums",
                        Some(Priority::Medium),
                    )],
                ),
            ],
        },
        LifestyleModifier {
            persona: LifestylePersona::GymGirlie,
            description: "Fitness enthusiast focused on strength, aesthetics, and wellness".into(),
            priorities: vec![
                "Fitness goals".into(),
                "Body composition".into(),
                "Wellness lifestyle".into(),
            ],
            work_style: "Balanced with fitness priorities".into(),
            exercise_preference: vec![
                "Strength training".into(),
                "Aesthetic goals".into(),
                "Fitness trends".into(),
            ],
            nutrition_focus: vec![
                "Macro tracking".into(),
                "Body composition".into(),
                "Performance".into(),
            ],
            social_style: "Fitness community and wellness-focused friends".into(),
            modifications: vec![
                (
                    Bucket::Eat,
                    vec![
                        seed(
                            "Macro-Friendly Meals",
                            "Balanced macronutrients for body composition goals",
                            Some(Priority::High),
                        ),
                        seed(
                            "Pre/Post Workout",
                            "Optimized nutrition around workouts",
                            Some(Priority::High),
                        ),
                    ],
                ),
                (
                    Bucket::Move,
                    vec![
                        seed(
                            "Strength Focus",
                            "Progressive overload and strength building",
                            Some(Priority::High),
                        ),
                        seed(
                            "Aesthetic Training",
                            "Targeted exercises for physique goals",
                            Some(Priority::Medium),
                        ),
                    ],
                ),
                (
                    Bucket::Work,
                    vec![seed(
                        "Fitness Schedule",
                        "Plan work around gym schedule",
                        Some(Priority::Medium),
                    )],
                ),
                (
                    Bucket::Connect,
                    vec![seed(
                        "Fitness Community",
                        "Connect with gym buddies and fitness enthusiasts",
                        Some(Priority::High),
                    )],
                ),
            ],
        },
    ]
}

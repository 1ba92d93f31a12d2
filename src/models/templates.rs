use super::training::{TrainingEntry, TrainingSet};

/// Built-in starting points for common lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    BenchPress,
    Squat,
}

impl Template {
    pub const ALL: [Template; 2] = [Template::BenchPress, Template::Squat];

    pub fn code(&self) -> &'static str {
        match self {
            Template::BenchPress => "bench",
            Template::Squat => "squat",
        }
    }

    /// Helper: convert input code from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "bench" | "bench-press" => Some(Template::BenchPress),
            "squat" => Some(Template::Squat),
            _ => None,
        }
    }

    pub fn entry(&self) -> TrainingEntry {
        match self {
            Template::BenchPress => TrainingEntry::new(
                "Bench Press",
                vec![
                    TrainingSet::new(40.0, 12),
                    TrainingSet::new(45.0, 10),
                    TrainingSet::new(50.0, 8),
                ],
            )
            .with_interval(90),
            Template::Squat => TrainingEntry::new(
                "Squat",
                vec![
                    TrainingSet::new(60.0, 12),
                    TrainingSet::new(70.0, 10),
                    TrainingSet::new(80.0, 8),
                ],
            )
            .with_interval(120),
        }
    }
}

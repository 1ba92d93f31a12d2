use serde::Serialize;

/// Global exercise master record (`exercises` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseRecord {
    pub id: String,   // ⇔ exercises.id (TEXT, UUID v4)
    pub name: String, // ⇔ exercises.name (TEXT UNIQUE, case-sensitive)
}

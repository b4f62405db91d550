pub mod error_models;
pub mod quiz_models;
pub mod schedule_models;
pub mod study_models;

pub use error_models::{AppError, PersistenceError};
pub use quiz_models::{ApiResponse, NewQuizScore, QuizScoreRecord};
pub use schedule_models::{
    GenerateScheduleRequest, NewStudyPlan, SaveScheduleRequest, ScheduleEntry,
    ScheduleResponse, ScheduleScope, StudyPlan,
};
pub use study_models::{GenerateStudyRequest, StudyMaterials};

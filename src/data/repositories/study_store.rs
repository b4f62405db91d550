use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::data::models::{
    NewQuizScore, NewStudyPlan, PersistenceError, QuizScoreRecord, ScheduleEntry, StudyPlan,
};
use crate::schema::{quiz_scores, study_plans};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const CREATE_TABLES: &str =
    include_str!("../../../migrations/2025-06-01-000000_create_study_tables/up.sql");

/// Narrow storage port used by the handlers
pub trait StudyStore: Send + Sync {
    /// Inserts all entries for `user_id`. With a `label`, each stored topic
    /// becomes `"<label>|<topic>"`. Returns the number of rows written.
    fn insert_schedule_entries(
        &self,
        user_id: &str,
        entries: &[ScheduleEntry],
        label: Option<&str>,
    ) -> Result<usize, PersistenceError>;

    fn list_schedule_entries(&self, user_id: &str) -> Result<Vec<StudyPlan>, PersistenceError>;

    fn insert_quiz_score(&self, record: &QuizScoreRecord) -> Result<(), PersistenceError>;
}

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn connect(database_url: &str) -> Result<Self, PersistenceError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = Pool::builder().build(manager)?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: DbPool) -> Self {
        SqliteStore { pool }
    }

    /// Idempotent; safe to run on every start.
    pub fn run_migrations(&self) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get()?;
        conn.batch_execute(CREATE_TABLES)?;
        Ok(())
    }
}

impl StudyStore for SqliteStore {
    fn insert_schedule_entries(
        &self,
        user_id: &str,
        entries: &[ScheduleEntry],
        label: Option<&str>,
    ) -> Result<usize, PersistenceError> {
        if entries.is_empty() {
            return Ok(0);
        }

        let mut conn = self.pool.get()?;
        let now = Utc::now().naive_utc();

        let rows: Vec<NewStudyPlan> = entries
            .iter()
            .map(|entry| NewStudyPlan {
                user_id,
                topic: match label {
                    Some(label) => format!("{}|{}", label, entry.topic),
                    None => entry.topic.clone(),
                },
                day_of_week: entry.day_of_week,
                start_time: &entry.start_time,
                end_time: &entry.end_time,
                color: &entry.color,
                created_at: now,
            })
            .collect();

        let inserted = diesel::insert_into(study_plans::table)
            .values(&rows)
            .execute(&mut conn)?;

        Ok(inserted)
    }

    fn list_schedule_entries(&self, user_id: &str) -> Result<Vec<StudyPlan>, PersistenceError> {
        let mut conn = self.pool.get()?;

        let plans = study_plans::table
            .filter(study_plans::user_id.eq(user_id))
            .order_by((
                study_plans::day_of_week.asc(),
                study_plans::start_time.asc(),
                study_plans::id.asc(),
            ))
            .select(StudyPlan::as_select())
            .load(&mut conn)?;

        Ok(plans)
    }

    fn insert_quiz_score(&self, record: &QuizScoreRecord) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(quiz_scores::table)
            .values(&NewQuizScore {
                user_id: &record.user_id,
                topic: &record.topic,
                score: record.score,
                total_questions: record.total_questions,
                created_at: Utc::now().naive_utc(),
            })
            .execute(&mut conn)?;

        Ok(())
    }
}

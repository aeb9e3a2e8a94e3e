//! Persistencia de encuestas
//!
//! Puerto de almacenamiento append-only: agregar un registro y consultar
//! el historial por encuestado. No existen update ni delete; un registro
//! es inmutable desde que se persiste.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::survey::{NewSurvey, Survey};
use crate::utils::errors::AppError;

/// Puerto de persistencia de encuestas
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Persistir un registro; el store asigna id y created_at
    async fn append(&self, record: &NewSurvey) -> Result<Survey, AppError>;

    /// Historial completo de un encuestado, más reciente primero
    async fn find_by_person(&self, person_id: &str) -> Result<Vec<Survey>, AppError>;

    /// Buscar por token de idempotencia del cliente
    async fn find_by_submission(&self, submission_id: Uuid) -> Result<Option<Survey>, AppError>;
}

pub struct SurveyRepository {
    pool: PgPool,
}

impl SurveyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyStore for SurveyRepository {
    async fn append(&self, record: &NewSurvey) -> Result<Survey, AppError> {
        let id = Uuid::new_v4();
        let (investment, value_of_auto, rental_amount) = record.money_columns();

        let survey = sqlx::query_as::<_, Survey>(
            r#"
            INSERT INTO surveys (
                id, city, person_id, name, contact, number_plate, vehicle_type,
                investment, rental_amount, daily_km, petrol_expense, daily_income,
                maintenance, value_of_auto, peak_hours, total_autos_in_city,
                night_ride_acceptance, run_days_per_month, monthly_profit,
                submission_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18, $19, $20, $21)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&record.city)
        .bind(&record.person_id)
        .bind(&record.name)
        .bind(&record.contact)
        .bind(&record.number_plate)
        .bind(record.vehicle_type().as_str())
        .bind(investment)
        .bind(rental_amount)
        .bind(record.daily_km)
        .bind(record.petrol_expense)
        .bind(record.daily_income)
        .bind(record.maintenance)
        .bind(value_of_auto)
        .bind(&record.peak_hours)
        .bind(record.total_autos_in_city)
        .bind(record.night_ride_acceptance.as_str())
        .bind(record.run_days_per_month)
        .bind(record.monthly_profit)
        .bind(record.submission_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(survey)
    }

    async fn find_by_person(&self, person_id: &str) -> Result<Vec<Survey>, AppError> {
        let surveys = sqlx::query_as::<_, Survey>(
            "SELECT * FROM surveys WHERE person_id = $1 ORDER BY created_at DESC",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(surveys)
    }

    async fn find_by_submission(&self, submission_id: Uuid) -> Result<Option<Survey>, AppError> {
        let survey = sqlx::query_as::<_, Survey>("SELECT * FROM surveys WHERE submission_id = $1")
            .bind(submission_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(survey)
    }
}

//! Orquestación del pipeline de encuestas
//!
//! Envío: identidad → borrador → validación (puerta) → recálculo de
//! ganancia → registro canónico → persistencia. Lectura: historial por
//! encuestado más estadísticas agregadas.

use sqlx::PgPool;

use crate::dto::survey_dto::{
    ApiResponse, SubmitSurveyRequest, SurveyListResponse, SurveyResponse,
};
use crate::repositories::survey_repository::{SurveyRepository, SurveyStore};
use crate::services::{aggregation, builder};
use crate::utils::errors::AppError;

pub struct SurveyController<S: SurveyStore> {
    store: S,
}

impl SurveyController<SurveyRepository> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: SurveyRepository::new(pool),
        }
    }
}

impl<S: SurveyStore> SurveyController<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Procesar un envío: validar el borrador, recalcular la ganancia y
    /// persistir el registro canónico. Un reintento con el mismo token de
    /// idempotencia devuelve el registro ya almacenado sin duplicarlo.
    pub async fn submit(
        &self,
        request: SubmitSurveyRequest,
    ) -> Result<ApiResponse<SurveyResponse>, AppError> {
        let identity = request.identity();

        let mut identity_violations = Vec::new();
        if identity.city.trim().is_empty() {
            identity_violations.push("City".to_string());
        }
        if identity.person_id.trim().is_empty() {
            identity_violations.push("Person Id".to_string());
        }
        if !identity_violations.is_empty() {
            return Err(AppError::Validation(identity_violations));
        }

        if let Some(submission_id) = request.submission_id {
            if let Some(existing) = self.store.find_by_submission(submission_id).await? {
                log::info!(
                    "🔁 Submission {} ya registrada, devolviendo el registro almacenado",
                    submission_id
                );
                return Ok(ApiResponse::success_with_message(
                    existing.into(),
                    "Survey submitted successfully".to_string(),
                ));
            }
        }

        let draft = request.to_draft();
        let record = builder::build(&draft, &identity, request.submission_id).map_err(|violations| {
            log::warn!("Encuesta rechazada: {}", violations.join(", "));
            AppError::Validation(violations)
        })?;

        let stored = self
            .store
            .append(&record)
            .await
            .map_err(|e| AppError::Submission(e.to_string()))?;

        log::info!(
            "📋 Encuesta registrada para {} en {} (ganancia mensual {:.2})",
            stored.person_id,
            stored.city,
            stored.monthly_profit
        );

        Ok(ApiResponse::success_with_message(
            stored.into(),
            "Survey submitted successfully".to_string(),
        ))
    }

    /// Historial completo más estadísticas para un encuestado
    pub async fn get_by_person(&self, person_id: &str) -> Result<SurveyListResponse, AppError> {
        let surveys = self.store.find_by_person(person_id).await?;
        let stats = aggregation::summarize(&surveys);

        Ok(SurveyListResponse {
            surveys: surveys.into_iter().map(SurveyResponse::from).collect(),
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::survey::{NewSurvey, Survey};
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Store en memoria con la misma semántica que el repositorio real
    struct InMemorySurveyStore {
        rows: Mutex<Vec<Survey>>,
    }

    impl InMemorySurveyStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl SurveyStore for InMemorySurveyStore {
        async fn append(&self, record: &NewSurvey) -> Result<Survey, AppError> {
            let (investment, value_of_auto, rental_amount) = record.money_columns();
            let survey = Survey {
                id: Uuid::new_v4(),
                city: record.city.clone(),
                person_id: record.person_id.clone(),
                name: record.name.clone(),
                contact: record.contact.clone(),
                number_plate: record.number_plate.clone(),
                vehicle_type: record.vehicle_type().as_str().to_string(),
                investment,
                rental_amount,
                daily_km: record.daily_km,
                petrol_expense: record.petrol_expense,
                daily_income: record.daily_income,
                maintenance: record.maintenance,
                value_of_auto,
                peak_hours: record.peak_hours.clone(),
                total_autos_in_city: record.total_autos_in_city,
                night_ride_acceptance: record.night_ride_acceptance.as_str().to_string(),
                run_days_per_month: record.run_days_per_month,
                monthly_profit: record.monthly_profit,
                submission_id: record.submission_id,
                created_at: Utc::now(),
            };
            self.rows.lock().unwrap().push(survey.clone());
            Ok(survey)
        }

        async fn find_by_person(&self, person_id: &str) -> Result<Vec<Survey>, AppError> {
            let mut rows: Vec<Survey> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.person_id == person_id)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(rows)
        }

        async fn find_by_submission(&self, submission_id: Uuid) -> Result<Option<Survey>, AppError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.submission_id == Some(submission_id))
                .cloned())
        }
    }

    fn rent_request(overrides: serde_json::Value) -> SubmitSurveyRequest {
        let mut body = json!({
            "city": "Pune",
            "personId": "P-01",
            "name": "Suresh",
            "contact": "9876543210",
            "numberPlate": "MH12AB1234",
            "vehicleType": "Rent",
            "rentalAmount": 2000,
            "dailyKM": 80,
            "petrolExpense": 3000,
            "dailyIncome": 500,
            "maintenance": 500,
            "peakHours": "8-11am",
            "totalAutosInCity": 1200,
            "nightRideAcceptance": "Yes",
            "runDaysPerMonth": 25
        });
        if let (Some(base), Some(extra)) = (body.as_object_mut(), overrides.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_submit_then_query_end_to_end() {
        let controller = SurveyController::with_store(InMemorySurveyStore::new());

        let response = controller.submit(rent_request(json!({}))).await.unwrap();
        assert!(response.success);
        let stored = response.data.unwrap();
        assert_eq!(stored.monthly_profit, 7000.0);
        assert_eq!(stored.rental_amount, Some(2000.0));
        assert_eq!(stored.investment, None);
        assert_eq!(stored.value_of_auto, None);

        let listing = controller.get_by_person("P-01").await.unwrap();
        assert_eq!(listing.stats.total_count, 1);
        assert_eq!(listing.stats.average_profit, "7000.00");
        assert_eq!(listing.surveys.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_draft_with_all_violations() {
        let controller = SurveyController::with_store(InMemorySurveyStore::new());
        let request = rent_request(json!({
            "contact": "12345",
            "runDaysPerMonth": 32
        }));

        let error = controller.submit(request).await.unwrap_err();
        match error {
            AppError::Validation(violations) => {
                assert_eq!(
                    violations,
                    vec!["Contact (10 digits)", "Run Days Per Month (Max 31 days)"]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_requires_identity() {
        let controller = SurveyController::with_store(InMemorySurveyStore::new());
        let request = rent_request(json!({ "city": "", "personId": "  " }));

        let error = controller.submit(request).await.unwrap_err();
        match error {
            AppError::Validation(violations) => {
                assert_eq!(violations, vec!["City", "Person Id"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_profit_is_ignored_and_recomputed() {
        let controller = SurveyController::with_store(InMemorySurveyStore::new());
        let request = rent_request(json!({ "monthlyProfit": 999999.0 }));

        let response = controller.submit(request).await.unwrap();
        assert_eq!(response.data.unwrap().monthly_profit, 7000.0);
    }

    #[tokio::test]
    async fn test_retried_submission_is_not_duplicated() {
        let store = InMemorySurveyStore::new();
        let token = Uuid::new_v4();

        let controller = SurveyController::with_store(store);
        let request = rent_request(json!({ "submissionId": token.to_string() }));

        let first = controller.submit(request.clone()).await.unwrap();
        let second = controller.submit(request).await.unwrap();

        assert_eq!(controller.store.len(), 1);
        assert_eq!(
            first.data.unwrap().id,
            second.data.unwrap().id
        );
    }

    #[tokio::test]
    async fn test_query_unknown_person_yields_empty_stats() {
        let controller = SurveyController::with_store(InMemorySurveyStore::new());
        let listing = controller.get_by_person("nobody").await.unwrap();
        assert_eq!(listing.stats.total_count, 0);
        assert_eq!(listing.stats.average_profit, "0.00");
        assert!(listing.surveys.is_empty());
    }

    #[tokio::test]
    async fn test_history_is_newest_first() {
        let controller = SurveyController::with_store(InMemorySurveyStore::new());

        controller.submit(rent_request(json!({ "dailyIncome": 400 }))).await.unwrap();
        controller.submit(rent_request(json!({ "dailyIncome": 600 }))).await.unwrap();

        let listing = controller.get_by_person("P-01").await.unwrap();
        assert_eq!(listing.stats.total_count, 2);
        // 400*25-5500 = 4500, 600*25-5500 = 9500; el más reciente primero
        assert!(listing.surveys[0].created_at >= listing.surveys[1].created_at);
        assert_eq!(listing.stats.average_profit, "7000.00");
    }
}

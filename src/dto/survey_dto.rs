use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::survey::{NightRide, RespondentIdentity, Survey, SurveyDraft, VehicleType};

// Request para registrar una encuesta. Los campos numéricos del
// formulario se aceptan como número o string JSON y se conservan como
// valor léxico crudo: la validación opera sobre lo que el operador
// escribió, no sobre una conversión previa.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurveyRequest {
    pub city: String,
    pub person_id: String,
    pub name: String,
    pub contact: String,
    pub number_plate: String,
    pub vehicle_type: VehicleType,
    #[serde(default, deserialize_with = "raw_field")]
    pub investment: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub rental_amount: String,
    #[serde(rename = "dailyKM", default, deserialize_with = "raw_field")]
    pub daily_km: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub petrol_expense: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub daily_income: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub maintenance: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub value_of_auto: String,
    pub peak_hours: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub total_autos_in_city: String,
    pub night_ride_acceptance: NightRide,
    #[serde(default, deserialize_with = "raw_field")]
    pub run_days_per_month: String,
    // Ganancia calculada por el cliente: se acepta en el payload por
    // compatibilidad y se descarta, el servidor siempre recalcula
    #[serde(default)]
    pub monthly_profit: Option<Value>,
    // Token de idempotencia generado por el cliente
    #[serde(default)]
    pub submission_id: Option<Uuid>,
}

impl SubmitSurveyRequest {
    /// Identidad del encuestado extraída del request
    pub fn identity(&self) -> RespondentIdentity {
        RespondentIdentity {
            city: self.city.clone(),
            person_id: self.person_id.clone(),
        }
    }

    /// Borrador con los valores léxicos crudos del formulario
    pub fn to_draft(&self) -> SurveyDraft {
        SurveyDraft {
            name: self.name.clone(),
            contact: self.contact.clone(),
            number_plate: self.number_plate.clone(),
            vehicle_type: self.vehicle_type,
            investment: self.investment.clone(),
            rental_amount: self.rental_amount.clone(),
            daily_km: self.daily_km.clone(),
            petrol_expense: self.petrol_expense.clone(),
            daily_income: self.daily_income.clone(),
            maintenance: self.maintenance.clone(),
            value_of_auto: self.value_of_auto.clone(),
            peak_hours: self.peak_hours.clone(),
            total_autos_in_city: self.total_autos_in_city.clone(),
            night_ride_acceptance: self.night_ride_acceptance,
            run_days_per_month: self.run_days_per_month.clone(),
        }
    }
}

// Acepta número, string o null y conserva el valor léxico
fn raw_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    })
}

// Response de encuesta para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub id: Uuid,
    pub city: String,
    pub person_id: String,
    pub name: String,
    pub contact: String,
    pub number_plate: String,
    pub vehicle_type: String,
    pub investment: Option<f64>,
    pub rental_amount: Option<f64>,
    #[serde(rename = "dailyKM")]
    pub daily_km: f64,
    pub petrol_expense: f64,
    pub daily_income: f64,
    pub maintenance: f64,
    pub value_of_auto: Option<f64>,
    pub peak_hours: String,
    pub total_autos_in_city: i64,
    pub night_ride_acceptance: String,
    pub run_days_per_month: i32,
    pub monthly_profit: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Survey> for SurveyResponse {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.id,
            city: survey.city,
            person_id: survey.person_id,
            name: survey.name,
            contact: survey.contact,
            number_plate: survey.number_plate,
            vehicle_type: survey.vehicle_type,
            investment: survey.investment,
            rental_amount: survey.rental_amount,
            daily_km: survey.daily_km,
            petrol_expense: survey.petrol_expense,
            daily_income: survey.daily_income,
            maintenance: survey.maintenance,
            value_of_auto: survey.value_of_auto,
            peak_hours: survey.peak_hours,
            total_autos_in_city: survey.total_autos_in_city,
            night_ride_acceptance: survey.night_ride_acceptance,
            run_days_per_month: survey.run_days_per_month,
            monthly_profit: survey.monthly_profit,
            created_at: survey.created_at,
        }
    }
}

/// Estadísticas agregadas por encuestado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyStats {
    pub total_count: i64,
    pub average_profit: String,
}

// Response del historial por encuestado: lista completa más estadísticas
#[derive(Debug, Serialize)]
pub struct SurveyListResponse {
    pub surveys: Vec<SurveyResponse>,
    pub stats: SurveyStats,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_numbers_and_strings() {
        let request: SubmitSurveyRequest = serde_json::from_value(json!({
            "city": "Pune",
            "personId": "P-01",
            "name": "Suresh",
            "contact": "9876543210",
            "numberPlate": "MH12AB1234",
            "vehicleType": "Rent",
            "rentalAmount": 2000,
            "dailyKM": "80",
            "petrolExpense": 3000,
            "dailyIncome": "500",
            "maintenance": 500.5,
            "peakHours": "8-11am",
            "totalAutosInCity": 1200,
            "nightRideAcceptance": "Yes",
            "runDaysPerMonth": 25,
            "monthlyProfit": 6999.5
        }))
        .unwrap();

        assert_eq!(request.vehicle_type, VehicleType::Rent);
        assert_eq!(request.rental_amount, "2000");
        assert_eq!(request.daily_km, "80");
        assert_eq!(request.maintenance, "500.5");
        // Campos del branch inactivo ausentes: quedan vacíos
        assert_eq!(request.investment, "");
        assert_eq!(request.value_of_auto, "");
        assert_eq!(request.submission_id, None);
    }

    #[test]
    fn test_request_tolerates_null_conditional_fields() {
        let request: SubmitSurveyRequest = serde_json::from_value(json!({
            "city": "Pune",
            "personId": "P-01",
            "name": "Suresh",
            "contact": "9876543210",
            "numberPlate": "MH12AB1234",
            "vehicleType": "Own",
            "investment": 150000,
            "valueOfAuto": 90000,
            "rentalAmount": null,
            "dailyKM": 80,
            "petrolExpense": 3000,
            "dailyIncome": 500,
            "maintenance": 500,
            "peakHours": "8-11am",
            "totalAutosInCity": 1200,
            "nightRideAcceptance": "No",
            "runDaysPerMonth": 25
        }))
        .unwrap();

        assert_eq!(request.rental_amount, "");
        assert_eq!(request.investment, "150000");
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = SurveyStats {
            total_count: 3,
            average_profit: "200.00".to_string(),
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value, json!({ "totalCount": 3, "averageProfit": "200.00" }));
    }
}

//! Estadísticas agregadas por encuestado
//!
//! Calcula el resumen sobre el historial completo de un encuestado:
//! cantidad de registros y ganancia promedio. Sin paginación ni filtros
//! por fecha; siempre el historial entero.

use crate::dto::survey_dto::SurveyStats;
use crate::models::survey::Survey;

/// Resumir un conjunto de registros. El promedio se formatea a 2
/// decimales; con cero registros es "0.00" (nunca se divide por cero).
pub fn summarize(surveys: &[Survey]) -> SurveyStats {
    let total_count = surveys.len() as i64;
    let average_profit = if total_count > 0 {
        surveys.iter().map(|s| s.monthly_profit).sum::<f64>() / total_count as f64
    } else {
        0.0
    };

    SurveyStats {
        total_count,
        average_profit: format!("{:.2}", average_profit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn survey_with_profit(monthly_profit: f64) -> Survey {
        Survey {
            id: Uuid::new_v4(),
            city: "Pune".to_string(),
            person_id: "P-01".to_string(),
            name: "Ramesh".to_string(),
            contact: "9876543210".to_string(),
            number_plate: "MH12AB1234".to_string(),
            vehicle_type: "Own".to_string(),
            investment: Some(150000.0),
            rental_amount: None,
            daily_km: 80.0,
            petrol_expense: 3000.0,
            daily_income: 500.0,
            maintenance: 500.0,
            value_of_auto: Some(90000.0),
            peak_hours: "8-11am".to_string(),
            total_autos_in_city: 1200,
            night_ride_acceptance: "No".to_string(),
            run_days_per_month: 25,
            monthly_profit,
            submission_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_history_yields_zero_stats() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.average_profit, "0.00");
    }

    #[test]
    fn test_average_over_three_records() {
        let surveys = vec![
            survey_with_profit(100.0),
            survey_with_profit(200.0),
            survey_with_profit(300.0),
        ];
        let stats = summarize(&surveys);
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.average_profit, "200.00");
    }

    #[test]
    fn test_average_is_formatted_to_two_decimals() {
        let surveys = vec![survey_with_profit(100.0), survey_with_profit(101.0)];
        assert_eq!(summarize(&surveys).average_profit, "100.50");

        let surveys = vec![survey_with_profit(10.0), survey_with_profit(5.0), survey_with_profit(5.0)];
        assert_eq!(summarize(&surveys).average_profit, "6.67");
    }

    #[test]
    fn test_negative_average_keeps_sign() {
        let surveys = vec![survey_with_profit(-500.0)];
        assert_eq!(summarize(&surveys).average_profit, "-500.00");
    }
}

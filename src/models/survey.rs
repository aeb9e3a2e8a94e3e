//! Modelo de Survey
//!
//! Este módulo contiene el registro de encuesta de campo y sus variantes.
//! Los registros son append-only: se crean y se leen, nunca se actualizan
//! ni se borran. Mapea exactamente a la tabla `surveys` de PostgreSQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Modo de propiedad del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Own,
    Rent,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Own => "Own",
            VehicleType::Rent => "Rent",
        }
    }
}

impl Default for VehicleType {
    fn default() -> Self {
        VehicleType::Own
    }
}

/// Aceptación de viajes nocturnos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NightRide {
    Yes,
    No,
}

impl NightRide {
    pub fn as_str(&self) -> &'static str {
        match self {
            NightRide::Yes => "Yes",
            NightRide::No => "No",
        }
    }
}

impl Default for NightRide {
    fn default() -> Self {
        NightRide::No
    }
}

/// Campos monetarios condicionales al modo de propiedad.
/// El branch inactivo no existe: un registro construido no puede tener
/// investment y rentalAmount poblados a la vez, ni ambos ausentes.
#[derive(Debug, Clone, PartialEq)]
pub enum Ownership {
    Own { investment: f64, value_of_auto: f64 },
    Rent { rental_amount: f64 },
}

impl Ownership {
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            Ownership::Own { .. } => VehicleType::Own,
            Ownership::Rent { .. } => VehicleType::Rent,
        }
    }
}

/// Identidad del encuestado, pasada explícitamente a cada operación
#[derive(Debug, Clone)]
pub struct RespondentIdentity {
    pub city: String,
    pub person_id: String,
}

/// Borrador de encuesta con los valores crudos del formulario tal como
/// se escribieron. Los campos numéricos siguen siendo strings hasta que
/// el borrador pasa la puerta de validación.
#[derive(Debug, Clone, Default)]
pub struct SurveyDraft {
    pub name: String,
    pub contact: String,
    pub number_plate: String,
    pub vehicle_type: VehicleType,
    pub investment: String,
    pub rental_amount: String,
    pub daily_km: String,
    pub petrol_expense: String,
    pub daily_income: String,
    pub maintenance: String,
    pub value_of_auto: String,
    pub peak_hours: String,
    pub total_autos_in_city: String,
    pub night_ride_acceptance: NightRide,
    pub run_days_per_month: String,
}

/// Registro validado y tipado, listo para persistir
#[derive(Debug, Clone)]
pub struct NewSurvey {
    pub city: String,
    pub person_id: String,
    pub name: String,
    pub contact: String,
    pub number_plate: String,
    pub ownership: Ownership,
    pub daily_km: f64,
    pub petrol_expense: f64,
    pub daily_income: f64,
    pub maintenance: f64,
    pub peak_hours: String,
    pub total_autos_in_city: i64,
    pub night_ride_acceptance: NightRide,
    pub run_days_per_month: i32,
    pub monthly_profit: f64,
    pub submission_id: Option<Uuid>,
}

impl NewSurvey {
    pub fn vehicle_type(&self) -> VehicleType {
        self.ownership.vehicle_type()
    }

    /// Columnas planas para el almacenamiento:
    /// (investment, value_of_auto, rental_amount), exactamente un branch poblado
    pub fn money_columns(&self) -> (Option<f64>, Option<f64>, Option<f64>) {
        match self.ownership {
            Ownership::Own {
                investment,
                value_of_auto,
            } => (Some(investment), Some(value_of_auto), None),
            Ownership::Rent { rental_amount } => (None, None, Some(rental_amount)),
        }
    }
}

/// Survey persistido - mapea exactamente a la tabla surveys
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Survey {
    pub id: Uuid,
    pub city: String,
    pub person_id: String,
    pub name: String,
    pub contact: String,
    pub number_plate: String,
    pub vehicle_type: String,
    pub investment: Option<f64>,
    pub rental_amount: Option<f64>,
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
    pub submission_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

//! Cálculo de la ganancia mensual derivada
//!
//! Fórmula pura sobre ingreso, días de operación y costos, con branch
//! según el modo de propiedad. La vista previa del formulario y el
//! cálculo autoritativo previo al guardado usan exactamente esta función,
//! así el valor mostrado y el persistido no pueden divergir.

use crate::models::survey::{SurveyDraft, VehicleType};
use crate::services::coercion::coerce_amount;

/// Redondear a 2 decimales para almacenamiento y display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ganancia mensual según el modo de propiedad.
/// En modo Own el monto de renta no participa de la fórmula.
pub fn monthly_profit(
    vehicle_type: VehicleType,
    daily_income: f64,
    run_days_per_month: f64,
    petrol_expense: f64,
    maintenance: f64,
    rental_amount: f64,
) -> f64 {
    let gross = daily_income * run_days_per_month;
    let profit = match vehicle_type {
        VehicleType::Own => gross - petrol_expense - maintenance,
        VehicleType::Rent => gross - rental_amount - petrol_expense - maintenance,
    };
    round2(profit)
}

/// Vista previa reactiva sobre los valores crudos del formulario.
/// Usa coerción tolerante: campos vacíos o inválidos cuentan como 0.
pub fn preview(draft: &SurveyDraft) -> f64 {
    monthly_profit(
        draft.vehicle_type,
        coerce_amount(&draft.daily_income),
        coerce_amount(&draft.run_days_per_month),
        coerce_amount(&draft.petrol_expense),
        coerce_amount(&draft.maintenance),
        coerce_amount(&draft.rental_amount),
    )
}

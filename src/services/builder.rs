//! Construcción del registro canónico de encuesta
//!
//! Convierte un borrador validado más la identidad del encuestado en el
//! registro tipado que se persiste. Se rehúsa a construir si el borrador
//! no pasó Validator. La ganancia mensual SIEMPRE se recalcula acá; un
//! valor calculado por el cliente nunca se acepta tal cual.

use uuid::Uuid;

use crate::models::survey::{NewSurvey, Ownership, RespondentIdentity, SurveyDraft, VehicleType};
use crate::services::coercion::{coerce_amount, coerce_count};
use crate::services::{profit, validation};

/// Construir el registro canónico desde un borrador.
/// Devuelve la lista completa de violaciones si el borrador es inválido.
pub fn build(
    draft: &SurveyDraft,
    identity: &RespondentIdentity,
    submission_id: Option<Uuid>,
) -> Result<NewSurvey, Vec<String>> {
    let violations = validation::validate(draft);
    if !violations.is_empty() {
        return Err(violations);
    }

    // El borrador ya pasó la puerta de validación: todos los campos
    // numéricos del branch activo parsean de forma exacta
    let ownership = match draft.vehicle_type {
        VehicleType::Own => Ownership::Own {
            investment: coerce_amount(&draft.investment),
            value_of_auto: coerce_amount(&draft.value_of_auto),
        },
        VehicleType::Rent => Ownership::Rent {
            rental_amount: coerce_amount(&draft.rental_amount),
        },
    };

    let rental_amount = match &ownership {
        Ownership::Rent { rental_amount } => *rental_amount,
        Ownership::Own { .. } => 0.0,
    };

    let monthly_profit = profit::monthly_profit(
        draft.vehicle_type,
        coerce_amount(&draft.daily_income),
        coerce_amount(&draft.run_days_per_month),
        coerce_amount(&draft.petrol_expense),
        coerce_amount(&draft.maintenance),
        rental_amount,
    );

    Ok(NewSurvey {
        city: identity.city.trim().to_string(),
        person_id: identity.person_id.trim().to_string(),
        name: draft.name.trim().to_string(),
        contact: draft.contact.clone(),
        number_plate: draft.number_plate.trim().to_string(),
        ownership,
        daily_km: coerce_amount(&draft.daily_km),
        petrol_expense: coerce_amount(&draft.petrol_expense),
        daily_income: coerce_amount(&draft.daily_income),
        maintenance: coerce_amount(&draft.maintenance),
        peak_hours: draft.peak_hours.trim().to_string(),
        total_autos_in_city: coerce_count(&draft.total_autos_in_city),
        night_ride_acceptance: draft.night_ride_acceptance,
        run_days_per_month: coerce_count(&draft.run_days_per_month) as i32,
        monthly_profit,
        submission_id,
    })
}

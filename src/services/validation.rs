//! Reglas de validación del registro de encuesta
//!
//! Aplica las reglas de campos requeridos y rangos, condicionales al modo
//! de propiedad declarado. Todas las violaciones se recolectan en orden
//! fijo; nunca se corta en la primera. Lista vacía = borrador válido.

use crate::models::survey::{SurveyDraft, VehicleType};
use crate::utils::validation::{validate_contact, validate_non_negative_str, validate_not_empty};

const NOTE_NON_NEGATIVE: &str = "(Must be a non-negative number)";

/// Validar un borrador completo; devuelve las etiquetas de campo violadas
/// en el orden en que aparecen en el formulario.
pub fn validate(draft: &SurveyDraft) -> Vec<String> {
    let mut violations = Vec::new();

    if validate_not_empty(&draft.name).is_err() {
        violations.push("Name".to_string());
    }

    if validate_contact(&draft.contact).is_err() {
        violations.push("Contact (10 digits)".to_string());
    }

    if validate_not_empty(&draft.number_plate).is_err() {
        violations.push("Number Plate".to_string());
    }

    // Branches mutuamente excluyentes: nunca se validan los campos del
    // branch inactivo
    match draft.vehicle_type {
        VehicleType::Own => {
            check_non_negative(&draft.investment, "Investment", &mut violations);
            check_non_negative(&draft.value_of_auto, "Value Of Auto", &mut violations);
        }
        VehicleType::Rent => {
            check_non_negative(&draft.rental_amount, "Rental Amount", &mut violations);
        }
    }

    check_non_negative(&draft.daily_km, "Daily KM", &mut violations);
    check_non_negative(&draft.daily_income, "Daily Income", &mut violations);
    check_non_negative(&draft.petrol_expense, "Petrol Expense", &mut violations);
    check_non_negative(&draft.maintenance, "Maintenance", &mut violations);
    check_non_negative(&draft.total_autos_in_city, "Total Autos In City", &mut violations);

    // Dos chequeos independientes sobre run days: no negativo, y tope de 31.
    // Ambos pueden dispararse en la misma corrida.
    check_non_negative(&draft.run_days_per_month, "Run Days Per Month", &mut violations);
    if run_days_exceeds_cap(&draft.run_days_per_month) {
        violations.push("Run Days Per Month (Max 31 days)".to_string());
    }

    if validate_not_empty(&draft.peak_hours).is_err() {
        violations.push("Peak Hours".to_string());
    }

    violations
}

fn check_non_negative(raw: &str, label: &str, violations: &mut Vec<String>) {
    if validate_non_negative_str(raw).is_err() {
        violations.push(format!("{} {}", label, NOTE_NON_NEGATIVE));
    }
}

fn run_days_exceeds_cap(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .map(|days| days.trunc() as i64 > 31)
        .unwrap_or(false)
}

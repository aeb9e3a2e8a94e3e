//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de los campos
//! crudos del formulario de encuesta.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    // Exactamente 10 dígitos decimales, sensible a espacios
    static ref CONTACT_RE: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
}

/// Validar que un string no esté vacío después de trim
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar número de contacto: exactamente 10 dígitos
pub fn validate_contact(value: &str) -> Result<(), ValidationError> {
    if !CONTACT_RE.is_match(value) {
        let mut error = ValidationError::new("contact");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"10 digits".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor léxico parsee a un número no negativo.
/// NaN nunca es válido, aunque no sea "menor que cero".
pub fn validate_non_negative_str(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(number) if !number.is_nan() => validate_non_negative(number),
        _ => {
            let mut error = ValidationError::new("non_negative");
            error.add_param("value".into(), &value.to_string());
            Err(error)
        }
    }
}

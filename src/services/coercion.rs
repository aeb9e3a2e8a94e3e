//! Coerción tolerante de campos del formulario
//!
//! Parseo con pérdida: entrada vacía o inválida se coerce a 0 en lugar de
//! fallar. Mantiene vivo el cálculo de ganancia mientras el operador
//! escribe. NO es la puerta de validación: los valores inválidos fluyen a
//! la vista previa, pero Validator los rechaza antes de persistir.

/// Parsear un monto; entrada vacía, inválida o no finita se coerce a 0.0
pub fn coerce_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => 0.0,
    }
}

/// Parsear un contador entero; la parte decimal se trunca
pub fn coerce_count(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => number.trunc() as i64,
        _ => 0,
    }
}

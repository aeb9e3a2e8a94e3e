//! Services module
//!
//! Este módulo contiene la lógica de negocio del pipeline de encuestas:
//! coerción de campos crudos, validación, cálculo de ganancia derivada,
//! construcción del registro canónico y agregación de estadísticas.

pub mod aggregation;
pub mod builder;
pub mod coercion;
pub mod profit;
pub mod validation;

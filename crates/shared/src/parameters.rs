use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BoltType, PropertyClass};

/// Неположительный (или нечисловой) размер во входных параметрах
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid parameter '{field}': {value} mm (must be a positive length)")]
pub struct InvalidParameterError {
    pub field: &'static str,
    pub value: f64,
}

/// Входные параметры для построения геометрии стыка (все длины в мм)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterSet {
    pub flange_width: f64,
    pub web_height: f64,
    pub flange_thickness: f64,
    pub web_thickness: f64,
    pub bolt_diameter: f64,
    pub bolt_type: BoltType,
    pub property_class: PropertyClass,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            flange_width: 200.0,
            web_height: 300.0,
            flange_thickness: 20.0,
            web_thickness: 10.0,
            bolt_diameter: 10.0,
            bolt_type: BoltType::default(),
            property_class: PropertyClass::default(),
        }
    }
}

impl ParameterSet {
    /// Все длины в порядке объявления: (имя поля, значение)
    pub fn lengths(&self) -> [(&'static str, f64); 5] {
        [
            ("flangeWidth", self.flange_width),
            ("webHeight", self.web_height),
            ("flangeThickness", self.flange_thickness),
            ("webThickness", self.web_thickness),
            ("boltDiameter", self.bolt_diameter),
        ]
    }

    /// Проверить, что все длины строго положительны.
    /// Возвращает первую нарушающую длину.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        for (field, value) in self.lengths() {
            if !value.is_finite() || value <= 0.0 {
                return Err(InvalidParameterError { field, value });
            }
        }
        Ok(())
    }
}

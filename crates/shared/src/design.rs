use serde::{Deserialize, Serialize};

/// Итог проверки стыка расчётным сервисом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DesignStatus {
    #[default]
    Safe,
    Unsafe,
}

/// Результат расчёта стыка (ответ расчётного сервиса, только для отображения)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignResult {
    pub section_size: String,
    pub material: String,
    pub weld_type: String,
    /// Изгибающий момент, Н·м
    pub bending_moment: f64,
    /// Поперечная сила, кН
    pub shear_force: f64,
    /// Продольная сила, кН
    pub axial_force: f64,
    pub flange_preference: String,
    pub flange_thickness: f64,
    pub web_thickness: f64,
    pub member_capacity: f64,
    pub flange_plate_thickness: f64,
    pub web_plate_thickness: f64,
    pub weld_strength: f64,
    pub design_status: DesignStatus,
}

impl Default for DesignResult {
    fn default() -> Self {
        Self {
            section_size: String::new(),
            material: "Fe 410 WA".to_string(),
            weld_type: "Fillet Weld".to_string(),
            bending_moment: 0.0,
            shear_force: 0.0,
            axial_force: 0.0,
            flange_preference: "Outside".to_string(),
            flange_thickness: 0.0,
            web_thickness: 0.0,
            member_capacity: 0.0,
            flange_plate_thickness: 0.0,
            web_plate_thickness: 0.0,
            weld_strength: 0.0,
            design_status: DesignStatus::Safe,
        }
    }
}

impl DesignResult {
    /// Числовые поля результата: (ключ, значение, единицы)
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64, &'static str)> {
        vec![
            ("bending_moment", self.bending_moment, "Nm"),
            ("shear_force", self.shear_force, "kN"),
            ("axial_force", self.axial_force, "kN"),
            ("flange_thickness", self.flange_thickness, "mm"),
            ("web_thickness", self.web_thickness, "mm"),
            ("member_capacity", self.member_capacity, "kN"),
            ("flange_plate_thickness", self.flange_plate_thickness, "mm"),
            ("web_plate_thickness", self.web_plate_thickness, "mm"),
            ("weld_strength", self.weld_strength, "kN"),
        ]
    }
}

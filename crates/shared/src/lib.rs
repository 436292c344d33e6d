use serde::{Deserialize, Serialize};

mod design;
mod parameters;

pub use design::{DesignResult, DesignStatus};
pub use parameters::{InvalidParameterError, ParameterSet};

/// Тип болта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoltType {
    /// Высокопрочный фрикционный болт
    #[default]
    #[serde(rename = "HSFG")]
    Hsfg,
    #[serde(rename = "Black Bolt")]
    BlackBolt,
    #[serde(rename = "Bearing Bolt")]
    BearingBolt,
}

impl BoltType {
    pub fn label(&self) -> &'static str {
        match self {
            BoltType::Hsfg => "HSFG",
            BoltType::BlackBolt => "Black Bolt",
            BoltType::BearingBolt => "Bearing Bolt",
        }
    }

    pub fn all() -> &'static [BoltType] {
        &[BoltType::Hsfg, BoltType::BlackBolt, BoltType::BearingBolt]
    }
}

impl std::fmt::Display for BoltType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Класс прочности болта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertyClass {
    #[default]
    #[serde(rename = "8.8")]
    C8_8,
    #[serde(rename = "10.9")]
    C10_9,
    #[serde(rename = "12.9")]
    C12_9,
}

impl PropertyClass {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyClass::C8_8 => "8.8",
            PropertyClass::C10_9 => "10.9",
            PropertyClass::C12_9 => "12.9",
        }
    }

    pub fn all() -> &'static [PropertyClass] {
        &[PropertyClass::C8_8, PropertyClass::C10_9, PropertyClass::C12_9]
    }
}

impl std::fmt::Display for PropertyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Вид детали стыка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    Flange,
    Web,
    Bolt,
    CoverPlate,
}

/// Стабильный идентификатор детали (для болтов содержит порядковый номер)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum PartId {
    Flange,
    Web,
    Bolt(u8),
    CoverPlate,
}

impl PartId {
    /// Строковый ключ: "flange", "web", "bolt-0", "cover-plate"
    pub fn key(&self) -> String {
        match self {
            PartId::Flange => "flange".to_string(),
            PartId::Web => "web".to_string(),
            PartId::Bolt(i) => format!("bolt-{i}"),
            PartId::CoverPlate => "cover-plate".to_string(),
        }
    }

    pub fn kind(&self) -> PartKind {
        match self {
            PartId::Flange => PartKind::Flange,
            PartId::Web => PartKind::Web,
            PartId::Bolt(_) => PartKind::Bolt,
            PartId::CoverPlate => PartKind::CoverPlate,
        }
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key())
    }
}

/// Описание одной детали сборки (прямоугольный блок)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDescriptor {
    pub id: PartId,
    pub kind: PartKind,
    /// Размеры блока по осям X, Y, Z (мм)
    pub dimensions: [f64; 3],
    /// Центр блока в системе координат сборки (мм)
    pub position: [f64; 3],
}

impl PartDescriptor {
    pub fn new(id: PartId, dimensions: [f64; 3], position: [f64; 3]) -> Self {
        Self {
            id,
            kind: id.kind(),
            dimensions,
            position,
        }
    }

    pub fn half_extents(&self) -> [f64; 3] {
        [
            self.dimensions[0] * 0.5,
            self.dimensions[1] * 0.5,
            self.dimensions[2] * 0.5,
        ]
    }

    /// Минимальный угол габаритного блока
    pub fn min(&self) -> [f64; 3] {
        let h = self.half_extents();
        [
            self.position[0] - h[0],
            self.position[1] - h[1],
            self.position[2] - h[2],
        ]
    }

    /// Максимальный угол габаритного блока
    pub fn max(&self) -> [f64; 3] {
        let h = self.half_extents();
        [
            self.position[0] + h[0],
            self.position[1] + h[1],
            self.position[2] + h[2],
        ]
    }
}

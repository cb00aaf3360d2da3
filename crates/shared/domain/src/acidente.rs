//! Traffic-accident domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Traffic-accident record as exchanged with the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AcidenteTransito {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Título é obrigatório"))]
    pub titulo: String,
    #[validate(length(min = 1, message = "Descrição é obrigatória"))]
    pub descricao: String,
    /// When the accident happened.
    pub data: DateTime<Utc>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude inválida"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude inválida"))]
    pub longitude: f64,
}

impl AcidenteTransito {
    pub fn new(
        titulo: String,
        descricao: String,
        data: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            titulo,
            descricao,
            data,
            latitude,
            longitude,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A product record.
///
/// The wire format uses the Portuguese field names of the `produtos` table.
/// Missing fields decode to zero values and unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Product {
    /// Storage-assigned id; ignored on create
    #[schema(example = 1)]
    pub id: i64,

    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "nome must not be empty"))]
    #[schema(example = "Caneta")]
    pub name: String,

    #[serde(rename = "descricao")]
    #[schema(example = "Azul")]
    pub description: String,

    #[serde(rename = "preco")]
    #[validate(range(exclusive_min = 0.0, message = "preco must be greater than zero"))]
    #[schema(example = 2.5)]
    pub price: f64,

    #[serde(rename = "quantidade")]
    #[schema(example = 100)]
    pub quantity: i32,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

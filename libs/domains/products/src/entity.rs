use sea_orm::entity::prelude::*;

use crate::models::Product;

/// Sea-ORM Entity for the `produtos` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "produtos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub nome: String,
    #[sea_orm(column_type = "Text")]
    pub descricao: String,
    pub preco: f64,
    pub quantidade: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.nome,
            description: model.descricao,
            price: model.preco,
            quantity: model.quantidade,
        }
    }
}

use sea_orm::entity::prelude::*;

use super::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub category: String,
    pub color: Option<String>,
    pub occasion: Option<String>,
    pub in_stock: bool,
    #[sea_orm(column_type = "Json")]
    pub images: StringList,
    pub care: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub tags: StringList,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

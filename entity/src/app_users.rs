use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Credential row shared by every role of the application.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "AppUsers")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "UserID")]
    pub user_id: i32,
    #[sea_orm(column_name = "UserName")]
    pub user_name: String,
    #[sea_orm(column_name = "UserPassword")]
    pub user_password: String,
    #[sea_orm(column_name = "ContactNumber")]
    pub contact_number: String,
    #[sea_orm(column_name = "Email")]
    pub email: String,
    #[sea_orm(column_name = "UserRole")]
    pub user_role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::traveler::Entity")]
    Traveler,
}

impl Related<super::traveler::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Traveler.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Traveler profile row, one-to-one with its owning `AppUsers` row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Traveler")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "UserID")]
    pub user_id: i32,
    #[sea_orm(column_name = "CNIC")]
    pub cnic: String,
    #[sea_orm(column_name = "TravelerName")]
    pub traveler_name: String,
    #[sea_orm(column_name = "Preference")]
    pub preference: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_users::Entity",
        from = "Column::UserId",
        to = "super::app_users::Column::UserId"
    )]
    AppUsers,
}

impl Related<super::app_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

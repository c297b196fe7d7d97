use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

/// One recorded feeding. `id` is assigned by the store on insert and is the
/// only identity; a body without `id` deserializes with `id = 0`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feeding")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub quantity_grams: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub fed_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Active model for an insert: the id is left for the store to assign.
    pub fn into_new(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            quantity_grams: Set(self.quantity_grams),
            notes: Set(self.notes),
            fed_at: Set(self.fed_at),
        }
    }

    /// Active model with every column marked as changed, keyed by `id`.
    pub fn into_replacement(self) -> ActiveModel {
        ActiveModel::from(self).reset_all()
    }
}

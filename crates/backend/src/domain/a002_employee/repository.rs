use contracts::domain::a002_employee::aggregate::Employee;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, EntityTrait, QueryFilter};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(m: Model) -> Self {
        Employee {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            address: m.address,
            email: m.email,
            phone: m.phone,
        }
    }
}

/// Список сотрудников, отсортированный по имени.
/// `search` сужает выборку по имени, фамилии или e-mail.
pub async fn list(search: Option<&str>) -> anyhow::Result<Vec<Employee>> {
    list_in(get_connection()?, search).await
}

pub async fn list_in(
    conn: &DatabaseConnection,
    search: Option<&str>,
) -> anyhow::Result<Vec<Employee>> {
    let mut query = Entity::find();

    if let Some(search) = search {
        query = query.filter(
            Condition::any()
                .add(Column::FirstName.contains(search))
                .add(Column::LastName.contains(search))
                .add(Column::Email.contains(search)),
        );
    }

    let mut items: Vec<Employee> = query
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by_cached_key(|e| e.first_name.to_lowercase());
    Ok(items)
}

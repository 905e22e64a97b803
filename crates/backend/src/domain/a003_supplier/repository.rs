use contracts::domain::a003_supplier::aggregate::Supplier;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, EntityTrait, QueryFilter};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "supplier")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Supplier {
    fn from(m: Model) -> Self {
        Supplier {
            id: m.id,
            name: m.name,
            address: m.address,
            email: m.email,
            phone: m.phone,
        }
    }
}

pub async fn list(search: Option<&str>) -> anyhow::Result<Vec<Supplier>> {
    list_in(get_connection()?, search).await
}

pub async fn list_in(
    conn: &DatabaseConnection,
    search: Option<&str>,
) -> anyhow::Result<Vec<Supplier>> {
    let mut query = Entity::find();

    if let Some(search) = search {
        query = query.filter(
            Condition::any()
                .add(Column::Name.contains(search))
                .add(Column::Email.contains(search)),
        );
    }

    let mut items: Vec<Supplier> = query
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by_cached_key(|s| s.name.to_lowercase());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn test_empty_table_gives_empty_list() {
        let conn = test_connection().await;
        assert!(list_in(&conn, None).await.unwrap().is_empty());
        assert!(list_in(&conn, Some("x")).await.unwrap().is_empty());
    }
}

use contracts::domain::a001_customer::aggregate::{Customer, CustomerCategory};
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, EntityTrait, QueryFilter};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
    pub customer_category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "category::Entity",
        from = "Column::CustomerCategoryId",
        to = "category::Column::Id"
    )]
    CustomerCategory,
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub mod category {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "customer_category")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub code: String,
        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn into_customer(m: Model, category: Option<category::Model>) -> Customer {
    Customer {
        id: m.id,
        name: m.name,
        address: m.address,
        email: m.email,
        phone: m.phone,
        iban: m.iban,
        customer_category: category.map(|c| CustomerCategory {
            code: c.code,
            description: c.description,
        }),
    }
}

/// Список клиентов с категориями, отсортированный по имени.
/// `search` сужает выборку по имени или e-mail.
pub async fn list(search: Option<&str>) -> anyhow::Result<Vec<Customer>> {
    list_in(get_connection()?, search).await
}

pub async fn list_in(
    conn: &DatabaseConnection,
    search: Option<&str>,
) -> anyhow::Result<Vec<Customer>> {
    let mut query = Entity::find().find_also_related(category::Entity);

    if let Some(search) = search {
        // LIKE в SQLite не учитывает регистр только для ASCII
        query = query.filter(
            Condition::any()
                .add(Column::Name.contains(search))
                .add(Column::Email.contains(search)),
        );
    }

    let mut items: Vec<Customer> = query
        .all(conn)
        .await?
        .into_iter()
        .map(|(m, c)| into_customer(m, c))
        .collect();
    items.sort_by_cached_key(|c| c.name.to_lowercase());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use sea_orm::{ActiveModelTrait, Set};

    async fn insert_category(conn: &DatabaseConnection, code: &str, description: &str) -> i32 {
        let active = category::ActiveModel {
            code: Set(code.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        };
        active.insert(conn).await.unwrap().id
    }

    async fn insert_customer(
        conn: &DatabaseConnection,
        name: &str,
        email: &str,
        category_id: Option<i32>,
    ) {
        let active = ActiveModel {
            name: Set(name.to_string()),
            address: Set("Via Roma 1".to_string()),
            email: Set(email.to_string()),
            phone: Set(String::new()),
            iban: Set(String::new()),
            customer_category_id: Set(category_id),
            ..Default::default()
        };
        active.insert(conn).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_joins_category_and_sorts_by_name() {
        let conn = test_connection().await;
        let gd = insert_category(&conn, "GD", "Grande distribuzione").await;
        insert_customer(&conn, "zeta srl", "info@zeta.it", Some(gd)).await;
        insert_customer(&conn, "Alfa SpA", "info@alfa.it", None).await;

        let items = list_in(&conn, None).await.unwrap();
        let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alfa SpA", "zeta srl"]);
        assert_eq!(items[0].customer_category, None);
        assert_eq!(
            items[1].customer_category,
            Some(CustomerCategory {
                code: "GD".to_string(),
                description: "Grande distribuzione".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_search_matches_name_or_email() {
        let conn = test_connection().await;
        insert_customer(&conn, "Rossi Srl", "info@rossi.it", None).await;
        insert_customer(&conn, "Bianchi", "ordini@ROSSI.com", None).await;
        insert_customer(&conn, "Verdi", "verdi@mail.it", None).await;

        let items = list_in(&conn, Some("rossi")).await.unwrap();
        let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bianchi", "Rossi Srl"]);
    }
}

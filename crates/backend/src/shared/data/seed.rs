use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::domain::a001_customer::repository as customer;
use crate::domain::a002_employee::repository as employee;
use crate::domain::a003_supplier::repository as supplier;

const CATEGORIES: [(&str, &str); 3] = [
    ("RET", "Retail"),
    ("WHS", "Wholesale"),
    ("PUB", "Public sector"),
];

// название, город, индекс категории
const CUSTOMERS: [(&str, &str, Option<usize>); 14] = [
    ("Acme Trading", "Torino", Some(0)),
    ("Bellini & Figli", "Milano", Some(1)),
    ("Comune di Asti", "Asti", Some(2)),
    ("delta logistica", "Genova", None),
    ("Eridania Foods", "Bologna", Some(1)),
    ("Farmacia Centrale", "Torino", Some(0)),
    ("Gruppo Orione", "Roma", None),
    ("Hotel Miramare", "Rimini", Some(0)),
    ("Istituto Volta", "Pavia", Some(2)),
    ("Jolly Ricambi", "Napoli", Some(1)),
    ("Kappa Sport", "Torino", Some(0)),
    ("Lanificio Sella", "Biella", None),
    ("Mercato Verde", "Firenze", Some(0)),
    ("O'Brien & Sons <Ltd>", "Dublin", Some(1)),
];

// имя, фамилия, улица
const EMPLOYEES: [(&str, &str, &str); 12] = [
    ("Anna", "Rossi", "12 Elm St"),
    ("Bruno", "Bianchi", "5 Elm Court"),
    ("Carla", "Verdi", "Stone Road 4"),
    ("Davide", "Ferrari", "1 Oak Avenue"),
    ("Elena", "Russo", "Via Po 18"),
    ("Fabio", "Colombo", "Corso Francia 220"),
    ("Giulia", "Ricci", "Via Garibaldi 3"),
    ("Luca", "Marino", "Piazza Castello 9"),
    ("Marta", "Greco", "Via Roma 101"),
    ("Nicola", "Bruno", "Strada del Lionetto 6"),
    ("Olga", "Gallo", "Via Nizza 45"),
    ("paolo", "Conti", "Lungo Dora 2"),
];

const SUPPLIERS: [(&str, &str); 11] = [
    ("Alpi Carta", "Cuneo"),
    ("Brianza Mobili", "Monza"),
    ("Cartiere Riunite", "Lucca"),
    ("Dolomiti Energia", "Trento"),
    ("Elettro Nord", "Novara"),
    ("Fonderia Ligure", "Savona"),
    ("Grafica Veneta", "Padova"),
    ("Idraulica Sud", "Bari"),
    ("Legnami Valsesia", "Varallo"),
    ("Metalli Preziosi", "Arezzo"),
    ("Nastri Adesivi", "Lecco"),
];

fn slug(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Заполняет пустые таблицы демонстрационными данными.
/// Таблицы, в которых уже есть строки, не трогаются.
pub async fn seed_demo_data(conn: &DatabaseConnection) -> anyhow::Result<()> {
    if customer::Entity::find().count(conn).await? == 0 {
        seed_customers(conn).await?;
    }
    if employee::Entity::find().count(conn).await? == 0 {
        seed_employees(conn).await?;
    }
    if supplier::Entity::find().count(conn).await? == 0 {
        seed_suppliers(conn).await?;
    }
    Ok(())
}

async fn seed_customers(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (code, description) in CATEGORIES {
        let saved = customer::category::ActiveModel {
            code: Set(code.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        category_ids.push(saved.id);
    }

    for (i, (name, city, category)) in CUSTOMERS.into_iter().enumerate() {
        customer::ActiveModel {
            name: Set(name.to_string()),
            address: Set(format!("Via Roma {}, {}", i + 1, city)),
            email: Set(format!("info@{}.it", slug(name))),
            phone: Set(format!("+39 011 555 {:04}", 100 + i)),
            iban: Set(format!("IT60X05428111010000{:08}", 4711 + i)),
            customer_category_id: Set(category.map(|idx| category_ids[idx])),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    tracing::info!(
        "Seeded {} customers in {} categories",
        CUSTOMERS.len(),
        CATEGORIES.len()
    );
    Ok(())
}

async fn seed_employees(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (i, (first_name, last_name, street)) in EMPLOYEES.into_iter().enumerate() {
        employee::ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            address: Set(street.to_string()),
            email: Set(format!("{}.{}@example.com", slug(first_name), slug(last_name))),
            phone: Set(format!("555-01{:02}", i + 1)),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }
    tracing::info!("Seeded {} employees", EMPLOYEES.len());
    Ok(())
}

async fn seed_suppliers(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (i, (name, city)) in SUPPLIERS.into_iter().enumerate() {
        supplier::ActiveModel {
            name: Set(name.to_string()),
            address: Set(format!("Zona Industriale {}, {}", i + 1, city)),
            email: Set(format!("sales@{}.com", slug(name))),
            phone: Set(format!("+39 02 {:07}", 3_000_000 + i * 37)),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }
    tracing::info!("Seeded {} suppliers", SUPPLIERS.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn test_seed_fills_empty_tables_once() {
        let conn = test_connection().await;
        seed_demo_data(&conn).await.unwrap();
        seed_demo_data(&conn).await.unwrap();

        let customers = customer::list_in(&conn, None).await.unwrap();
        assert_eq!(customers.len(), CUSTOMERS.len());
        assert_eq!(customers[0].name, "Acme Trading");
        assert!(customers
            .iter()
            .any(|c| c.name == "delta logistica" && c.customer_category.is_none()));

        let employees = employee::list_in(&conn, None).await.unwrap();
        assert_eq!(employees.len(), EMPLOYEES.len());

        let suppliers = supplier::list_in(&conn, Some("carta")).await.unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].name, "Alpi Carta");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Bellini & Figli"), "bellinifigli");
        assert_eq!(slug("O'Brien & Sons <Ltd>"), "obriensonsltd");
    }
}

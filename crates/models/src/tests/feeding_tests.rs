use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use super::setup_test_db;
use crate::feeding;

fn sample(name: &str) -> feeding::Model {
    feeding::Model { id: 0, name: name.to_string(), quantity_grams: Some(250), notes: None, fed_at: None }
}

#[test]
fn body_without_id_defaults_to_zero() {
    let m: feeding::Model = serde_json::from_value(serde_json::json!({"name": "Oats"})).unwrap();
    assert_eq!(m.id, 0);
    assert_eq!(m.name, "Oats");
    assert_eq!(m.quantity_grams, None);
}

#[test]
fn serializes_all_columns() {
    let m = feeding::Model { id: 3, ..sample("Hay") };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["id"], 3);
    assert_eq!(v["name"], "Hay");
    assert_eq!(v["quantity_grams"], 250);
    assert!(v["notes"].is_null());
}

#[tokio::test]
async fn insert_ignores_payload_id() -> Result<()> {
    let db = setup_test_db().await?;

    let created = feeding::Model { id: 42, ..sample("Oats") }.into_new().insert(&db).await?;
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Oats");

    let found = feeding::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(created));
    assert!(feeding::Entity::find_by_id(42).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn replacement_overwrites_every_column() -> Result<()> {
    let db = setup_test_db().await?;
    let created = sample("Oats").into_new().insert(&db).await?;

    let replacement = feeding::Model {
        id: created.id,
        name: "Bran".into(),
        quantity_grams: None,
        notes: Some("wet".into()),
        fed_at: None,
    };
    let updated = replacement.clone().into_replacement().update(&db).await?;
    assert_eq!(updated, replacement);

    let found = feeding::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(replacement));
    Ok(())
}

#[tokio::test]
async fn replacing_missing_row_is_not_updated() -> Result<()> {
    let db = setup_test_db().await?;
    let res = feeding::Model { id: 99, ..sample("Ghost") }.into_replacement().update(&db).await;
    assert!(res.is_err());
    Ok(())
}

#[tokio::test]
async fn ids_ascend_in_insert_order() -> Result<()> {
    let db = setup_test_db().await?;
    for name in ["Oats", "Bran", "Hay"] {
        sample(name).into_new().insert(&db).await?;
    }
    let rows = feeding::Entity::find().order_by_asc(feeding::Column::Id).all(&db).await?;
    let names: Vec<_> = rows.iter().map(|r| (r.id, r.name.as_str())).collect();
    assert_eq!(names, vec![(1, "Oats"), (2, "Bran"), (3, "Hay")]);
    Ok(())
}

use sqlx::SqlitePool;
use terra::model::{CompanyPatch, CountryPatch, NewCompany, NewCountry};
use terra::storage::{self, CompanyStore, CountryStore};

async fn test_pool() -> SqlitePool {
    let pool = storage::connect("sqlite::memory:").await.unwrap();
    storage::run_migrations(&pool).await.unwrap();
    pool
}

fn indonesia() -> NewCountry {
    NewCountry {
        id: "IDN".to_string(),
        name: "Indonesia".to_string(),
        code: "ID".to_string(),
    }
}

#[tokio::test]
async fn test_country_create_and_get() {
    let store = CountryStore::new(test_pool().await);

    let created = store.create(&indonesia()).await.unwrap();
    assert_eq!(created.id, "IDN");
    assert_eq!(created.name, "Indonesia");
    assert_eq!(created.code, "ID");

    let fetched = store.get("IDN").await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_country_get_absent_is_none() {
    let store = CountryStore::new(test_pool().await);
    assert!(store.get("XXX").await.unwrap().is_none());
}

#[tokio::test]
async fn test_country_duplicate_names_permitted() {
    let store = CountryStore::new(test_pool().await);
    store.create(&indonesia()).await.unwrap();

    // Same name and code under a different ID is fine; only the ID is unique.
    store
        .create(&NewCountry {
            id: "ID2".to_string(),
            ..indonesia()
        })
        .await
        .unwrap();
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_country_create_many_in_order() {
    let store = CountryStore::new(test_pool().await);

    let created = store
        .create_many(&[
            indonesia(),
            NewCountry {
                id: "MYS".to_string(),
                name: "Malaysia".to_string(),
                code: "MY".to_string(),
            },
        ])
        .await
        .unwrap();

    let ids: Vec<&str> = created.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["IDN", "MYS"]);
}

#[tokio::test]
async fn test_country_create_many_rolls_back_on_conflict() {
    let store = CountryStore::new(test_pool().await);

    let result = store.create_many(&[indonesia(), indonesia()]).await;
    assert!(result.is_err());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_country_update_partial() {
    let store = CountryStore::new(test_pool().await);
    let created = store.create(&indonesia()).await.unwrap();

    let updated = store
        .update(
            "IDN",
            &CountryPatch {
                name: Some("Indonesia Raya".to_string()),
                code: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Indonesia Raya");
    assert_eq!(updated.code, "ID");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_country_update_empty_patch_is_a_no_op() {
    let store = CountryStore::new(test_pool().await);
    let created = store.create(&indonesia()).await.unwrap();

    let updated = store.update("IDN", &CountryPatch::default()).await.unwrap();
    assert_eq!(updated, created);

    // updated_at untouched in storage too.
    let fetched = store.get("IDN").await.unwrap().unwrap();
    assert_eq!(fetched.updated_at, created.updated_at);
}

#[tokio::test]
async fn test_country_update_missing_is_not_found() {
    let store = CountryStore::new(test_pool().await);

    let err = store
        .update("XXX", &CountryPatch::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_country_update_rejects_empty_field() {
    let store = CountryStore::new(test_pool().await);
    store.create(&indonesia()).await.unwrap();

    let err = store
        .update(
            "IDN",
            &CountryPatch {
                name: Some(String::new()),
                code: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("name cannot be empty"));

    // No side effects.
    let country = store.get("IDN").await.unwrap().unwrap();
    assert_eq!(country.name, "Indonesia");
}

#[tokio::test]
async fn test_country_delete_returns_snapshot() {
    let store = CountryStore::new(test_pool().await);
    let created = store.create(&indonesia()).await.unwrap();

    let deleted = store.delete("IDN").await.unwrap();
    assert_eq!(deleted, created);
    assert!(store.get("IDN").await.unwrap().is_none());
}

#[tokio::test]
async fn test_country_delete_missing_is_not_found() {
    let store = CountryStore::new(test_pool().await);
    let err = store.delete("XXX").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_company_crud_roundtrip() {
    let pool = test_pool().await;
    CountryStore::new(pool.clone())
        .create(&indonesia())
        .await
        .unwrap();
    let store = CompanyStore::new(pool);

    let created = store
        .create(&NewCompany {
            name: "Garuda".to_string(),
            industry: "Aviation".to_string(),
            country_id: "IDN".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.country_id.as_deref(), Some("IDN"));

    let fetched = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = store
        .update(
            created.id,
            &CompanyPatch {
                industry: Some("Airlines".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Garuda");
    assert_eq!(updated.industry, "Airlines");

    let deleted = store.delete(created.id).await.unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(store.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_company_update_empty_patch_is_a_no_op() {
    let pool = test_pool().await;
    CountryStore::new(pool.clone())
        .create(&indonesia())
        .await
        .unwrap();
    let store = CompanyStore::new(pool);

    let created = store
        .create(&NewCompany {
            name: "Garuda".to_string(),
            industry: "Aviation".to_string(),
            country_id: "IDN".to_string(),
        })
        .await
        .unwrap();

    let updated = store
        .update(created.id, &CompanyPatch::default())
        .await
        .unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_company_list_by_country() {
    let pool = test_pool().await;
    let countries = CountryStore::new(pool.clone());
    countries.create(&indonesia()).await.unwrap();
    countries
        .create(&NewCountry {
            id: "MYS".to_string(),
            name: "Malaysia".to_string(),
            code: "MY".to_string(),
        })
        .await
        .unwrap();

    let store = CompanyStore::new(pool);
    store
        .create_many(&[
            NewCompany {
                name: "Garuda".to_string(),
                industry: "Aviation".to_string(),
                country_id: "IDN".to_string(),
            },
            NewCompany {
                name: "Petronas".to_string(),
                industry: "Energy".to_string(),
                country_id: "MYS".to_string(),
            },
        ])
        .await
        .unwrap();

    let in_idn = store.list_by_country("IDN").await.unwrap();
    assert_eq!(in_idn.len(), 1);
    assert_eq!(in_idn[0].name, "Garuda");
}

#[tokio::test]
async fn test_company_create_with_unknown_country_fails() {
    let store = CompanyStore::new(test_pool().await);

    let err = store
        .create(&NewCompany {
            name: "Ghost".to_string(),
            industry: "None".to_string(),
            country_id: "XXX".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, terra::error::TerraError::Database(_)));
}

#[tokio::test]
async fn test_country_delete_sets_company_reference_null() {
    let pool = test_pool().await;
    let countries = CountryStore::new(pool.clone());
    countries.create(&indonesia()).await.unwrap();

    let companies = CompanyStore::new(pool);
    let company = companies
        .create(&NewCompany {
            name: "Garuda".to_string(),
            industry: "Aviation".to_string(),
            country_id: "IDN".to_string(),
        })
        .await
        .unwrap();

    countries.delete("IDN").await.unwrap();

    let orphaned = companies.get(company.id).await.unwrap().unwrap();
    assert_eq!(orphaned.country_id, None);
}

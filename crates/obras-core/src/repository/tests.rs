//! Repository Integration Tests
//!
//! SiteStore mutations and the seed source, driven the way the UI drives them.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{format_brl, DomainError, PaymentStatus, TaskDraft, TaskPatch, Unit, WorkSite};
use crate::filter::FilterSelection;
use crate::pagination::paginate;
use crate::repository::{SeedSource, SiteStore, TaskSource};
use crate::totals::total_value;

fn empty_site(id: &str) -> WorkSite {
    WorkSite::new(id, format!("Obra {}", id), "Teste", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
}

fn setup_store() -> SiteStore {
    SiteStore::new(vec![empty_site("1"), empty_site("2")])
}

fn painting() -> TaskDraft {
    TaskDraft {
        location: "Térreo".to_string(),
        activity: "Pintura".to_string(),
        unit: Unit::SquareMeter,
        quantity: Decimal::from(10),
        value: Decimal::from(500),
        contractor: "ABC".to_string(),
        payment_status: PaymentStatus::Pending,
    }
}

#[test]
fn test_add_task_to_empty_site() {
    let mut store = setup_store();

    let created = store.add_task("1", painting()).expect("Failed to add");

    let site = store.site("1").unwrap();
    assert_eq!(site.tasks.len(), 1);
    assert_eq!(site.tasks[0], created);

    let page = paginate(&site.tasks, 1, 10);
    assert_eq!(page.items, &[created]);
    assert_eq!(format_brl(total_value(&site.tasks)), "R$ 500,00");
}

#[test]
fn test_add_task_ids_are_unique() {
    let mut store = setup_store();
    let a = store.add_task("1", painting()).unwrap();
    let b = store.add_task("1", painting()).unwrap();
    let c = store.add_task("2", painting()).unwrap();
    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert!(c.id.starts_with("2-"));
}

#[test]
fn test_add_task_skips_ids_already_taken() {
    let mut site = empty_site("1");
    site.tasks.push(crate::domain::Task::new("1-1", painting()));
    let mut store = SiteStore::new(vec![site]);
    let created = store.add_task("1", painting()).unwrap();
    assert_eq!(created.id, "1-2");
}

#[test]
fn test_add_task_unknown_site() {
    let mut store = setup_store();
    let err = store.add_task("99", painting()).unwrap_err();
    assert_eq!(err, DomainError::site_not_found("99"));
    assert!(store.sites().iter().all(|s| s.tasks.is_empty()));
}

#[test]
fn test_update_task_merges_fields() {
    let mut store = setup_store();
    let created = store.add_task("1", painting()).unwrap();

    let updated = store
        .update_task(
            "1",
            &created.id,
            TaskPatch {
                value: Some(Decimal::from(750)),
                payment_status: Some(PaymentStatus::InProgress),
                ..Default::default()
            },
        )
        .expect("Update failed");

    assert_eq!(updated.value(), Decimal::from(750));
    assert_eq!(updated.status(), PaymentStatus::InProgress);
    assert_eq!(updated.location(), "Térreo");
    assert_eq!(store.find_task(&created.id), Some(&updated));
}

#[test]
fn test_update_task_wrong_site_is_not_found() {
    let mut store = setup_store();
    let created = store.add_task("1", painting()).unwrap();
    let err = store.update_task("2", &created.id, TaskPatch::default()).unwrap_err();
    assert_eq!(err, DomainError::task_not_found(&created.id));
}

#[test]
fn test_delete_task_from_any_site() {
    let mut store = setup_store();
    store.add_task("1", painting()).unwrap();
    let target = store.add_task("2", painting()).unwrap();

    let removed = store.delete_task(&target.id).expect("Delete failed");
    assert_eq!(removed, target);
    assert!(store.site("2").unwrap().tasks.is_empty());
    assert_eq!(store.site("1").unwrap().tasks.len(), 1);

    assert!(store.delete_task(&target.id).is_err());
}

#[test]
fn test_mark_paid_is_idempotent() {
    let mut store = setup_store();
    let created = store.add_task("1", painting()).unwrap();

    store.mark_paid(&created.id).unwrap();
    assert_eq!(store.find_task(&created.id).unwrap().status(), PaymentStatus::Paid);

    store.mark_paid(&created.id).unwrap();
    assert_eq!(store.find_task(&created.id).unwrap().status(), PaymentStatus::Paid);

    assert!(store.mark_paid("nope").is_err());
}

#[test]
fn test_mark_paid_many_counts_found() {
    let mut store = setup_store();
    let a = store.add_task("1", painting()).unwrap();
    let b = store.add_task("2", painting()).unwrap();
    assert_eq!(store.mark_paid_many(&[a.id.as_str(), "ghost", b.id.as_str()]), 2);
}

#[test]
fn test_mark_paid_many_counts_repeated_ids_once() {
    let mut store = setup_store();
    let a = store.add_task("1", painting()).unwrap();
    assert_eq!(store.mark_paid_many(&[a.id.as_str(), a.id.as_str()]), 1);
}

#[test]
fn test_add_task_rejects_out_of_range_value() {
    let mut store = setup_store();
    let mut draft = painting();
    draft.value = Decimal::MAX;
    let err = store.add_task("1", draft).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert!(store.site("1").unwrap().tasks.is_empty());
}

#[test]
fn test_update_task_keeps_task_on_invalid_patch() {
    let mut store = setup_store();
    let created = store.add_task("1", painting()).unwrap();
    let err = store
        .update_task(
            "1",
            &created.id,
            TaskPatch {
                quantity: Some(Decimal::ZERO),
                location: Some("Cobertura".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert_eq!(store.find_task(&created.id), Some(&created));
}

#[test]
fn test_total_of_two_maximal_tasks_does_not_overflow() {
    let mut store = setup_store();
    let mut draft = painting();
    draft.value = Decimal::from(crate::domain::MAX_AMOUNT);
    store.add_task("1", draft.clone()).unwrap();
    store.add_task("1", draft).unwrap();
    let tasks = &store.site("1").unwrap().tasks;
    assert_eq!(total_value(tasks), Decimal::from(2 * crate::domain::MAX_AMOUNT));
    assert_eq!(crate::payment::PaymentSummary::of(tasks).total, total_value(tasks));
}

#[test]
fn test_mutation_then_filter_recompute() {
    let mut store = setup_store();
    let a = store.add_task("1", painting()).unwrap();
    store.add_task("1", painting()).unwrap();

    let mut selection = FilterSelection::new();
    selection.toggle_status(PaymentStatus::Pending);
    assert_eq!(selection.apply(&store.site("1").unwrap().tasks).len(), 2);

    store.mark_paid(&a.id).unwrap();
    assert_eq!(selection.apply(&store.site("1").unwrap().tasks).len(), 1);
}

#[test]
fn test_search_sites() {
    let store = SiteStore::new(vec![
        WorkSite::new("1", "Residencial Jardim", "Prédio", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        WorkSite::new("2", "Galpão", "Centro logístico", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
    ]);
    let found: Vec<&str> = store.search_sites("LOGÍSTICO").iter().map(|s| s.id.as_str()).collect();
    assert_eq!(found, vec!["2"]);
    assert_eq!(store.search_sites("").len(), 2);
}

#[test]
fn test_embedded_seed_parses() {
    let source = SeedSource::embedded().expect("Seed should parse");
    let sites = source.sites().unwrap();
    assert!(!sites.is_empty());
    assert!(sites.iter().any(|s| s.tasks.len() == 23));
    assert!(sites.iter().any(|s| s.tasks.is_empty()));
}

#[test]
fn test_bad_seed_is_reported() {
    let err = SeedSource::from_json(r#"[{"id": 1}]"#).unwrap_err();
    assert!(matches!(err, DomainError::Seed(_)));
}

#[tokio::test]
async fn test_lazy_seed_loads_tasks_on_demand() {
    let source = SeedSource::embedded().unwrap().lazy(true);
    let sites = source.sites().unwrap();
    assert!(sites.iter().all(|s| s.tasks.is_empty()));

    let mut store = SiteStore::new(sites);
    let tasks = source.load_tasks("1").await.expect("Load failed");
    assert_eq!(tasks.len(), 23);

    store.replace_tasks("1", tasks).unwrap();
    let page = paginate(&store.site("1").unwrap().tasks, 3, 10);
    assert_eq!(page.items.len(), 3);
}

#[tokio::test]
async fn test_load_unknown_site_fails() {
    let source = SeedSource::embedded().unwrap();
    let err = source.load_tasks("404").await.unwrap_err();
    assert_eq!(err, DomainError::site_not_found("404"));
}

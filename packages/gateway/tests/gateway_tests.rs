//! Gateway behavior against an in-process store

use pagekit_gateway::{
    GatewayError, LocalTransport, Synced, TemplateGateway, TemplateRepository,
};
use pagekit_schema::{ComponentInstance, ComponentType, PropBag, Template, TemplateCategory};

fn draft(name: &str) -> Template {
    Template::new(name, TemplateCategory::Homepage).with_components(vec![
        ComponentInstance::new(ComponentType::Banner),
        ComponentInstance::new(ComponentType::Hero)
            .with_props(&PropBag::new().with("title", "Spring Sale")),
        ComponentInstance::new(ComponentType::Products),
    ])
}

fn setup() -> (LocalTransport, TemplateGateway<LocalTransport>) {
    let mut repo = TemplateRepository::new();
    repo.seed_default(Template {
        id: "default-home".to_string(),
        ..draft("Classic Home")
    });
    let transport = LocalTransport::new(repo);
    let gateway = TemplateGateway::new(transport.clone());
    (transport, gateway)
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let (_, mut gateway) = setup();
    let doc = draft("Landing");

    let saved = gateway.create(&doc).await.unwrap();
    assert!(matches!(saved, Synced::Remote(_)));
    let saved = saved.into_value();
    assert!(!saved.id.is_empty());
    assert_eq!(saved.version, 1);

    let loaded = gateway.get(&saved.id).await.unwrap().into_value();
    assert_eq!(loaded.name, doc.name);
    assert_eq!(loaded.category, doc.category);
    assert_eq!(loaded.components, doc.components);
    assert_eq!(loaded, saved);
}

#[tokio::test]
async fn test_list_falls_back_to_cache_when_offline() {
    let (transport, mut gateway) = setup();
    let remote = gateway.list().await.unwrap();
    assert!(!remote.is_offline());
    assert_eq!(remote.value().len(), 1);

    transport.set_online(false);
    let offline = gateway.list().await.unwrap();
    assert!(offline.is_offline());
    assert!(offline.warning().is_some());
    assert_eq!(offline.value(), remote.value());
}

#[tokio::test]
async fn test_list_offline_with_empty_cache_is_empty() {
    let (transport, mut gateway) = setup();
    transport.set_online(false);

    let offline = gateway.list().await.unwrap();
    assert!(offline.is_offline());
    assert!(offline.value().is_empty());
}

#[tokio::test]
async fn test_get_offline_without_cached_copy_fails() {
    let (transport, mut gateway) = setup();
    transport.set_online(false);

    let err = gateway.get("default-home").await.unwrap_err();
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_create_offline_is_kept_locally() {
    let (transport, mut gateway) = setup();
    transport.set_online(false);

    let created = gateway.create(&draft("Draft")).await.unwrap();
    assert!(created.is_offline());
    let created = created.into_value();
    assert!(created.id.starts_with("local-"));
    assert_eq!(gateway.cached(&created.id), Some(&created));

    // the store never saw it
    transport.set_online(true);
    let repo = transport.repository();
    assert_eq!(repo.lock().await.len(), 1);
}

#[tokio::test]
async fn test_update_offline_applies_to_cache() {
    let (transport, mut gateway) = setup();
    let saved = gateway.create(&draft("Landing")).await.unwrap().into_value();

    transport.set_online(false);
    let mut edit = saved.clone();
    edit.name = "Landing v2".to_string();
    edit.usage_count = 99;

    let updated = gateway.update(&saved.id, &edit, None).await.unwrap();
    assert!(updated.is_offline());
    let updated = updated.into_value();
    assert_eq!(updated.name, "Landing v2");
    assert_eq!(updated.usage_count, 0);
    assert_eq!(updated.version, 2);
    assert_eq!(gateway.cached(&saved.id).unwrap().name, "Landing v2");
}

#[tokio::test]
async fn test_update_conflict_propagates_and_keeps_cache() {
    let (_, mut gateway) = setup();
    let saved = gateway.create(&draft("Landing")).await.unwrap().into_value();

    let mut edit = saved.clone();
    edit.name = "First".to_string();
    gateway.update(&saved.id, &edit, Some(1)).await.unwrap();

    edit.name = "Second".to_string();
    let err = gateway.update(&saved.id, &edit, Some(1)).await.unwrap_err();
    assert_eq!(
        err,
        GatewayError::Conflict {
            expected: 1,
            actual: 2
        }
    );
    assert_eq!(gateway.cached(&saved.id).unwrap().name, "First");
}

#[tokio::test]
async fn test_update_offline_with_stale_version_conflicts() {
    let (transport, mut gateway) = setup();
    let saved = gateway.create(&draft("Landing")).await.unwrap().into_value();

    let mut edit = saved.clone();
    edit.name = "First".to_string();
    gateway.update(&saved.id, &edit, Some(1)).await.unwrap();

    transport.set_online(false);
    edit.name = "Stale".to_string();
    let err = gateway.update(&saved.id, &edit, Some(1)).await.unwrap_err();
    assert_eq!(
        err,
        GatewayError::Conflict {
            expected: 1,
            actual: 2
        }
    );

    let cached = gateway.cached(&saved.id).unwrap();
    assert_eq!(cached.name, "First");
    assert_eq!(cached.version, 2);

    // the current version still goes through locally
    let current = gateway.update(&saved.id, &edit, Some(2)).await.unwrap();
    assert!(current.is_offline());
    assert_eq!(current.value().version, 3);
}

#[tokio::test]
async fn test_update_without_version_is_last_writer_wins() {
    let (_, mut gateway) = setup();
    let saved = gateway.create(&draft("Landing")).await.unwrap().into_value();

    let mut edit = saved.clone();
    edit.name = "One".to_string();
    gateway.update(&saved.id, &edit, None).await.unwrap();
    edit.name = "Two".to_string();
    let last = gateway.update(&saved.id, &edit, None).await.unwrap().into_value();

    assert_eq!(last.name, "Two");
    assert_eq!(last.version, 3);
}

#[tokio::test]
async fn test_not_found_propagates() {
    let (_, mut gateway) = setup();
    let err = gateway.get("ghost").await.unwrap_err();
    assert_eq!(err, GatewayError::NotFound("ghost".to_string()));
    assert!(gateway.cached("ghost").is_none());
}

#[tokio::test]
async fn test_default_template_delete_is_rejected() {
    let (transport, mut gateway) = setup();

    // uncached: the store refuses
    let err = gateway.delete("default-home").await.unwrap_err();
    assert_eq!(err, GatewayError::ProtectedTemplate("default-home".to_string()));

    // cached: refused before reaching the store, even offline
    gateway.list().await.unwrap();
    transport.set_online(false);
    let err = gateway.delete("default-home").await.unwrap_err();
    assert_eq!(err, GatewayError::ProtectedTemplate("default-home".to_string()));
    assert!(gateway.cached("default-home").is_some());
}

#[tokio::test]
async fn test_delete_removes_from_list() {
    let (_, mut gateway) = setup();
    let saved = gateway.create(&draft("Landing")).await.unwrap().into_value();

    gateway.delete(&saved.id).await.unwrap();
    let listed = gateway.list().await.unwrap().into_value();
    assert!(listed.iter().all(|t| t.id != saved.id));
    assert!(gateway.cached(&saved.id).is_none());
}

#[tokio::test]
async fn test_delete_offline_updates_cache() {
    let (transport, mut gateway) = setup();
    let saved = gateway.create(&draft("Landing")).await.unwrap().into_value();

    transport.set_online(false);
    let deleted = gateway.delete(&saved.id).await.unwrap();
    assert!(deleted.is_offline());
    assert!(gateway.cached(&saved.id).is_none());
}

#[tokio::test]
async fn test_apply_counts_usage() {
    let (transport, mut gateway) = setup();
    let once = gateway.apply("default-home").await.unwrap().into_value();
    assert_eq!(once.usage_count, 1);

    transport.set_online(false);
    let twice = gateway.apply("default-home").await.unwrap();
    assert!(twice.is_offline());
    assert_eq!(twice.value().usage_count, 2);
}

#[tokio::test]
async fn test_duplicate_default_template() {
    let (_, mut gateway) = setup();
    let copy = gateway.duplicate("default-home").await.unwrap();
    assert!(!copy.is_offline());

    let copy = copy.into_value();
    assert_ne!(copy.id, "default-home");
    assert_eq!(copy.name, "Classic Home (copy)");
    assert!(!copy.is_default);
    assert_eq!(copy.usage_count, 0);

    let listed = gateway.list().await.unwrap().into_value();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].is_default);
}

#[tokio::test]
async fn test_duplicate_offline_from_cache() {
    let (transport, mut gateway) = setup();
    gateway.list().await.unwrap();
    transport.set_online(false);

    let copy = gateway.duplicate("default-home").await.unwrap();
    assert!(copy.is_offline());
    assert!(copy.value().id.starts_with("local-"));
    assert_eq!(copy.value().name, "Classic Home (copy)");
}

//! Integration tests for editor sessions

use pagekit_editor::{Applied, Direction, EditorSession, Selection, Theme, ViewMode};
use pagekit_schema::registry::default_props;
use pagekit_schema::{ComponentType, PropBag, Template, TemplateCategory, Viewport};

fn empty_session() -> EditorSession {
    EditorSession::new(Template::new("Landing", TemplateCategory::Homepage))
}

fn ids(session: &EditorSession) -> Vec<String> {
    session.components().iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_editing_scenario() {
    let mut session = empty_session();

    let hero = session.add_component(ComponentType::Hero);
    assert_eq!(session.components().len(), 1);
    assert_eq!(session.components()[0].kind.as_str(), "hero");
    assert_eq!(session.components()[0].props, default_props(ComponentType::Hero));
    assert!(session.components()[0].props.contains_key("title"));
    assert!(session.components()[0].props.contains_key("subtitle"));

    let before = session.components()[0].props.clone();
    session.update_props(&hero, &PropBag::new().with("title", "Sale"));
    let after = &session.components()[0].props;
    assert_eq!(after.get_str("title"), Some("Sale"));
    for (key, value) in before.iter() {
        if key != "title" {
            assert_eq!(after.get(key), Some(value), "{} changed", key);
        }
    }

    let products = session.add_component(ComponentType::Products);
    assert_eq!(ids(&session), vec![hero.clone(), products.clone()]);

    session.move_component(&products, Direction::Up);
    assert_eq!(ids(&session), vec![products.clone(), hero.clone()]);

    session.select_component(&hero);
    session.delete_component(&hero);
    assert_eq!(ids(&session), vec![products]);
    assert_eq!(session.selection(), &Selection::None);
}

#[test]
fn test_move_up_then_down_restores_order() {
    let mut session = empty_session();
    session.add_component(ComponentType::Banner);
    let middle = session.add_component(ComponentType::Text);
    session.add_component(ComponentType::Faq);
    let original = ids(&session);

    assert_eq!(session.move_component(&middle, Direction::Up), Applied::Changed);
    assert_eq!(session.move_component(&middle, Direction::Down), Applied::Changed);
    assert_eq!(ids(&session), original);
}

#[test]
fn test_move_at_boundaries_is_noop() {
    let mut session = empty_session();
    let first = session.add_component(ComponentType::Banner);
    let last = session.add_component(ComponentType::Text);
    let original = ids(&session);
    let version = session.version();

    assert_eq!(session.move_component(&first, Direction::Up), Applied::NoOp);
    assert_eq!(session.move_component(&last, Direction::Down), Applied::NoOp);
    assert_eq!(ids(&session), original);
    assert_eq!(session.version(), version);
}

#[test]
fn test_duplicate_independence() {
    let mut session = empty_session();
    session.add_component(ComponentType::Banner);
    let original = session.add_component(ComponentType::Features);
    session.add_component(ComponentType::Faq);

    let copy = session.duplicate_component(&original).unwrap();
    assert_ne!(copy, original);
    assert_eq!(session.components()[2].id, copy);
    assert_eq!(session.components()[2].kind, session.components()[1].kind);
    assert_eq!(session.components()[2].props, session.components()[1].props);

    session.update_props(&copy, &PropBag::new().with("title", "Changed"));
    assert_eq!(
        session.components()[1].props.get_str("title"),
        Some("Why Choose Us")
    );
}

#[test]
fn test_reorder_clamps_index() {
    let mut session = empty_session();
    let a = session.add_component(ComponentType::Hero);
    let b = session.add_component(ComponentType::Text);
    let c = session.add_component(ComponentType::Spacer);

    assert_eq!(session.reorder(&a, 99), Applied::Changed);
    assert_eq!(ids(&session), vec![b.clone(), c.clone(), a.clone()]);

    assert_eq!(session.reorder(&c, 0), Applied::Changed);
    assert_eq!(ids(&session), vec![c, b, a.clone()]);

    assert_eq!(session.reorder(&a, 2), Applied::NoOp);
}

#[test]
fn test_stale_ids_never_fail() {
    let mut session = empty_session();
    let id = session.add_component(ComponentType::Text);
    session.delete_component(&id);
    let version = session.version();

    assert_eq!(session.update_props(&id, &PropBag::new().with("content", "x")), Applied::NoOp);
    assert_eq!(session.delete_component(&id), Applied::NoOp);
    assert_eq!(session.move_component(&id, Direction::Up), Applied::NoOp);
    assert_eq!(session.reorder(&id, 0), Applied::NoOp);
    assert_eq!(session.duplicate_component(&id), None);
    assert_eq!(session.select_component(&id), Applied::NoOp);
    assert_eq!(session.begin_drag(&id), Applied::NoOp);
    assert_eq!(session.version(), version);
}

#[test]
fn test_view_state_does_not_touch_document() {
    let mut session = empty_session();
    session.add_component(ComponentType::Hero);
    let version = session.version();

    session.set_preview_mode(ViewMode::Previewing);
    session.set_viewport(Viewport::Mobile);
    assert_eq!(session.viewport(), Viewport::Mobile);
    assert_eq!(session.version(), version);
    assert_eq!(session.undo(), Applied::Changed);
    assert!(session.components().is_empty());
}

#[test]
fn test_theme_is_one_undo_step() {
    let mut session = empty_session();
    let hero = session.add_component(ComponentType::Hero);
    let faq = session.add_component(ComponentType::Faq);
    let before: Vec<_> = session.components().iter().map(|c| c.props.clone()).collect();

    let theme = Theme::preset("warm").unwrap();
    assert_eq!(session.apply_theme(&theme), Applied::Changed);
    assert_eq!(session.undo_label(), Some("Apply warm theme"));
    assert_eq!(
        session.document().component(&hero).unwrap().props.get_str("backgroundColor"),
        Some("#ea580c")
    );
    assert_eq!(
        session.document().component(&faq).unwrap().props.get_str("textColor"),
        Some("#431407")
    );

    session.undo();
    let after: Vec<_> = session.components().iter().map(|c| c.props.clone()).collect();
    assert_eq!(after, before);

    // Applying the same theme twice changes nothing the second time
    session.redo();
    assert_eq!(session.apply_theme(&theme), Applied::NoOp);
}

#[test]
fn test_unknown_components_survive_editing() {
    let json = r#"{
        "name": "Imported",
        "components": [
            {"id": "w-1", "type": "video-wall", "props": {"src": "a.mp4"}},
            {"id": "t-1", "type": "text", "props": {"content": "Hi"}}
        ]
    }"#;
    let template: Template = serde_json::from_str(json).unwrap();
    let mut session = EditorSession::new(template);

    session.move_component("t-1", Direction::Up);
    session.apply_theme(&Theme::preset("dark").unwrap());

    let saved = serde_json::to_value(session.document()).unwrap();
    assert_eq!(saved["components"][1]["type"], "video-wall");
    assert_eq!(saved["components"][1]["props"]["src"], "a.mp4");
}

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn locate_control_only_finds_added_ids() {
    let env = MemoryEnv::new().with_control("themeBtn");
    assert_eq!(env.locate_control("themeBtn"), Some("themeBtn".to_owned()));
    assert_eq!(env.locate_control("other"), None);
}

#[test]
fn clones_share_page_state() {
    let env = MemoryEnv::new();
    let other = env.clone();
    other.set_persisted("theme", "light");
    assert_eq!(env.persisted_value("theme").as_deref(), Some("light"));
    assert_eq!(env.storage_writes(), 1);
}

#[test]
fn seeded_values_do_not_count_as_writes() {
    let env = MemoryEnv::new().with_persisted("theme", "dark");
    assert_eq!(env.persisted("theme").as_deref(), Some("dark"));
    assert_eq!(env.storage_writes(), 0);
}

#[test]
fn label_and_description_land_on_the_control() {
    let env = MemoryEnv::new().with_control("themeBtn");
    let control = "themeBtn".to_owned();
    env.set_label(&control, "x");
    env.set_description(&control, "y");
    assert_eq!(
        env.control("themeBtn"),
        Some(ControlState { label: Some("x".into()), description: Some("y".into()) })
    );
}

#[test]
fn click_runs_only_handlers_for_target() {
    let env = MemoryEnv::new().with_control("a").with_control("b");
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    env.on_click(&"a".to_owned(), Box::new(move || counter.set(counter.get() + 1)));

    assert_eq!(env.click("b"), 0);
    assert_eq!(env.click("a"), 1);
    assert_eq!(env.click("a"), 1);
    assert_eq!(hits.get(), 2);
    assert_eq!(env.listener_count(), 1);
}

#[test]
fn handlers_may_call_back_into_env() {
    let env = MemoryEnv::new().with_control("a");
    let inner = env.clone();
    env.on_click(&"a".to_owned(), Box::new(move || inner.set_attribute("data-theme", "light")));
    env.click("a");
    assert_eq!(env.attribute("data-theme").as_deref(), Some("light"));
}

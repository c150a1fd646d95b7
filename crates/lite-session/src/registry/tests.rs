use super::*;

fn registry_with(n: u32) -> TabRegistry {
    let mut reg = TabRegistry::new();
    for _ in 1..n {
        reg.create_tab();
    }
    reg
}

#[test]
fn new_registry_has_one_empty_active_tab() {
    let reg = TabRegistry::new();
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.active_id(), TabId(1));
    assert_eq!(reg.find_active().title, NEW_TAB_TITLE);
    assert!(!reg.find_active().has_url());
}

#[test]
fn create_tab_allocates_max_plus_one() {
    let mut reg = registry_with(3);
    assert_eq!(reg.ids(), vec![TabId(1), TabId(2), TabId(3)]);
    reg.close_tab(TabId(2)).unwrap();
    assert_eq!(reg.create_tab(), TabId(4));
}

#[test]
fn create_tab_does_not_activate() {
    let mut reg = TabRegistry::new();
    let id = reg.create_tab();
    assert_eq!(id, TabId(2));
    assert_eq!(reg.active_id(), TabId(1));
}

#[test]
fn close_last_tab_resets_in_place() {
    let mut reg = TabRegistry::new();
    {
        let tab = reg.get_mut(TabId(1)).unwrap();
        tab.url = Some("x".into());
        tab.title = "x".into();
        tab.state = TabState::Live;
    }

    let outcome = reg.close_tab(TabId(1)).unwrap();
    assert_eq!(outcome, CloseOutcome::Reset);
    assert_eq!(reg.len(), 1);
    let tab = reg.find_active();
    assert_eq!(tab.id, TabId(1));
    assert_eq!(tab.url, None);
    assert_eq!(tab.title, NEW_TAB_TITLE);
    assert_eq!(tab.state, TabState::Empty);
}

#[test]
fn close_active_middle_picks_tab_sliding_in() {
    let mut reg = registry_with(3);
    reg.select_tab(TabId(2)).unwrap();

    let outcome = reg.close_tab(TabId(2)).unwrap();
    assert_eq!(
        outcome,
        CloseOutcome::Removed {
            new_active: Some(TabId(3))
        }
    );
    assert_eq!(reg.ids(), vec![TabId(1), TabId(3)]);
    assert_eq!(reg.active_id(), TabId(3));
}

#[test]
fn close_active_last_position_clamps() {
    let mut reg = registry_with(3);
    reg.select_tab(TabId(3)).unwrap();
    let outcome = reg.close_tab(TabId(3)).unwrap();
    assert_eq!(
        outcome,
        CloseOutcome::Removed {
            new_active: Some(TabId(2))
        }
    );
}

#[test]
fn close_inactive_keeps_active() {
    let mut reg = registry_with(3);
    reg.select_tab(TabId(3)).unwrap();
    let outcome = reg.close_tab(TabId(1)).unwrap();
    assert_eq!(outcome, CloseOutcome::Removed { new_active: None });
    assert_eq!(reg.active_id(), TabId(3));
}

#[test]
fn close_unknown_is_not_found_and_changes_nothing() {
    let mut reg = registry_with(2);
    let before = reg.ids();
    assert_eq!(reg.close_tab(TabId(9)), Err(RegistryError::NotFound(TabId(9))));
    assert_eq!(reg.ids(), before);
}

#[test]
fn select_unknown_is_not_found() {
    let mut reg = TabRegistry::new();
    assert_eq!(reg.select_tab(TabId(5)), Err(RegistryError::NotFound(TabId(5))));
    assert_eq!(reg.active_id(), TabId(1));
}

#[test]
fn random_create_close_sequences_keep_invariant() {
    // Deterministic pseudo-random walk over create/close/select.
    let mut reg = TabRegistry::new();
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let ids = reg.ids();
        let pick = ids[(seed as usize / 7) % ids.len()];
        match seed % 3 {
            0 => {
                reg.create_tab();
            }
            1 => {
                reg.close_tab(pick).unwrap();
            }
            _ => reg.select_tab(pick).unwrap(),
        }
        assert!(!reg.is_empty());
        assert!(reg.contains(reg.active_id()));
        assert_eq!(reg.find_active().id, reg.active_id());
    }
}

#[test]
fn neighbor_wraps_both_ways() {
    let reg = registry_with(3);
    assert_eq!(reg.neighbor_of_active(1), TabId(2));
    assert_eq!(reg.neighbor_of_active(-1), TabId(3));
}

#[test]
fn url_bearing_ids_skips_empty_tabs() {
    let mut reg = registry_with(3);
    reg.get_mut(TabId(2)).unwrap().url = Some("https://a.test/".into());
    reg.get_mut(TabId(3)).unwrap().url = Some(String::new());
    assert_eq!(reg.url_bearing_ids(), vec![TabId(2)]);
}

#[test]
fn display_title_strips_www() {
    let mut tab = Tab::new(TabId(1));
    assert_eq!(tab.display_title(), NEW_TAB_TITLE);
    tab.url = Some("https://www.rust-lang.org/learn".into());
    assert_eq!(tab.display_title(), "rust-lang.org");
    tab.url = Some("https://docs.rs/".into());
    assert_eq!(tab.display_title(), "docs.rs");
}

#[test]
fn snapshot_reports_loading() {
    let mut tab = Tab::new(TabId(4));
    tab.state = TabState::Loading;
    let snap = tab.snapshot();
    assert_eq!(snap.id, TabId(4));
    assert!(snap.loading);
}

use super::*;

#[test]
fn empty_active_tab_forces_effective_visible() {
    for (visible, pinned) in [(false, false), (true, false), (false, true), (true, true)] {
        let state = SidebarState::new(visible, pinned);
        assert!(state.effective(false), "visible={visible} pinned={pinned}");
    }
}

#[test]
fn effective_follows_flags_over_live_page() {
    assert!(!SidebarState::new(false, false).effective(true));
    assert!(SidebarState::new(true, false).effective(true));
    assert!(SidebarState::new(false, true).effective(true));
}

#[test]
fn leave_then_expire_hides_once() {
    let mut state = SidebarState::new(true, false);
    let token = state.leave(true).unwrap();
    assert!(state.hide_pending());
    assert!(state.hide_expired(token));
    assert!(!state.visible());
    // A second expiry of the same token is a no-op.
    assert!(!state.hide_expired(token));
}

#[test]
fn enter_cancels_pending_hide() {
    let mut state = SidebarState::new(true, false);
    let token = state.leave(true).unwrap();
    state.enter();
    assert!(!state.hide_pending());
    assert!(!state.hide_expired(token));
    assert!(state.visible());
}

#[test]
fn new_leave_supersedes_previous_token() {
    let mut state = SidebarState::new(true, false);
    let first = state.leave(true).unwrap();
    let second = state.leave(true).unwrap();
    assert_ne!(first, second);
    assert!(!state.hide_expired(first));
    assert!(state.visible());
    assert!(state.hide_expired(second));
}

#[test]
fn leave_is_ignored_when_pinned_or_welcome() {
    let mut pinned = SidebarState::new(true, true);
    assert!(pinned.leave(true).is_none());

    let mut welcome = SidebarState::new(true, false);
    assert!(welcome.leave(false).is_none());
    assert!(!welcome.hide_pending());
}

#[test]
fn pinning_clears_pending_hide() {
    let mut state = SidebarState::new(true, false);
    let token = state.leave(true).unwrap();
    state.toggle_pin();
    assert!(state.pinned());
    assert!(!state.hide_expired(token));
    assert!(state.visible());
}

#[test]
fn pinning_does_not_force_visible() {
    let mut state = SidebarState::new(false, false);
    state.toggle_pin();
    assert!(!state.visible());
    assert!(state.effective(true));
}

#[test]
fn toggle_flips_and_cancels() {
    let mut state = SidebarState::new(true, false);
    let token = state.leave(true).unwrap();
    state.toggle();
    assert!(!state.visible());
    assert!(!state.hide_pending());
    state.toggle();
    assert!(state.visible());
    assert!(!state.hide_expired(token));
}

#[test]
fn cancel_is_idempotent() {
    let mut state = SidebarState::new(true, false);
    state.cancel_hide();
    state.cancel_hide();
    assert!(!state.hide_pending());
}

#[test]
fn collapse_after_navigation_respects_pin() {
    let mut state = SidebarState::new(true, false);
    assert!(state.collapse_after_navigation());
    assert!(!state.visible());

    let mut pinned = SidebarState::new(true, true);
    assert!(!pinned.collapse_after_navigation());
    assert!(pinned.visible());
}

#[test]
fn escape_closes_search_before_hiding() {
    let mut state = SidebarState::new(true, false);
    state.set_search_open(true);
    assert_eq!(state.escape(true), EscapeOutcome::ClosedSearch);
    assert!(state.visible());
    assert_eq!(state.escape(true), EscapeOutcome::Hid);
    assert!(!state.visible());
}

#[test]
fn escape_ignored_when_pinned_or_welcome() {
    let mut pinned = SidebarState::new(true, true);
    assert_eq!(pinned.escape(true), EscapeOutcome::Ignored);
    let mut welcome = SidebarState::new(true, false);
    assert_eq!(welcome.escape(false), EscapeOutcome::Ignored);
    assert!(welcome.visible());
}

#[test]
fn set_search_open_reports_change() {
    let mut state = SidebarState::default();
    assert!(state.set_search_open(true));
    assert!(!state.set_search_open(true));
    assert!(state.set_search_open(false));
}

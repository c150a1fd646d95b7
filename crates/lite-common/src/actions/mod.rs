mod action_enum;
mod dispatch;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_menu_actions_have_labels() {
        for action in Action::menu_actions() {
            let label = action.label();
            assert!(!label.is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn select_tab_labels() {
        assert_eq!(Action::SelectTab(1).label(), "Select Tab");
        assert_eq!(Action::NextTab.label(), "Next Tab");
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::NewTab,
            Action::SelectTab(3),
            Action::Navigate("rust-lang.org".into()),
            Action::Escape,
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }

    #[test]
    fn history_actions_are_flagged() {
        assert!(Action::GoBack.is_history());
        assert!(Action::GoForward.is_history());
        assert!(Action::Reload.is_history());
        assert!(!Action::NewTab.is_history());
    }
}

//! Tests for the application state: key handling, mounting and actions.

use super::*;
use crate::commands::{AppCommand, InputContext};
use crate::domain::{Category, ExplorerError, Network};
use crate::presenter::{FETCH_ERROR_MESSAGE, TxView};
use crate::source::SourceKind;
use crate::test_utils::{AppMother, ControlledFetcher, DatasetMother, RecordMother};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App<ControlledFetcher>, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<ControlledFetcher>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

async fn settle(app: &mut App<ControlledFetcher>) {
    let message = app.message_rx.recv().await.expect("fetch should report");
    app.apply_message(message);
}

// ============================================================================
// Static Source
// ============================================================================

mod static_source_tests {
    use super::*;

    #[test]
    fn test_no_query_shows_nothing() {
        let app = AppMother::with_static(None);
        assert_eq!(app.current_view(), TxView::Empty);
        assert_eq!(app.source_kind(), SourceKind::Static);
        assert!(app.current_key().is_none());
    }

    #[test]
    fn test_static_query_renders_immediately() {
        let app = AppMother::with_static(Some(Query::new(
            DatasetMother::ADDRESS_ID,
            Category::Address,
        )));

        let view = app.current_view();
        let sent: Vec<&str> = view
            .group("txFrom")
            .unwrap()
            .links
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(sent, ["tx1", "tx2"]);
        assert_eq!(app.nav.selected_index, Some(0));
        assert_eq!(app.selected_digest().as_deref(), Some("tx1"));
    }

    #[test]
    fn test_toggle_category_switches_field_pair() {
        let mut app = AppMother::with_static(Some(Query::new(
            DatasetMother::OBJECT_ID,
            Category::Object,
        )));
        assert!(app.current_view().group("txInput").is_some());

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.query.as_ref().unwrap().category, Category::Address);
        assert_eq!(app.current_view(), TxView::Empty);
        assert_eq!(app.selected_digest(), None);
    }

    #[test]
    fn test_navigation_between_groups() {
        let mut app = AppMother::with_static(Some(Query::new(
            DatasetMother::ADDRESS_ID,
            Category::Address,
        )));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_digest().as_deref(), Some("tx2"));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_digest().as_deref(), Some("tx2"));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.nav.selected_group, 1);
        assert_eq!(app.selected_digest().as_deref(), Some("tx3"));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_digest().as_deref(), Some("tx3"));
    }

    #[test]
    fn test_refetch_on_static_only_notifies() {
        let mut app = AppMother::with_static(Some(Query::new(
            DatasetMother::ADDRESS_ID,
            Category::Address,
        )));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(
            app.ui.toast.as_ref().map(|(m, _)| m.as_str()),
            Some("Static data does not refresh")
        );
    }
}

// ============================================================================
// Search Popup
// ============================================================================

mod search_tests {
    use super::*;

    #[test]
    fn test_search_sets_query() {
        let mut app = AppMother::with_static(None);

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_context(), InputContext::SearchInput);

        type_text(&mut app, "0xBB01");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert!(!app.ui.has_active_popup());
        assert_eq!(app.query, Some(Query::new("bb01", Category::Object)));
        assert!(app.current_view().group("txMutated").is_some());
    }

    #[test]
    fn test_q_is_text_in_search() {
        let mut app = AppMother::with_static(None);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.exit);
        assert_eq!(app.ui.popup_state.as_search().unwrap().query, "q");
    }

    #[test]
    fn test_invalid_search_keeps_current_key() {
        let mut app = AppMother::with_static(Some(Query::new(
            DatasetMother::ADDRESS_ID,
            Category::Address,
        )));

        press(&mut app, KeyCode::Char('f'));
        type_text(&mut app, "not-hex");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_context(), InputContext::MessagePopup);
        match &app.ui.popup_state {
            PopupState::Message(msg) => assert!(msg.starts_with("Invalid identifier")),
            other => panic!("expected message popup, got {other:?}"),
        }
        assert_eq!(app.query.as_ref().unwrap().id, DatasetMother::ADDRESS_ID);

        press(&mut app, KeyCode::Esc);
        assert!(!app.ui.has_active_popup());
    }

    #[test]
    fn test_empty_search_just_closes() {
        let mut app = AppMother::with_static(None);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Enter);
        assert!(!app.ui.has_active_popup());
        assert!(app.query.is_none());
    }
}

// ============================================================================
// Network Selection
// ============================================================================

mod network_tests {
    use super::*;

    #[test]
    fn test_network_popup_switches_network() {
        let mut app = AppMother::with_static(None);
        assert_eq!(app.network_config, NetworkConfig::BuiltIn(Network::Devnet));
        assert_eq!(app.all_networks().len(), 3);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.ui.popup_state, PopupState::NetworkSelect(1));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.network_config, NetworkConfig::BuiltIn(Network::Testnet));
        assert_eq!(app.config.network, app.network_config);
        assert!(!app.ui.has_active_popup());
    }

    #[test]
    fn test_selecting_current_network_is_noop() {
        let mut app = AppMother::with_static(None);
        app.execute_command(&AppCommand::OpenNetworkSelect);
        app.execute_command(&AppCommand::SelectNetwork);
        assert!(app.ui.toast.is_none());
    }
}

// ============================================================================
// Live Source
// ============================================================================

mod live_source_tests {
    use super::*;

    #[tokio::test]
    async fn test_loading_then_loaded() {
        let (mut app, control) =
            AppMother::with_live(Some(Query::new("aa01", Category::Address)));
        assert_eq!(app.current_view(), TxView::Loading);
        assert_eq!(app.selected_digest(), None);

        control.resolve("aa01", Ok(RecordMother::address(&[("x", "tx1")], &[])));
        settle(&mut app).await;

        let view = app.current_view();
        assert_eq!(view.group("txFrom").unwrap().links.len(), 1);
        assert!(view.group("txTo").unwrap().links.is_empty());
        assert_eq!(app.selected_digest().as_deref(), Some("tx1"));
    }

    #[tokio::test]
    async fn test_failure_shows_error_panel() {
        let (mut app, control) =
            AppMother::with_live(Some(Query::new("dead", Category::Object)));

        control.resolve("dead", Err(ExplorerError::rpc(-32602, "invalid params")));
        settle(&mut app).await;

        match app.current_view() {
            TxView::Error(panel) => {
                assert_eq!(panel.id, "dead");
                assert_eq!(panel.message, FETCH_ERROR_MESSAGE);
            }
            other => panic!("expected error panel, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_key_change_while_in_flight_shows_latest() {
        let (mut app, control) =
            AppMother::with_live(Some(Query::new("aa01", Category::Address)));

        app.set_query(Query::new("aa02", Category::Address));
        assert_eq!(app.current_view(), TxView::Loading);

        control.resolve("aa02", Ok(RecordMother::address(&[("x", "fresh")], &[])));
        settle(&mut app).await;
        control.resolve("aa01", Ok(RecordMother::address(&[("x", "stale")], &[])));
        settle(&mut app).await;

        assert_eq!(app.selected_digest().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_network_switch_refetches() {
        let (mut app, control) =
            AppMother::with_live(Some(Query::new("aa01", Category::Address)));
        control.resolve("aa01", Ok(RecordMother::address(&[], &[])));
        settle(&mut app).await;
        assert!(matches!(app.current_view(), TxView::Groups(_)));

        app.select_network(0);
        assert_eq!(app.network_config, NetworkConfig::BuiltIn(Network::Local));
        assert_eq!(app.current_view(), TxView::Loading);
    }

    #[tokio::test]
    async fn test_resolve_view_waits_for_fetch() {
        let (mut app, control) =
            AppMother::with_live(Some(Query::new("aa01", Category::Object)));
        control.resolve("aa01", Ok(RecordMother::object(&[("o", "t1")], &[("o", "t1")])));

        let view = app.resolve_view().await;
        assert_eq!(
            view.to_plain_text(),
            "[txInput] Input\n  t1\n[txMutated] Mutated\n  t1"
        );
    }

    #[tokio::test]
    async fn test_copy_without_selection_reports() {
        let (mut app, _control) =
            AppMother::with_live(Some(Query::new("aa01", Category::Address)));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(
            app.ui.toast.as_ref().map(|(m, _)| m.as_str()),
            Some("[x] No transaction selected")
        );
    }
}

// ============================================================================
// Application Control
// ============================================================================

#[test]
fn test_quit_from_main_and_message_popup() {
    let mut app = AppMother::with_static(None);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.exit);

    let mut app = AppMother::with_static(None);
    app.ui.show_message("hello");
    press(&mut app, KeyCode::Char('q'));
    assert!(app.exit);
}

#[test]
fn test_open_in_browser_on_custom_network_is_unavailable() {
    let mut app = AppMother::with_static(Some(Query::new(
        DatasetMother::ADDRESS_ID,
        Category::Address,
    )));
    app.network_config =
        NetworkConfig::Custom(crate::domain::CustomNetwork::new("Mine", "http://localhost:9000"));
    app.open_in_browser();
    assert_eq!(
        app.ui.toast.as_ref().map(|(m, _)| m.as_str()),
        Some("[x] Explorer link unavailable")
    );
}

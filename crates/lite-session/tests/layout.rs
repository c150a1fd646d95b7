mod common;

use common::*;
use lite_common::{Rect, TabId, WindowSize};

const HIDPI_RECT: Rect = Rect {
    x: 0.0,
    y: 36.0,
    width: 1000.0,
    height: 664.0,
};

/// Two live tabs with the sidebar collapsed.
async fn two_live_tabs(host: &std::sync::Arc<MockHost>) -> lite_session::Coordinator {
    let coord = coordinator(host);
    coord.navigate(TabId(1), "one.test").await.unwrap();
    let id = coord.new_tab().await.unwrap();
    coord.navigate(id, "two.test").await.unwrap();
    host.clear();
    coord
}

#[tokio::test]
async fn resize_fans_out_to_every_live_surface() {
    let host = MockHost::new();
    let coord = two_live_tabs(&host).await;

    coord.set_window_size(2000, 1400, 2.0).await;

    assert_eq!(
        host.calls(),
        vec![
            Call::Resize {
                tab: TabId(1),
                bounds: HIDPI_RECT,
            },
            Call::Resize {
                tab: TabId(2),
                bounds: HIDPI_RECT,
            },
        ]
    );
}

#[tokio::test]
async fn unchanged_geometry_issues_nothing() {
    let host = MockHost::new();
    let coord = two_live_tabs(&host).await;

    coord
        .set_logical_window_size(WindowSize::new(1200.0, 800.0))
        .await;
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn welcome_tabs_are_not_resized() {
    let host = MockHost::new();
    let coord = coordinator(&host);
    coord.navigate(TabId(1), "one.test").await.unwrap();
    coord.new_tab().await.unwrap();
    host.clear();

    coord.set_window_size(800, 600, 1.0).await;

    assert_eq!(host.names(), vec!["resizeSurface"]);
    assert!(matches!(host.calls()[0], Call::Resize { tab: TabId(1), .. }));
}

#[tokio::test]
async fn resize_failure_is_swallowed() {
    let host = MockHost::new();
    let coord = two_live_tabs(&host).await;
    host.fail("resizeSurface");

    coord.set_window_size(2000, 1400, 2.0).await;

    assert_eq!(host.count("resizeSurface"), 2);
    assert_eq!(coord.session().last_geometry(), Some(HIDPI_RECT));
}

#[tokio::test]
async fn tiny_window_clamps_to_zero() {
    let host = MockHost::new();
    let coord = two_live_tabs(&host).await;

    coord.set_logical_window_size(WindowSize::new(100.0, 20.0)).await;

    let expected = Rect {
        x: 0.0,
        y: 36.0,
        width: 100.0,
        height: 0.0,
    };
    assert!(host
        .calls()
        .iter()
        .all(|c| matches!(c, Call::Resize { bounds, .. } if *bounds == expected)));
}

#[tokio::test]
async fn newer_layout_stops_older_fan_out() {
    let host = MockHost::new();
    let coord = two_live_tabs(&host).await;

    host.hold("resizeSurface");
    let first = tokio::spawn({
        let coord = coord.clone();
        async move { coord.set_logical_window_size(WindowSize::new(1000.0, 700.0)).await }
    });
    wait_for_calls(&host, "resizeSurface", 1).await;

    let second = tokio::spawn({
        let coord = coord.clone();
        async move { coord.set_logical_window_size(WindowSize::new(900.0, 600.0)).await }
    });
    wait_for_calls(&host, "resizeSurface", 2).await;
    host.release("resizeSurface");
    first.await.unwrap();
    second.await.unwrap();

    let newest = Rect {
        x: 0.0,
        y: 36.0,
        width: 900.0,
        height: 564.0,
    };
    assert_eq!(host.count("resizeSurface"), 3);
    assert_eq!(
        host.calls().last(),
        Some(&Call::Resize {
            tab: TabId(2),
            bounds: newest,
        })
    );
    assert!(!host.calls().contains(&Call::Resize {
        tab: TabId(2),
        bounds: HIDPI_RECT,
    }));
}

#[tokio::test]
async fn sidebar_toggle_moves_content() {
    let host = MockHost::new();
    let coord = two_live_tabs(&host).await;

    coord.toggle_sidebar().await;
    assert!(host
        .calls()
        .iter()
        .all(|c| matches!(c, Call::Resize { bounds, .. } if *bounds == SIDEBAR_RECT)));
    assert_eq!(host.count("resizeSurface"), 2);

    host.clear();
    coord.toggle_sidebar().await;
    assert!(host
        .calls()
        .iter()
        .all(|c| matches!(c, Call::Resize { bounds, .. } if *bounds == FULL_RECT)));
}

//! End-to-end session tests over the real channels: two spawned actors,
//! unordered delivery, no shared state.

use artboard_dom::MoveDirection;
use artboard_workspace::{sample_document, EditorSession, HostSnapshot, PreviewSnapshot};

/// Poll a snapshot until `check` accepts it. The actors are cooperative and
/// every exchange is finite, so yielding drains the channels; the cap only
/// turns a logic bug into a clear failure instead of a hang.
async fn wait_for_host(
    session: &EditorSession,
    check: impl Fn(&HostSnapshot) -> bool,
) -> HostSnapshot {
    for _ in 0..1000 {
        let snapshot = session.host_snapshot().await.unwrap();
        if check(&snapshot) {
            return snapshot;
        }
        tokio::task::yield_now().await;
    }
    panic!("host never reached the expected state");
}

async fn wait_for_preview(
    session: &EditorSession,
    check: impl Fn(&PreviewSnapshot) -> bool,
) -> PreviewSnapshot {
    for _ in 0..1000 {
        let snapshot = session.preview_snapshot().await.unwrap();
        if check(&snapshot) {
            return snapshot;
        }
        tokio::task::yield_now().await;
    }
    panic!("preview never reached the expected state");
}

#[tokio::test]
async fn boot_handshake_hydrates_the_preview() {
    let session = EditorSession::spawn(sample_document(), 600.0);

    let preview = wait_for_preview(&session, |s| s.hydrated).await;
    let ids: Vec<_> = preview.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["title-1", "para-1"]);

    session.shutdown().await;
}

#[tokio::test]
async fn click_select_restyle_rehydrate() {
    let session = EditorSession::spawn(sample_document(), 600.0);
    wait_for_preview(&session, |s| s.hydrated).await;

    // Click travels up, selection lands, geometry comes back.
    session.click("para-1").unwrap();
    let host = wait_for_host(&session, |s| s.rect.is_some()).await;
    assert_eq!(host.selected_id.as_deref(), Some("para-1"));

    // Restyle: the host re-hydrates and the preview observes the new value.
    session.set_style("color", "#111827").unwrap();
    let host = wait_for_host(&session, |s| s.revision == 1).await;
    assert_eq!(
        host.document.node("para-1").unwrap().style("color"),
        Some("#111827")
    );
    wait_for_preview(&session, |s| {
        s.blocks.iter().any(|b| b.id == "para-1")
    })
    .await;

    session.shutdown().await;
}

#[tokio::test]
async fn reorder_keeps_selection_across_the_wire() {
    let session = EditorSession::spawn(sample_document(), 600.0);
    wait_for_preview(&session, |s| s.hydrated).await;

    session.click("title-1").unwrap();
    wait_for_host(&session, |s| s.selected_id.is_some()).await;

    session.move_selected(MoveDirection::Down).unwrap();
    let host = wait_for_host(&session, |s| s.revision == 1).await;
    assert_eq!(host.document.child_ids(), vec!["para-1", "title-1"]);
    assert_eq!(host.selected_id.as_deref(), Some("title-1"));

    // The preview repainted in the new order.
    let preview = wait_for_preview(&session, |s| {
        s.blocks.first().map(|b| b.id.as_str()) == Some("para-1")
    })
    .await;
    assert_eq!(preview.blocks[1].id, "title-1");

    session.shutdown().await;
}

#[tokio::test]
async fn inline_edit_commit_round_trips() {
    let session = EditorSession::spawn(sample_document(), 600.0);
    wait_for_preview(&session, |s| s.hydrated).await;

    assert!(session.begin_text_edit("para-1").await.unwrap());
    session.commit_text_edit("Edited text").unwrap();

    let host = wait_for_host(&session, |s| s.revision == 1).await;
    assert_eq!(
        host.document.node("para-1").unwrap().text.as_deref(),
        Some("Edited text")
    );
    // The commit came back down as a hydrate.
    wait_for_preview(&session, |s| {
        s.blocks
            .iter()
            .any(|b| b.text.as_deref() == Some("Edited text"))
    })
    .await;

    session.shutdown().await;
}

#[tokio::test]
async fn viewport_resize_refreshes_selected_geometry() {
    let session = EditorSession::spawn(sample_document(), 600.0);
    wait_for_preview(&session, |s| s.hydrated).await;

    session.click("para-1").unwrap();
    let before = wait_for_host(&session, |s| s.rect.is_some()).await;

    session.set_viewport_width(400.0).unwrap();
    let after = wait_for_host(&session, |s| {
        s.rect.map(|r| r.width) != before.rect.map(|r| r.width)
    })
    .await;
    assert!(after.rect.unwrap().width < before.rect.unwrap().width);

    session.shutdown().await;
}

#[tokio::test]
async fn sessions_are_independent() {
    let a = EditorSession::spawn(sample_document(), 600.0);
    let b = EditorSession::spawn(sample_document(), 600.0);
    wait_for_preview(&a, |s| s.hydrated).await;

    a.click("title-1").unwrap();
    wait_for_host(&a, |s| s.selected_id.is_some()).await;

    let b_host = b.host_snapshot().await.unwrap();
    assert_eq!(b_host.selected_id, None);
    assert_eq!(b_host.revision, 0);

    a.shutdown().await;
    b.shutdown().await;
}

#[tokio::test]
async fn shutdown_ends_both_actors() {
    let session = EditorSession::spawn(sample_document(), 600.0);
    wait_for_preview(&session, |s| s.hydrated).await;
    session.shutdown().await;
}

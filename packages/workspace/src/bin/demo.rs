//! Scripted editing session against the live host/preview actor pair:
//! boot, select, inspect, restyle, reorder, inline-edit, with the host and
//! preview state logged after each step.

use anyhow::Result;
use artboard_dom::MoveDirection;
use artboard_workspace::{sample_document, EditorSession, HostSnapshot};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let mut viewport_width: f64 = 600.0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--viewport" | "-w" => {
                if i + 1 < args.len() {
                    viewport_width = args[i + 1].parse().expect("Invalid viewport width");
                    i += 2;
                } else {
                    eprintln!("--viewport requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Usage: artboard-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -w, --viewport <PX>     Preview viewport width (default: 600)");
                println!("  -h, --help              Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    let session = EditorSession::spawn(sample_document(), viewport_width);

    wait_until(&session, |s| s.revision == 0).await?;
    info!("session booted");

    session.click("para-1")?;
    let snapshot = wait_until(&session, |s| s.rect.is_some()).await?;
    log_host("selected para-1", &snapshot);

    session.set_style("color", "#111827")?;
    let snapshot = wait_until(&session, |s| s.revision == 1).await?;
    log_host("restyled color", &snapshot);

    session.click("title-1")?;
    wait_until(&session, |s| s.selected_id.as_deref() == Some("title-1")).await?;
    session.move_selected(MoveDirection::Down)?;
    let snapshot = wait_until(&session, |s| s.revision == 2).await?;
    log_host("moved title-1 down", &snapshot);

    if session.begin_text_edit("para-1").await? {
        session.commit_text_edit("Edited live from the demo")?;
    }
    let snapshot = wait_until(&session, |s| s.revision == 3).await?;
    log_host("committed inline edit", &snapshot);

    let preview = session.preview_snapshot().await?;
    for block in &preview.blocks {
        info!(
            id = %block.id,
            x = block.rect.x,
            y = block.rect.y,
            width = block.rect.width,
            height = block.rect.height,
            "painted block"
        );
    }

    session.shutdown().await;
    info!("session closed");
    Ok(())
}

async fn wait_until(
    session: &EditorSession,
    check: impl Fn(&HostSnapshot) -> bool,
) -> Result<HostSnapshot> {
    loop {
        let snapshot = session.host_snapshot().await?;
        if check(&snapshot) {
            return Ok(snapshot);
        }
        tokio::task::yield_now().await;
    }
}

fn log_host(step: &str, snapshot: &HostSnapshot) {
    info!(
        revision = snapshot.revision,
        selected = snapshot.selected_id.as_deref().unwrap_or("-"),
        order = ?snapshot.document.child_ids(),
        rect = ?snapshot.rect,
        "{}", step
    );
}

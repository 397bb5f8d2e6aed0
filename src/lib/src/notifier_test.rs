use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::timeout;

use crate::differ::FileDiffer;
use crate::error::DifferError;
use crate::notifier::{Broadcaster, ChangeNotifier, NotifierState};
use crate::view::DiffEvent;

const RECV_TIMEOUT: Duration = Duration::from_secs(3);
const QUIET_TIMEOUT: Duration = Duration::from_millis(700);

struct Fixture {
    notifier: ChangeNotifier,
    rx: broadcast::Receiver<DiffEvent>,
    file1: PathBuf,
    file2: PathBuf,
    _dir: tempfile::TempDir,
}

fn setup(contents1: &str, contents2: &str) -> Result<Fixture, DifferError> {
    let dir = tempfile::tempdir()?;
    let file1 = dir.path().join("file1.txt");
    let file2 = dir.path().join("file2.txt");
    std::fs::write(&file1, contents1)?;
    std::fs::write(&file2, contents2)?;

    let differ = Arc::new(FileDiffer::new(&file1, &file2)?);
    let file1 = differ.file1_path.clone();
    let file2 = differ.file2_path.clone();

    let broadcaster = Broadcaster::new();
    let rx = broadcaster.subscribe();
    let mut notifier = ChangeNotifier::new(differ, broadcaster);
    notifier.start()?;

    Ok(Fixture {
        notifier,
        rx,
        file1,
        file2,
        _dir: dir,
    })
}

async fn touch(path: &Path, contents: &str) {
    // Give the watcher registration a moment before the write lands.
    tokio::time::sleep(Duration::from_millis(100)).await;
    std::fs::write(path, contents).unwrap();
}

#[tokio::test]
async fn test_notifier_single_write_publishes_one_update() -> Result<(), DifferError> {
    let mut fixture = setup("Line 1\n", "Line 1\n")?;

    touch(&fixture.file2, "Line 1\nLine 2\n").await;

    let event = timeout(RECV_TIMEOUT, fixture.rx.recv())
        .await
        .expect("no diff event published")
        .unwrap();
    match event {
        DiffEvent::Updated { diff, .. } => {
            // The published diff reflects the post-write content.
            let right: String = diff
                .rows
                .iter()
                .filter_map(|row| row.right_text.clone())
                .collect();
            assert_eq!(right, "Line 1\nLine 2\n");
            assert_eq!(diff.counts().added, 1);
        }
        DiffEvent::Failed { status } => {
            panic!("expected update, got failure: {status:?}")
        }
    }

    // The burst of raw events behind one write coalesces to one publish.
    assert!(timeout(QUIET_TIMEOUT, fixture.rx.recv()).await.is_err());

    fixture.notifier.stop();
    Ok(())
}

#[tokio::test]
async fn test_notifier_ignores_sibling_files() -> Result<(), DifferError> {
    let mut fixture = setup("a\n", "a\n")?;

    let sibling = fixture.file1.parent().unwrap().join("unrelated.txt");
    touch(&sibling, "noise\n").await;

    assert!(timeout(QUIET_TIMEOUT, fixture.rx.recv()).await.is_err());

    fixture.notifier.stop();
    Ok(())
}

#[tokio::test]
async fn test_notifier_deleted_target_publishes_failure() -> Result<(), DifferError> {
    let mut fixture = setup("a\n", "b\n")?;

    tokio::time::sleep(Duration::from_millis(100)).await;
    std::fs::remove_file(&fixture.file2)?;

    let event = timeout(RECV_TIMEOUT, fixture.rx.recv())
        .await
        .expect("no event published for deleted file")
        .unwrap();
    assert!(matches!(event, DiffEvent::Failed { .. }));

    fixture.notifier.stop();
    Ok(())
}

#[tokio::test]
async fn test_notifier_stop_is_terminal() -> Result<(), DifferError> {
    let mut fixture = setup("a\n", "b\n")?;
    assert_eq!(fixture.notifier.state(), NotifierState::Watching);

    fixture.notifier.stop();
    assert_eq!(fixture.notifier.state(), NotifierState::Stopped);

    // No events after stop.
    touch(&fixture.file2, "changed\n").await;
    assert!(timeout(QUIET_TIMEOUT, fixture.rx.recv()).await.is_err());

    // And no restart.
    assert!(matches!(
        fixture.notifier.start(),
        Err(DifferError::Configuration(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_notifier_start_requires_idle() -> Result<(), DifferError> {
    let mut fixture = setup("a\n", "b\n")?;
    assert!(matches!(
        fixture.notifier.start(),
        Err(DifferError::Configuration(_))
    ));
    fixture.notifier.stop();
    Ok(())
}

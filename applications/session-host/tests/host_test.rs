//! End-to-end tests for the headless host
//!
//! Commands go through the same parser the stdin loop uses.

use soul_core::traits::Player;
use soul_core::types::PlaybackStatus;
use soul_session::{AlertOutcome, Lifecycle};
use soul_session_host::{Flow, HostCommand, HostConfig, SessionHost};
use std::path::Path;

fn config(data_dir: &Path) -> HostConfig {
    let mut config = HostConfig::default();
    config.storage.data_dir = data_dir.to_path_buf();
    config
}

fn started(config: &HostConfig) -> SessionHost {
    let mut host = SessionHost::open(config, false).unwrap();
    host.start().unwrap();
    host
}

fn run(host: &mut SessionHost, line: &str) -> Flow {
    let command = HostCommand::parse(line).unwrap().unwrap();
    host.execute(command).unwrap()
}

#[test]
fn test_play_after_restart_resumes_last_item() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    {
        let mut host = started(&config);
        run(&mut host, "queue content://a Song A");
        run(&mut host, "play");
        assert!(host.coordinator().player().is_playing());
        host.shutdown();
    }

    let mut host = started(&config);
    assert_eq!(host.coordinator().player().media_item_count(), 0);

    run(&mut host, "button 126");

    let player = host.coordinator().player();
    assert_eq!(player.status(), PlaybackStatus::Ready);
    assert!(player.is_playing());
    let current = player.current_item().unwrap();
    assert_eq!(current.title(), "Song A");
    assert_eq!(current.source_locator(), "content://a");
    assert!(host.is_foreground());
}

#[test]
fn test_first_run_play_has_nothing_to_resume() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));

    run(&mut host, "play");

    let player = host.coordinator().player();
    assert_eq!(player.media_item_count(), 1);
    assert_eq!(player.status(), PlaybackStatus::Idle);
    assert!(!player.is_playing());
}

#[test]
fn test_first_run_queue_replaces_nothing_to_resume() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));

    run(&mut host, "play");
    run(&mut host, "queue content://a Song A");
    run(&mut host, "play");

    let player = host.coordinator().player();
    assert!(player.is_playing());
    assert_eq!(player.media_item_count(), 1);
    assert_eq!(player.current_item().unwrap().source_locator(), "content://a");
    assert!(host.coordinator().resume_store().has_record());
}

#[test]
fn test_play_after_stop_resumes() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));

    run(&mut host, "queue content://a Song A");
    run(&mut host, "play");
    run(&mut host, "stop");
    assert!(!host.coordinator().player().is_playing());

    run(&mut host, "play");

    let player = host.coordinator().player();
    assert_eq!(player.status(), PlaybackStatus::Ready);
    assert!(player.is_playing());
}

#[test]
fn test_remove_task_while_paused_exits() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));
    run(&mut host, "queue content://a Song A");

    assert_eq!(run(&mut host, "remove-task"), Flow::Exit);
    assert!(host.coordinator().host().termination_requested());
}

#[test]
fn test_remove_task_while_playing_keeps_running() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));
    run(&mut host, "queue content://a Song A");
    run(&mut host, "play");

    assert_eq!(run(&mut host, "remove-task"), Flow::Continue);
    assert_eq!(host.coordinator().lifecycle(), Lifecycle::Active);
}

#[test]
fn test_denied_promotion_posts_fallback_alert() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.platform.deny_foreground = true;
    config.platform.launch_target = "player-ui".to_string();
    let mut host = started(&config);

    run(&mut host, "queue content://a Song A");
    run(&mut host, "play");
    run(&mut host, "promote");

    assert!(!host.is_foreground());
    let posted = host.coordinator().notifier().host().posted();
    assert_eq!(posted.len(), 1);
    let alert = &posted[&123];
    assert_eq!(alert.tap_action.target, "player-ui");
    assert_eq!(host.coordinator().notifier().host().channels().len(), 1);
}

#[test]
fn test_denied_promotion_without_permission_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.platform.deny_foreground = true;
    config.platform.notification_permission = false;
    let mut host = started(&config);

    assert_eq!(host.promote(), Some(AlertOutcome::Suppressed));
    assert!(host.coordinator().notifier().host().posted().is_empty());
}

#[test]
fn test_forget_clears_resume_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));
    run(&mut host, "queue content://a Song A");
    assert!(host.coordinator().resume_store().has_record());

    run(&mut host, "forget");

    assert!(!host.coordinator().resume_store().has_record());
}

#[test]
fn test_status_surface_tracks_playback() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));
    run(&mut host, "queue content://a Song A");
    run(&mut host, "toggle");

    let surface = host.coordinator().transport().last_surface().unwrap();
    assert_eq!(surface.title, "Song A");
    assert_eq!(surface.controls.len(), 5);
    assert!(host.status_line().contains("playing=true"));
}

#[test]
fn test_quit_and_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));

    assert_eq!(run(&mut host, "quit"), Flow::Exit);
    host.shutdown();
    host.shutdown();

    assert_eq!(host.coordinator().lifecycle(), Lifecycle::Terminated);
    assert!(host.coordinator().player().is_released());
    assert!(host.coordinator().transport().open_session_handle().is_none());
}

#[test]
fn test_commands_after_shutdown_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = started(&config(dir.path()));
    host.shutdown();

    let command = HostCommand::parse("play").unwrap().unwrap();
    assert!(host.execute(command).is_err());
}

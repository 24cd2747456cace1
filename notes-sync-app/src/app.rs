//!
//! app.rs
//! 应用主循环
//!
//! The loop is the only owner of `App`. It takes messages off the channel one
//! at a time, runs `update`, and hands the resulting command to the executor:
//!
//! ```text
//! loop {
//!
//!     let msg = rx.recv().await;                  // 等待下一条消息
//!     let command = update::update(app, msg)?;    // 更新状态
//!     executor.execute(command);                  // 异步执行副作用
//!     if app.should_quit { break }                // 检查 APP 是否应该退出
//! }
//! ```
//!
//! In `RunMode::LoadAll` the loop also pages through the whole listing by
//! itself, feeding `LoadNextPage` whenever the rendering queue drains and
//! `Quit` once everything is visible or a failure has been recorded.

use notes_sync_core::CoreResult;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::command::CommandExecutor;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Run until a `Quit` message arrives or the channel closes
    #[default]
    UntilQuit,
    /// Load every page of the listing, then stop
    LoadAll,
}

/// 运行应用主循环
pub async fn run(
    app: &mut App,
    executor: &CommandExecutor,
    rx: &mut UnboundedReceiver<AppMessage>,
    mode: RunMode,
) -> CoreResult<()> {
    while !app.should_quit {
        let Some(msg) = rx.recv().await else {
            log::debug!("Message channel closed, stopping event loop");
            break;
        };

        let command = update::update(app, msg)?;
        executor.execute(command);

        if mode == RunMode::LoadAll {
            while let Some(follow_up) = next_step(app) {
                let command = update::update(app, follow_up)?;
                executor.execute(command);
            }
        }
    }

    Ok(())
}

/// What `LoadAll` does next, if the current state calls for anything.
fn next_step(app: &App) -> Option<AppMessage> {
    if app.should_quit {
        return None;
    }
    if app.last_error.is_some() {
        return Some(AppMessage::Quit);
    }

    let retrieved = app.pagination.as_retrieved()?;
    if !retrieved.rendering_queue().is_empty() {
        return None;
    }
    if retrieved.has_more_pages() {
        Some(AppMessage::LoadNextPage)
    } else {
        Some(AppMessage::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_sync_core::test_utils::create_test_context;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn until_quit_stops_on_quit_message() {
        let (ctx, _) = create_test_context(&[]);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = CommandExecutor::new(ctx, tx.clone());
        let mut app = App::default();

        tx.send(AppMessage::Noop).unwrap();
        tx.send(AppMessage::Quit).unwrap();
        run(&mut app, &executor, &mut rx, RunMode::UntilQuit)
            .await
            .unwrap();

        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn until_quit_stops_when_channel_closes() {
        let (ctx, _) = create_test_context(&[]);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = CommandExecutor::new(ctx, mpsc::unbounded_channel().0);
        let mut app = App::default();

        tx.send(AppMessage::Noop).unwrap();
        drop(tx);
        run(&mut app, &executor, &mut rx, RunMode::UntilQuit)
            .await
            .unwrap();

        assert!(!app.should_quit);
    }

    #[test]
    fn load_all_waits_while_notes_are_queued() {
        let mut app = App::default();
        assert_eq!(next_step(&app), None);

        update::update(
            &mut app,
            AppMessage::RetrieveFileListSuccess {
                file_list: vec!["/a.txt".to_string()],
            },
        )
        .unwrap();
        assert_eq!(next_step(&app), None);

        app.last_error = Some("timeout".to_string());
        assert_eq!(next_step(&app), Some(AppMessage::Quit));
    }
}

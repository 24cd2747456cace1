//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Everything that can change the model is expressed as an `AppMessage`:
//! user intents (refresh, next page, template editing, quit) and the
//! results the command shell feeds back (listing retrieved, note loaded,
//! and their failures).
//!
//! Results of note loads carry the listing version they were requested
//! under, so the Update layer can tell current results from stale ones.
//!

mod app;
mod template;

pub use app::AppMessage;
pub use template::TemplateMessage;

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! The model is the single source of truth for the client. It holds plain
//! data only; every change goes through the Update layer.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     pub struct App {
//!         pub should_quit: bool,              // 退出标志
//!         pub template_note: TemplateNote,    // 模板笔记编辑模式
//!         pub pagination: PaginationState,    // 文件列表 / 渲染队列 / 笔记
//!         pub status_message: Option<String>, // 状态栏消息
//!         pub last_error: Option<String>,     // 最近一次失败
//!         pub page_size: usize,               // 每页笔记数
//!         pub preload_pages: usize,           // 列表到达后预加载的页数
//!     }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = App::new(&config);
//!         - 在 update/mod.rs 中修改
//!         - 其他地方只读
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、分页状态（PaginationState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     Defined in `notes-sync-core`:
//!         - RetrievingFileList：尚未拿到文件列表
//!         - FileListRetrieved：unprocessed files → rendering queue → notes
//!
//!     A new listing replaces the whole value; the listing version inside it
//!     is what lets the Update layer drop results of superseded loads.
//! ```
//!

mod app;
mod template_note;

pub use app::App;
pub use template_note::TemplateNote;

//! 应用主状态结构

use notes_sync_core::types::Note;
use notes_sync_core::PaginationState;

use super::TemplateNote;
use crate::config::AppConfig;

/// 应用主状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 模板笔记编辑模式
    pub template_note: TemplateNote,

    /// 分页状态
    pub pagination: PaginationState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 最近一次失败（列表或内容加载）
    pub last_error: Option<String>,

    /// 每页笔记数
    pub page_size: usize,

    /// 列表到达后立即加载的页数
    pub preload_pages: usize,
}

impl App {
    /// 创建新的应用实例
    ///
    /// Zero page sizes are replaced by the defaults, see [`AppConfig::validated`].
    pub fn new(config: &AppConfig) -> Self {
        let config = config.clone().validated();
        Self {
            should_quit: false,
            template_note: TemplateNote::Initial,
            pagination: PaginationState::RetrievingFileList,
            status_message: None,
            last_error: None,
            page_size: config.page_size,
            preload_pages: config.preload_pages,
        }
    }

    /// Visible notes, in listing order
    pub fn notes(&self) -> &[Note] {
        self.pagination
            .as_retrieved()
            .map(|retrieved| retrieved.notes())
            .unwrap_or_default()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_sync_core::DEFAULT_PAGE_SIZE;

    #[test]
    fn new_replaces_zero_sizes_with_defaults() {
        let config = AppConfig {
            page_size: 0,
            preload_pages: 0,
            ..AppConfig::default()
        };

        let app = App::new(&config);
        assert_eq!(app.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(app.preload_pages, 1);
    }
}

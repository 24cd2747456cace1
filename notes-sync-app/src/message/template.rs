//! 模板笔记消息

/// 模板笔记编辑消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateMessage {
    /// 开始编辑
    StartTextEditing,
    /// 取消编辑
    CancelTextEditing,
}

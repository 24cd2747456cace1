//! 模板笔记更新逻辑

use crate::message::TemplateMessage;
use crate::model::{App, TemplateNote};

/// 处理模板笔记消息
pub fn update(app: &mut App, msg: TemplateMessage) {
    app.template_note = match msg {
        TemplateMessage::StartTextEditing => TemplateNote::EditingText,
        TemplateMessage::CancelTextEditing => TemplateNote::Initial,
    };
}

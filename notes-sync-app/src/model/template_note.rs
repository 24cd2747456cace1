//! 模板笔记编辑模式

/// Whether the "new note" template is being typed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateNote {
    #[default]
    Initial,
    EditingText,
}

impl TemplateNote {
    pub fn is_editing(self) -> bool {
        matches!(self, Self::EditingText)
    }
}

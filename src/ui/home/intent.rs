use crate::model::MovieCategory;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionIntent {
    /// User picked a category tab.
    Select(MovieCategory),
    /// Back to the family's default category.
    Reset,
}

impl Intent for SelectionIntent {}

use crate::ui::home::intent::SelectionIntent;
use crate::ui::home::state::CategorySelection;
use crate::ui::mvi::Reducer;

pub struct CategorySelectionReducer;

impl Reducer for CategorySelectionReducer {
    type State = CategorySelection;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Select(category) if state.family.contains(category) => {
                CategorySelection {
                    family: state.family,
                    selected: category,
                }
            }
            // A category of another family never moves this family's slot
            SelectionIntent::Select(_) => state,
            SelectionIntent::Reset => CategorySelection::new(state.family),
        }
    }
}

use crate::model::catalog::SummonCatalog;
use crate::model::selection::{SelectionState, Side};
use crate::store::SettingsStore;

/// Backs the summon selection dialog. Built when the dialog opens; every move
/// is pushed to the store straight away and saved from there.
pub struct TransferList {
    state: SelectionState,
}

impl TransferList {
    pub fn open(catalog: &SummonCatalog, store: &SettingsStore) -> Self {
        Self {
            state: SelectionState::initialize(catalog, store.summons()),
        }
    }

    pub fn available(&self) -> Vec<&str> {
        self.state.available()
    }

    pub fn selected(&self) -> Vec<&str> {
        self.state.selected()
    }

    /// Moves `item` off the side it was clicked on.
    pub fn toggle(&mut self, item: &str, clicked_on: Side, store: &mut SettingsStore) -> bool {
        let moved = match clicked_on {
            Side::Available => self.state.move_to_selected(item),
            Side::Selected => self.state.move_to_available(item),
        };

        if moved {
            store.set_summons(self.state.selected_names());
        } else {
            tracing::debug!(summon = item, ?clicked_on, "ignored move of summon not on that side");
        }
        moved
    }
}

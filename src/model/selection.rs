use std::collections::HashMap;

use crate::model::catalog::SummonCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Available,
    Selected,
}

#[derive(Debug, Clone)]
struct Slot {
    name: String,
    side: Side,
    // Position within its side; a move always hands out a fresh, larger ticket.
    ticket: u64,
}

/// Available/selected partition of the summon catalog.
///
/// Each summon is a single slot that sits on exactly one side, so the two
/// lists cannot overlap. Ordering inside a side follows the ticket: catalog
/// order for the initial available list, the stored order for the initial
/// selection, and append-at-end for every move after that.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
    next_ticket: u64,
}

impl SelectionState {
    pub fn initialize(catalog: &SummonCatalog, already_selected: &[String]) -> Self {
        let mut state = Self::default();

        for name in catalog.flatten() {
            state.push_slot(name, Side::Available);
        }

        for name in already_selected {
            match state.index.get(name.as_str()).copied() {
                Some(i) if state.slots[i].side == Side::Selected => {
                    tracing::debug!(summon = %name, "duplicate summon in stored selection ignored");
                }
                Some(i) => state.assign(i, Side::Selected),
                None => {
                    tracing::warn!(summon = %name, "selected summon is not in the catalog; keeping it");
                    state.push_slot(name.clone(), Side::Selected);
                }
            }
        }

        state
    }

    fn push_slot(&mut self, name: String, side: Side) {
        let ticket = self.take_ticket();
        self.index.insert(name.clone(), self.slots.len());
        self.slots.push(Slot { name, side, ticket });
    }

    fn take_ticket(&mut self) -> u64 {
        let t = self.next_ticket;
        self.next_ticket += 1;
        t
    }

    fn assign(&mut self, i: usize, side: Side) {
        let ticket = self.take_ticket();
        let slot = &mut self.slots[i];
        slot.side = side;
        slot.ticket = ticket;
    }

    fn side_list(&self, side: Side) -> Vec<&str> {
        let mut on_side: Vec<&Slot> = self.slots.iter().filter(|s| s.side == side).collect();
        on_side.sort_by_key(|s| s.ticket);
        on_side.into_iter().map(|s| s.name.as_str()).collect()
    }

    pub fn available(&self) -> Vec<&str> {
        self.side_list(Side::Available)
    }

    pub fn selected(&self) -> Vec<&str> {
        self.side_list(Side::Selected)
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.selected().into_iter().map(str::to_owned).collect()
    }

    fn move_to(&mut self, item: &str, from: Side, to: Side) -> bool {
        match self.index.get(item).copied() {
            Some(i) if self.slots[i].side == from => {
                self.assign(i, to);
                true
            }
            _ => false,
        }
    }

    /// Returns false, leaving both lists untouched, unless `item` is available.
    pub fn move_to_selected(&mut self, item: &str) -> bool {
        self.move_to(item, Side::Available, Side::Selected)
    }

    /// Returns false, leaving both lists untouched, unless `item` is selected.
    pub fn move_to_available(&mut self, item: &str) -> bool {
        self.move_to(item, Side::Selected, Side::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn zeus_hades() -> SummonCatalog {
        SummonCatalog::from_categories([("A", vec!["Zeus", "Hades"])])
    }

    fn assert_partition(state: &SelectionState, catalog: &SummonCatalog) {
        let available: HashSet<&str> = state.available().into_iter().collect();
        let selected: HashSet<&str> = state.selected().into_iter().collect();
        assert!(available.is_disjoint(&selected));

        let union: HashSet<&str> = available.union(&selected).copied().collect();
        let flat = catalog.flatten();
        let expected: HashSet<&str> = flat.iter().map(String::as_str).collect();
        assert_eq!(union, expected);
        assert_eq!(state.available().len() + state.selected().len(), flat.len());
    }

    #[test]
    fn scenario_move_and_back_appends_to_available() {
        let catalog = zeus_hades();
        let mut state = SelectionState::initialize(&catalog, &[]);
        assert_eq!(state.available(), vec!["Zeus", "Hades"]);
        assert!(state.selected().is_empty());

        assert!(state.move_to_selected("Zeus"));
        assert_eq!(state.available(), vec!["Hades"]);
        assert_eq!(state.selected(), vec!["Zeus"]);

        assert!(state.move_to_available("Zeus"));
        assert_eq!(state.available(), vec!["Hades", "Zeus"]);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn initialize_removes_already_selected_from_available() {
        let catalog = SummonCatalog::from_categories([
            ("Light", vec!["Zeus", "Lucifer"]),
            ("Dark", vec!["Hades", "Bahamut"]),
        ]);
        let state =
            SelectionState::initialize(&catalog, &["Bahamut".to_string(), "Zeus".to_string()]);
        assert_eq!(state.available(), vec!["Lucifer", "Hades"]);
        assert_eq!(state.selected(), vec!["Bahamut", "Zeus"]);
        assert_partition(&state, &catalog);
    }

    #[test]
    fn duplicates_in_catalog_and_selection_collapse() {
        let catalog = SummonCatalog::from_categories([
            ("Dark", vec!["Bahamut", "Hades"]),
            ("Misc", vec!["Kaguya", "Bahamut"]),
        ]);
        let state = SelectionState::initialize(
            &catalog,
            &["Kaguya".to_string(), "Kaguya".to_string()],
        );
        assert_eq!(state.available(), vec!["Bahamut", "Hades"]);
        assert_eq!(state.selected(), vec!["Kaguya"]);
        assert_partition(&state, &catalog);
    }

    #[test]
    fn unknown_stored_selection_is_kept() {
        let catalog = zeus_hades();
        let state = SelectionState::initialize(&catalog, &["Agni".to_string()]);
        assert_eq!(state.selected(), vec!["Agni"]);
        assert_eq!(state.available(), vec!["Zeus", "Hades"]);
    }

    #[test]
    fn guarded_moves_are_no_ops() {
        let catalog = zeus_hades();
        let mut state = SelectionState::initialize(&catalog, &[]);
        assert!(!state.move_to_available("Zeus"));
        assert!(!state.move_to_selected("Nobody"));
        assert!(state.move_to_selected("Hades"));
        assert!(!state.move_to_selected("Hades"));
        assert_eq!(state.available(), vec!["Zeus"]);
        assert_eq!(state.selected(), vec!["Hades"]);
    }

    #[test]
    fn single_move_round_trip_restores_lists() {
        let catalog = SummonCatalog::from_categories([("A", vec!["Zeus", "Hades", "Kaguya"])]);
        let mut state = SelectionState::initialize(&catalog, &["Kaguya".to_string()]);
        assert_eq!(state.available(), vec!["Zeus", "Hades"]);

        assert!(state.move_to_selected("Hades"));
        assert!(state.move_to_available("Hades"));
        assert_eq!(state.available(), vec!["Zeus", "Hades"]);
        assert_eq!(state.selected(), vec!["Kaguya"]);

        assert!(state.move_to_available("Kaguya"));
        assert!(state.move_to_selected("Kaguya"));
        assert_eq!(state.available(), vec!["Zeus", "Hades"]);
        assert_eq!(state.selected(), vec!["Kaguya"]);
    }

    #[test]
    fn partition_holds_across_move_sequences() {
        let catalog = SummonCatalog::builtin().unwrap();
        let names = catalog.flatten();
        let mut state = SelectionState::initialize(&catalog, &names[..3]);
        assert_partition(&state, &catalog);

        for (step, name) in names.iter().cycle().take(names.len() * 3).enumerate() {
            if step % 3 == 0 {
                state.move_to_available(name);
            } else {
                state.move_to_selected(name);
            }
            assert_partition(&state, &catalog);
        }
    }
}

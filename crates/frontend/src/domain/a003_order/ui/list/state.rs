use crate::shared::list_utils::TableState;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 10;

pub fn create_state() -> RwSignal<TableState> {
    RwSignal::new(TableState::new(PAGE_SIZE))
}

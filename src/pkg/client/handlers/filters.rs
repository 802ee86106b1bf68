use crate::{
    pkg::{
        client::{router::Outcome, state::AppState},
        internal::filter::Facet,
    },
    prelude::Result,
};

pub fn search(state: &mut AppState, term: &str) -> Result<Outcome> {
    state.filters.set_search(term);
    Ok(Outcome::none())
}

pub fn toggle(state: &mut AppState, facet: Facet, value: &str) -> Result<Outcome> {
    let active = state.filters.toggle(facet, value);
    tracing::debug!("{:?} filter {} is now {}", facet, value, if active { "on" } else { "off" });
    Ok(Outcome::none())
}

pub fn clear(state: &mut AppState) -> Result<Outcome> {
    state.filters.clear();
    Ok(Outcome::none())
}

#[cfg(test)]
mod tests {
    use crate::pkg::{
        client::{router::Command, state::testing, uispec::OpenSection},
        internal::filter::Facet,
    };

    fn open_ids(open: &OpenSection) -> Vec<String> {
        match open {
            OpenSection::Listed(cards) => cards.iter().map(|c| c.id.clone()).collect(),
            _ => vec![],
        }
    }

    #[tokio::test]
    async fn test_filters_rerender_in_the_same_turn() {
        let mut state = testing::seeded();
        state.dispatch(Command::ToggleFacet(Facet::Department, "Physics".into())).await;
        let view = state.render();
        assert!(matches!(view.open, OpenSection::Empty { .. }));
        assert_eq!(view.archived.len(), 1);
        assert!(view
            .department_chips
            .iter()
            .any(|chip| chip.label == "Physics" && chip.active));

        state.dispatch(Command::ToggleFacet(Facet::Department, "Statistics".into())).await;
        assert_eq!(open_ids(&state.render().open), vec!["job1"]);

        state.dispatch(Command::Search("IIT".into())).await;
        assert_eq!(state.render().search, "iit");
        assert_eq!(open_ids(&state.render().open), vec!["job1"]);

        state.dispatch(Command::ClearFilters).await;
        assert!(state.filters.is_empty());
        assert!(state.render().department_chips.iter().all(|chip| !chip.active));
    }
}

use crate::{Effect, Msg, NavEntry, NavState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: NavState, msg: Msg) -> (NavState, Vec<Effect>) {
    let effects = match msg {
        Msg::OpenPage(name) => navigate(&mut state, NavEntry::page(name)),
        Msg::OpenPost(path) => navigate(&mut state, NavEntry::post(path)),
        Msg::HistoryRestored(Some(entry)) => {
            // The browser already moved the history cursor; only reload.
            vec![load(&mut state, entry)]
        }
        Msg::HistoryRestored(None) => Vec::new(),
        Msg::FragmentLoaded { request_id, body } => match state.finish_load(request_id) {
            // Completions apply in arrival order, so the last response wins.
            Some(entry) => {
                state.set_displayed(entry);
                vec![Effect::ReplaceContent { body }]
            }
            None => Vec::new(),
        },
        Msg::FragmentFailed { request_id, .. } => {
            state.finish_load(request_id);
            Vec::new()
        }
        Msg::Mounted { location } => {
            let entry = NavEntry::from_location_path(&location);
            state.set_displayed(entry.clone());
            vec![Effect::ReplaceHistory { entry }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn navigate(state: &mut NavState, entry: NavEntry) -> Vec<Effect> {
    let push = Effect::PushHistory {
        url: entry.path(),
        entry: entry.clone(),
    };
    vec![push, load(state, entry)]
}

fn load(state: &mut NavState, entry: NavEntry) -> Effect {
    let path = entry.path();
    let request_id = state.begin_load(entry);
    Effect::Fetch { request_id, path }
}

use std::sync::Once;

use navigator_core::{update, Effect, Msg, NavEntry, NavState};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(navigator_logging::initialize_for_tests);
}

fn page(name: &str) -> NavEntry {
    NavEntry::Page {
        page_name: name.to_string(),
    }
}

#[test]
fn open_page_pushes_entry_and_fetches_derived_path() {
    init_logging();
    let (mut state, effects) = update(NavState::new(), Msg::OpenPage("about".to_string()));

    assert_eq!(
        effects,
        vec![
            Effect::PushHistory {
                entry: page("about"),
                url: "/about/".to_string(),
            },
            Effect::Fetch {
                request_id: 1,
                path: "/about/".to_string(),
            },
        ]
    );
    assert_eq!(state.in_flight_count(), 1);
    assert!(state.view().loading);
    assert!(state.consume_dirty());
}

#[test]
fn open_page_with_empty_name_matches_home() {
    init_logging();
    let (_, from_empty) = update(NavState::new(), Msg::OpenPage(String::new()));
    let (_, from_home) = update(NavState::new(), Msg::OpenPage("home".to_string()));

    assert_eq!(from_empty, from_home);
    assert_eq!(
        from_empty[0],
        Effect::PushHistory {
            entry: page("home"),
            url: "/home/".to_string(),
        }
    );
}

#[test]
fn open_post_uses_literal_path() {
    init_logging();
    let (_, effects) = update(NavState::new(), Msg::OpenPost("/posts/x".to_string()));

    assert_eq!(
        effects,
        vec![
            Effect::PushHistory {
                entry: NavEntry::Post {
                    post_path: "/posts/x".to_string(),
                },
                url: "/posts/x".to_string(),
            },
            Effect::Fetch {
                request_id: 1,
                path: "/posts/x".to_string(),
            },
        ]
    );
}

#[test]
fn history_restore_reloads_without_pushing() {
    init_logging();
    let (state, _) = update(NavState::new(), Msg::OpenPage("about".to_string()));
    let (state, _) = update(state, Msg::OpenPost("/posts/x".to_string()));

    let (state, effects) = update(state, Msg::HistoryRestored(Some(page("about"))));

    assert_eq!(
        effects,
        vec![Effect::Fetch {
            request_id: 3,
            path: "/about/".to_string(),
        }]
    );
    assert_eq!(state.in_flight_count(), 3);
}

#[test]
fn history_restore_of_post_fetches_post_path() {
    init_logging();
    let entry = NavEntry::post("/posts/2019/rust.html");
    let (_, effects) = update(NavState::new(), Msg::HistoryRestored(Some(entry)));

    assert_eq!(
        effects,
        vec![Effect::Fetch {
            request_id: 1,
            path: "/posts/2019/rust.html".to_string(),
        }]
    );
}

#[test]
fn mounted_seeds_history_without_fetching() {
    init_logging();
    let (mut state, effects) = update(
        NavState::new(),
        Msg::Mounted {
            location: "/".to_string(),
        },
    );

    // The address bar keeps `/`; only the state is attached.
    assert_eq!(
        effects,
        vec![Effect::ReplaceHistory {
            entry: page("home"),
        }]
    );
    assert_eq!(state.displayed(), Some(&page("home")));
    assert_eq!(state.in_flight_count(), 0);
    assert!(state.consume_dirty());
}

#[test]
fn request_ids_are_unique_across_navigations() {
    init_logging();
    let (state, first) = update(NavState::new(), Msg::OpenPage("a".to_string()));
    let (_, second) = update(state, Msg::OpenPage("b".to_string()));

    let ids: Vec<_> = first
        .iter()
        .chain(second.iter())
        .filter_map(|effect| match effect {
            Effect::Fetch { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn mounted_ignores_query_and_fragment_when_resolving_entry() {
    init_logging();
    let (state, effects) = update(
        NavState::new(),
        Msg::Mounted {
            location: "/about/?ref=feed#contact".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::ReplaceHistory {
            entry: page("about"),
        }]
    );
    assert_eq!(state.displayed(), Some(&page("about")));
}

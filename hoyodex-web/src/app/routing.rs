use std::cell::RefCell;
use std::rc::Rc;

use hoyodex_core::{
    CatalogError, GameDataset, HashRoute, NavigationClock, RouteState, Ticket, load_game_data,
    parse_fragment,
};
use yew::prelude::*;

use crate::app::state::Session;
use crate::dom;
use crate::loader::WebDataLoader;

/// What a fragment change asks the shell to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Leave the current screen as it is.
    Stay,
    Blank,
    Load(RouteState),
}

#[must_use]
pub fn transition_for(fragment: &str) -> Transition {
    match parse_fragment(fragment) {
        HashRoute::Home => Transition::Blank,
        HashRoute::Ignored => Transition::Stay,
        HashRoute::Page(route) => Transition::Load(route),
    }
}

/// Current URL fragment, kept in sync with `hashchange`.
#[hook]
pub fn use_hash_fragment() -> UseStateHandle<String> {
    let fragment = use_state(|| dom::location_hash().unwrap_or_default());
    {
        let fragment = fragment.clone();
        use_effect_with((), move |()| {
            let listener = dom::HashChangeListener::new(move |hash| fragment.set(hash));
            move || drop(listener)
        });
    }
    fragment
}

/// Drive `session` from the URL fragment.
///
/// Each load takes a ticket from the navigation clock; a load that finishes
/// after a newer navigation is dropped instead of rendered.
#[hook]
pub fn use_hash_router(session: &UseStateHandle<Session>) {
    let fragment = use_hash_fragment();
    let clock = use_mut_ref(NavigationClock::default);
    let session = session.clone();

    use_effect_with((*fragment).clone(), move |fragment| {
        navigate(fragment, &session, &clock);
    });
}

/// Session to commit once the load for `ticket` finishes, or `None` when a
/// newer navigation has started since and the result must be dropped.
///
/// A failed load keeps `before`'s breadcrumbs and hides the context menu.
#[must_use]
pub fn settle_load(
    clock: &NavigationClock,
    ticket: Ticket,
    before: Session,
    route: RouteState,
    result: Result<GameDataset, CatalogError>,
) -> Option<Session> {
    if !clock.is_current(ticket) {
        log::warn!("discarding stale load for {}", route.fragment());
        return None;
    }
    Some(match result {
        Ok(dataset) => Session::loaded(route, dataset),
        Err(err) => {
            log::error!("{err}");
            before.failed(route)
        }
    })
}

fn navigate(fragment: &str, session: &UseStateHandle<Session>, clock: &Rc<RefCell<NavigationClock>>) {
    match transition_for(fragment) {
        Transition::Stay => {
            log::debug!("ignoring fragment {fragment:?}");
        }
        Transition::Blank => {
            clock.borrow_mut().advance();
            session.set(Session::blank());
        }
        Transition::Load(route) => {
            let ticket = clock.borrow_mut().advance();
            log::debug!("routing to {}", route.fragment());
            let before = (**session).clone();
            session.set(before.clone().loading(route.clone()));

            let session = session.clone();
            let clock = Rc::clone(clock);
            wasm_bindgen_futures::spawn_local(async move {
                let result = load_game_data(&WebDataLoader, &route.game).await;
                if let Some(next) = settle_load(&clock.borrow(), ticket, before, route, result) {
                    session.set(next);
                }
            });
        }
    }
}

//! Cameleon lobby page: create/join a session, pick a name, pick a role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the screens do goes through one `BrowserLobby` held in an
//! `RwSignal`. The page renders whichever `Screen` the flow reports, and each
//! button handler runs a single flow operation, showing its error inline on
//! failure. On first hydration the flow tries the `#id` fragment so shared
//! links land directly on the username screen.

#[cfg(test)]
#[path = "cameleon_test.rs"]
mod cameleon_test;

use leptos::prelude::*;
use lobby::flow::MAX_SESSION_ID_LEN;
use lobby::participant::MAX_USERNAME_LEN;
use lobby::{LobbyError, Screen};

use crate::components::notice::{ErrorLine, NoticeLine};
use crate::components::roster::Roster;
use crate::state::lobby::{
    BrowserLobby, browser_lobby, copy_feedback, join_button_label, player_count_label, readiness_line, role_line,
};
use crate::util::time::now_ms;

/// Inline feedback shared by the lobby screens.
#[derive(Clone, Copy)]
struct Feedback {
    error: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
}

impl Feedback {
    fn new() -> Self {
        Self { error: RwSignal::new(None), notice: RwSignal::new(None) }
    }

    /// Clear both lines after a screen change.
    fn clear(self) {
        self.error.set(None);
        self.notice.set(None);
    }
}

#[component]
pub fn CameleonPage() -> impl IntoView {
    let flow = RwSignal::new(browser_lobby());
    let feedback = Feedback::new();
    let screen = Memo::new(move |_| flow.with(BrowserLobby::screen));

    // Auto-join from the URL fragment. Nothing here is tracked, so this runs once.
    Effect::new(move || {
        if let Some(Err(e)) = flow.try_update(BrowserLobby::init_from_location) {
            feedback.error.set(Some(e.to_string()));
        }
    });

    view! {
        <div class="cameleon-page">
            {move || match screen.get() {
                Screen::ChoosingLobby => view! { <LobbyPrompt flow feedback/> }.into_any(),
                Screen::EnteringUsername => view! { <UsernamePrompt flow feedback/> }.into_any(),
                Screen::ChoosingRole => view! { <RolePrompt flow feedback/> }.into_any(),
                Screen::InGame => view! { <GameBoard flow feedback/> }.into_any(),
            }}
        </div>
    }
}

/// Run one flow operation, surfacing its error or clearing stale feedback.
fn apply<F>(flow: RwSignal<BrowserLobby>, feedback: Feedback, op: F)
where
    F: FnOnce(&mut BrowserLobby) -> Result<(), LobbyError>,
{
    match flow.try_update(op) {
        Some(Ok(())) => feedback.clear(),
        Some(Err(e)) => {
            leptos::logging::log!("lobby action rejected: {e}");
            feedback.error.set(Some(e.to_string()));
        }
        None => {}
    }
}

/// Copy the share link and report the outcome in `notice`.
fn share(flow: RwSignal<BrowserLobby>, notice: RwSignal<Option<String>>) {
    let link = match flow.with_untracked(BrowserLobby::share_link) {
        Ok(link) => link,
        Err(e) => {
            notice.set(Some(e.to_string()));
            return;
        }
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::util::clipboard::copy_text(&link).await;
        if let Err(reason) = &result {
            leptos::logging::warn!("clipboard write failed: {reason}");
        }
        notice.set(Some(copy_feedback(&result)));
    });
    #[cfg(not(feature = "hydrate"))]
    notice.set(Some(copy_feedback(&Err(format!("open {link} in a browser")))));
}

fn session_id(flow: RwSignal<BrowserLobby>) -> String {
    flow.with(|f| f.session().map(|s| s.id.clone()).unwrap_or_default())
}

#[component]
fn LobbyPrompt(flow: RwSignal<BrowserLobby>, feedback: Feedback) -> impl IntoView {
    let game_id = RwSignal::new(String::new());

    let on_create = move |_| {
        let requested = game_id.get_untracked();
        apply(flow, feedback, |f| f.create_session(&requested, now_ms()));
    };
    let on_join = move |_| {
        let id = game_id.get_untracked();
        apply(flow, feedback, |f| f.join_session(&id));
    };

    view! {
        <div class="lobby-card">
            <h1 class="lobby-card__title">"Cameleon Game"</h1>
            <label class="lobby-card__label" for="game-id">
                "Game ID (optional - leave blank for random):"
            </label>
            <input
                id="game-id"
                class="lobby-input"
                type="text"
                placeholder="Enter game ID"
                maxlength=MAX_SESSION_ID_LEN.to_string()
                prop:value=move || game_id.get()
                on:input=move |ev| game_id.set(event_target_value(&ev))
            />
            <button class="btn btn--create" on:click=on_create>
                "Create New Lobby"
            </button>
            <button class="btn btn--join" on:click=on_join>
                "Join Existing Lobby"
            </button>
            <ErrorLine message=feedback.error/>
        </div>
    }
}

#[component]
fn UsernamePrompt(flow: RwSignal<BrowserLobby>, feedback: Feedback) -> impl IntoView {
    let username = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get_untracked();
        apply(flow, feedback, |f| f.submit_username(&name));
    };

    view! {
        <div class="lobby-card">
            <h1 class="lobby-card__title">"Join Game #" {move || session_id(flow)}</h1>
            <p class="lobby-card__subtitle">
                "Players: " {move || player_count_label(flow.with(BrowserLobby::player_count))}
            </p>
            <form class="lobby-form" on:submit=on_submit>
                <label class="lobby-card__label" for="username">
                    "Enter your username:"
                </label>
                <input
                    id="username"
                    class="lobby-input"
                    type="text"
                    placeholder="Your username"
                    maxlength=MAX_USERNAME_LEN.to_string()
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <ErrorLine message=feedback.error/>
                <button class="btn btn--join" type="submit">
                    "Continue"
                </button>
            </form>
        </div>
    }
}

#[component]
fn RolePrompt(flow: RwSignal<BrowserLobby>, feedback: Feedback) -> impl IntoView {
    let on_play = move |_| apply(flow, feedback, BrowserLobby::join_as_player);
    let on_spectate = move |_| apply(flow, feedback, BrowserLobby::join_as_spectator);
    let on_share = move |_| share(flow, feedback.notice);

    view! {
        <div class="lobby-card">
            <h1 class="lobby-card__title">
                "Welcome, " {move || flow.with(|f| f.username().unwrap_or_default().to_owned())} "!"
            </h1>
            <p class="lobby-card__subtitle">"Game #" {move || session_id(flow)}</p>
            <button
                class="btn btn--create"
                on:click=on_play
                disabled=move || flow.with(BrowserLobby::is_full)
            >
                {move || join_button_label(flow.with(BrowserLobby::player_count))}
            </button>
            <button class="btn btn--spectate" on:click=on_spectate>
                "Spectate Game"
            </button>
            <button class="btn btn--share" on:click=on_share>
                "Copy Game Link"
            </button>
            <ErrorLine message=feedback.error/>
            <NoticeLine message=feedback.notice/>
        </div>
    }
}

#[component]
fn GameBoard(flow: RwSignal<BrowserLobby>, feedback: Feedback) -> impl IntoView {
    let players = Signal::derive(move || flow.with(|f| f.session().map(|s| s.players.clone()).unwrap_or_default()));
    let spectators =
        Signal::derive(move || flow.with(|f| f.session().map(|s| s.spectators.clone()).unwrap_or_default()));
    let me = Signal::derive(move || flow.with(|f| f.current_user().map(|p| p.id.clone())));
    let me_line = move || flow.with(|f| f.current_user().map(role_line).unwrap_or_default());
    let on_share = move |_| share(flow, feedback.notice);

    view! {
        <div class="game-board">
            <header class="game-board__header">
                <h1 class="game-board__title">"Cameleon Game #" {move || session_id(flow)}</h1>
                <button class="btn btn--share" on:click=on_share>
                    "Share Game Link"
                </button>
                <NoticeLine message=feedback.notice/>
            </header>

            <div class="game-board__rosters">
                <Roster
                    heading=Signal::derive(move || format!("Players ({})", player_count_label(players.get().len())))
                    members=players
                    me
                    empty_text="No players joined yet"
                    seated=true
                />
                <Roster
                    heading=Signal::derive(move || format!("Spectators ({})", spectators.get().len()))
                    members=spectators
                    me
                    empty_text="No spectators"
                />
            </div>

            <div class="game-board__status">
                <p class="game-board__me">{me_line}</p>
                <p class="game-board__readiness">{move || readiness_line(players.get().len())}</p>
            </div>
        </div>
    }
}

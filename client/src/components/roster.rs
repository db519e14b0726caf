//! Player and spectator lists on the in-game screen.

use leptos::prelude::*;
use lobby::Participant;

use crate::state::lobby::seat_label;

/// A titled list of participants, highlighting the local user.
#[component]
pub fn Roster(
    #[prop(into)] heading: Signal<String>,
    #[prop(into)] members: Signal<Vec<Participant>>,
    #[prop(into)] me: Signal<Option<String>>,
    empty_text: &'static str,
    #[prop(optional)] seated: bool,
) -> impl IntoView {
    view! {
        <section class="roster">
            <h2 class="roster__heading">{move || heading.get()}</h2>
            <Show
                when=move || !members.get().is_empty()
                fallback=move || view! { <p class="roster__empty">{empty_text}</p> }
            >
                <ul class="roster__list">
                    {move || {
                        let my_id = me.get();
                        members
                            .get()
                            .into_iter()
                            .map(|member| {
                                let is_me = my_id.as_deref() == Some(member.id.as_str());
                                let seat = seated.then(|| seat_label(&member));
                                view! {
                                    <li class="roster__item" class:roster__item--me=is_me>
                                        {seat.map(|s| view! { <span class="roster__seat">{s}</span> " " })}
                                        {member.username}
                                        <Show when=move || is_me>
                                            <span class="roster__you">"(You)"</span>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}

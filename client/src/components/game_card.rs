//! Catalog card for one featured game.

use leptos::prelude::*;

use crate::state::catalog::FeaturedGame;

#[component]
pub fn GameCard(game: &'static FeaturedGame) -> impl IntoView {
    view! {
        <article class="game-card">
            <div class="game-card__art">
                <span class="game-card__die" aria-hidden="true">"🎲"</span>
                <span class="game-card__category">{game.category}</span>
            </div>
            <h4 class="game-card__name">{game.name}</h4>
            <p class="game-card__author">"by " {game.author}</p>
            <div class="game-card__meta">
                <span>{game.players}</span>
                <span>{game.duration}</span>
            </div>
            <span class=game.difficulty.badge_class()>{game.difficulty.label()}</span>
            <p class="game-card__description">{game.description}</p>
            <a class="btn game-card__link" href=game.link>"Learn More"</a>
        </article>
    }
}

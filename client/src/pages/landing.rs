//! Static Game Night landing page with the featured game catalog.

use leptos::prelude::*;

use crate::components::game_card::GameCard;
use crate::state::catalog::{FEATURED_GAMES, SITE_STATS};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="site-header">
                <div class="site-header__brand">
                    <span class="site-logo" aria-hidden="true">"🎮"</span>
                    <h1 class="site-header__title">"Game Night"</h1>
                </div>
                <nav class="site-header__nav">
                    <a href="#games">"Games"</a>
                    <a href="/cameleon">"Cameleon"</a>
                    <a href="#about">"About"</a>
                    <a href="#contact">"Contact"</a>
                </nav>
            </header>

            <main class="landing-page__main">
                <section class="hero">
                    <h2 class="hero__title">
                        "Your Ultimate" <span class="hero__accent">" Game Night"</span> <br/> "Companion"
                    </h2>
                    <p class="hero__lede">
                        "Discover, organize, and enjoy the perfect games for your next gathering. "
                        "From party games to strategy classics, we've got you covered."
                    </p>
                    <div class="hero__actions">
                        <a class="btn btn--primary" href="#games">"Browse Games"</a>
                        <a class="btn btn--outline" href="/cameleon">"Create Game Night"</a>
                    </div>
                </section>

                <section class="featured" id="games">
                    <h3 class="featured__title">"Featured Games"</h3>
                    <div class="featured__grid">
                        {FEATURED_GAMES.iter().map(|game| view! { <GameCard game/> }).collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="stats" id="about">
                    {SITE_STATS
                        .iter()
                        .map(|&(value, label)| {
                            view! {
                                <div class="stats__item">
                                    <div class="stats__value">{value}</div>
                                    <div class="stats__label">{label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>
            </main>

            <footer class="site-footer" id="contact">
                <div class="site-footer__row">
                    <span class="site-footer__brand">"Game Night"</span>
                    <nav class="site-footer__links">
                        <a href="#">"Privacy"</a>
                        <a href="#">"Terms"</a>
                        <a href="#">"Support"</a>
                    </nav>
                </div>
                <p class="site-footer__legal">"© 2025 Game Night. Making every gathering memorable."</p>
            </footer>
        </div>
    }
}

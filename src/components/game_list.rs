//! Filtered game results, rendered through the card registry

use leptos::prelude::*;

use crate::filters::{Keyed, Registry};
use crate::models::Game;

pub type CardFn = fn(Game) -> AnyView;

#[derive(Clone)]
pub struct CardRenderer {
    pub key: String,
    pub label: String,
    pub component: CardFn,
}

impl CardRenderer {
    pub fn new(key: &str, label: &str, component: CardFn) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            component,
        }
    }
}

impl Keyed for CardRenderer {
    type Key = String;

    fn key(&self) -> &String {
        &self.key
    }
}

pub type CardRegistry = Registry<CardRenderer>;

/// Grid cards first, so the grid is the default layout
pub fn default_card_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    registry.register(CardRenderer::new("grid", "Grid", game_card));
    registry.register(CardRenderer::new("list", "List", game_list_item));
    registry
}

#[component]
pub fn GameList(
    games: Memo<Vec<Game>>,
    cards: StoredValue<CardRegistry>,
    /// Chosen card layout; `None` uses the registry default
    layout: RwSignal<Option<String>>,
) -> impl IntoView {
    let active_card = move || {
        let chosen = layout.get();
        cards.with_value(|registry| {
            chosen
                .as_ref()
                .and_then(|key| registry.get(key))
                .or_else(|| registry.default_entry())
                .cloned()
        })
    };

    let mut layouts: Vec<(String, String)> = cards.with_value(|registry| {
        registry.keys().filter_map(|key| registry.get(key)).map(|c| (c.key.clone(), c.label.clone())).collect()
    });
    layouts.sort();

    view! {
        <main class="game-content">
            <div class="game-list-toolbar">
                <span class="game-count">{move || format!("{} games", games.with(|g| g.len()))}</span>
                <div class="view-toggle">
                    {layouts
                        .into_iter()
                        .map(|(key, label)| {
                            let key_for_active = key.clone();
                            view! {
                                <button
                                    class="view-btn"
                                    class:active=move || {
                                        active_card().is_some_and(|c| c.key == key_for_active)
                                    }
                                    on:click=move |_| layout.set(Some(key.clone()))
                                    title=format!("{} View", label)
                                >
                                    {label.clone()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            {move || {
                let Some(card) = active_card() else {
                    return view! { <div class="empty-state">"No card layouts registered."</div> }.into_any();
                };
                let list = games.get();
                if list.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No games match the current filters."</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class=format!("game-results game-results-{}", card.key)>
                        {list.into_iter().map(card.component).collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}
        </main>
    }
}

fn game_card(game: Game) -> AnyView {
    let first_char = game.name.chars().next().unwrap_or('?').to_string();
    let metacritic = game.metacritic;
    let year = game.release_year().map(str::to_string);

    view! {
        <div class="game-card">
            <div class="game-cover">
                {match game.background_image {
                    Some(url) => view! {
                        <img src=url alt=game.name.clone() class="cover-image" loading="lazy" />
                    }.into_any(),
                    None => view! {
                        <div class="cover-placeholder">{first_char}</div>
                    }.into_any(),
                }}
                {metacritic.map(|score| view! { <span class="metacritic-badge">{score}</span> })}
            </div>
            <div class="game-info">
                <h3 class="game-title">{game.name}</h3>
                {year.map(|y| view! { <p class="game-year">{y}</p> })}
            </div>
        </div>
    }
    .into_any()
}

fn game_list_item(game: Game) -> AnyView {
    let genres = game
        .genres
        .as_ref()
        .map(|g| g.iter().map(|r| r.name.as_str()).collect::<Vec<_>>().join(", "))
        .filter(|g| !g.is_empty())
        .unwrap_or_else(|| "-".to_string());
    let year = game.release_year().unwrap_or("-").to_string();
    let metacritic = game.metacritic.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());

    view! {
        <div class="game-list-item">
            <span class="game-title">{game.name}</span>
            <span class="game-genres">{genres}</span>
            <span class="game-year">{year}</span>
            <span class="game-metacritic">{metacritic}</span>
        </div>
    }
    .into_any()
}

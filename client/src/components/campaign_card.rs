//! Summary card for one campaign in a listing grid.
//!
//! DESIGN
//! ======
//! Each card issues its own reads for its own address. The shared query
//! cache absorbs the redundancy: when the same campaign appears on the home
//! page and the dashboard, both cards resolve from one request.

use chain::call::methods;
use chain::decode::{decode_string, decode_uint};
use chain::{Address, RemoteData};
use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::net::query::contract_read;

/// A clickable card summarizing one campaign.
#[component]
pub fn CampaignCard(address: Address) -> impl IntoView {
    let name = contract_read(address.clone(), methods::NAME, vec![]);
    let description = contract_read(address.clone(), methods::DESCRIPTION, vec![]);
    let goal = contract_read(address.clone(), methods::GOAL, vec![]);
    let balance = contract_read(address.clone(), methods::BALANCE, vec![]);

    let goal_value = move || goal.get().and_then_decode(|v| decode_uint(&v));
    let balance_value = move || balance.get().and_then_decode(|v| decode_uint(&v));
    let name_text = move || {
        name.get()
            .and_then_decode(|v| decode_string(&v))
            .value()
            .cloned()
            .unwrap_or_default()
    };
    let description_text = move || {
        description
            .get()
            .and_then_decode(|v| decode_string(&v))
            .value()
            .cloned()
            .unwrap_or_default()
    };

    // First failure among the card's reads, surfaced once per card.
    let first_error = move || {
        [name.get(), description.get(), goal.get(), balance.get()]
            .into_iter()
            .find_map(|data| data.error().map(str::to_owned))
    };

    let href = format!("/campaign/{address}");

    view! {
        <div class="campaign-card">
            <div class="campaign-card__body">
                {move || match (goal_value(), balance_value()) {
                    (RemoteData::Loaded(g), RemoteData::Loaded(b)) => {
                        view! { <ProgressBar balance=b goal=g/> }.into_any()
                    }
                    _ => view! { <span class="campaign-card__progress-pending"></span> }.into_any(),
                }}
                <h5 class="campaign-card__name">{name_text}</h5>
                <p class="campaign-card__description">{description_text}</p>
                <Show when=move || first_error().is_some()>
                    <p class="campaign-card__error">{move || first_error().unwrap_or_default()}</p>
                </Show>
            </div>
            <a class="btn campaign-card__view" href=href>
                "View Campaign"
            </a>
        </div>
    }
}

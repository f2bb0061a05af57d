//! Home page listing every campaign the factory knows about.

use chain::RemoteData;
use chain::call::methods;
use chain::decode::decode_campaigns;
use leptos::prelude::*;

use crate::components::campaign_card::CampaignCard;
use crate::net::contracts::factory_address;
use crate::net::query::contract_read;

/// Campaign list page at `/`.
///
/// Renders a loading line while the factory read is pending, a "not found"
/// line for an empty listing, and one card per campaign in listing order.
#[component]
pub fn HomePage() -> impl IntoView {
    let campaigns = contract_read(factory_address(), methods::GET_ALL_CAMPAIGNS, vec![]);
    let campaigns_value = move || campaigns.get().and_then_decode(|v| decode_campaigns(&v));

    view! {
        <main class="page">
            <h1 class="page__title">"Campaigns:"</h1>
            <div class="page__grid">
                {move || match campaigns_value() {
                    RemoteData::Loading => {
                        view! { <p class="page__status">"Loading campaigns..."</p> }.into_any()
                    }
                    RemoteData::Failed(reason) => {
                        view! { <p class="page__error">{reason}</p> }.into_any()
                    }
                    RemoteData::Loaded(list) if list.is_empty() => {
                        view! { <p class="page__status">"No campaigns found"</p> }.into_any()
                    }
                    RemoteData::Loaded(list) => list
                        .into_iter()
                        .map(|campaign| view! { <CampaignCard address=campaign.address/> })
                        .collect::<Vec<_>>()
                        .into_any(),
                }}
            </div>
        </main>
    }
}

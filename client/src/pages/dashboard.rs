//! Dashboard page: one wallet's campaigns plus the creation flow.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chain::call::methods;
use chain::decode::decode_campaigns;
use chain::{Address, RemoteData};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::campaign_card::CampaignCard;
use crate::net::contracts::factory_address;
use crate::net::query::{contract_read, invalidate_contract};
use crate::state::cache::QueryCache;
use crate::state::forms::{CampaignForm, SubmitPhase};
use crate::util::notify::notify;

/// Deploy-button label during each submission phase.
fn submit_label(phase: SubmitPhase) -> &'static str {
    if phase.is_submitting() {
        "Creating Campaign..."
    } else {
        "Create Campaign"
    }
}

/// Dashboard at `/dashboard/{wallet}`.
///
/// The wallet derives reactively from the route param, so jumping from
/// another user's dashboard to your own re-resolves the list. The route
/// is public: any wallet's campaign list is viewable, only the navbar
/// link targets the connected account's own.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let params = use_params_map();
    let wallet = move || crate::pages::route_address(params.read().get("wallet"));

    view! {
        {move || match wallet() {
            Some(wallet) => view! { <DashboardContent wallet/> }.into_any(),
            None => view! {
                <main class="page">
                    <p class="page__error">"Invalid wallet address"</p>
                </main>
            }
            .into_any(),
        }}
    }
}

#[component]
fn DashboardContent(wallet: Address) -> impl IntoView {
    let show_modal = RwSignal::new(false);
    let campaigns = contract_read(
        factory_address(),
        methods::GET_USER_CAMPAIGNS,
        vec![serde_json::json!(wallet)],
    );
    let campaigns_value = move || campaigns.get().and_then_decode(|v| decode_campaigns(&v));

    view! {
        <main class="page">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <button class="btn btn--primary" on:click=move |_| show_modal.set(true)>
                    "Create Campaign"
                </button>
            </div>
            <h2 class="page__subtitle">"My Campaigns:"</h2>
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
            <Show when=move || show_modal.get()>
                <CreateCampaignModal on_close=move |()| show_modal.set(false)/>
            </Show>
        </main>
    }
}

/// Modal form for deploying a new campaign contract.
///
/// Validation is a single flat check; numeric inputs floor at 1 as typed.
/// A deploy failure stays in the modal's error line so the form state is
/// not lost.
#[component]
fn CreateCampaignModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let goal = RwSignal::new(1u64);
    let duration = RwSignal::new(1u64);
    let phase = RwSignal::new(SubmitPhase::Idle);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |_| {
        if phase.get().is_submitting() {
            return;
        }
        let form = CampaignForm {
            name: name.get(),
            description: description.get(),
            goal: goal.get(),
            duration_days: duration.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(reason) => {
                error.set(Some(reason));
                return;
            }
        };
        phase.set(SubmitPhase::Submitting);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::deploy_campaign(&request).await {
                Ok(_deployed) => {
                    notify("Campaign created successfully!");
                    invalidate_contract(cache, &factory_address());
                    on_close.run(());
                }
                Err(reason) => error.set(Some(reason)),
            }
            phase.set(SubmitPhase::Idle);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, cache);
            phase.set(SubmitPhase::Idle);
        }
    };

    view! {
        <div class="modal__backdrop">
            <div class="modal">
                <div class="modal__header">
                    <h3 class="modal__title">"Create a Campaign"</h3>
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
                <label class="modal__label">"Campaign Name:"</label>
                <input
                    class="modal__input"
                    type="text"
                    placeholder="Campaign Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label class="modal__label">"Campaign Description:"</label>
                <textarea
                    class="modal__input"
                    placeholder="Campaign Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <label class="modal__label">"Campaign Goal:"</label>
                <input
                    class="modal__input"
                    type="number"
                    prop:value=move || goal.get().to_string()
                    on:input=move |ev| goal.set(CampaignForm::coerce_goal(&event_target_value(&ev)))
                />
                <label class="modal__label">"Campaign Length (Days)"</label>
                <input
                    class="modal__input"
                    type="number"
                    prop:value=move || duration.get().to_string()
                    on:input=move |ev| {
                        duration.set(CampaignForm::coerce_duration(&event_target_value(&ev)));
                    }
                />
                <Show when=move || error.get().is_some()>
                    <p class="modal__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="btn btn--primary modal__submit"
                    on:click=on_submit
                    disabled=move || phase.get().is_submitting()
                >
                    {move || submit_label(phase.get())}
                </button>
            </div>
        </div>
    }
}

//! Campaign detail page: full read-through of one contract plus owner tools.
//!
//! DESIGN
//! ======
//! Every field on this page is its own cached read, so a slow `getTiers`
//! never blocks the title or the progress bar. Owner tooling (edit mode,
//! tier add/remove) is gated on canonical address equality between the
//! resolved `owner()` and the connected wallet account.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use chain::call::methods;
use chain::campaign::{deadline_passed, format_deadline};
use chain::decode::{decode_address, decode_state, decode_string, decode_tiers, decode_uint};
use chain::{Address, RemoteData, TxRequest, TxStatus};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::progress_bar::ProgressBar;
use crate::components::tier_card::TierCard;
use crate::net::query::{contract_read, invalidate_contract};
use crate::state::cache::QueryCache;
use crate::state::forms::{SubmitPhase, TierForm};
use crate::state::wallet::WalletSession;
use crate::util::clock::now_secs;
use crate::util::notify::notify;

/// Whether the connected account may edit a campaign. Both sides must be
/// resolved; a still-loading owner or a disconnected wallet never edits.
fn editing_allowed(owner: Option<&Address>, account: Option<&Address>) -> bool {
    match (owner, account) {
        (Some(owner), Some(account)) => owner == account,
        _ => false,
    }
}

/// Detail page at `/campaign/{address}`.
///
/// The address derives reactively from the route param, so navigating
/// between campaigns within the same route pattern re-resolves the page.
/// An unparseable address renders the not-found view without issuing any
/// contract reads.
#[component]
pub fn CampaignPage() -> impl IntoView {
    let params = use_params_map();
    let address = move || crate::pages::route_address(params.read().get("address"));

    view! {
        {move || match address() {
            Some(address) => view! { <CampaignDetail address/> }.into_any(),
            None => view! {
                <main class="page">
                    <h1 class="page__title">"No Campaign Found!"</h1>
                </main>
            }
            .into_any(),
        }}
    }
}

#[component]
fn CampaignDetail(address: Address) -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletSession>>();
    let is_editing = RwSignal::new(false);
    let show_tier_modal = RwSignal::new(false);

    let owner = contract_read(address.clone(), methods::OWNER, vec![]);
    let state = contract_read(address.clone(), methods::STATE, vec![]);
    let name = contract_read(address.clone(), methods::NAME, vec![]);
    let description = contract_read(address.clone(), methods::DESCRIPTION, vec![]);
    let deadline = contract_read(address.clone(), methods::DEADLINE, vec![]);
    let goal = contract_read(address.clone(), methods::GOAL, vec![]);
    let balance = contract_read(address.clone(), methods::BALANCE, vec![]);
    let tiers = contract_read(address.clone(), methods::GET_TIERS, vec![]);

    let owner_value = move || owner.get().and_then_decode(|v| decode_address(&v));
    let state_value = move || state.get().and_then_decode(|v| decode_state(&v));
    let deadline_value = move || deadline.get().and_then_decode(|v| decode_uint(&v));
    let goal_value = move || goal.get().and_then_decode(|v| decode_uint(&v));
    let balance_value = move || balance.get().and_then_decode(|v| decode_uint(&v));
    let tiers_value = move || tiers.get().and_then_decode(|v| decode_tiers(&v));

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
    let status_label = move || {
        state_value()
            .value()
            .map_or("Unknown", |s| s.label())
    };
    let deadline_text = move || {
        deadline_value()
            .value()
            .map(|&secs| format_deadline(secs))
            .unwrap_or_default()
    };
    let has_ended = move || {
        deadline_value()
            .value()
            .is_some_and(|&secs| deadline_passed(secs, now_secs()))
    };
    let goal_heading = move || {
        goal_value()
            .value()
            .map_or_else(|| "Campaign Goal:".to_owned(), |&g| format!("Campaign Goal: ${g}"))
    };

    let can_edit = move || {
        let owner = owner_value();
        let session = wallet.get();
        editing_allowed(owner.value(), session.account())
    };

    // Disconnecting (or an owner mismatch after a refetch) closes edit mode.
    Effect::new(move |_| {
        if !can_edit() && is_editing.get_untracked() {
            is_editing.set(false);
        }
    });

    let first_error = move || {
        [
            owner.get(),
            state.get(),
            name.get(),
            description.get(),
            deadline.get(),
            goal.get(),
            balance.get(),
        ]
        .into_iter()
        .find_map(|data| data.error().map(str::to_owned))
    };

    let tiers_address = address.clone();
    let modal_address = address.clone();

    view! {
        <main class="page">
            <div class="page__header">
                <h1 class="page__title">{name_text}</h1>
                <Show when=move || is_editing.get()>
                    <p class="badge badge--status">{move || format!("Status: {}", status_label())}</p>
                </Show>
                <Show when=can_edit>
                    <button class="btn" on:click=move |_| is_editing.update(|e| *e = !*e)>
                        {move || if is_editing.get() { "Done" } else { "Edit" }}
                    </button>
                </Show>
            </div>
            <Show when=move || first_error().is_some()>
                <p class="page__error">{move || first_error().unwrap_or_default()}</p>
            </Show>
            <section class="campaign">
                <h2 class="campaign__heading">"Description:"</h2>
                <p class="campaign__description">{description_text}</p>
                <h2 class="campaign__heading">"Deadline"</h2>
                <p class="campaign__deadline">{deadline_text}</p>
                <Show when=has_ended>
                    <p class="campaign__ended">"Campaign has ended"</p>
                </Show>
                <h2 class="campaign__heading">{goal_heading}</h2>
                {move || match (goal_value(), balance_value()) {
                    (RemoteData::Loaded(g), RemoteData::Loaded(b)) => {
                        view! { <ProgressBar balance=b goal=g/> }.into_any()
                    }
                    _ => view! { <span class="campaign__progress-pending"></span> }.into_any(),
                }}
            </section>
            <section class="campaign__tiers">
                <h2 class="campaign__heading">"Tiers:"</h2>
                <div class="page__grid">
                    {move || match tiers_value() {
                        RemoteData::Loading => {
                            view! { <p class="page__status">"Loading Tiers..."</p> }.into_any()
                        }
                        RemoteData::Failed(reason) => {
                            view! { <p class="page__error">{reason}</p> }.into_any()
                        }
                        RemoteData::Loaded(list) if list.is_empty() && !is_editing.get() => {
                            view! { <p class="page__status">"No Tiers Available"</p> }.into_any()
                        }
                        RemoteData::Loaded(list) => (0u64..)
                            .zip(list)
                            .map(|(index, tier)| {
                                view! {
                                    <TierCard
                                        tier=tier
                                        index=index
                                        contract=tiers_address.clone()
                                        is_editing=is_editing
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any(),
                    }}
                    <Show when=move || is_editing.get()>
                        <button
                            class="tier-card tier-card--add"
                            on:click=move |_| show_tier_modal.set(true)
                        >
                            "+ Add Tier"
                        </button>
                    </Show>
                </div>
            </section>
            <Show when=move || show_tier_modal.get()>
                <CreateTierModal
                    contract=modal_address.clone()
                    on_close=move |()| show_tier_modal.set(false)
                />
            </Show>
        </main>
    }
}

/// Modal form for adding one funding tier to the campaign.
///
/// Inputs are coerced, not validated: the contract is the authority on
/// rejecting a bad tier, and its reason lands in the modal's error line.
#[component]
fn CreateTierModal(contract: Address, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let tier_name = RwSignal::new(String::new());
    let tier_amount = RwSignal::new(String::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |_| {
        if phase.get().is_submitting() {
            return;
        }
        phase.set(SubmitPhase::Submitting);
        error.set(None);
        let form = TierForm {
            name: tier_name.get(),
            amount: tier_amount.get(),
        };
        let (arg_name, arg_amount) = form.tier_args();
        let tx = TxRequest {
            address: contract.clone(),
            method: methods::ADD_TIER.to_owned(),
            params: vec![serde_json::json!(arg_name), serde_json::json!(arg_amount)],
            value: None,
        };
        let contract = contract.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_transaction(&tx).await {
                Ok(receipt) if receipt.status == TxStatus::Confirmed => {
                    notify("Tier Added Successfully");
                    invalidate_contract(cache, &contract);
                    on_close.run(());
                }
                Ok(receipt) => {
                    error.set(Some(
                        receipt.reason.unwrap_or_else(|| "Transaction failed".to_owned()),
                    ));
                }
                Err(reason) => error.set(Some(reason)),
            }
            phase.set(SubmitPhase::Idle);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (tx, contract, cache);
            phase.set(SubmitPhase::Idle);
        }
    };

    view! {
        <div class="modal__backdrop">
            <div class="modal">
                <div class="modal__header">
                    <h3 class="modal__title">"Create a Funding Tier"</h3>
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
                <label class="modal__label">"Tier Name:"</label>
                <input
                    class="modal__input"
                    type="text"
                    placeholder="Tier Name"
                    prop:value=move || tier_name.get()
                    on:input=move |ev| tier_name.set(event_target_value(&ev))
                />
                <label class="modal__label">"Tier Cost:"</label>
                <input
                    class="modal__input"
                    type="number"
                    prop:value=move || tier_amount.get()
                    on:input=move |ev| tier_amount.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="modal__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="btn btn--primary modal__submit"
                    on:click=on_submit
                    disabled=move || phase.get().is_submitting()
                >
                    {move || if phase.get().is_submitting() { "Adding Tier..." } else { "Add Tier" }}
                </button>
            </div>
        </div>
    }
}

//! Card for one funding tier on the campaign detail page.

use chain::call::methods;
use chain::{Address, Tier, TxRequest, TxStatus};
use leptos::prelude::*;

use crate::net::query::invalidate_contract;
use crate::state::cache::QueryCache;
use crate::util::notify::notify;
use crate::util::progress::format_amount;

/// One funding tier: name, amount, backer count, and the fund action.
/// In editing mode the owner additionally gets a remove button.
#[component]
pub fn TierCard(
    tier: Tier,
    index: u64,
    contract: Address,
    #[prop(into)] is_editing: Signal<bool>,
) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let busy = RwSignal::new(false);
    let amount = tier.amount;

    let fund_contract = contract.clone();
    let on_fund = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let tx = TxRequest {
            address: fund_contract.clone(),
            method: methods::FUND.to_owned(),
            params: vec![serde_json::json!(index)],
            value: Some(amount),
        };
        let contract = fund_contract.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_transaction(&tx).await {
                Ok(receipt) if receipt.status == TxStatus::Confirmed => {
                    notify("Funded Successfully");
                    invalidate_contract(cache, &contract);
                }
                Ok(receipt) => {
                    notify(&receipt.reason.unwrap_or_else(|| "Transaction failed".to_owned()));
                }
                Err(reason) => notify(&reason),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (tx, contract, cache);
            busy.set(false);
        }
    };

    let remove_contract = contract.clone();
    let on_remove = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let tx = TxRequest {
            address: remove_contract.clone(),
            method: methods::REMOVE_TIER.to_owned(),
            params: vec![serde_json::json!(index)],
            value: None,
        };
        let contract = remove_contract.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_transaction(&tx).await {
                Ok(receipt) if receipt.status == TxStatus::Confirmed => {
                    notify("Tier Removed Successfully");
                    invalidate_contract(cache, &contract);
                }
                Ok(receipt) => {
                    notify(&receipt.reason.unwrap_or_else(|| "Transaction failed".to_owned()));
                }
                Err(reason) => notify(&reason),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (tx, contract, cache);
            busy.set(false);
        }
    };

    view! {
        <div class="tier-card">
            <div class="tier-card__header">
                <span class="tier-card__name">{tier.name.clone()}</span>
                <span class="tier-card__amount">{format_amount(tier.amount)}</span>
            </div>
            <p class="tier-card__backers">{format!("Total Backers: {}", tier.backers)}</p>
            <div class="tier-card__actions">
                <button class="btn btn--primary" on:click=on_fund disabled=move || busy.get()>
                    "Select"
                </button>
                <Show when=move || is_editing.get()>
                    <button class="btn btn--danger" on:click=on_remove.clone() disabled=move || busy.get()>
                        "Remove"
                    </button>
                </Show>
            </div>
        </div>
    }
}

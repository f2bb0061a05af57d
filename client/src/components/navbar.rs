//! Navigation shell: route links and the wallet-connect control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every page. The dashboard link and the wallet control are
//! the only identity-aware pieces; both key off the shared `WalletSession`
//! context.

use leptos::prelude::*;

use crate::state::wallet::WalletSession;
use crate::util::format::short_address;

/// Top navigation bar with the wallet-connect control.
///
/// The dashboard link renders only while an account is connected; it points
/// at that account's own dashboard route.
#[component]
pub fn Navbar() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletSession>>();
    let busy = RwSignal::new(false);

    let on_connect = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::wallet_connect().await {
                Ok(address) => wallet.set(WalletSession::Connected(address)),
                Err(reason) => {
                    log::warn!("wallet connect failed: {reason}");
                    wallet.set(WalletSession::Disconnected);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    let on_disconnect = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::wallet_disconnect().await;
            wallet.set(WalletSession::Disconnected);
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            wallet.set(WalletSession::Disconnected);
            busy.set(false);
        }
    };

    let dashboard_href = move || {
        wallet
            .get()
            .account()
            .map(|address| format!("/dashboard/{address}"))
    };

    view! {
        <nav class="navbar">
            <div class="navbar__links">
                <a class="navbar__link" href="/">
                    "Campaigns"
                </a>
                <Show when=move || wallet.get().is_connected()>
                    <a class="navbar__link" href=move || dashboard_href().unwrap_or_default()>
                        "Dashboard"
                    </a>
                </Show>
            </div>
            <div class="navbar__wallet">
                {move || match wallet.get() {
                    WalletSession::Loading => view! {
                        <span class="navbar__wallet-status">"..."</span>
                    }
                    .into_any(),
                    WalletSession::Disconnected => view! {
                        <button class="btn navbar__connect" on:click=on_connect disabled=move || busy.get()>
                            "Connect Wallet"
                        </button>
                    }
                    .into_any(),
                    WalletSession::Connected(address) => view! {
                        <span class="navbar__wallet-address">{short_address(&address)}</span>
                        <button class="btn navbar__disconnect" on:click=on_disconnect disabled=move || busy.get()>
                            "Disconnect"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}

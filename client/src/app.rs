//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{campaign::CampaignPage, dashboard::DashboardPage, home::HomePage};
use crate::state::cache::QueryCache;
use crate::state::wallet::WalletSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the wallet session and the shared read-query cache as contexts,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let wallet = RwSignal::new(WalletSession::default());
    let cache = RwSignal::new(QueryCache::default());

    provide_context(wallet);
    provide_context(cache);

    // Resolve the wallet session once on load; everything identity-gated
    // stays in the Loading state until this lands.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let session = match crate::net::api::fetch_wallet_session().await {
            Some(address) => WalletSession::Connected(address),
            None => WalletSession::Disconnected,
        };
        wallet.set(session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/crowdfund.css"/>
        <Title text="Crowdfunding"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("campaign"), ParamSegment("address")) view=CampaignPage/>
                <Route path=(StaticSegment("dashboard"), ParamSegment("wallet")) view=DashboardPage/>
            </Routes>
        </Router>
    }
}

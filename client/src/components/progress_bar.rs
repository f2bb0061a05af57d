//! Funding progress bar shared by cards and the detail page.

use chain::campaign::funding_percentage;
use leptos::prelude::*;

use crate::util::progress::{format_amount, percent_label, width_style};

/// Horizontal bar showing balance against goal.
///
/// Width is the clamped percentage of goal; a zero goal renders an empty
/// bar. The trailing percentage label disappears at 100%.
#[component]
pub fn ProgressBar(balance: u64, goal: u64) -> impl IntoView {
    let percentage = funding_percentage(balance, goal);
    let width = width_style(percentage);
    let label = percent_label(percentage);

    view! {
        <div class="progress">
            <div class="progress__fill" style:width=width>
                <p class="progress__balance">{format_amount(balance)}</p>
            </div>
            <Show when={
                let has_label = label.is_some();
                move || has_label
            }>
                <p class="progress__label">{label.clone().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

//! Status Badge Component

use docutrack_core::ExtractionStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(status: ExtractionStatus) -> impl IntoView {
    let badge = status.badge();
    view! {
        <span class=badge.tone.css_class()>
            {(!badge.icon.is_empty()).then(|| view! { <span class="badge-icon">{badge.icon}</span> })}
            {badge.label}
        </span>
    }
}

//! Category Section Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::present::CategorySectionView;

/// Header with emoji and count, followed by the category's rows
#[component]
pub fn CategorySection(section: CategorySectionView) -> impl IntoView {
    let count = section.items.len();

    view! {
        <div class="category-section">
            <div class="category-header">
                <span class="category-emoji">{section.emoji}</span>
                <span class="category-name">{section.name}</span>
                <span class="category-count">{count}</span>
            </div>
            <ul class="category-items">
                {section.items.into_iter().map(|row| view! { <ItemRow row=row /> }).collect_view()}
            </ul>
        </div>
    }
}

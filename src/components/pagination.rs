//! Pagination Component

use leptos::prelude::*;

/// Page numbers to show around `current`, at most `width` of them
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total);
    let half = width / 2;
    let start = current.saturating_sub(half).max(1).min(total + 1 - width);
    (start..start + width).collect()
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    let go = move |target: usize| {
        if target >= 1 && target <= total_pages.get() && target != page.get() {
            on_change.run(target);
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| go(page.get().saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                {move || {
                    let current = page.get();
                    page_window(current, total_pages.get(), 5)
                        .into_iter()
                        .map(|n| {
                            view! {
                                <button
                                    class=if n == current { "page-btn active" } else { "page-btn" }
                                    on:click=move |_| go(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="page-btn"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| go(page.get() + 1)
                >
                    "Next ›"
                </button>
                <span class="page-info">{move || format!("Page {} of {}", page.get(), total_pages.get())}</span>
            </nav>
        </Show>
    }
}

use chrono::NaiveDate;
use leptos::*;

use crate::components::layout::ErrorMessage;
use crate::utils::time::format_iso_date;

#[component]
pub fn AttendanceFilterBar(
    #[prop(into)] filter_date: Signal<Option<NaiveDate>>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let value = move || filter_date.get().map(format_iso_date).unwrap_or_default();

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-end">
                <label class="flex flex-col gap-1 text-sm font-medium text-fg" for="attendance-filter-date">
                    {"Filter by date"}
                    <input
                        id="attendance-filter-date"
                        type="date"
                        class="rounded-md border border-border-strong bg-surface px-3 py-2 text-sm"
                        prop:value=value
                        on:change=move |ev| on_input.call(event_target_value(&ev))
                    />
                </label>
                <Show when=move || filter_date.get().is_some()>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md border border-border-strong px-3 py-2 text-sm font-medium text-fg hover:bg-surface-muted"
                        on:click=move |_| on_clear.call(())
                    >
                        {"Clear Filter"}
                    </button>
                </Show>
            </div>
            {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
        </div>
    }
}

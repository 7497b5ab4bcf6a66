use leptos::prelude::*;

use enhancer_app::domain::ModelId;

/// Sidebar settings: masked credential input and the closed model selector.
/// Values are plain signals read by the page at submit time.
#[component]
pub fn SettingsPanel(api_key: RwSignal<String>, model: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="settings">
            <h2 class="settings__title">"Settings"</h2>

            <label class="settings__label" for="api-key">"Enter your OpenAI API Key"</label>
            <input
                id="api-key"
                type="password"
                name="api_key"
                class="settings__input"
                autocomplete="off"
                prop:value=move || api_key.get()
                on:input=move |ev| api_key.set(event_target_value(&ev))
            />

            <label class="settings__label" for="model">"Select OpenAI Model"</label>
            <select
                id="model"
                name="model"
                class="settings__select"
                on:change=move |ev| model.set(event_target_value(&ev))
            >
                {ModelId::ALL
                    .iter()
                    .map(|m| {
                        let name = m.name();
                        view! {
                            <option value=name selected=move || model.get() == name>
                                {name}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>

            <div class="settings__help">
                <h3 class="settings__help-title">"How to use"</h3>
                <ol class="settings__help-list">
                    <li>"Enter your OpenAI API key"</li>
                    <li>"Fill in the role, context, and task"</li>
                    <li>"Click 'Enhance Prompt'"</li>
                    <li>"Copy the enhanced prompt"</li>
                </ol>
            </div>
        </div>
    }
}

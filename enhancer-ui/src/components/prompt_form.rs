use leptos::prelude::*;

/// The three free-text fields plus the submit trigger. No validation happens
/// here; the snapshot is judged at submit time by the server.
#[component]
pub fn PromptForm(
    role: RwSignal<String>,
    context: RwSignal<String>,
    task: RwSignal<String>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="prompt-form">
            <label class="prompt-form__label" for="role">"Role"</label>
            <textarea
                id="role"
                name="role"
                class="prompt-form__field"
                placeholder="Example: You are an experienced data scientist"
                prop:value=move || role.get()
                on:input=move |ev| role.set(event_target_value(&ev))
                prop:disabled=move || is_loading.get()
            ></textarea>

            <label class="prompt-form__label" for="context">"Context"</label>
            <textarea
                id="context"
                name="context"
                class="prompt-form__field"
                placeholder="Example: I am working on a project to analyze customer churn for a telecom company"
                prop:value=move || context.get()
                on:input=move |ev| context.set(event_target_value(&ev))
                prop:disabled=move || is_loading.get()
            ></textarea>

            <label class="prompt-form__label" for="task">"Task"</label>
            <textarea
                id="task"
                name="task"
                class="prompt-form__field"
                placeholder="Example: Create a data analysis plan to identify factors contributing to customer churn"
                prop:value=move || task.get()
                on:input=move |ev| task.set(event_target_value(&ev))
                prop:disabled=move || is_loading.get()
            ></textarea>

            <button
                type="submit"
                class="prompt-form__button"
                prop:disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Enhancing..." } else { "Enhance Prompt" }}
            </button>
        </div>
    }
}

use leptos::prelude::*;
use server_fn::ServerFnError;

use enhancer_app::domain::{EnhancedPrompt, ModelId};

use crate::components::{ErrorDisplay, LoadingSpinner, PromptForm, ResultDisplay, SettingsPanel};

#[server(EnhancePromptFn, "/api", endpoint = "enhance_prompt")]
pub async fn enhance_prompt(
    role: String,
    context: String,
    task: String,
    api_key: String,
    model: String,
) -> Result<EnhancedPrompt, ServerFnError> {
    use enhancer_app::domain::{EnhancerSettings, PromptInput};
    use enhancer_app::AppContext;

    let ctx = expect_context::<AppContext>();

    tracing::info!("enhancement submitted");

    let input = PromptInput::new(role, context, task);
    let settings = EnhancerSettings::new(api_key, ModelId::from_name(&model));

    ctx.enhance_prompt
        .execute(&input, &settings)
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api_key = RwSignal::new(String::new());
    let model = RwSignal::new(ModelId::default().name().to_string());
    let role = RwSignal::new(String::new());
    let context = RwSignal::new(String::new());
    let task = RwSignal::new(String::new());

    let enhance = ServerAction::<EnhancePromptFn>::new();
    let is_loading = enhance.pending();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        enhance.dispatch(EnhancePromptFn {
            role: role.get(),
            context: context.get(),
            task: task.get(),
            api_key: api_key.get(),
            model: model.get(),
        });
    };

    view! {
        <div class="hero">
            <h1 class="hero__title">"AI Prompt Enhancer"</h1>
            <p class="hero__subtitle">
                "This app helps you create better prompts for AI by taking your basic inputs and enhancing them."
            </p>
        </div>

        // Without JavaScript the same form posts to the /enhance fallback.
        <form class="enhance-form" action="/enhance" method="post" on:submit=on_submit>
            <div class="page-layout">
                <aside class="page-layout__sidebar">
                    <SettingsPanel api_key=api_key model=model/>
                </aside>
                <section class="page-layout__main">
                    <PromptForm role=role context=context task=task is_loading=is_loading/>
                </section>
            </div>
        </form>

        <section class="results">
            {move || {
                if is_loading.get() {
                    view! { <LoadingSpinner/> }.into_any()
                } else {
                    match enhance.value().get() {
                        Some(Ok(enhanced)) => {
                            view! { <ResultDisplay enhanced=enhanced/> }.into_any()
                        }
                        Some(Err(e)) => {
                            view! { <ErrorDisplay message=server_error_message(&e)/> }.into_any()
                        }
                        None => ().into_any(),
                    }
                }
            }}
        </section>

        <footer class="footer">"Created with ❤️ for AI prompt engineering"</footer>
    }
}

fn server_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg.clone(),
        other => other.to_string(),
    }
}

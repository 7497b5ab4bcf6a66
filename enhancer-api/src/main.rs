use axum::{
    response::{Html, IntoResponse},
    routing::post,
    Form, Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;

use enhancer_app::domain::{EnhancerSettings, ModelId, PromptInput};
use enhancer_app::AppContext;
use enhancer_ui::components::{escape_html, markdown_to_html};
use enhancer_ui::pages::EnhancePromptFn;
use enhancer_ui::App;

// The credential travels in the POST body only; there is deliberately no GET
// variant of /enhance that would put it in a URL.
#[derive(Deserialize)]
struct EnhanceForm {
    role: String,
    context: String,
    task: String,
    api_key: String,
    model: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::new();

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<EnhancePromptFn>();
    tracing::info!("Registered server function: EnhancePromptFn");

    let app = Router::new()
        .route("/enhance", post({
            let ctx = app_context.clone();
            move |form: Form<EnhanceForm>| {
                let ctx = ctx.clone();
                async move {
                    handle_enhance_form(ctx, form.0).await
                }
            }
        }))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

async fn handle_enhance_form(ctx: AppContext, form: EnhanceForm) -> impl IntoResponse {
    let input = PromptInput::new(form.role, form.context, form.task);
    let settings = EnhancerSettings::new(form.api_key, ModelId::from_name(&form.model));

    match ctx.enhance_prompt.execute(&input, &settings).await {
        Ok(enhanced) => Html(render_result_page(&enhanced.text)),
        Err(e) => Html(render_error_page(e.user_message())),
    }
}

fn render_result_page(text: &str) -> String {
    let html_content = markdown_to_html(text);
    let copy_text = escape_html(text);
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>AI Prompt Enhancer</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>✨</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="result">
            <p class="result__banner">Prompt enhanced successfully!</p>
            <h2 class="result__title">Enhanced Prompt:</h2>
            <div class="result__content">{html_content}</div>
            <label class="result__copy-label" for="copy-field">Copy this enhanced prompt</label>
            <textarea id="copy-field" class="result__copy-field" readonly>{copy_text}</textarea>
            <div class="result__actions">
                <a href="/" class="result__button">Enhance another prompt</a>
            </div>
        </div>
    </main>
</body>
</html>"#, CSS = CSS, html_content = html_content, copy_text = copy_text)
}

fn render_error_page(message: &str) -> String {
    let message = escape_html(message);
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Error - AI Prompt Enhancer</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>✨</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="error">
            <p class="error__title">Something went wrong</p>
            <p class="error__message">{message}</p>
            <a href="/" class="error__retry">Try again</a>
        </div>
    </main>
</body>
</html>"#, CSS = CSS, message = message)
}

const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 2.5rem 0 1.5rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--pine); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 560px; margin: 0 auto; }
.page-layout { display: grid; gap: 1.5rem; margin: 1.5rem 0; }
@media (min-width: 720px) { .page-layout { grid-template-columns: 280px 1fr; } }
.page-layout__sidebar { align-self: start; }
.settings { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.25rem; }
.settings__title { color: var(--pine); font-size: 1.2rem; margin-bottom: 1rem; }
.settings__label { display: block; font-weight: 600; margin: 0.75rem 0 0.35rem; }
.settings__input, .settings__select {
    width: 100%; padding: 0.6rem 0.75rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--base); color: var(--text); font-size: 0.95rem;
}
.settings__input:focus, .settings__select:focus { outline: none; border-color: var(--pine); }
.settings__help { margin-top: 1.25rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.settings__help-title { font-size: 1rem; color: var(--subtle); margin-bottom: 0.5rem; }
.settings__help-list { margin-left: 1.25rem; color: var(--subtle); font-size: 0.9rem; }
.settings__help-list li { margin-bottom: 0.35rem; }
.prompt-form { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.25rem; display: flex; flex-direction: column; }
.prompt-form__label { font-weight: 600; margin: 0.75rem 0 0.35rem; }
.prompt-form__field {
    width: 100%; min-height: 90px; padding: 0.75rem 1rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--base); color: var(--text); font-size: 1rem; resize: vertical;
}
.prompt-form__field:focus { outline: none; border-color: var(--pine); }
.prompt-form__field::placeholder { color: var(--muted); }
.prompt-form__button {
    margin-top: 1.25rem; padding: 0.9rem 2rem; background: var(--pine); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
}
.prompt-form__button:hover { opacity: 0.9; }
.prompt-form__button:disabled { background: var(--muted); cursor: not-allowed; }
.loading { display: flex; flex-direction: column; align-items: center; padding: 3rem; }
.loading__spinner {
    width: 50px; height: 50px; border: 4px solid var(--overlay);
    border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
.result { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.5rem; margin: 2rem 0; }
.result__banner { background: #e6efe9; border: 2px solid var(--foam); border-radius: 8px; color: var(--pine); font-weight: 700; padding: 0.75rem 1rem; margin-bottom: 1rem; }
.result__title { color: var(--pine); font-size: 1.3rem; margin-bottom: 1rem; padding-bottom: 0.75rem; border-bottom: 2px solid var(--overlay); }
.result__content { line-height: 1.8; font-size: 1.05rem; }
.result__content p { margin-bottom: 1rem; }
.result__content strong { font-weight: 700; color: var(--pine); }
.result__content em { font-style: italic; }
.result__content h3 { font-size: 1.2rem; color: var(--pine); margin: 1rem 0 0.5rem; }
.result__content h4 { font-size: 1.1rem; color: var(--subtle); margin: 0.75rem 0 0.5rem; }
.result__content li { margin-left: 1.5rem; margin-bottom: 0.5rem; list-style: disc; }
.result__copy-label { display: block; font-weight: 600; margin: 1.25rem 0 0.35rem; }
.result__copy-field {
    width: 100%; min-height: 220px; padding: 0.75rem 1rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--base); color: var(--text); font-size: 0.95rem; resize: vertical;
}
.result__actions { margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.result__button { display: inline-block; padding: 0.75rem 1.5rem; background: var(--pine); color: var(--base); border: none; border-radius: 8px; font-weight: 600; cursor: pointer; text-decoration: none; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.error__retry { display: inline-block; margin-top: 1rem; padding: 0.5rem 1rem; background: var(--love); color: var(--base); border: none; border-radius: 4px; cursor: pointer; text-decoration: none; }
.footer { text-align: center; padding: 2rem 0; color: var(--muted); font-size: 0.9rem; border-top: 1px solid var(--overlay); margin-top: 3rem; }
"#;

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"AI Prompt Enhancer"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>✨</text></svg>"/>
                <style>{CSS}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_page_shows_text_in_both_targets() {
        let page = render_result_page("PROMPT: be **specific**");

        assert!(page.contains("Prompt enhanced successfully!"));
        // Formatted block.
        assert!(page.contains("<p>PROMPT: be <strong>specific</strong></p>"));
        // Copyable field keeps the raw text.
        assert!(page.contains("PROMPT: be **specific**"));
    }

    #[test]
    fn test_result_page_escapes_copy_field() {
        let page = render_result_page("</textarea><script>alert(1)</script>");
        assert!(!page.contains("</textarea><script>"));
        assert!(page.contains("&lt;/textarea&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_error_page_shows_message() {
        let page = render_error_page("Please fill in all fields (Role, Context, and Task).");
        assert!(page.contains("Please fill in all fields (Role, Context, and Task)."));
        assert!(page.contains("Something went wrong"));
    }
}

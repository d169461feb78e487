//! Not found page component
//!
//! Shown by the server for any path other than the landing page.

use leptos::prelude::*;
use leptos_meta::Title;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with a real 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Página não encontrada - Fluxo" />

        <div class="min-h-screen bg-slate-950 text-slate-100 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-extrabold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Página não encontrada"</h2>
                <p class="text-slate-400 mb-8 max-w-md mx-auto">
                    "O endereço que você procura não existe ou foi movido."
                </p>
                // Plain link: a full page load, no client-side routing
                <a href="/" class="btn-base btn-primary">"Voltar ao início"</a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_links_home() {
        let owner = Owner::new();
        let html = owner.with(|| {
            leptos_meta::provide_meta_context();
            view! { <NotFoundPage /> }.to_html()
        });
        owner.cleanup();

        assert!(html.contains("404"));
        assert!(html.contains(r#"href="/""#));
    }
}

//! Landing page component
//!
//! Marketing page for Fluxo made of sibling sections:
//! - Navigation bar that compacts once the page is scrolled
//! - Hero section with the main call to action
//! - Feature grid
//! - Social-proof strip with testimonials and numbers
//! - Pricing card
//! - Call-to-action and footer sections
//!
//! Every "Começar", "Login" and "Criar Conta" control shares one handler that
//! leaves the page for the app entry point.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::navigation::{BrowserNavigator, Navigator, go_to_app};
use crate::core::scroll::NavbarMode;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll_listener::use_navbar_mode;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: icons::CALENDAR,
        title: "Agenda inteligente",
        description: "Seus clientes marcam horário sozinhos, 24 horas por dia, sem troca de mensagens.",
    },
    Feature {
        icon: icons::ZAP,
        title: "Lembretes automáticos",
        description: "Confirmações e lembretes por WhatsApp e e-mail reduzem as faltas em até 40%.",
    },
    Feature {
        icon: icons::USERS,
        title: "Gestão de equipe",
        description: "Organize a escala de cada profissional e acompanhe a ocupação em tempo real.",
    },
    Feature {
        icon: icons::BAR_CHART,
        title: "Relatórios claros",
        description: "Faturamento, serviços mais vendidos e clientes recorrentes em um só painel.",
    },
    Feature {
        icon: icons::SHIELD,
        title: "Dados protegidos",
        description: "Criptografia de ponta a ponta e backups diários, em conformidade com a LGPD.",
    },
    Feature {
        icon: icons::SMARTPHONE,
        title: "Funciona no celular",
        description: "Acompanhe o seu negócio de qualquer lugar, pelo navegador ou pelo aplicativo.",
    },
];

struct Testimonial {
    avatar: &'static str,
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        avatar: "https://i.pravatar.cc/96?img=47",
        name: "Mariana Costa",
        role: "Studio de beleza, São Paulo",
        quote: "Parei de perder tempo no telefone. A agenda se organiza sozinha.",
    },
    Testimonial {
        avatar: "https://i.pravatar.cc/96?img=12",
        name: "Rafael Lima",
        role: "Barbearia, Belo Horizonte",
        quote: "As faltas caíram pela metade no primeiro mês com os lembretes.",
    },
    Testimonial {
        avatar: "https://i.pravatar.cc/96?img=32",
        name: "Juliana Alves",
        role: "Clínica de fisioterapia, Recife",
        quote: "Os relatórios me mostraram onde investir. Simples e bonito.",
    },
];

const STATS: &[(&str, &str)] = &[
    ("12 mil+", "negócios ativos"),
    ("1,8 mi", "agendamentos por mês"),
    ("4,9/5", "avaliação média"),
];

const PLAN_FEATURES: &[&str] = &[
    "Agendamentos ilimitados",
    "Até 10 profissionais",
    "Lembretes por WhatsApp e e-mail",
    "Relatórios completos",
    "Suporte prioritário",
];

/// Click handler shared by every call to action
fn start_handler<N>(navigator: N) -> Callback<()>
where
    N: Navigator + Send + Sync + 'static,
{
    Callback::new(move |_: ()| go_to_app(&navigator))
}

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let navbar_mode = use_navbar_mode();

    // One handler for every call to action
    let on_start = start_handler(BrowserNavigator);

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-slate-950 text-slate-100 overflow-x-hidden">
            <Navbar mode=navbar_mode on_start=on_start />
            <Hero on_start=on_start />
            <FeatureGrid />
            <SocialProof />
            <PricingSection on_start=on_start />
            <CallToAction on_start=on_start />
            <Footer />

            <LandingStyles />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Fluxo - Agenda online para o seu negócio" />
        <Meta name="description" content="Agendamentos, lembretes automáticos e relatórios em um só lugar. Comece grátis." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Fluxo - Agenda online para o seu negócio" />
        <Meta property="og:description" content="Agendamentos, lembretes automáticos e relatórios em um só lugar." />
        <Meta property="og:image" content="https://images.unsplash.com/photo-1556761175-b413da4baf72?auto=format&fit=crop&w=1200&q=80" />
    }
}

/// Fixed navigation bar; its padding and background follow the scroll position
#[component]
fn Navbar(mode: Signal<NavbarMode>, on_start: Callback<()>) -> impl IntoView {
    view! {
        <nav
            class=move || {
                format!(
                    "fixed top-0 inset-x-0 z-50 transition-all duration-300 {}",
                    mode.get().class(),
                )
            }
            data-navbar=move || mode.get().as_str()
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                <a href="#" class="flex items-center gap-2">
                    <Logo />
                    <span class="text-xl font-bold tracking-tight">"Fluxo"</span>
                </a>

                <div class="hidden md:flex items-center gap-8 text-sm text-slate-300">
                    <a href="#recursos" class="hover:text-white transition-colors">"Recursos"</a>
                    <a href="#depoimentos" class="hover:text-white transition-colors">"Depoimentos"</a>
                    <a href="#precos" class="hover:text-white transition-colors">"Preços"</a>
                </div>

                <div class="flex items-center gap-2">
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Small on_click=on_start>
                        "Login"
                    </Button>
                    <Button size=ButtonSize::Small on_click=on_start>
                        "Começar"
                    </Button>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn Hero(on_start: Callback<()>) -> impl IntoView {
    view! {
        <section class="relative pt-40 pb-24 px-4">
            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <div class="landing-fade-in-up">
                    <span class="inline-flex items-center gap-2 px-3 py-1 mb-6 text-xs font-medium rounded-full
                                 bg-indigo-500/10 text-indigo-300 border border-indigo-500/30">
                        <Icon name=icons::STAR class="w-3 h-3" color="a5b4fc" />
                        "Novo: lembretes por WhatsApp"
                    </span>
                    <h1 class="text-5xl sm:text-6xl font-extrabold leading-tight tracking-tight mb-6">
                        "Sua agenda cheia, "
                        <span class="text-gradient">"sem esforço"</span>
                    </h1>
                    <p class="text-lg text-slate-300 max-w-xl mb-10 leading-relaxed">
                        "O Fluxo cuida dos agendamentos, lembretes e pagamentos para que você foque no que importa: atender bem os seus clientes."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <Button size=ButtonSize::Large on_click=on_start trailing_icon=icons::ARROW_RIGHT>
                            "Começar grátis"
                        </Button>
                        <a href="#recursos" class="btn-base btn-outline btn-lg">
                            "Ver recursos"
                        </a>
                    </div>
                    <p class="mt-4 text-sm text-slate-400">"14 dias grátis. Sem cartão de crédito."</p>
                </div>

                <div class="relative landing-fade-in-up landing-delay-200">
                    <div class="absolute -inset-4 bg-indigo-500/20 blur-3xl rounded-full" aria-hidden="true"></div>
                    <img
                        src="https://images.unsplash.com/photo-1556761175-b413da4baf72?auto=format&fit=crop&w=1200&q=80"
                        alt="Equipe usando o Fluxo"
                        class="relative rounded-2xl border border-white/10 shadow-2xl"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <section id="recursos" class="py-24 px-4 bg-slate-900/50">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Tudo o que o seu negócio precisa"</h2>
                    <p class="text-lg text-slate-400 max-w-2xl mx-auto">
                        "Ferramentas simples que trabalham por você, do primeiro agendamento ao relatório do mês."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    icon=feature.icon
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-slate-900 border border-white/5 hover:border-indigo-500/40
                    transition-all duration-300 hover:-translate-y-1">
            <div class="w-12 h-12 mb-4 rounded-xl bg-indigo-500/15 flex items-center justify-center">
                <Icon name=icon class="w-6 h-6" color="818cf8" />
            </div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-sm text-slate-400 leading-relaxed">{description}</p>
        </div>
    }
}

/// Testimonials and usage numbers
#[component]
fn SocialProof() -> impl IntoView {
    view! {
        <section id="depoimentos" class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="grid sm:grid-cols-3 gap-6 mb-16 text-center">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div>
                                    <div class="text-4xl font-extrabold text-gradient">{*value}</div>
                                    <div class="text-sm text-slate-400 mt-1">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-3 gap-6">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="p-6 rounded-2xl bg-slate-900 border border-white/5">
                                    <div class="flex gap-1 mb-4" aria-label="5 estrelas">
                                        {(0..5)
                                            .map(|_| view! { <Icon name=icons::STAR class="w-4 h-4" color="facc15" /> })
                                            .collect_view()}
                                    </div>
                                    <blockquote class="text-slate-200 mb-6">{t.quote}</blockquote>
                                    <figcaption class="flex items-center gap-3">
                                        <img src=t.avatar alt=t.name class="w-10 h-10 rounded-full" loading="lazy" />
                                        <div>
                                            <div class="font-medium">{t.name}</div>
                                            <div class="text-xs text-slate-400">{t.role}</div>
                                        </div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingSection(on_start: Callback<()>) -> impl IntoView {
    view! {
        <section id="precos" class="py-24 px-4 bg-slate-900/50">
            <div class="max-w-md mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Um plano, tudo incluído"</h2>
                <p class="text-lg text-slate-400 mb-12">"Sem taxas escondidas. Cancele quando quiser."</p>

                <div class="relative p-8 rounded-3xl bg-slate-900 border-2 border-indigo-500 shadow-xl text-left">
                    <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-indigo-500 text-white text-sm font-medium rounded-full">
                        "Mais popular"
                    </div>
                    <h3 class="text-xl font-bold mb-2">"Profissional"</h3>
                    <div class="flex items-baseline gap-1 mb-6">
                        <span class="text-5xl font-extrabold">"R$ 49"</span>
                        <span class="text-slate-400">"/mês"</span>
                    </div>
                    <ul class="space-y-3 mb-8">
                        {PLAN_FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <li class="flex items-center gap-3">
                                        <Icon name=icons::CHECK class="w-5 h-5 flex-shrink-0" color="22c55e" />
                                        <span class="text-slate-200">{*feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <Button size=ButtonSize::Large on_click=on_start class="w-full justify-center">
                        "Criar Conta"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction(on_start: Callback<()>) -> impl IntoView {
    view! {
        <section class="py-24 px-4">
            <div class="max-w-4xl mx-auto text-center p-12 rounded-3xl bg-gradient-to-br from-indigo-600 to-violet-600">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Pronto para encher a sua agenda?"</h2>
                <p class="text-lg text-indigo-100 mb-8 max-w-xl mx-auto">
                    "Junte-se a milhares de negócios que já organizam o dia a dia com o Fluxo."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Large on_click=on_start>
                        "Criar Conta"
                    </Button>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Large on_click=on_start>
                        "Login"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-4 border-t border-white/10">
            <div class="max-w-7xl mx-auto grid md:grid-cols-4 gap-8 mb-8">
                <div class="md:col-span-2">
                    <div class="flex items-center gap-2 mb-4">
                        <Logo />
                        <span class="text-xl font-bold">"Fluxo"</span>
                    </div>
                    <p class="text-sm text-slate-400 max-w-sm">
                        "Agenda online, lembretes automáticos e relatórios para pequenos negócios."
                    </p>
                </div>
                <div>
                    <h4 class="font-semibold mb-4">"Produto"</h4>
                    <ul class="space-y-2 text-sm text-slate-400">
                        <li><a href="#recursos" class="hover:text-white transition-colors">"Recursos"</a></li>
                        <li><a href="#precos" class="hover:text-white transition-colors">"Preços"</a></li>
                    </ul>
                </div>
                <div>
                    <h4 class="font-semibold mb-4">"Empresa"</h4>
                    <ul class="space-y-2 text-sm text-slate-400">
                        <li><a href="#depoimentos" class="hover:text-white transition-colors">"Clientes"</a></li>
                        <li><a href="mailto:contato@fluxo.app" class="hover:text-white transition-colors">"Contato"</a></li>
                    </ul>
                </div>
            </div>
            <div class="max-w-7xl mx-auto pt-8 border-t border-white/5 flex flex-col sm:flex-row items-center justify-between gap-4">
                <span class="text-sm text-slate-500">"© 2025 Fluxo. Todos os direitos reservados."</span>
                <div class="flex items-center gap-4">
                    <SocialLink href="https://instagram.com/fluxo.app" icon=icons::INSTAGRAM label="Instagram" />
                    <SocialLink href="https://linkedin.com/company/fluxo-app" icon=icons::LINKEDIN label="LinkedIn" />
                    <SocialLink href="https://twitter.com/fluxoapp" icon=icons::TWITTER label="Twitter" />
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SocialLink(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" aria-label=label
           class="opacity-60 hover:opacity-100 transition-opacity">
            <Icon name=icon class="w-5 h-5" color="e2e8f0" />
        </a>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-8 h-8 rounded-lg bg-gradient-to-br from-indigo-500 to-violet-500 flex items-center justify-center">
            <Icon name=icons::ZAP class="w-4 h-4" />
        </div>
    }
}

/// Keyframes used by the hero
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .text-gradient {
                background: linear-gradient(90deg, #818cf8, #c084fc);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(24px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up {
                animation: landing-fade-in-up 0.8s ease-out both;
            }
            .landing-delay-200 {
                animation-delay: 0.2s;
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-fade-in-up { animation: none; }
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::{APP_ENTRY, NavigationError};
    use std::sync::{Arc, Mutex};

    fn render<F, V>(f: F) -> String
    where
        F: FnOnce() -> V,
        V: IntoView,
    {
        let owner = Owner::new();
        let html = owner.with(|| f().into_view().to_html());
        owner.cleanup();
        html
    }

    fn noop() -> Callback<()> {
        Callback::new(|_: ()| {})
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, href: &str) -> Result<(), NavigationError> {
            self.requests.lock().unwrap().push(href.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_start_handler_navigates_once_per_click() {
        let owner = Owner::new();
        let nav = RecordingNavigator::default();

        owner.with(|| {
            let on_start = start_handler(nav.clone());

            // "Login", "Começar" and "Criar Conta" all receive this callback
            for clicks in 1..=3 {
                on_start.run(());
                let requests = nav.requests.lock().unwrap();
                assert_eq!(requests.len(), clicks);
                assert_eq!(requests.last().map(String::as_str), Some("index.html"));
            }
        });
        owner.cleanup();

        let requests = nav.requests.lock().unwrap();
        assert!(requests.iter().all(|href| href == APP_ENTRY));
    }

    #[test]
    fn test_navbar_top_mode_markup() {
        let html = render(|| {
            view! { <Navbar mode=Signal::stored(NavbarMode::Top) on_start=noop() /> }
        });
        assert!(html.contains(r#"data-navbar="top""#));
        assert!(html.contains("py-6"));
        assert!(html.contains("bg-transparent"));
        assert!(!html.contains("backdrop-blur-md"));
    }

    #[test]
    fn test_navbar_scrolled_mode_markup() {
        let html = render(|| {
            view! { <Navbar mode=Signal::stored(NavbarMode::Scrolled) on_start=noop() /> }
        });
        assert!(html.contains(r#"data-navbar="scrolled""#));
        assert!(html.contains("py-3"));
        assert!(html.contains("backdrop-blur-md"));
    }

    #[test]
    fn test_navbar_has_login_and_start() {
        let html = render(|| {
            view! { <Navbar mode=Signal::stored(NavbarMode::Top) on_start=noop() /> }
        });
        assert!(html.contains("Login"));
        assert!(html.contains("Começar"));
    }

    #[test]
    fn test_feature_grid_renders_every_feature() {
        let html = render(|| view! { <FeatureGrid /> });
        for feature in FEATURES {
            assert!(html.contains(feature.title), "missing {}", feature.title);
        }
    }

    #[test]
    fn test_pricing_lists_plan_features() {
        let html = render(|| view! { <PricingSection on_start=noop() /> });
        assert!(html.contains("Criar Conta"));
        for feature in PLAN_FEATURES {
            assert!(html.contains(feature));
        }
    }

    #[test]
    fn test_assets_use_absolute_urls() {
        let html = render(|| view! { <SocialProof /> });
        assert!(html.contains("https://i.pravatar.cc/"));
        assert!(html.contains("https://api.iconify.design/lucide/star.svg"));
    }
}

use crate::{
    config::SiteConfig,
    content::{self, heading_words, skill_card_delay_secs},
    error::{PortfolioError, PortfolioResult},
    hover::{reveal_action, HoverReveal},
    logging,
    notes::NoteField,
    scheduler::BrowserScheduler,
    secret::{is_secret_token, secret_url},
    skills::{fallback_for_failed, icon_src, preload_urls, SKILLS},
};
use std::time::Duration;
use web_sys::{window, Event, HtmlImageElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

fn open_detached(url: &str) -> PortfolioResult<()> {
    let win = window().ok_or_else(|| PortfolioError::host("no window"))?;
    win.open_with_url_and_target_and_features(url, "_blank", "noopener")
        .map(|_| ())
        .map_err(|error| PortfolioError::host(format!("window.open failed: {error:?}")))
}

fn open_in_new_context(url: &str) {
    match open_detached(url) {
        Ok(()) => tracing::info!(url, "opened reveal target"),
        Err(error) => tracing::warn!(%error, url, "reveal navigation refused"),
    }
}

fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn preload_images(urls: &[&str]) {
    for url in urls {
        match HtmlImageElement::new() {
            Ok(image) => {
                image.set_decoding("async");
                image.set_src(url);
            }
            Err(error) => {
                tracing::debug!(url, error = ?error, "could not create preload image");
                return;
            }
        }
    }
}

fn swap_to_fallback(event: &Event) {
    let Some(image) = event.target_dyn_into::<HtmlImageElement>() else {
        return;
    };

    let failed = image.src();
    if let Some(fallback) = fallback_for_failed(&failed) {
        tracing::debug!(%failed, fallback, "image failed to load");
        image.set_src(fallback);
    }
}

fn fallback_on_error() -> Callback<Event> {
    Callback::from(|event: Event| swap_to_fallback(&event))
}

struct UseHoverRevealHandle {
    hovering: bool,
    onmouseenter: Callback<MouseEvent>,
    onmouseleave: Callback<MouseEvent>,
}

#[hook]
fn use_hover_reveal(
    label: &'static str,
    delay: Duration,
    target: String,
    on_reveal: Option<Callback<()>>,
) -> UseHoverRevealHandle {
    let rerender = use_force_update();
    let reveal = use_mut_ref(move || {
        let observer = on_reveal.map(|callback| move || callback.emit(()));
        let action = reveal_action(target, open_in_new_context, observer);
        HoverReveal::new(label, BrowserScheduler, delay, action)
    });

    {
        let reveal = reveal.clone();
        use_effect_with((), move |_| {
            move || {
                reveal.borrow_mut().cancel_pending();
            }
        });
    }

    let onmouseenter = {
        let reveal = reveal.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            reveal.borrow_mut().on_enter();
            rerender.force_update();
        })
    };

    let onmouseleave = {
        let reveal = reveal.clone();
        Callback::from(move |_: MouseEvent| {
            reveal.borrow_mut().on_leave();
            rerender.force_update();
        })
    };

    let hovering = reveal.borrow().is_hovering();

    UseHoverRevealHandle {
        hovering,
        onmouseenter,
        onmouseleave,
    }
}

#[function_component(BackgroundNotes)]
fn background_notes() -> Html {
    let field = use_memo((), |_| NoteField::generate(&mut fastrand::Rng::new()));

    html! {
        <div class="background-notes" aria-hidden="true">
            { for field.notes().iter().map(|note| html! {
                <span class="music-note" style={note.style()}>{note.glyph.as_str()}</span>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    children: Html,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! { <h2 class="section-title">{props.children.clone()}</h2> }
}

#[derive(Properties, PartialEq)]
struct AnimatedHeadingProps {
    text: AttrValue,
    reveal_delay: Duration,
    #[prop_or_default]
    on_secret: Option<Callback<()>>,
}

#[function_component(AnimatedHeading)]
fn animated_heading(props: &AnimatedHeadingProps) -> Html {
    let hover = use_hover_reveal(
        "heading",
        props.reveal_delay,
        secret_url(),
        props.on_secret.clone(),
    );
    let words = heading_words(&props.text);
    let heading_style = format!("--reveal-duration: {}ms;", props.reveal_delay.as_millis());

    html! {
        <h1 class="animated-heading" style={heading_style}>
            { for words.iter().map(|word| {
                let secret = is_secret_token(&word.text);
                html! {
                    <span
                        class={classes!(
                            "heading-word",
                            secret.then_some("is-secret"),
                            (secret && hover.hovering).then_some("is-hovering")
                        )}
                        style={word.style()}
                        onmouseenter={secret.then(|| hover.onmouseenter.clone())}
                        onmouseleave={secret.then(|| hover.onmouseleave.clone())}
                    >
                        {word.text.clone()}
                        {if word.trailing_space { "\u{00A0}" } else { "" }}
                        if secret {
                            <span class="reveal-progress" aria-hidden="true" />
                        }
                    </span>
                }
            }) }
        </h1>
    }
}

#[derive(Properties, PartialEq)]
struct PortraitProps {
    reveal_delay: Duration,
}

#[function_component(Portrait)]
fn portrait(props: &PortraitProps) -> Html {
    let hover = use_hover_reveal(
        "portrait",
        props.reveal_delay,
        content::LINKEDIN_URL.to_string(),
        None,
    );

    html! {
        <div
            class={classes!("portrait", hover.hovering.then_some("is-hovering"))}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <div class="portrait-glow" aria-hidden="true" />
            <img
                class="portrait-image"
                src={content::PORTRAIT_SRC}
                alt={content::PORTRAIT_ALT}
                decoding="async"
                loading="eager"
                draggable="false"
            />
        </div>
    }
}

#[function_component(SocialLinks)]
fn social_links() -> Html {
    html! {
        <div class="social-links">
            <a class="social-link" href={content::GITHUB_URL} target="_blank" rel="noreferrer">
                <img
                    src={content::GITHUB_ICON}
                    alt="GitHub"
                    class="social-icon"
                    onerror={fallback_on_error()}
                />
                <span>{"GitHub"}</span>
            </a>
            <a class="social-link" href={content::LINKEDIN_URL} target="_blank" rel="noreferrer">
                <img
                    src={content::LINKEDIN_ICON}
                    alt="LinkedIn"
                    class="social-icon"
                    onerror={fallback_on_error()}
                />
                <span>{"LinkedIn"}</span>
            </a>
            <a class="social-link" href={content::RESUME_PATH} target="_blank" rel="noopener noreferrer">
                <svg class="social-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"
                    />
                </svg>
                <span>{"Resume"}</span>
            </a>
        </div>
    }
}

#[function_component(SkillGrid)]
fn skill_grid() -> Html {
    use_effect_with((), |_| {
        preload_images(&preload_urls());
        || ()
    });

    html! {
        <div class="skill-grid">
            { for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                <div
                    key={*skill}
                    class="skill-card"
                    style={format!("--card-delay: {:.2}s;", skill_card_delay_secs(index))}
                >
                    <img
                        class="skill-icon"
                        src={icon_src(skill)}
                        alt={format!("{skill} logo")}
                        loading="eager"
                        decoding="async"
                        onerror={fallback_on_error()}
                    />
                    <div class="skill-name">{*skill}</div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HomeProps {
    config: SiteConfig,
    on_secret: Callback<()>,
}

#[function_component(Home)]
fn home(props: &HomeProps) -> Html {
    html! {
        <div>
            <section class="intro">
                <div class="intro-grid">
                    <div class="intro-portrait">
                        <Portrait reveal_delay={props.config.portrait_reveal_delay} />
                    </div>

                    <div class="intro-copy">
                        <AnimatedHeading
                            text={content::HEADING}
                            reveal_delay={props.config.heading_reveal_delay}
                            on_secret={Some(props.on_secret.clone())}
                        />
                        <p class="bio" style="--enter-delay: 0.5s;">{content::BIO_INTRO}</p>
                        <p class="bio" style="--enter-delay: 0.7s;">
                            {content::BIO_MUSIC_LEAD}
                            <a class="accent-link" href={content::SPOTIFY_URL} target="_blank" rel="noreferrer">{"Spotify"}</a>
                            {"."}
                        </p>
                        <p class="bio" style="--enter-delay: 0.9s;">
                            {content::BIO_HOBBIES_LEAD}
                            <a class="accent-link" href={content::PUZZLE_URL} target="_blank" rel="noreferrer">{"like this one"}</a>
                            {"."}
                        </p>
                        <p class="bio" style="--enter-delay: 1.05s;">
                            {"Email: "}
                            <a href={format!("mailto:{}", content::EMAIL)}>{content::EMAIL}</a>
                        </p>
                        <SocialLinks />
                    </div>
                </div>
            </section>

            <section id="skills" class="skills">
                <SectionTitle>{"Skills & Interests"}</SectionTitle>
                <SkillGrid />
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let secret_found = use_state_eq(|| false);

    use_effect_with((), |_| {
        tracing::info!("portfolio mounted");
        || ()
    });

    let on_secret = {
        let secret_found = secret_found.clone();
        Callback::from(move |_: ()| {
            tracing::info!("heading secret found");
            secret_found.set(true);
        })
    };

    let on_scroll_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <div class="page">
            <BackgroundNotes />

            <header class="site-header">
                <div class="site-header-inner">
                    <button class="brand" type="button" onclick={on_scroll_top.clone()}>
                        {content::OWNER_NAME}
                    </button>
                    <nav class="site-nav">
                        <button type="button" onclick={on_scroll_top}>{"Home"}</button>
                        <a href={content::RESUME_PATH} target="_blank" rel="noopener noreferrer">{"Resume"}</a>
                    </nav>
                </div>
            </header>

            <Home config={props.config} on_secret={on_secret} />

            <footer class="site-footer">{content::footer_message(*secret_found)}</footer>
        </div>
    }
}

pub fn run() {
    let config = SiteConfig::from_build_env();
    logging::init(config.log_level);

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { config },
    )
    .render();
}

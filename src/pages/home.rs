use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::post_modal::PostModal;
use crate::dom::{self, BodyOverflow, ScrollLock, ScrollListener};
use crate::state::{self, Section, UiAction, UiState, POSTS};

#[function_component(Home)]
pub fn home() -> Html {
    let ui = use_reducer(UiState::default);
    let video_ref = use_node_ref();
    let scroll_lock = use_mut_ref(|| ScrollLock::new(BodyOverflow));

    // Track scroll position for the whole page view. The listener handle is
    // dropped on unmount, which removes the DOM listener.
    {
        let dispatcher = ui.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move || {
                    let Some(metrics) = dom::scroll_metrics() else {
                        return;
                    };
                    let bounds = dom::section_bounds();
                    dispatcher.dispatch(UiAction::Scrolled {
                        progress: state::scroll_progress(
                            metrics.offset,
                            metrics.viewport,
                            metrics.full_height,
                        ),
                        active: state::active_section(metrics.offset, metrics.viewport, &bounds),
                    });
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Kick off the hero video. Autoplay rejection is diagnostic only.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    match video.play() {
                        Ok(promise) => spawn_local(async move {
                            if let Err(err) = JsFuture::from(promise).await {
                                warn!("video autoplay rejected: {:?}", err);
                            }
                        }),
                        Err(err) => warn!("video playback failed to start: {:?}", err),
                    }
                }
                || ()
            },
            (),
        );
    }

    // Body scroll follows the modal: locked while a post is open, engaged
    // only on closed -> open edges.
    {
        let modal_open = ui.selected_post.is_some();
        let scroll_lock = scroll_lock.clone();
        use_effect(move || {
            scroll_lock.borrow_mut().sync(modal_open);
            || ()
        });
    }

    let navigate = Callback::from(|section: Section| dom::scroll_to_section(section));

    let toggle_menu = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| ui.dispatch(UiAction::ToggleMenu))
    };

    let menu_select = {
        let ui = ui.clone();
        Callback::from(move |section: Section| {
            ui.dispatch(state::menu_select(section, dom::scroll_to_section));
        })
    };

    let close_post = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| ui.dispatch(UiAction::ClosePost))
    };

    let explore = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Section::Posts))
    };

    let post_card = |post: &'static state::Post| {
        let ui = ui.clone();
        let onclick = Callback::from(move |_: MouseEvent| ui.dispatch(UiAction::OpenPost(post)));
        html! {
            <div key={post.id} class="post-card" {onclick}>
                <img src={post.thumbnail} alt={post.title} class="post-thumbnail" />
                <div class="post-body">
                    <h3>{post.title}</h3>
                    <p>{post.excerpt}</p>
                </div>
            </div>
        }
    };

    html! {
        <div class="site">
            <Navbar
                active={ui.active_section}
                menu_open={ui.menu_open}
                progress={ui.scroll_progress}
                on_navigate={navigate}
                on_toggle_menu={toggle_menu}
                on_menu_select={menu_select}
            />

            <main class="site-main">
                <section id="home" class="hero">
                    <video
                        ref={video_ref}
                        class="hero-video"
                        autoplay=true
                        loop=true
                        muted=true
                        playsinline=true
                        preload="auto"
                    >
                        <source src="/bg.mp4" type="video/mp4" />
                        {"Your browser does not support the video tag."}
                    </video>
                    <div class="hero-dim"></div>
                    <div class="hero-content">
                        <h1>{"Welcome to Sensorium"}</h1>
                        <p>{"Immerse yourself in a world of sensory experiences"}</p>
                        <button class="hero-cta" onclick={explore}>{"Explore Now"}</button>
                    </div>
                </section>

                <section id="posts" class="posts-section">
                    <h2>{"Latest Posts"}</h2>
                    <div class="posts-grid">
                        { for POSTS.iter().map(post_card) }
                    </div>
                </section>

                <section id="about" class="about-section">
                    <h2>{"About Sensorium"}</h2>
                    <p>
                        {"Sensorium is a cutting-edge multimedia experience that pushes \
                          the boundaries of sensory perception. Our mission is to create \
                          immersive environments that engage all your senses, transporting \
                          you to new realms of imagination and wonder."}
                    </p>
                    <button class="about-cta">{"Learn More"}</button>
                </section>

                <section id="contact" class="contact-section">
                    <h2>{"Contact Us"}</h2>
                    // Submission is handled by an external form service; no
                    // handler is wired here.
                    <form class="contact-form">
                        <div class="form-field">
                            <label for="name">{"Name"}</label>
                            <input type="text" id="name" />
                        </div>
                        <div class="form-field">
                            <label for="email">{"Email"}</label>
                            <input type="email" id="email" />
                        </div>
                        <div class="form-field">
                            <label for="message">{"Message"}</label>
                            <textarea id="message" rows="4"></textarea>
                        </div>
                        <button class="submit-button">{"Send Message"}</button>
                    </form>
                </section>
            </main>

            <footer class="site-footer">
                <div class="footer-row">
                    <div class="footer-brand">{"Sensorium"}</div>
                    <div class="footer-social">
                        <a href="#" aria-label="Facebook">{"Facebook"}</a>
                        <a href="#" aria-label="Instagram">{"Instagram"}</a>
                        <a href="#" aria-label="Twitter">{"Twitter"}</a>
                    </div>
                </div>
                <div class="footer-note">{"© 2024 Sensorium. All rights reserved."}</div>
            </footer>

            {
                if let Some(post) = ui.selected_post {
                    html! { <PostModal {post} on_close={close_post} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site {
                    min-height: 100vh;
                    background: #f3f4f6;
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI",
                        Roboto, Helvetica, Arial, sans-serif;
                }
                .site-main {
                    padding-top: 4rem;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-video {
                    position: absolute;
                    z-index: 0;
                    min-width: 100%;
                    min-height: 100%;
                    object-fit: cover;
                }
                .hero-dim {
                    position: absolute;
                    inset: 0;
                    background: #000000;
                    opacity: 0.5;
                    z-index: 0;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    color: #ffffff;
                }
                .hero-content h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.5);
                }
                .hero-content p {
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                    text-shadow: 0 1px 4px rgba(0, 0, 0, 0.5);
                }
                .hero-cta {
                    background: #ffffff;
                    color: #3b82f6;
                    border: none;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.15s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.05);
                }
                .posts-section {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .posts-section h2,
                .about-section h2,
                .contact-section h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                    text-align: center;
                }
                .posts-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .post-card {
                    background: #f3f4f6;
                    border-radius: 8px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                    cursor: pointer;
                    transition: transform 0.15s ease;
                }
                .post-card:hover {
                    transform: scale(1.02);
                }
                .post-thumbnail {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                }
                .post-body {
                    padding: 1.5rem;
                }
                .post-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .post-body p {
                    color: #4b5563;
                }
                .about-section {
                    padding: 5rem 1rem;
                    background: #f3f4f6;
                    text-align: center;
                }
                .about-section p {
                    max-width: 48rem;
                    margin: 0 auto 1.5rem;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .about-cta {
                    background: #3b82f6;
                    color: #ffffff;
                    border: none;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .contact-section {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .contact-form {
                    max-width: 28rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .form-field label {
                    display: block;
                    margin-bottom: 0.25rem;
                    font-weight: 500;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font: inherit;
                }
                .form-field input:focus,
                .form-field textarea:focus {
                    outline: 2px solid #3b82f6;
                    border-color: transparent;
                }
                .submit-button {
                    width: 100%;
                    background: #3b82f6;
                    color: #ffffff;
                    border: none;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .site-footer {
                    background: #1f2937;
                    color: #ffffff;
                    padding: 2rem 1rem;
                }
                .footer-row {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .footer-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                }
                .footer-social a {
                    color: #ffffff;
                    text-decoration: none;
                }
                .footer-social a:hover {
                    text-decoration: underline;
                }
                .footer-note {
                    margin-top: 1rem;
                    text-align: center;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .posts-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .footer-row {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                }
                "#}
            </style>
        </div>
    }
}

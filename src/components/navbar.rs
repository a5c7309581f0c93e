use yew::prelude::*;

use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Section,
    pub menu_open: bool,
    /// Scroll progress percentage, 0 to 100.
    pub progress: f64,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<MouseEvent>,
    /// Section picked from the mobile overlay (navigates and closes the menu).
    pub on_menu_select: Callback<Section>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Home))
    };

    let desktop_link = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        let class = if props.active == section {
            "nav-link active"
        } else {
            "nav-link"
        };
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(section));
        html! {
            <span key={section.id()} class={class} {onclick}>
                {section.label()}
            </span>
        }
    };

    let overlay_link = |section: Section| {
        let on_menu_select = props.on_menu_select.clone();
        let class = if props.active == section {
            "overlay-link active"
        } else {
            "overlay-link"
        };
        let onclick = Callback::from(move |_: MouseEvent| on_menu_select.emit(section));
        html! {
            <span key={section.id()} class={class} {onclick}>
                {section.label()}
            </span>
        }
    };

    html! {
        <>
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo" onclick={go_home}>{"Sensorium"}</div>
                <div class="nav-links">
                    { for Section::ALL.iter().map(|s| desktop_link(*s)) }
                </div>
                <button class="burger-menu" onclick={props.on_toggle_menu.clone()}>
                    { if props.menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style={format!("width: {}%;", props.progress)}
                ></div>
            </div>
        </nav>
        {
            if props.menu_open {
                html! {
                    <div class="menu-backdrop">
                        <div class="menu-panel">
                            <button class="menu-close" onclick={props.on_toggle_menu.clone()}>
                                {"✕"}
                            </button>
                            <div class="menu-links">
                                { for Section::ALL.iter().map(|s| overlay_link(*s)) }
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }
        }
        <style>
            {r#"
            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                background: #ffffff;
                box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
                z-index: 50;
            }
            .nav-content {
                max-width: 1100px;
                margin: 0 auto;
                padding: 1rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
            }
            .nav-logo {
                font-size: 1.5rem;
                font-weight: 700;
                cursor: pointer;
            }
            .nav-links {
                display: flex;
                gap: 1.5rem;
            }
            .nav-link {
                color: #4b5563;
                cursor: pointer;
                transition: color 0.2s ease;
            }
            .nav-link.active {
                color: #2563eb;
            }
            .burger-menu {
                display: none;
                background: none;
                border: none;
                font-size: 1.4rem;
                cursor: pointer;
            }
            .progress-track {
                width: 100%;
                height: 4px;
                background: #e5e7eb;
            }
            .progress-fill {
                height: 100%;
                background: #111111;
                transition: width 0.2s ease-out;
            }
            .menu-backdrop {
                position: fixed;
                inset: 0;
                background: rgba(31, 41, 55, 0.75);
                z-index: 40;
            }
            .menu-panel {
                position: fixed;
                top: 0;
                bottom: 0;
                right: 0;
                width: 100%;
                max-width: 320px;
                background: #ffffff;
                box-shadow: -4px 0 16px rgba(0, 0, 0, 0.2);
                padding: 1rem;
                z-index: 50;
            }
            .menu-close {
                display: block;
                margin-left: auto;
                background: none;
                border: none;
                font-size: 1.4rem;
                cursor: pointer;
            }
            .menu-links {
                margin-top: 2rem;
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }
            .overlay-link {
                font-size: 1.2rem;
                color: #4b5563;
                cursor: pointer;
            }
            .overlay-link.active {
                color: #2563eb;
            }
            @media (max-width: 768px) {
                .nav-links { display: none; }
                .burger-menu { display: block; }
            }
            "#}
        </style>
        </>
    }
}

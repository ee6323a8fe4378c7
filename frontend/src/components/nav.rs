use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::header::{HeaderScroll, HeaderStyle};
use crate::behavior::navigation::{hamburger_bar_style, MenuAction, MenuState};
use crate::config;
use crate::controller::PageController;
use crate::debounce::Debouncer;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#services", "Services"),
    ("#features", "Why us"),
    ("#stats", "Results"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub controller: PageController,
    pub menu: UseReducerHandle<MenuState>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps { controller, menu } = props;
    let header_style = use_state_eq(HeaderStyle::default);
    let open = menu.is_open();

    // Header look follows every scroll event, no throttling.
    {
        let header_style = header_style.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let window = controller.window().clone();
                let mut tracker = HeaderScroll::default();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = controller.window().scroll_y().unwrap_or_default();
                    header_style.set(tracker.update(scroll_top));
                }) as Box<dyn FnMut()>);

                let _ = window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

                move || {
                    let _ = window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            },
            (),
        );
    }

    // Growing past the breakpoint closes the menu, once resizing settles.
    {
        let menu = menu.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let window = controller.window().clone();
                let debouncer = Debouncer::new(config::RESIZE_DEBOUNCE_MS);

                let resize_callback = {
                    let debouncer = debouncer.clone();
                    Closure::wrap(Box::new(move || {
                        let menu = menu.clone();
                        let controller = controller.clone();
                        debouncer.call(move || {
                            menu.dispatch(MenuAction::Resized(controller.viewport_width()));
                        });
                    }) as Box<dyn FnMut()>)
                };

                let _ = window
                    .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());

                move || {
                    debouncer.cancel();
                    let _ = window
                        .remove_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
                }
            },
            (),
        );
    }

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            match e.key().as_str() {
                "Escape" => menu.dispatch(MenuAction::Close),
                "Enter" => {
                    let on_toggle = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .map_or(false, |el| el.class_list().contains("nav-toggle"));
                    if on_toggle {
                        menu.dispatch(MenuAction::Toggle);
                    }
                }
                _ => {}
            }
        });
    }

    // Body scroll is locked while the menu covers the page.
    {
        let controller = controller.clone();
        let menu_state = **menu;
        use_effect_with_deps(
            move |_| {
                controller.set_body_overflow(menu_state.body_overflow());
                || ()
            },
            open,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <>
            <header class="header" style={header_style.css()}>
                <nav class="nav">
                    <a href="#home" class="nav-logo">{"ROADSAFE"}</a>
                    <ul class="nav-menu" id="navMenu">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href} class="nav-link">{*label}</a></li>
                        }) }
                    </ul>
                    <div
                        class="nav-toggle"
                        id="navToggle"
                        role="button"
                        tabindex="0"
                        aria-label="Toggle navigation"
                        aria-expanded={open.to_string()}
                        onclick={toggle_menu}
                    >
                        { for (0..3).map(|bar| html! {
                            <span class="hamburger" style={hamburger_bar_style(bar, open)}></span>
                        }) }
                    </div>
                </nav>
            </header>

            <div id="mobileOverlay" class={menu.panel_class("mobile-overlay")} onclick={close_menu.clone()}></div>
            <aside id="mobileMenu" class={menu.panel_class("mobile-menu")}>
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} class="mobile-menu-link" onclick={close_menu.clone()}>{*label}</a>
                }) }
            </aside>

            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    transition: transform 0.3s ease, background-color 0.3s ease, box-shadow 0.3s ease;
                }
                .nav {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }
                .nav-menu {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                }
                .nav-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    cursor: pointer;
                }
                .hamburger {
                    width: 24px;
                    height: 2px;
                    background: #1f2937;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .mobile-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                    z-index: 998;
                }
                .mobile-menu {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100vh;
                    width: 280px;
                    display: flex;
                    flex-direction: column;
                    padding: 5rem 1.5rem;
                    background: #ffffff;
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                    z-index: 999;
                }
                .mobile-overlay.active {
                    opacity: 1;
                    pointer-events: auto;
                }
                .mobile-menu.active {
                    transform: translateX(0);
                }
                @media (max-width: 768px) {
                    .nav-menu { display: none; }
                    .nav-toggle { display: flex; }
                }
                "#}
            </style>
        </>
    }
}

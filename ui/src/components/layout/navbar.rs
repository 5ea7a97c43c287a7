//! Navigation bar with auth-aware menus
//!
//! Entry to the booking flow is gated: unauthenticated visitors get the
//! access modal instead of navigating. The profile dropdown opens on hover
//! and closes after a grace delay that re-entering cancels; logout goes
//! through a confirmation dialog and lands on the landing page so the
//! one-time notice can surface there.

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::app::routes;
use crate::components::modal::Modal;
use crate::console_warn;
use crate::services::auth::use_auth;
use crate::utils::{browser, DelayedAction};

/// Grace period before a hover-leave actually closes the dropdown.
const DROPDOWN_CLOSE_DELAY_MS: u32 = 300;
/// Scroll offset past which the navbar switches to its compact styling.
const SCROLL_THRESHOLD_PX: f64 = 10.0;

#[component]
pub fn Navbar() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut is_scrolled = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);
    let mut access_modal_open = use_signal(|| false);
    let mut logout_modal_open = use_signal(|| false);
    let mut dropdown_open = use_signal(|| false);
    let mut close_timer = use_signal(DelayedAction::default);

    // Visual-only scrolled flag. The navbar lives as long as the app, so
    // the forgotten closure is a one-time leak.
    use_effect(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let listener = Closure::<dyn FnMut()>::new(move || {
            is_scrolled.set(browser::scroll_y() > SCROLL_THRESHOLD_PX);
        });
        if window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .is_err()
        {
            console_warn!("failed to attach scroll listener");
        }
        listener.forget();
    });

    let handle_booking_click = move |_| {
        mobile_open.set(false);
        if auth.is_authenticated() {
            nav.push(routes::PEMESANAN);
        } else {
            access_modal_open.set(true);
        }
    };

    let open_dropdown = move |_| {
        close_timer.with_mut(|t| t.cancel());
        dropdown_open.set(true);
    };

    let close_dropdown_later = move |_| {
        close_timer.with_mut(|t| {
            t.schedule(DROPDOWN_CLOSE_DELAY_MS, move || dropdown_open.set(false))
        });
    };

    let handle_logout_click = move |_| {
        close_timer.with_mut(|t| t.cancel());
        dropdown_open.set(false);
        mobile_open.set(false);
        logout_modal_open.set(true);
    };

    // Confirm tears the session down and lands on /beranda; cancel leaves
    // session and dropdown untouched.
    let confirm_logout = move |_| {
        logout_modal_open.set(false);
        auth.logout();
        nav.push(routes::BERANDA);
    };

    let link_class = |path: &str| {
        if browser::pathname().starts_with(path) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    // Shared between the desktop bar and the mobile panel.
    let auth_controls = move || -> Element {
        match auth.user() {
            Some(user) => rsx! {
                div {
                    class: "profile-menu",
                    onmouseenter: open_dropdown,
                    onmouseleave: close_dropdown_later,
                    button {
                        r#type: "button",
                        class: "profile-button",
                        "{user.first_name()}"
                    }
                    if dropdown_open() {
                        div {
                            class: "profile-dropdown",
                            onmouseenter: open_dropdown,
                            onmouseleave: close_dropdown_later,
                            Link {
                                to: user.role.destination(),
                                class: "dropdown-item",
                                onclick: move |_| {
                                    dropdown_open.set(false);
                                    mobile_open.set(false);
                                },
                                "{user.role.menu_label()}"
                            }
                            button {
                                r#type: "button",
                                class: "dropdown-item logout",
                                onclick: handle_logout_click,
                                "Logout"
                            }
                        }
                    }
                }
            },
            None => rsx! {
                Link {
                    to: routes::LOGIN,
                    class: "login-button",
                    onclick: move |_| mobile_open.set(false),
                    "Login Sekarang"
                }
            },
        }
    };

    rsx! {
        nav {
            class: if is_scrolled() { "navbar scrolled" } else { "navbar" },
            div {
                class: "navbar-inner",

                Link {
                    to: routes::BERANDA,
                    class: "navbar-brand",
                    img {
                        class: "brand-logo",
                        src: "/images/logozulzi.png",
                        alt: "Zulzi Trans Logo",
                    }
                    div {
                        class: "brand-text",
                        span { class: "brand-title", "ZULZI TRANS" }
                        span { class: "brand-tagline", "CEPAT, AMAN, TERPERCAYA" }
                    }
                }

                div {
                    class: "navbar-links",
                    Link { to: routes::BERANDA, class: link_class(routes::BERANDA), "Beranda" }
                    button {
                        r#type: "button",
                        class: link_class(routes::PEMESANAN),
                        onclick: handle_booking_click,
                        "Pemesanan"
                    }
                    Link { to: routes::ABOUT, class: link_class(routes::ABOUT), "Tentang Kami" }
                }

                div {
                    class: "navbar-auth",
                    {auth_controls()}
                }

                button {
                    r#type: "button",
                    class: "mobile-toggle",
                    onclick: move |_| mobile_open.set(!mobile_open()),
                    if mobile_open() { "✕" } else { "☰" }
                }
            }

            if mobile_open() {
                div {
                    class: "mobile-panel",
                    Link {
                        to: routes::BERANDA,
                        class: "mobile-link",
                        onclick: move |_| mobile_open.set(false),
                        "Beranda"
                    }
                    button {
                        r#type: "button",
                        class: "mobile-link",
                        onclick: handle_booking_click,
                        "Pemesanan"
                    }
                    Link {
                        to: routes::ABOUT,
                        class: "mobile-link",
                        onclick: move |_| mobile_open.set(false),
                        "Tentang Kami"
                    }
                    div {
                        class: "mobile-auth",
                        {auth_controls()}
                    }
                }
            }
        }

        if access_modal_open() {
            AccessModal {
                on_close: move |_| access_modal_open.set(false),
                on_login: move |_| {
                    access_modal_open.set(false);
                    nav.push(routes::login_with_return(routes::PEMESANAN));
                },
            }
        }

        if logout_modal_open() {
            ConfirmLogoutModal {
                on_close: move |_| logout_modal_open.set(false),
                on_confirm: confirm_logout,
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct AccessModalProps {
    on_close: EventHandler<()>,
    on_login: EventHandler<()>,
}

/// Access-required dialog shown when an unauthenticated visitor tries to
/// open the booking flow.
#[component]
fn AccessModal(props: AccessModalProps) -> Element {
    let on_close = props.on_close;
    let on_login = props.on_login;
    rsx! {
        Modal {
            title: "Akses Dibatasi",
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body",
                p { class: "modal-lead", "Login Diperlukan untuk Pemesanan" }
                p {
                    class: "modal-detail",
                    "Anda harus masuk ke akun Anda terlebih dahulu untuk mengakses \
                     halaman Pemesanan dan melanjutkan transaksi."
                }
            }
            div {
                class: "modal-actions",
                button {
                    r#type: "button",
                    class: "modal-button secondary",
                    onclick: move |_| on_close.call(()),
                    "Tutup"
                }
                button {
                    r#type: "button",
                    class: "modal-button primary",
                    onclick: move |_| on_login.call(()),
                    "Login Sekarang"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct ConfirmLogoutModalProps {
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
}

#[component]
fn ConfirmLogoutModal(props: ConfirmLogoutModalProps) -> Element {
    let on_close = props.on_close;
    let on_confirm = props.on_confirm;
    rsx! {
        Modal {
            title: "Konfirmasi Logout",
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body",
                p { class: "modal-lead", "Apakah Anda yakin ingin keluar?" }
                p {
                    class: "modal-detail",
                    "Sesi Anda akan diakhiri dan Anda harus login kembali."
                }
            }
            div {
                class: "modal-actions",
                button {
                    r#type: "button",
                    class: "modal-button secondary",
                    onclick: move |_| on_close.call(()),
                    "Batal"
                }
                button {
                    r#type: "button",
                    class: "modal-button danger",
                    onclick: move |_| on_confirm.call(()),
                    "Ya, Logout"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use ui::components::forms::{LoginForm, RegisterForm};
use ui::components::Navbar;
use ui::services::auth::{self, storage, use_auth};
use ui::BookingPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    auth::provide_auth();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[redirect("/", || Route::Beranda {})]
    #[route("/beranda")]
    Beranda {},
    #[route("/pemesanan")]
    Pemesanan {},
    #[route("/pemesanan/:id/status")]
    PemesananStatus { id: u64 },
    #[route("/login?:from")]
    Login { from: String },
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/admin")]
    Admin {},
    #[route("/about")]
    About {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Beranda() -> Element {
    // One-shot notice left behind by logout; reading consumes it.
    let notice = use_hook(storage::take_auth_alert);

    rsx! {
        Navbar {}
        main {
            class: "landing-page",
            if let Some(message) = notice {
                div { class: "form-banner form-banner-success", "{message}" }
            }
            section {
                class: "hero",
                h1 { "Layanan Transportasi & Angkutan" }
                p { "Rental mobil, angkut barang, dan angkut sampah untuk wilayah Jakarta dan sekitarnya." }
                Link { class: "hero-cta", to: Route::Pemesanan {}, "Pesan Sekarang" }
            }
        }
    }
}

#[component]
fn Pemesanan() -> Element {
    rsx! {
        Navbar {}
        BookingPage {}
    }
}

#[component]
fn PemesananStatus(id: u64) -> Element {
    rsx! {
        Navbar {}
        main {
            class: "order-status-page",
            section {
                class: "order-status-card",
                h2 { "Pesanan #{id} Berhasil Dibuat" }
                p { "Pesanan Anda sedang menunggu konfirmasi admin. Status terbaru akan muncul di halaman profil Anda." }
                Link { class: "hero-cta", to: Route::Profile {}, "Lihat Profil" }
            }
        }
    }
}

#[component]
fn Login(from: String) -> Element {
    rsx! {
        Navbar {}
        main {
            class: "account-page",
            section {
                class: "account-card",
                h2 { "Login" }
                LoginForm { from }
            }
        }
    }
}

#[component]
fn Register() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "account-page",
            section {
                class: "account-card",
                h2 { "Daftar Akun Baru" }
                RegisterForm {}
            }
        }
    }
}

#[component]
fn Profile() -> Element {
    let auth = use_auth();

    rsx! {
        Navbar {}
        main {
            class: "account-page",
            match auth.user() {
                Some(user) => rsx! {
                    section {
                        class: "account-card",
                        h2 { "Halo, {user.first_name()}" }
                        p { "Riwayat pesanan dan status terbaru Anda tampil di sini." }
                    }
                },
                None => rsx! {
                    section {
                        class: "account-card",
                        h2 { "Anda belum login" }
                        Link { class: "hero-cta", to: Route::Login { from: String::new() }, "Login Sekarang" }
                    }
                },
            }
        }
    }
}

#[component]
fn Admin() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "account-page",
            section {
                class: "account-card",
                h2 { "Dashboard Admin" }
                p { "Kelola pesanan masuk dari halaman ini." }
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "landing-page",
            section {
                class: "hero",
                h1 { "Tentang Kami" }
                p { "Penyedia layanan rental kendaraan dan jasa angkut yang melayani pelanggan sejak 2015." }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Navbar {}
        main {
            class: "landing-page",
            section {
                class: "hero",
                h1 { "Halaman tidak ditemukan" }
                p { "Alamat /{path} tidak tersedia." }
                Link { class: "hero-cta", to: Route::Beranda {}, "Kembali ke Beranda" }
            }
        }
    }
}

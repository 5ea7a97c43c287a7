//! Navigation targets
//!
//! Path constants shared by the navbar, forms, and role mapping. The typed
//! route enum lives in the `web` crate; components navigate by path so the
//! library stays decoupled from the router table.

pub const BERANDA: &str = "/beranda";
pub const PEMESANAN: &str = "/pemesanan";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const PROFILE: &str = "/profile";
pub const ADMIN: &str = "/admin";
pub const ABOUT: &str = "/about";

/// Status view of a created order.
pub fn order_status(id_pemesanan: u64) -> String {
    format!("/pemesanan/{id_pemesanan}/status")
}

/// Login entry carrying the destination to return to afterwards.
pub fn login_with_return(from: &str) -> String {
    format!("{LOGIN}?from={from}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_path_embeds_the_id() {
        assert_eq!(order_status(17), "/pemesanan/17/status");
    }

    #[test]
    fn login_return_hint_carries_the_booking_path() {
        assert_eq!(login_with_return(PEMESANAN), "/login?from=/pemesanan");
    }
}

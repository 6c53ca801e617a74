// Site-wide constants. There is no runtime configuration; everything the page
// needs is fixed at build time.

pub const BRAND_NAME: &str = "OXEN";

/// WhatsApp number receiving quote requests, international format without `+`.
pub const WHATSAPP_NUMBER: &str = "573246802926";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Delay before the contact dialog switches to its success panel.
pub const SUBMIT_FEEDBACK_DELAY_MS: u32 = 500;
/// Delay before the contact dialog closes itself after a submit.
pub const CONTACT_CLOSE_DELAY_MS: u32 = 1500;

/// Vertical scroll (px) after which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { href: "#modulos", label: "Módulos" },
    NavLink { href: "#flujo", label: "Flujo" },
    NavLink { href: "#seguridad", label: "Permisos" },
    NavLink { href: "#reportes", label: "Reportes" },
    NavLink { href: "#cotizacion", label: "Precios" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_page_anchors() {
        for link in NAV_LINKS.iter() {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn whatsapp_number_is_digits_only() {
        assert!(WHATSAPP_NUMBER.chars().all(|c| c.is_ascii_digit()));
    }
}

use crate::config::{WHATSAPP_BASE_URL, WHATSAPP_NUMBER};
use crate::features::contact::{ContactError, ContactRequest};

/// Deep link that opens a chat with the sales number and `text` prefilled.
pub fn whatsapp_url(text: &str) -> String {
    format!("{}/{}?text={}", WHATSAPP_BASE_URL, WHATSAPP_NUMBER, urlencoding::encode(text))
}

// Opens the conversation in a new tab. Browsers return no window handle when a
// popup blocker intervenes.
pub fn open_whatsapp(request: &ContactRequest) -> Result<(), ContactError> {
    let url = whatsapp_url(&request.whatsapp_message());
    let window = web_sys::window().ok_or(ContactError::NoWindow)?;
    match window.open_with_url_and_target(&url, "_blank")? {
        Some(_) => {
            web_sys::console::log_1(&format!("Opened WhatsApp chat for {}", request.company).into());
            Ok(())
        }
        None => Err(ContactError::PopupBlocked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_sales_number() {
        assert_eq!(whatsapp_url("Hola"), "https://wa.me/573246802926?text=Hola");
    }

    #[test]
    fn text_is_percent_encoded() {
        let url = whatsapp_url("Hola, soy Ana.\n*Mis datos:* 16+ ¿?");
        let query = url.split_once("?text=").map(|(_, q)| q).unwrap();
        assert_eq!(
            query,
            "Hola%2C%20soy%20Ana.%0A%2AMis%20datos%3A%2A%2016%2B%20%C2%BF%3F"
        );
        assert_eq!(urlencoding::decode(query).unwrap(), "Hola, soy Ana.\n*Mis datos:* 16+ ¿?");
    }
}

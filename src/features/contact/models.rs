use std::fmt;
use std::str::FromStr;

use crate::config::BRAND_NAME;
use super::error::ContactError;

const NO_COMMENTS: &str = "No hay comentarios adicionales";

/// Estimated number of users, as offered by the contact form select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSize {
    UpTo5,
    UpTo10,
    UpTo15,
    SixteenOrMore,
}

impl TeamSize {
    pub fn all() -> [TeamSize; 4] {
        [TeamSize::UpTo5, TeamSize::UpTo10, TeamSize::UpTo15, TeamSize::SixteenOrMore]
    }

    /// Value submitted by the select and quoted in the message.
    pub fn value(self) -> &'static str {
        match self {
            TeamSize::UpTo5 => "1-5",
            TeamSize::UpTo10 => "6-10",
            TeamSize::UpTo15 => "11-15",
            TeamSize::SixteenOrMore => "16+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamSize::UpTo5 => "1 a 5",
            TeamSize::UpTo10 => "6 a 10",
            TeamSize::UpTo15 => "11 a 15",
            TeamSize::SixteenOrMore => "16 o más",
        }
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for TeamSize {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamSize::all()
            .into_iter()
            .find(|size| size.value() == s)
            .ok_or(ContactError::MissingTeamSize)
    }
}

/// Raw form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub team_size: Option<TeamSize>,
    pub message: String,
}

/// A form that passed validation; fields are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub company: String,
    pub team_size: TeamSize,
    pub message: Option<String>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let company = self.company.trim();
        if company.is_empty() {
            return Err(ContactError::MissingCompany);
        }
        let team_size = self.team_size.ok_or(ContactError::MissingTeamSize)?;
        let message = Some(self.message.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(ContactRequest {
            name: name.to_string(),
            company: company.to_string(),
            team_size,
            message,
        })
    }
}

impl ContactRequest {
    /// Text prefilled in the WhatsApp conversation.
    pub fn whatsapp_message(&self) -> String {
        format!(
            "Hola, soy {name} de {company}.\n\
             \n\
             Me interesa conocer más sobre {brand} para nuestra operación textil.\n\
             \n\
             *Mis datos:*\n\
             - Número de usuarios estimado: {size}\n\
             \n\
             *Comentarios:* {comments}\n\
             \n\
             ¿Podrías ayudarme con una cotización personalizada?",
            name = self.name,
            company = self.company,
            brand = BRAND_NAME,
            size = self.team_size,
            comments = self.message.as_deref().unwrap_or(NO_COMMENTS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "  Ana Gómez ".to_string(),
            company: "Textiles Andinos".to_string(),
            team_size: Some(TeamSize::UpTo10),
            message: String::new(),
        }
    }

    #[test]
    fn validate_trims_and_drops_blank_comments() {
        let request = filled_form().validate().unwrap();
        assert_eq!(
            request,
            ContactRequest {
                name: "Ana Gómez".to_string(),
                company: "Textiles Andinos".to_string(),
                team_size: TeamSize::UpTo10,
                message: None,
            }
        );
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        form.team_size = None;
        assert_eq!(form.validate(), Err(ContactError::MissingName));

        let mut form = filled_form();
        form.company.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingCompany));

        let mut form = filled_form();
        form.team_size = None;
        assert_eq!(form.validate(), Err(ContactError::MissingTeamSize));
    }

    #[test]
    fn message_without_comments() {
        let request = filled_form().validate().unwrap();
        let expected = "Hola, soy Ana Gómez de Textiles Andinos.\n\
            \n\
            Me interesa conocer más sobre OXEN para nuestra operación textil.\n\
            \n\
            *Mis datos:*\n\
            - Número de usuarios estimado: 6-10\n\
            \n\
            *Comentarios:* No hay comentarios adicionales\n\
            \n\
            ¿Podrías ayudarme con una cotización personalizada?";
        assert_eq!(request.whatsapp_message(), expected);
    }

    #[test]
    fn message_quotes_comments() {
        let mut form = filled_form();
        form.message = " Necesitamos control de talleres ".to_string();
        let text = form.validate().unwrap().whatsapp_message();
        assert!(text.contains("*Comentarios:* Necesitamos control de talleres\n"));
    }

    #[test]
    fn team_size_values_round_trip_through_select() {
        for size in TeamSize::all() {
            assert_eq!(size.value().parse::<TeamSize>(), Ok(size));
        }
        assert_eq!("".parse::<TeamSize>(), Err(ContactError::MissingTeamSize));
    }
}

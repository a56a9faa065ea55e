use crate::domain::category::TicketCategory;

/// Custom id of the category select menu.
pub const TICKET_MENU_ID: &str = "ticket_select";

const TITLE: &str = "🎫 Welcome to Nylex Tech Support Center";
const PLACEHOLDER: &str = "Select a ticket category...";
const DESCRIPTION: &str = "Welcome to Nylex Tech! Our team is here to help with any issues \
related to our products and services. Whether you are experiencing problems with a purchased \
system, looking for a custom request, need assistance with payments, or want to report a bug, \
we are committed to providing you the best support as quickly as possible.\n\n\
Choose the type of ticket you need from the dropdown menu below. Each ticket will create a \
private channel for you where our support team can communicate with you directly. Please be \
as detailed as possible when describing your issue to help us assist you efficiently.\n\n\
Thank you for trusting Nylex Tech. Your satisfaction is our priority.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOption {
    pub label: String,
    pub description: String,
    pub value: String,
}

/// The message members use to open a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub description: String,
    pub menu_id: String,
    pub placeholder: String,
    pub options: Vec<PanelOption>,
}

impl Default for Panel {
    fn default() -> Self {
        let options = TicketCategory::ALL
            .into_iter()
            .map(|category| PanelOption {
                label: category.label().to_string(),
                description: category.description().to_string(),
                value: category.value().to_string(),
            })
            .collect();

        Self {
            title: TITLE.to_string(),
            description: DESCRIPTION.to_string(),
            menu_id: TICKET_MENU_ID.to_string(),
            placeholder: PLACEHOLDER.to_string(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_has_option_per_category() {
        let panel = Panel::default();
        let values: Vec<&str> = panel.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["billing", "technical", "general"]);
    }

    #[test]
    fn test_panel_options_parse_back() {
        for option in Panel::default().options {
            assert!(option.value.parse::<TicketCategory>().is_ok());
        }
    }

    #[test]
    fn test_panel_menu_id() {
        assert_eq!(Panel::default().menu_id, TICKET_MENU_ID);
    }
}

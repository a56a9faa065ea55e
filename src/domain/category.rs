use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketCategory {
    Billing,
    Technical,
    General,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown ticket category '{0}'")]
pub struct UnknownCategory(String);

impl TicketCategory {
    /// Panel order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Billing,
        TicketCategory::Technical,
        TicketCategory::General,
    ];

    /// Value carried by the select menu option.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            TicketCategory::Billing => "billing",
            TicketCategory::Technical => "technical",
            TicketCategory::General => "general",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TicketCategory::Billing => "Billing",
            TicketCategory::Technical => "Technical Support",
            TicketCategory::General => "General",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            TicketCategory::Billing => "Payments, invoices and refunds",
            TicketCategory::Technical => "Problems with a purchased system or a bug report",
            TicketCategory::General => "Custom requests and anything else",
        }
    }
}

impl FromStr for TicketCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TicketCategory::ALL
            .into_iter()
            .find(|category| category.value() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Staff role pinged and granted access for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffRoles {
    pub billing: u64,
    pub technical: u64,
    pub general: u64,
}

impl StaffRoles {
    #[must_use]
    pub fn role_for(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Billing => self.billing,
            TicketCategory::Technical => self.technical,
            TicketCategory::General => self.general,
        }
    }
}

impl Default for StaffRoles {
    fn default() -> Self {
        Self {
            billing: 1_424_058_334_709_026_866,
            technical: 1_424_057_786_899_238_922,
            general: 1_424_057_979_392_757_952,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!("billing".parse::<TicketCategory>(), Ok(TicketCategory::Billing));
        assert_eq!("technical".parse::<TicketCategory>(), Ok(TicketCategory::Technical));
        assert_eq!("general".parse::<TicketCategory>(), Ok(TicketCategory::General));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Billing".parse::<TicketCategory>(),
            Err(UnknownCategory("Billing".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!("refunds".parse::<TicketCategory>().is_err());
    }

    #[test]
    fn test_display_is_value() {
        assert_eq!(TicketCategory::Technical.to_string(), "technical");
    }

    #[test]
    fn test_role_lookup() {
        let roles = StaffRoles {
            billing: 1,
            technical: 2,
            general: 3,
        };
        assert_eq!(roles.role_for(TicketCategory::Billing), 1);
        assert_eq!(roles.role_for(TicketCategory::Technical), 2);
        assert_eq!(roles.role_for(TicketCategory::General), 3);
    }

    #[test]
    fn test_default_roles_are_distinct() {
        let roles = StaffRoles::default();
        assert_ne!(roles.billing, roles.technical);
        assert_ne!(roles.technical, roles.general);
        assert_ne!(roles.billing, roles.general);
    }
}

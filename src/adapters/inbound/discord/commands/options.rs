use crate::adapters::inbound::discord::utils::parse::{ParseError, ResolveOption};
use crate::domain::functions::setup::SetupOptions;
use serenity::all::ResolvedValue;

impl ResolveOption for SetupOptions {
    fn resolve(options: Vec<(&str, ResolvedValue)>) -> Result<Self, ParseError> {
        let mut channel = None;

        for (name, value) in options {
            if name == "channel" {
                channel = match value {
                    ResolvedValue::Channel(target) => Some(target.id.get()),
                    _ => return Err(ParseError::new("channel ResolvedValue was not a channel")),
                };
            }
        }

        Ok(SetupOptions::new(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_options_targets_current_channel() {
        let options = SetupOptions::resolve(vec![]).unwrap();
        assert_eq!(options.channel(), None);
    }

    #[test]
    fn test_wrong_channel_type_is_rejected() {
        let result = SetupOptions::resolve(vec![("channel", ResolvedValue::String("general"))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_options_are_ignored() {
        let options = SetupOptions::resolve(vec![("colour", ResolvedValue::Boolean(true))]).unwrap();
        assert_eq!(options.channel(), None);
    }
}

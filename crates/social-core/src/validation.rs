use crate::error::{CoreError, CoreResult};

pub const MIN_PASSWORD_LEN: usize = 4;
pub const MAX_MESSAGE_LEN: usize = 255;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn username(value: Option<&str>) -> CoreResult<&str> {
    match value {
        Some(v) if !is_blank(v) => Ok(v),
        _ => Err(CoreError::InvalidInput("username must not be blank".into())),
    }
}

pub fn password(value: Option<&str>) -> CoreResult<&str> {
    match value {
        Some(v) if v.chars().count() >= MIN_PASSWORD_LEN => Ok(v),
        _ => Err(CoreError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        ))),
    }
}

/// Message text must be non-blank and at most [`MAX_MESSAGE_LEN`] characters.
pub fn message_text(value: Option<&str>) -> CoreResult<&str> {
    let text = value
        .filter(|v| !is_blank(v))
        .ok_or_else(|| CoreError::InvalidInput("message text must not be blank".into()))?;

    let len = text.chars().count();
    if len > MAX_MESSAGE_LEN {
        return Err(CoreError::InvalidInput(format!(
            "message text is {len} characters, limit is {MAX_MESSAGE_LEN}"
        )));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_usernames_are_rejected() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            assert!(matches!(username(value), Err(CoreError::InvalidInput(_))));
        }
        assert_eq!(username(Some(" alice ")).unwrap(), " alice ");
    }

    #[test]
    fn password_length_boundary() {
        assert!(password(None).is_err());
        assert!(password(Some("abc")).is_err());
        assert!(password(Some("abcd")).is_ok());
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(password(Some("ééé")).is_err());
        assert!(password(Some("éééé")).is_ok());
    }

    #[test]
    fn message_text_boundaries() {
        assert!(message_text(None).is_err());
        assert!(message_text(Some("")).is_err());
        assert!(message_text(Some(" ".repeat(10).as_str())).is_err());
        assert!(message_text(Some("a".repeat(MAX_MESSAGE_LEN).as_str())).is_ok());
        assert!(message_text(Some("a".repeat(MAX_MESSAGE_LEN + 1).as_str())).is_err());
    }
}

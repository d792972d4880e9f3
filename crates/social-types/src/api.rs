use serde::Deserialize;

// -- Accounts --

/// Body of `POST /register` and `POST /login`.
///
/// Both fields are optional on the wire so that a missing field reaches the
/// core as a validation failure instead of a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// -- Messages --

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub message_text: Option<String>,
    /// Used when the `userId` query parameter is absent.
    #[serde(default)]
    pub posted_by: Option<i64>,
    #[serde(default)]
    pub time_posted_epoch: Option<i64>,
}

/// Query string of `POST /messages`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageQuery {
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[serde(default)]
    pub message_text: Option<String>,
}

impl CreateMessageRequest {
    /// Author id: the query parameter wins over the body field.
    pub fn author(&self, query: &CreateMessageQuery) -> Option<i64> {
        query.user_id.or(self.posted_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_none() {
        let req: AccountRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn query_user_id_takes_precedence() {
        let req: CreateMessageRequest =
            serde_json::from_str(r#"{"messageText": "hi", "postedBy": 2}"#).unwrap();
        assert_eq!(req.author(&CreateMessageQuery { user_id: Some(5) }), Some(5));
        assert_eq!(req.author(&CreateMessageQuery::default()), Some(2));
    }
}

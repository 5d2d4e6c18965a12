use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct AccessTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub audience: &'a str,
    pub grant_type: &'static str,
}

#[derive(Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn access_token_response_json_deserialize_ok() {
        let json = r#"{
            "access_token": "token-value",
            "token_type": "Bearer",
            "expires_in": 86400
        }"#;

        let response = serde_json::from_str::<AccessTokenResponse>(json).unwrap();

        assert_eq!(response.access_token, "token-value");
    }
}

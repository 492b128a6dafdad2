//! REST client for the playlist API.
//!
//! Every request attaches the stored bearer token and runs under a fixed
//! timeout. A 401 triggers one token refresh followed by one retry of the
//! original request; the one-shot flag lives on a [`RequestContext`]
//! threaded through the send path, so no request can loop.

use crate::session;
use omg_common::{
    Acknowledgement, Channel, ChannelOrder, ChannelPatch, NewChannel, NewPlaylist, Playlist,
    PlaylistPatch, PublicLink, SyncOutcome, TokenPair, User,
};
use omg_ui::timers::sleep_ms;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::OnceLock;
use tracing::{debug, warn};

const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Failure taxonomy for API calls. `Display` is user-facing.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 that survived the refresh-and-retry path.
    #[error("{message}")]
    Unauthorized { message: String },
    /// Non-2xx with a server-reported message.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// No response at all.
    #[error("Cannot reach the server")]
    Network(String),
    #[error("The request timed out")]
    Timeout,
    /// 2xx whose body didn't match the expected shape.
    #[error("Unexpected response from the server")]
    Decode(String),
}

/// Per-request state threaded through the send path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RequestContext {
    /// Set once the request has been re-issued after a token refresh.
    pub retried: bool,
}

/// What to do with a response, given the one-shot retry flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// Not an authorization failure; handle the status normally.
    Proceed,
    /// First 401 for this request: refresh the token and retry once.
    RefreshAndRetry,
    /// 401 on an already-retried request: give up.
    Reject,
}

pub(crate) fn dispose(status: StatusCode, ctx: RequestContext) -> Disposition {
    if status != StatusCode::UNAUTHORIZED {
        Disposition::Proceed
    } else if ctx.retried {
        Disposition::Reject
    } else {
        Disposition::RefreshAndRetry
    }
}

enum Body {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(&'static str, String)>),
}

fn to_json(value: impl serde::Serialize) -> Result<Body, ApiError> {
    serde_json::to_value(value)
        .map(Body::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the FastAPI-style `detail` message out of an error body.
async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => match body.get("detail") {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => format!("Request failed with status {status}"),
        },
        Err(_) => format!("Request failed with status {status}"),
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn build(&self, method: Method, path: &str, body: &Body, with_bearer: bool) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if with_bearer {
            if let Some(token) = session::access() {
                builder = builder.bearer_auth(token);
            }
        }
        match body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(value),
            Body::Form(fields) => builder.form(fields),
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        use futures_util::future::{select, Either};

        let request = builder.build().map_err(|e| ApiError::Network(e.to_string()))?;
        let pending = self.http.execute(request);
        let deadline = sleep_ms(REQUEST_TIMEOUT_MS);
        futures_util::pin_mut!(pending);
        futures_util::pin_mut!(deadline);

        match select(pending, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout
                } else {
                    ApiError::Network(e.to_string())
                }
            }),
            Either::Right(((), _)) => Err(ApiError::Timeout),
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Body,
    ) -> Result<T, ApiError> {
        let mut ctx = RequestContext::default();
        loop {
            let builder = self.build(method.clone(), path, &body, true);
            let response = self.send(builder).await?;
            let status = response.status();

            if status.is_success() {
                return response
                    .json::<T>()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()));
            }

            let message = error_detail(response).await;
            match dispose(status, ctx) {
                Disposition::Proceed => {
                    return Err(ApiError::Server {
                        status: status.as_u16(),
                        message,
                    })
                }
                Disposition::Reject => return Err(ApiError::Unauthorized { message }),
                Disposition::RefreshAndRetry => {
                    debug!(path, "access token rejected, refreshing session");
                    if self.refresh_session().await.is_ok() {
                        ctx.retried = true;
                    } else {
                        session::logout();
                        return Err(ApiError::Unauthorized { message });
                    }
                }
            }
        }
    }

    /// Exchange the stored refresh token for a fresh pair and persist it.
    /// The refresh token always comes from the token store.
    pub async fn refresh_session(&self) -> Result<TokenPair, ApiError> {
        let refresh = session::refresh().ok_or_else(|| ApiError::Unauthorized {
            message: "No refresh token".to_string(),
        })?;

        let body = Body::Json(json!({ "refresh_token": refresh }));
        let builder = self.build(Method::POST, "/token/refresh", &body, false);
        let response = self.send(builder).await?;
        let status = response.status();

        if !status.is_success() {
            let message = error_detail(response).await;
            warn!(status = status.as_u16(), "token refresh rejected");
            return Err(ApiError::Unauthorized { message });
        }

        let pair: TokenPair = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        session::store_tokens(&pair);
        Ok(pair)
    }

    // -- Auth --

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let body = Body::Form(vec![
            ("username", username.to_string()),
            ("password", password.to_string()),
        ]);
        let pair: TokenPair = self.dispatch(Method::POST, "/token", body).await?;
        session::store_tokens(&pair);
        Ok(pair)
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.dispatch(Method::GET, "/users/me", Body::Empty).await
    }

    // -- Playlists --

    pub async fn playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        self.dispatch(Method::GET, "/playlists", Body::Empty).await
    }

    pub async fn playlist(&self, id: i64) -> Result<Playlist, ApiError> {
        self.dispatch(Method::GET, &format!("/playlists/{id}"), Body::Empty)
            .await
    }

    pub async fn create_playlist(&self, new: &NewPlaylist) -> Result<Playlist, ApiError> {
        self.dispatch(Method::POST, "/playlists", to_json(new)?).await
    }

    pub async fn update_playlist(&self, id: i64, patch: &PlaylistPatch) -> Result<Playlist, ApiError> {
        self.dispatch(Method::PUT, &format!("/playlists/{id}"), to_json(patch)?)
            .await
    }

    pub async fn delete_playlist(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.dispatch(Method::DELETE, &format!("/playlists/{id}"), Body::Empty)
            .await
    }

    pub async fn sync_playlist(&self, id: i64) -> Result<SyncOutcome, ApiError> {
        self.dispatch(Method::POST, &format!("/playlists/{id}/sync"), Body::Empty)
            .await
    }

    pub async fn generate_public_token(&self, id: i64) -> Result<PublicLink, ApiError> {
        self.dispatch(
            Method::POST,
            &format!("/playlists/{id}/generate-token"),
            Body::Empty,
        )
        .await
    }

    // -- Channels --

    pub async fn add_channel(&self, playlist_id: i64, new: &NewChannel) -> Result<Channel, ApiError> {
        self.dispatch(
            Method::POST,
            &format!("/playlists/{playlist_id}/channels"),
            to_json(new)?,
        )
        .await
    }

    pub async fn update_channel(&self, channel_id: i64, patch: &ChannelPatch) -> Result<Channel, ApiError> {
        self.dispatch(Method::PUT, &format!("/channels/{channel_id}"), to_json(patch)?)
            .await
    }

    pub async fn delete_channel(&self, channel_id: i64) -> Result<Acknowledgement, ApiError> {
        self.dispatch(Method::DELETE, &format!("/channels/{channel_id}"), Body::Empty)
            .await
    }

    pub async fn reorder_channels(
        &self,
        playlist_id: i64,
        orders: &[ChannelOrder],
    ) -> Result<Acknowledgement, ApiError> {
        self.dispatch(
            Method::PUT,
            &format!("/playlists/{playlist_id}/channels/reorder"),
            to_json(orders)?,
        )
        .await
    }

    // -- Custom playlist channel borrowing --

    pub async fn available_channels(&self, playlist_id: i64) -> Result<Vec<Channel>, ApiError> {
        self.dispatch(
            Method::GET,
            &format!("/playlists/{playlist_id}/channels-available"),
            Body::Empty,
        )
        .await
    }

    pub async fn add_channel_to_custom(
        &self,
        playlist_id: i64,
        channel_id: i64,
    ) -> Result<Acknowledgement, ApiError> {
        self.dispatch(
            Method::POST,
            &format!("/playlists/{playlist_id}/add-channel/{channel_id}"),
            Body::Empty,
        )
        .await
    }

    pub async fn remove_channel_from_custom(
        &self,
        playlist_id: i64,
        channel_id: i64,
    ) -> Result<Acknowledgement, ApiError> {
        self.dispatch(
            Method::DELETE,
            &format!("/playlists/{playlist_id}/channels/{channel_id}"),
            Body::Empty,
        )
        .await
    }
}

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// The shared client over the configured API base URL.
pub fn client() -> &'static ApiClient {
    CLIENT.get_or_init(|| ApiClient::new(crate::API_BASE_URL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_401_refreshes_and_retries() {
        let ctx = RequestContext::default();
        assert_eq!(
            dispose(StatusCode::UNAUTHORIZED, ctx),
            Disposition::RefreshAndRetry
        );
    }

    #[test]
    fn test_second_401_after_retry_gives_up() {
        let ctx = RequestContext { retried: true };
        assert_eq!(dispose(StatusCode::UNAUTHORIZED, ctx), Disposition::Reject);
    }

    #[test]
    fn test_non_401_is_never_retried() {
        for status in [
            StatusCode::OK,
            StatusCode::BAD_REQUEST,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert_eq!(dispose(status, RequestContext::default()), Disposition::Proceed);
            assert_eq!(
                dispose(status, RequestContext { retried: true }),
                Disposition::Proceed
            );
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}

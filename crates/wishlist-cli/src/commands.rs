//! Command handlers. Each returns the text to print.

use std::sync::Arc;

use anyhow::{Context as _, bail};
use tracing::info;
use wishlist_client::api::{UsersApi, WishlistsApi};
use wishlist_client::{ClientRegistry, NamedClient, SchemaDocument, SessionStore};
use wishlist_common::config::AppConfig;
use wishlist_view::LocaleDateFormatter;

use crate::cli::{Cli, Command, OutputFormat};
use crate::output;

/// Everything a command needs, built once in `main`.
pub(crate) struct AppContext<'a> {
    pub config: &'a AppConfig,
    pub registry: &'a ClientRegistry,
    pub session: Arc<SessionStore>,
    pub dates: LocaleDateFormatter,
    pub format: OutputFormat,
}

impl AppContext<'_> {
    fn client(&self, name: &str) -> anyhow::Result<&NamedClient> {
        self.registry
            .client(name)
            .with_context(|| format!("configured clients: {}", self.client_names()))
    }

    fn client_names(&self) -> String {
        self.registry.names().collect::<Vec<_>>().join(", ")
    }
}

/// Log in when `--username` was given. A token from `--token` is kept otherwise.
pub(crate) async fn authenticate(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    let Some(username) = cli.username.as_deref() else {
        return Ok(());
    };
    let Some(password) = cli.password.as_deref() else {
        bail!("--username requires --password (or WISHLIST_PASSWORD)");
    };

    let client = ctx.client(&cli.client)?;
    ctx.session
        .login_with(client, username, password)
        .await
        .with_context(|| format!("login as '{username}' failed"))?;
    Ok(())
}

pub(crate) async fn execute(
    ctx: &AppContext<'_>,
    client_name: &str,
    command: Command,
) -> anyhow::Result<String> {
    match command {
        Command::Clients => output::render_clients(ctx.registry.iter(), ctx.format),
        Command::Config => output::render_config(ctx.config, ctx.format),
        Command::Schema => {
            let client = ctx.client(client_name)?;
            let schema = SchemaDocument::fetch(client)
                .await
                .with_context(|| format!("failed to load schema from '{}'", client.config().schema))?;
            info!(client = client_name, operations = schema.operations().len(), "schema fetched");
            output::render_schema(&schema, ctx.format)
        }
        Command::Me => {
            let user = UsersApi::new(ctx.client(client_name)?).me().await?;
            ctx.session.set_user(user.clone());
            output::render_user(&user, ctx.format)
        }
        Command::Wishlists { user } => {
            let api = WishlistsApi::new(ctx.client(client_name)?);
            let wishlists = match user.as_deref() {
                Some(username) => api.list_for_user(username).await?,
                None => api.list_mine().await?,
            };
            output::render_wishlists(&wishlists, &ctx.dates, ctx.format)
        }
        Command::Wishlist { uuid } => {
            let wishlist = WishlistsApi::new(ctx.client(client_name)?)
                .get(uuid)
                .await
                .with_context(|| format!("failed to load wishlist {uuid}"))?;
            output::render_wishlist(&wishlist, &ctx.dates, ctx.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use httpmock::prelude::*;
    use serde_json::json;
    use wishlist_client::{CredentialSource, ReqwestTransport};
    use wishlist_common::config::{self, ClientConfig};

    fn app_config() -> AppConfig {
        let cfg = config::defaults().unwrap().build().unwrap();
        AppConfig::from_config(cfg).unwrap()
    }

    fn registry(server: &MockServer, session: &Arc<SessionStore>) -> ClientRegistry {
        let transport = Arc::new(ReqwestTransport::new(&server.base_url()).unwrap());
        ClientRegistry::build(
            [("backend", ClientConfig::fallback())],
            session.clone(),
            transport,
        )
    }

    fn context<'a>(
        config: &'a AppConfig,
        registry: &'a ClientRegistry,
        session: Arc<SessionStore>,
    ) -> AppContext<'a> {
        AppContext {
            config,
            registry,
            session,
            dates: LocaleDateFormatter::new("en-US"),
            format: OutputFormat::Text,
        }
    }

    #[tokio::test]
    async fn wishlists_for_user_are_fetched_with_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/wishlists/user/bob")
                    .header("authorization", "Bearer tok");
                then.status(200).json_body(json!([{
                    "uuid": "6f1c1c8e-8a4e-4f5c-9d2a-6a2b3c4d5e6f",
                    "owner_username": "bob",
                    "name": "Camping",
                    "created_at": "2024-07-04T12:00:00Z",
                    "is_archived": false,
                    "items": []
                }]));
            })
            .await;

        let config = app_config();
        let session = Arc::new(SessionStore::with_token("tok"));
        let registry = registry(&server, &session);
        let ctx = context(&config, &registry, session);

        let out = execute(&ctx, "backend", Command::Wishlists { user: Some("bob".into()) })
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(out.contains("Camping"));
        assert!(out.contains("0 items"));
        assert!(out.contains("Created at 7/4/2024"));
    }

    #[tokio::test]
    async fn username_flag_logs_in() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/login");
                then.status(200).json_body(json!({ "access_token": "fresh" }));
            })
            .await;
        let me = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/users/me")
                    .header("authorization", "Bearer fresh");
                then.status(200).json_body(json!({
                    "username": "alice",
                    "email": "alice@example.com",
                    "is_active": true
                }));
            })
            .await;

        let config = app_config();
        let session = Arc::new(SessionStore::new());
        let registry = registry(&server, &session);
        let ctx = context(&config, &registry, session.clone());

        let cli = Cli::try_parse_from(["wishlist", "me", "--username", "alice", "--password", "pw"])
            .unwrap();
        authenticate(&ctx, &cli).await.unwrap();

        me.assert_async().await;
        assert_eq!(session.current().as_deref(), Some("fresh"));
        assert_eq!(
            session.session_data().map(|u| u.username),
            Some("alice".to_owned())
        );
    }

    #[tokio::test]
    async fn username_without_password_is_rejected() {
        let server = MockServer::start_async().await;
        let config = app_config();
        let session = Arc::new(SessionStore::new());
        let registry = registry(&server, &session);
        let ctx = context(&config, &registry, session);

        let mut cli = Cli::try_parse_from(["wishlist", "me", "--username", "alice"]).unwrap();
        cli.password = None;
        let err = authenticate(&ctx, &cli).await.unwrap_err();
        assert!(err.to_string().contains("--password"));
    }

    #[tokio::test]
    async fn api_errors_surface_the_backend_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/me");
                then.status(401).json_body(json!({ "detail": "Not authenticated" }));
            })
            .await;

        let config = app_config();
        let session = Arc::new(SessionStore::new());
        let registry = registry(&server, &session);
        let ctx = context(&config, &registry, session);

        let err = execute(&ctx, "backend", Command::Me).await.unwrap_err();
        assert!(format!("{err:#}").contains("Not authenticated"));
    }

    #[tokio::test]
    async fn unknown_client_lists_configured_names() {
        let server = MockServer::start_async().await;
        let config = app_config();
        let session = Arc::new(SessionStore::new());
        let registry = registry(&server, &session);
        let ctx = context(&config, &registry, session);

        let err = execute(&ctx, "search", Command::Me).await.unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("search"));
        assert!(message.contains("configured clients: backend"));
    }

    #[tokio::test]
    async fn clients_and_config_need_no_network() {
        let server = MockServer::start_async().await;
        let config = app_config();
        let session = Arc::new(SessionStore::new());
        let registry = registry(&server, &session);
        let ctx = context(&config, &registry, session);

        let clients = execute(&ctx, "backend", Command::Clients).await.unwrap();
        assert!(clients.starts_with("backend"));
        assert!(clients.ends_with("/api"));

        let toml = execute(&ctx, "backend", Command::Config).await.unwrap();
        assert!(toml.contains("origin = \"http://localhost:8000\""));
        assert!(toml.contains("[clients.backend]"));
    }
}

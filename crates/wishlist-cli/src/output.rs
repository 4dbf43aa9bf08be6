//! Output renderers for CLI commands.
//!
//! Renderers return the text to print so commands stay testable.

use anyhow::Context;
use serde::Serialize;
use uuid::Uuid;
use wishlist_client::SchemaDocument;
use wishlist_common::config::AppConfig;
use wishlist_common::models::{SessionUser, WishlistItemSnapshot, WishlistSnapshot};
use wishlist_view::{DateFormatter, WishlistInfo, WishlistItemStyles};

use crate::cli::OutputFormat;

/// Display strings of one wishlist, as printed or serialized.
#[derive(Debug, Serialize)]
struct WishlistView {
    uuid: Uuid,
    name: String,
    owner: String,
    creation_date: String,
    archived: String,
    items_amount: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<ItemView>,
}

#[derive(Debug, Serialize)]
struct ItemView {
    name: String,
    amount: String,
    priority: &'static str,
    priority_color: &'static str,
    purchased: bool,
}

impl WishlistView {
    fn new(
        wishlist: &WishlistSnapshot,
        dates: &dyn DateFormatter,
        with_items: bool,
    ) -> anyhow::Result<Self> {
        let info = WishlistInfo::new(Some(wishlist), dates);
        let items = if with_items {
            wishlist
                .items
                .iter()
                .map(ItemView::new)
                .collect::<anyhow::Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(Self {
            uuid: wishlist.uuid,
            name: wishlist.name.clone(),
            owner: wishlist.owner_username.clone(),
            creation_date: info.creation_date(),
            archived: info.archived_text(),
            items_amount: info.items_amount_text(),
            items,
        })
    }

    /// Creation date and item count, skipping whichever is empty.
    fn summary(&self) -> String {
        [self.creation_date.as_str(), self.items_amount.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn title(&self) -> String {
        if self.archived.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.archived)
        }
    }
}

impl ItemView {
    fn new(item: &WishlistItemSnapshot) -> anyhow::Result<Self> {
        let styles = WishlistItemStyles::new(Some(item));
        Ok(Self {
            name: item.name.clone(),
            amount: styles.amount_text(),
            priority: styles
                .priority_text()
                .with_context(|| format!("item '{}'", item.name))?,
            priority_color: styles.priority_color()?,
            purchased: item.is_purchased,
        })
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to format JSON")
}

pub(crate) fn render_wishlists(
    wishlists: &[WishlistSnapshot],
    dates: &dyn DateFormatter,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let views = wishlists
        .iter()
        .map(|w| WishlistView::new(w, dates, false))
        .collect::<anyhow::Result<Vec<_>>>()?;

    match format {
        OutputFormat::Json => to_json(&views),
        OutputFormat::Text => {
            if views.is_empty() {
                return Ok("no wishlists".to_owned());
            }
            let lines: Vec<String> = views
                .iter()
                .map(|view| {
                    let mut line = format!("{:<36} {:<10} {}", view.uuid, view.items_amount, view.title());
                    line.push_str(&format!("  ({}", view.owner));
                    if !view.creation_date.is_empty() {
                        line.push_str(&format!(", {}", view.creation_date));
                    }
                    line.push(')');
                    line
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

pub(crate) fn render_wishlist(
    wishlist: &WishlistSnapshot,
    dates: &dyn DateFormatter,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let view = WishlistView::new(wishlist, dates, true)?;

    match format {
        OutputFormat::Json => to_json(&view),
        OutputFormat::Text => {
            let mut lines = vec![
                view.title(),
                format!("owner: {}", view.owner),
                view.summary(),
            ];
            for item in &view.items {
                let mark = if item.purchased { "x" } else { " " };
                let mut line = format!("  [{mark}] {}: {}", item.name, item.amount);
                if !item.priority.is_empty() {
                    line.push_str(&format!(" ({})", item.priority));
                }
                lines.push(line);
            }
            Ok(lines.join("\n"))
        }
    }
}

pub(crate) fn render_user(user: &SessionUser, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(user),
        OutputFormat::Text => {
            let status = if user.is_active { "active" } else { "inactive" };
            Ok(format!("{} <{}> ({status})", user.username, user.email))
        }
    }
}

pub(crate) fn render_schema(schema: &SchemaDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let ops: Vec<_> = schema
                .operations()
                .iter()
                .map(|op| serde_json::json!({ "method": op.method, "path": op.path }))
                .collect();
            to_json(&serde_json::json!({
                "title": schema.title,
                "version": schema.version,
                "operations": ops,
            }))
        }
        OutputFormat::Text => {
            let header = schema.title.as_ref().map(|title| {
                format!("{title} {}", schema.version.as_deref().unwrap_or("?"))
            });
            let lines: Vec<String> = header
                .into_iter()
                .chain(
                    schema
                        .operations()
                        .iter()
                        .map(|op| format!("{:<7} {}", op.method, op.path)),
                )
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

pub(crate) fn render_clients<'a>(
    clients: impl Iterator<Item = (&'a str, &'a wishlist_client::NamedClient)>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let rows: Vec<_> = clients
        .map(|(name, client)| (name, client.config().base_url.as_str()))
        .collect();

    match format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = rows
                .iter()
                .map(|(name, base)| ((*name).to_owned(), serde_json::Value::from(*base)))
                .collect();
            to_json(&map)
        }
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|(name, base)| format!("{name:<16} {base}"))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub(crate) fn render_config(config: &AppConfig, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(config),
        OutputFormat::Text => toml::to_string_pretty(config).context("failed to format TOML"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use wishlist_view::LocaleDateFormatter;

    fn wishlist() -> WishlistSnapshot {
        let uuid = Uuid::parse_str("6f1c1c8e-8a4e-4f5c-9d2a-6a2b3c4d5e6f").unwrap();
        WishlistSnapshot {
            uuid,
            owner_username: "alice".into(),
            name: "Birthday".into(),
            created_at: Some(Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap()),
            is_archived: true,
            items: vec![
                WishlistItemSnapshot {
                    uuid: Uuid::nil(),
                    wishlist_uuid: uuid,
                    name: "Tea".into(),
                    quantity: 2,
                    measurement_unit: "piece".into(),
                    priority: 3,
                    is_purchased: true,
                },
                WishlistItemSnapshot {
                    uuid: Uuid::nil(),
                    wishlist_uuid: uuid,
                    name: "Flour".into(),
                    quantity: 5,
                    measurement_unit: "kg".into(),
                    priority: 0,
                    is_purchased: false,
                },
            ],
        }
    }

    #[test]
    fn wishlist_text_uses_view_formatters() {
        let dates = LocaleDateFormatter::new("en-US");
        let text = render_wishlist(&wishlist(), &dates, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Birthday (archived)\n\
             owner: alice\n\
             Created at 7/4/2024, 2 items\n  \
             [x] Tea: 2 pieces (High priority)\n  \
             [ ] Flour: 5 kg"
        );
    }

    #[test]
    fn wishlist_json_carries_styles() {
        let dates = LocaleDateFormatter::new("de-DE");
        let json = render_wishlist(&wishlist(), &dates, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["creation_date"], "Created at 4.7.2024");
        assert_eq!(value["items"][0]["priority_color"], "text-red-500");
        assert_eq!(value["items"][1]["priority"], "");
        assert_eq!(value["items"][1]["amount"], "5 kg");
    }

    #[test]
    fn unknown_priority_fails_rendering() {
        let mut w = wishlist();
        w.items[0].priority = 9;
        let dates = LocaleDateFormatter::default();
        let err = render_wishlist(&w, &dates, OutputFormat::Text).unwrap_err();
        assert!(format!("{err:#}").contains("Unrecognized priority: 9"));

        // Summaries do not look at items.
        assert!(render_wishlists(&[w], &dates, OutputFormat::Text).is_ok());
    }

    #[test]
    fn missing_creation_date_is_left_out() {
        let mut w = wishlist();
        w.created_at = None;
        w.is_archived = false;
        let dates = LocaleDateFormatter::default();

        let detail = render_wishlist(&w, &dates, OutputFormat::Text).unwrap();
        assert_eq!(detail.lines().nth(2), Some("2 items"));
        assert!(!detail.contains("1970"));

        let list = render_wishlists(&[w], &dates, OutputFormat::Text).unwrap();
        assert!(list.ends_with("Birthday  (alice)"));
    }

    #[test]
    fn schema_text_lists_operations() {
        let schema = SchemaDocument::parse(&serde_json::json!({
            "info": { "title": "Wishlists", "version": "0.1.0" },
            "paths": { "/login": { "post": {} }, "/users/me": { "get": {} } }
        }))
        .unwrap();
        assert_eq!(
            render_schema(&schema, OutputFormat::Text).unwrap(),
            "Wishlists 0.1.0\nPOST    /login\nGET     /users/me"
        );
    }

    #[test]
    fn empty_wishlist_list() {
        let dates = LocaleDateFormatter::default();
        assert_eq!(render_wishlists(&[], &dates, OutputFormat::Text).unwrap(), "no wishlists");
        assert_eq!(render_wishlists(&[], &dates, OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn user_text() {
        let user = SessionUser {
            username: "alice".into(),
            email: "alice@example.com".into(),
            is_active: true,
        };
        assert_eq!(
            render_user(&user, OutputFormat::Text).unwrap(),
            "alice <alice@example.com> (active)"
        );
    }
}

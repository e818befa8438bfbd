use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use business::domain::shared::value_objects::{MenuItemId, RestaurantId};

use crate::commands::{Command, SessionInput};
use crate::screens::scanner::ScanOutcome;
use crate::setup::dependency_injection::DependencyContainer;

const PROMPT: &str = "jamnaw> ";

/// Interactive loop: one command per line, handled to completion before the
/// next line is read.
pub struct Session {
    screens: DependencyContainer,
}

impl Session {
    pub fn new(screens: DependencyContainer) -> Self {
        Self { screens }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let welcome = self.screens.home.show().await;
        stdout.write_all(welcome.as_bytes()).await?;

        loop {
            stdout.write_all(PROMPT.as_bytes()).await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let output = match SessionInput::parse_line(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command).await,
                Err(e) => e.render().to_string(),
            };
            stdout.write_all(output.as_bytes()).await?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n").await?;
            }
        }

        tracing::info!("Session closed");
        Ok(())
    }

    pub async fn handle(&mut self, command: Command) -> String {
        tracing::debug!(?command, "Handling command");
        let screens = &mut self.screens;

        match command {
            Command::Home => screens.home.show().await,
            Command::Select { id } => screens.home.select(RestaurantId::new(id)).await,
            Command::Unselect => screens.home.unselect().await,
            Command::Info { id } => screens.restaurant.show(RestaurantId::new(id)).await,
            Command::Favorite { id } => {
                screens
                    .restaurant
                    .toggle_favorite(RestaurantId::new(id))
                    .await
            }
            Command::Rate { id, score, text } => {
                screens
                    .restaurant
                    .rate(RestaurantId::new(id), score, text.join(" "))
                    .await
            }
            Command::Menu { id } => screens.menu.open(RestaurantId::new(id)).await,
            Command::Item { id } => screens.menu.item(MenuItemId::new(id)),
            Command::Add { id } => screens.menu.add(MenuItemId::new(id)),
            Command::Cart => screens.cart.show(),
            Command::Inc { id } => screens.cart.increase(MenuItemId::new(id)),
            Command::Dec { id } => screens.cart.decrease(MenuItemId::new(id)),
            Command::Remove { id } => screens.cart.remove(MenuItemId::new(id)),
            Command::Clear => screens.cart.clear(),
            Command::Order => screens.cart.order().await,
            Command::Pay => screens.payment.pay().await,
            Command::Account => screens.account.show(),
            Command::Tag { name } => screens.account.toggle_tag(&name.join(" ")),
            Command::Tags => screens.account.list_tags().await,
            Command::Scan { data } => match screens.scanner.scan(data.join(" ")) {
                ScanOutcome::OpenRestaurant(id) => screens.restaurant.show(id).await,
                ScanOutcome::Message(message) => message,
            },
            Command::Quit => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::api_config::ApiConfig;
    use crate::config::app_config::AppConfig;
    use crate::config::location_config::LocationConfig;
    use crate::config::scan_config::ScanConfig;
    use business::domain::restaurant::model::GeoPoint;

    /// Points at a closed port; commands exercised here never reach it.
    fn offline_session() -> Session {
        let config = AppConfig {
            api: ApiConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                timeout_secs: 1,
            },
            location: LocationConfig {
                origin: GeoPoint::new(55.785821, 12.521153),
            },
            scan: ScanConfig {
                app_scheme: "myapp".to_string(),
            },
        };
        Session::new(DependencyContainer::new(&config))
    }

    #[tokio::test]
    async fn should_share_tag_preferences_between_screens() {
        let mut session = offline_session();

        session
            .handle(Command::Tag {
                name: vec!["Gluten".to_string(), "free".to_string()],
            })
            .await;
        let output = session.handle(Command::Account).await;

        assert!(output.contains("Preferred tags: Gluten free"));
    }

    #[tokio::test]
    async fn should_refuse_order_for_empty_cart_without_network() {
        let mut session = offline_session();

        let output = session.handle(Command::Order).await;

        assert!(output.contains("order.empty_cart"));
    }

    #[tokio::test]
    async fn should_validate_rating_before_sending() {
        let mut session = offline_session();

        let output = session
            .handle(Command::Rate {
                id: 1,
                score: 4,
                text: vec![],
            })
            .await;

        assert!(output.contains("rating.comment_empty"));
    }

    #[tokio::test]
    async fn should_route_external_scans_to_browser() {
        let mut session = offline_session();

        let output = session
            .handle(Command::Scan {
                data: vec!["https://example.com/".to_string()],
            })
            .await;

        assert_eq!(output, "Open in your browser: https://example.com/");
    }

    #[tokio::test]
    async fn should_alert_when_scanned_text_with_spaces_is_not_a_link() {
        let mut session = offline_session();
        let command = SessionInput::parse_line("scan table 12").unwrap();

        let output = session.handle(command).await;

        assert!(output.contains("scan.invalid_link"));
    }

    #[tokio::test]
    async fn should_show_empty_cart() {
        let mut session = offline_session();

        let output = session.handle(Command::Cart).await;

        assert_eq!(output, "Your Cart\n  Your cart is empty.\n");
    }
}

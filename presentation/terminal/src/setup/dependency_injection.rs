use std::sync::Arc;

use logger::TracingLogger;
use restaurant_api::client::ApiClient;
use restaurant_api::menu_gateway::MenuGatewayHttp;
use restaurant_api::order_gateway::OrderGatewayHttp;
use restaurant_api::payment_gateway::PaymentGatewayHttp;
use restaurant_api::rating_gateway::RatingGatewayHttp;
use restaurant_api::restaurant_gateway::RestaurantGatewayHttp;

use business::application::menu::get_all_tags::GetAllTagsUseCaseImpl;
use business::application::menu::get_restaurant_menu::GetRestaurantMenuUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::payment::create_session::CreatePaymentSessionUseCaseImpl;
use business::application::rating::get_for_restaurant::GetRestaurantRatingsUseCaseImpl;
use business::application::rating::submit::SubmitRatingUseCaseImpl;
use business::application::restaurant::get_all::GetAllRestaurantsUseCaseImpl;
use business::application::restaurant::get_by_id::GetRestaurantByIdUseCaseImpl;
use business::application::scan::resolve::ResolveScannedLinkUseCaseImpl;
use business::domain::cart::store::CartStore;
use business::domain::favorite::store::FavoritesStore;
use business::domain::marker::store::MarkerSelectionStore;
use business::domain::tag_preference::store::TagPreferenceStore;

use crate::config::app_config::AppConfig;
use crate::screens::account::AccountScreen;
use crate::screens::cart::CartScreen;
use crate::screens::home::HomeScreen;
use crate::screens::menu::MenuScreen;
use crate::screens::payment::PaymentScreen;
use crate::screens::restaurant::RestaurantScreen;
use crate::screens::scanner::ScannerScreen;

pub struct DependencyContainer {
    pub home: HomeScreen,
    pub restaurant: RestaurantScreen,
    pub menu: MenuScreen,
    pub cart: CartScreen,
    pub payment: PaymentScreen,
    pub account: AccountScreen,
    pub scanner: ScannerScreen,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Session stores, shared by every screen that reads them
        let cart = Arc::new(CartStore::new());
        let favorites = Arc::new(FavoritesStore::new());
        let tags = Arc::new(TagPreferenceStore::new());
        let marker = Arc::new(MarkerSelectionStore::new());

        // Infrastructure adapters
        let client = ApiClient::new(config.api.base_url.clone(), config.api.timeout());
        let restaurant_gateway = Arc::new(RestaurantGatewayHttp::new(client.clone()));
        let menu_gateway = Arc::new(MenuGatewayHttp::new(client.clone()));
        let rating_gateway = Arc::new(RatingGatewayHttp::new(client.clone()));
        let order_gateway = Arc::new(OrderGatewayHttp::new(client.clone()));
        let payment_gateway = Arc::new(PaymentGatewayHttp::new(client));

        // Restaurant use cases
        let get_all_restaurants_use_case = Arc::new(GetAllRestaurantsUseCaseImpl {
            gateway: restaurant_gateway.clone(),
            logger: logger.clone(),
        });
        let get_restaurant_by_id_use_case = Arc::new(GetRestaurantByIdUseCaseImpl {
            gateway: restaurant_gateway,
            logger: logger.clone(),
        });

        // Menu use cases
        let get_restaurant_menu_use_case = Arc::new(GetRestaurantMenuUseCaseImpl {
            gateway: menu_gateway.clone(),
            logger: logger.clone(),
        });
        let get_all_tags_use_case = Arc::new(GetAllTagsUseCaseImpl {
            gateway: menu_gateway,
            logger: logger.clone(),
        });

        // Rating use cases
        let get_ratings_use_case = Arc::new(GetRestaurantRatingsUseCaseImpl {
            gateway: rating_gateway.clone(),
            logger: logger.clone(),
        });
        let submit_rating_use_case = Arc::new(SubmitRatingUseCaseImpl {
            gateway: rating_gateway,
            logger: logger.clone(),
        });

        // Checkout use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            gateway: order_gateway,
            logger: logger.clone(),
        });
        let create_payment_session_use_case = Arc::new(CreatePaymentSessionUseCaseImpl {
            gateway: payment_gateway,
            logger: logger.clone(),
        });

        let resolve_scanned_link_use_case = Arc::new(ResolveScannedLinkUseCaseImpl {
            app_scheme: config.scan.app_scheme.clone(),
            logger,
        });

        Self {
            home: HomeScreen::new(
                get_all_restaurants_use_case,
                favorites.clone(),
                tags.clone(),
                marker,
                config.location.origin,
            ),
            restaurant: RestaurantScreen::new(
                get_restaurant_by_id_use_case,
                get_ratings_use_case,
                submit_rating_use_case,
                favorites.clone(),
            ),
            menu: MenuScreen::new(get_restaurant_menu_use_case, cart.clone(), tags.clone()),
            cart: CartScreen::new(place_order_use_case, cart.clone()),
            payment: PaymentScreen::new(create_payment_session_use_case, cart),
            account: AccountScreen::new(get_all_tags_use_case, favorites, tags),
            scanner: ScannerScreen::new(resolve_scanned_link_use_case),
        }
    }
}

//! Wire shapes of the restaurant backend.
//!
//! The backend uses lowercase field names (`restaurantid`, `openingtime`) for
//! reads and camel-cased ids (`restaurantID`) for writes. Coordinates and tag
//! lists arrive in more than one shape, so they go through lenient helpers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::menu::model::{Menu, MenuItem, MenuSection, Tag};
use business::domain::order::model::{OrderConfirmation, OrderRequest};
use business::domain::payment::model::{PaymentRequest, PaymentSession};
use business::domain::rating::model::{MAX_SCORE, MIN_SCORE, NewRating, Rating};
use business::domain::restaurant::model::{GeoPoint, Restaurant, parse_clock_time};
use business::domain::shared::value_objects::{MenuItemId, RestaurantId};

/// A number that may be sent as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LenientNumber::Number(n) => Some(*n),
            LenientNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Tags as a JSON array or a comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    List(Vec<String>),
    Joined(String),
}

impl TagList {
    pub fn into_vec(self) -> Vec<String> {
        let raw = match self {
            TagList::List(tags) => tags,
            TagList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

fn tags_or_empty(tags: Option<TagList>) -> Vec<String> {
    tags.map(TagList::into_vec).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub struct RestaurantDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(alias = "openingTime")]
    pub openingtime: Option<String>,
    #[serde(alias = "closingTime")]
    pub closingtime: Option<String>,
    pub latitude: Option<LenientNumber>,
    pub longitude: Option<LenientNumber>,
    pub tags: Option<TagList>,
}

impl RestaurantDto {
    pub fn into_domain(self) -> Restaurant {
        let location = match (
            self.latitude.as_ref().and_then(LenientNumber::as_f64),
            self.longitude.as_ref().and_then(LenientNumber::as_f64),
        ) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)),
            _ => None,
        };

        Restaurant {
            id: RestaurantId::new(self.id),
            name: self.name,
            description: self.description.filter(|d| !d.trim().is_empty()),
            opening_time: self.openingtime.as_deref().and_then(parse_clock_time),
            closing_time: self.closingtime.as_deref().and_then(parse_clock_time),
            location,
            tags: tags_or_empty(self.tags),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuDto {
    pub id: i64,
    #[serde(alias = "restaurantId", alias = "restaurantID")]
    pub restaurantid: i64,
    #[serde(default)]
    pub name: String,
}

impl MenuDto {
    pub fn into_domain(self) -> Menu {
        Menu {
            id: self.id,
            restaurant_id: RestaurantId::new(self.restaurantid),
            name: self.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuSectionDto {
    pub id: i64,
    #[serde(alias = "menuId", alias = "menuID")]
    pub menuid: i64,
    pub name: String,
}

impl MenuSectionDto {
    pub fn into_domain(self) -> MenuSection {
        MenuSection {
            id: self.id,
            menu_id: self.menuid,
            name: self.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuItemDto {
    pub id: i64,
    #[serde(alias = "sectionId", alias = "sectionID", alias = "menusectionid")]
    pub sectionid: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub tags: Option<TagList>,
    #[serde(alias = "imageUrl", alias = "image")]
    pub imageurl: Option<String>,
    pub available: Option<bool>,
}

impl MenuItemDto {
    pub fn into_domain(self) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(self.id),
            section_id: self.sectionid,
            name: self.name,
            description: self.description.filter(|d| !d.trim().is_empty()),
            price: self.price.max(Decimal::ZERO),
            tags: tags_or_empty(self.tags),
            image_url: self.imageurl,
            available: self.available.unwrap_or(true),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
}

impl TagDto {
    pub fn into_domain(self) -> Tag {
        Tag {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RatingDto {
    pub id: i64,
    pub rating: i64,
    #[serde(alias = "restaurantID", alias = "restaurantId")]
    pub restaurantid: i64,
    #[serde(default)]
    pub text: String,
}

impl RatingDto {
    /// Out-of-range scores stored on the backend are clamped for display.
    pub fn into_domain(self) -> Rating {
        Rating {
            id: self.id,
            restaurant_id: RestaurantId::new(self.restaurantid),
            score: self.rating.clamp(MIN_SCORE, MAX_SCORE) as u8,
            text: self.text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewRatingDto {
    pub rating: u8,
    #[serde(rename = "restaurantID")]
    pub restaurant_id: i64,
    pub text: String,
}

impl From<&NewRating> for NewRatingDto {
    fn from(rating: &NewRating) -> Self {
        Self {
            rating: rating.score,
            restaurant_id: rating.restaurant_id.value(),
            text: rating.text.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderLineDto {
    #[serde(rename = "menuItemID")]
    pub menu_item_id: i64,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct OrderRequestDto {
    #[serde(rename = "restaurantID")]
    pub restaurant_id: i64,
    pub items: Vec<OrderLineDto>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl From<&OrderRequest> for OrderRequestDto {
    fn from(order: &OrderRequest) -> Self {
        Self {
            restaurant_id: order.restaurant_id.value(),
            items: order
                .lines
                .iter()
                .map(|line| OrderLineDto {
                    menu_item_id: line.item_id.value(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: line.unit_price,
                })
                .collect(),
            total: order.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderConfirmationDto {
    pub id: i64,
    pub status: Option<String>,
}

impl OrderConfirmationDto {
    pub fn into_domain(self) -> OrderConfirmation {
        OrderConfirmation {
            id: self.id,
            status: self.status.unwrap_or_else(|| "received".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentIntentRequestDto {
    pub amount: i64,
    pub currency: String,
}

impl From<&PaymentRequest> for PaymentIntentRequestDto {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            amount: request.amount,
            currency: request.currency.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymentIntentResponseDto {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

impl PaymentIntentResponseDto {
    pub fn into_domain(self) -> PaymentSession {
        PaymentSession {
            client_secret: self.client_secret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::order::model::OrderLine;
    use serde_json::json;

    #[test]
    fn should_parse_restaurant_with_string_coordinates() {
        let dto: RestaurantDto = serde_json::from_value(json!({
            "id": 3,
            "name": "Kaffestuen",
            "description": "Coffee and cake",
            "openingtime": "08:00:00",
            "closingtime": "16:00:00",
            "latitude": "55.7858",
            "longitude": 12.5211,
            "themeSecondaryColor": "#f4845f",
            "tags": "Vegan, Organic"
        }))
        .unwrap();

        let restaurant = dto.into_domain();

        assert_eq!(restaurant.id, RestaurantId::new(3));
        assert_eq!(restaurant.opening_hours(), Some("08:00 - 16:00".to_string()));
        assert_eq!(restaurant.location, Some(GeoPoint::new(55.7858, 12.5211)));
        assert_eq!(restaurant.tags, vec!["Vegan", "Organic"]);
    }

    #[test]
    fn should_tolerate_missing_optional_restaurant_fields() {
        let dto: RestaurantDto =
            serde_json::from_value(json!({ "id": 1, "name": "Bare", "latitude": "n/a" })).unwrap();

        let restaurant = dto.into_domain();

        assert!(restaurant.location.is_none());
        assert!(restaurant.opening_hours().is_none());
        assert!(restaurant.tags.is_empty());
    }

    #[test]
    fn should_parse_menu_item_with_tag_array() {
        let dto: MenuItemDto = serde_json::from_value(json!({
            "id": 12,
            "sectionid": 4,
            "name": "Oat latte",
            "price": 42.5,
            "tags": ["Vegan", " Lactose-free "]
        }))
        .unwrap();

        let item = dto.into_domain();

        assert_eq!(item.price, Decimal::new(425, 1));
        assert_eq!(item.tags, vec!["Vegan", "Lactose-free"]);
        assert!(item.available);
        assert!(item.description.is_none());
    }

    #[test]
    fn should_accept_price_as_string() {
        let dto: MenuItemDto = serde_json::from_value(json!({
            "id": 1,
            "sectionid": 1,
            "name": "Tea",
            "price": "20.00"
        }))
        .unwrap();

        assert_eq!(dto.into_domain().price, Decimal::new(20, 0));
    }

    #[test]
    fn should_clamp_stored_rating_scores() {
        let dto: RatingDto = serde_json::from_value(json!({
            "id": 1,
            "rating": 9,
            "restaurantid": 2,
            "text": "Too enthusiastic"
        }))
        .unwrap();

        assert_eq!(dto.into_domain().score, 5);
    }

    #[test]
    fn should_serialize_new_rating_with_backend_casing() {
        let rating = NewRating::new(RestaurantId::new(7), 4, "Nice").unwrap();

        let value = serde_json::to_value(NewRatingDto::from(&rating)).unwrap();

        assert_eq!(value, json!({ "rating": 4, "restaurantID": 7, "text": "Nice" }));
    }

    #[test]
    fn should_serialize_order_prices_as_numbers() {
        let order = OrderRequest {
            restaurant_id: RestaurantId::new(1),
            lines: vec![OrderLine {
                item_id: MenuItemId::new(5),
                name: "Burger".to_string(),
                quantity: 2,
                unit_price: Decimal::new(505, 1),
            }],
            total: Decimal::new(101, 0),
        };

        let value = serde_json::to_value(OrderRequestDto::from(&order)).unwrap();

        assert_eq!(
            value,
            json!({
                "restaurantID": 1,
                "items": [{ "menuItemID": 5, "name": "Burger", "quantity": 2, "price": 50.5 }],
                "total": 101.0
            })
        );
    }

    #[test]
    fn should_parse_payment_intent_response() {
        let dto: PaymentIntentResponseDto =
            serde_json::from_value(json!({ "clientSecret": "pi_1_secret_2" })).unwrap();

        assert_eq!(dto.into_domain().client_secret, "pi_1_secret_2");
    }
}

use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::cart::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use business::domain::shared::value_objects::{Sku, UserId};

use crate::api::cart::dto::{AddItemRequest, CartResponse, CheckoutResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        checkout_use_case: Arc<dyn CheckoutUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            remove_item_use_case,
            clear_use_case,
            get_use_case,
            checkout_use_case,
        }
    }
}

fn line_ids(user_id: i64, sku: u32) -> Result<(UserId, Sku), CartError> {
    Ok((UserId::new(user_id)?, Sku::new(sku)?))
}

/// Shopping cart API
///
/// Per-user carts backed by the product catalog and the order management service.
#[OpenApi]
impl CartApi {
    /// Add units of a SKU to the cart
    ///
    /// Creates the cart on first use. Rejected when the SKU is unknown or when the
    /// cumulative quantity would exceed available stock.
    #[oai(path = "/user/:user_id/cart/:sku_id", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        user_id: Path<i64>,
        sku_id: Path<u32>,
        body: Json<AddItemRequest>,
    ) -> AddItemResponse {
        let result = match line_ids(user_id.0, sku_id.0) {
            Ok((user_id, sku)) => {
                self.add_item_use_case
                    .execute(AddItemParams {
                        user_id,
                        sku,
                        quantity: body.0.count,
                    })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(_) => AddItemResponse::Ok,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    412 => AddItemResponse::PreconditionFailed(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a SKU from the cart
    ///
    /// Succeeds even when the cart or the SKU is absent.
    #[oai(path = "/user/:user_id/cart/:sku_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, user_id: Path<i64>, sku_id: Path<u32>) -> NoContentResponse {
        let result = match line_ids(user_id.0, sku_id.0) {
            Ok((user_id, sku)) => {
                self.remove_item_use_case
                    .execute(RemoveItemParams { user_id, sku })
                    .await
            }
            Err(err) => Err(err),
        };

        NoContentResponse::from_result(result)
    }

    /// Empty the cart
    #[oai(path = "/user/:user_id/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, user_id: Path<i64>) -> NoContentResponse {
        let result = match UserId::new(user_id.0) {
            Ok(user_id) => self.clear_use_case.execute(ClearCartParams { user_id }).await,
            Err(err) => Err(err),
        };

        NoContentResponse::from_result(result)
    }

    /// Get the cart contents
    ///
    /// An absent or empty cart is reported as not found.
    #[oai(path = "/user/:user_id/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, user_id: Path<i64>) -> GetCartResponse {
        let result = match UserId::new(user_id.0) {
            Ok(user_id) => self.get_use_case.execute(GetCartParams { user_id }).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetCartResponse::BadRequest(json),
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Turn the cart into an order
    ///
    /// The cart is emptied once the order service accepts the order. A failed order
    /// leaves the cart untouched.
    #[oai(path = "/user/:user_id/checkout", method = "post", tag = "ApiTags::Cart")]
    async fn checkout(&self, user_id: Path<i64>) -> CheckoutApiResponse {
        let result = match UserId::new(user_id.0) {
            Ok(user_id) => self.checkout_use_case.execute(CheckoutParams { user_id }).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(order_id) => CheckoutApiResponse::Ok(Json(CheckoutResponse { order_id })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutApiResponse::BadRequest(json),
                    404 => CheckoutApiResponse::NotFound(json),
                    412 => CheckoutApiResponse::PreconditionFailed(json),
                    _ => CheckoutApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 412)]
    PreconditionFailed(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum NoContentResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl NoContentResponse {
    fn from_result(result: Result<(), CartError>) -> Self {
        match result {
            Ok(()) => NoContentResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => NoContentResponse::BadRequest(json),
                    _ => NoContentResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutApiResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 412)]
    PreconditionFailed(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::domain::cart::model::Cart;
    use business::domain::errors::GatewayError;
    use business::domain::order::model::OrderId;

    use super::*;

    mock! {
        pub AddItem {}
        #[async_trait]
        impl AddItemUseCase for AddItem {
            async fn execute(&self, params: AddItemParams) -> Result<Cart, CartError>;
        }
    }

    mock! {
        pub RemoveItem {}
        #[async_trait]
        impl RemoveItemUseCase for RemoveItem {
            async fn execute(&self, params: RemoveItemParams) -> Result<(), CartError>;
        }
    }

    mock! {
        pub Clear {}
        #[async_trait]
        impl ClearCartUseCase for Clear {
            async fn execute(&self, params: ClearCartParams) -> Result<(), CartError>;
        }
    }

    mock! {
        pub Get {}
        #[async_trait]
        impl GetCartUseCase for Get {
            async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError>;
        }
    }

    mock! {
        pub Checkout {}
        #[async_trait]
        impl CheckoutUseCase for Checkout {
            async fn execute(&self, params: CheckoutParams) -> Result<OrderId, CartError>;
        }
    }

    #[derive(Default)]
    struct Mocks {
        add_item: MockAddItem,
        remove_item: MockRemoveItem,
        clear: MockClear,
        get: MockGet,
        checkout: MockCheckout,
    }

    impl Mocks {
        fn client(self) -> TestClient<Route> {
            let api = CartApi::new(
                Arc::new(self.add_item),
                Arc::new(self.remove_item),
                Arc::new(self.clear),
                Arc::new(self.get),
                Arc::new(self.checkout),
            );
            TestClient::new(Route::new().nest("/", OpenApiService::new(api, "test", "0.1.0")))
        }
    }

    fn cart_with_book() -> Cart {
        let mut cart = Cart::new(UserId::new(1001).unwrap());
        cart.add_line(Sku::new(1076963).unwrap(), 2, 3379).unwrap();
        cart
    }

    #[tokio::test]
    async fn should_add_item_and_answer_ok() {
        let mut mocks = Mocks::default();
        mocks
            .add_item
            .expect_execute()
            .withf(|p| {
                p.user_id.value() == 1001 && p.sku.value() == 1076963 && p.quantity == 2
            })
            .times(1)
            .returning(|_| Ok(cart_with_book()));

        let resp = mocks
            .client()
            .post("/user/1001/cart/1076963")
            .body_json(&json!({ "count": 2 }))
            .send()
            .await;

        resp.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_non_positive_user_without_calling_use_case() {
        let mut mocks = Mocks::default();
        mocks.add_item.expect_execute().times(0);

        let resp = mocks
            .client()
            .post("/user/0/cart/1076963")
            .body_json(&json!({ "count": 1 }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_answer_precondition_failed_on_insufficient_stock() {
        let mut mocks = Mocks::default();
        mocks.add_item.expect_execute().returning(|p| {
            Err(CartError::InsufficientStock {
                sku: p.sku,
                requested: 11,
                available: 10,
            })
        });

        let resp = mocks
            .client()
            .post("/user/1001/cart/1076963")
            .body_json(&json!({ "count": 11 }))
            .send()
            .await;

        resp.assert_status(StatusCode::PRECONDITION_FAILED);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("cart.insufficient_stock");
    }

    #[tokio::test]
    async fn should_answer_internal_error_when_downstream_fails() {
        let mut mocks = Mocks::default();
        mocks
            .add_item
            .expect_execute()
            .returning(|_| Err(CartError::DownstreamUnavailable(GatewayError::Timeout)));

        let resp = mocks
            .client()
            .post("/user/1001/cart/1076963")
            .body_json(&json!({ "count": 1 }))
            .send()
            .await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_remove_item_with_no_content() {
        let mut mocks = Mocks::default();
        mocks
            .remove_item
            .expect_execute()
            .withf(|p| p.user_id.value() == 1001 && p.sku.value() == 1076963)
            .times(1)
            .returning(|_| Ok(()));

        let resp = mocks.client().delete("/user/1001/cart/1076963").send().await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_clear_cart_with_no_content() {
        let mut mocks = Mocks::default();
        mocks
            .clear
            .expect_execute()
            .withf(|p| p.user_id.value() == 1001)
            .times(1)
            .returning(|_| Ok(()));

        let resp = mocks.client().delete("/user/1001/cart").send().await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_list_cart_lines_and_total() {
        let mut mocks = Mocks::default();
        mocks
            .get
            .expect_execute()
            .returning(|_| Ok(cart_with_book()));

        let resp = mocks.client().get("/user/1001/cart").send().await;

        resp.assert_status(StatusCode::OK);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("total_price").assert_i64(6758);
        let items = body.get("items").array();
        items.assert_len(1);
        let line = items.get(0).object();
        line.get("sku").assert_i64(1076963);
        line.get("count").assert_i64(2);
        line.get("price").assert_i64(3379);
    }

    #[tokio::test]
    async fn should_answer_not_found_for_missing_cart() {
        let mut mocks = Mocks::default();
        mocks
            .get
            .expect_execute()
            .returning(|_| Err(CartError::CartNotFound));

        let resp = mocks.client().get("/user/1001/cart").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_order_id_on_checkout() {
        let mut mocks = Mocks::default();
        mocks
            .checkout
            .expect_execute()
            .withf(|p| p.user_id.value() == 1001)
            .returning(|_| Ok(42));

        let resp = mocks.client().post("/user/1001/checkout").send().await;

        resp.assert_status(StatusCode::OK);
        let json = resp.json().await;
        json.value().object().get("order_id").assert_i64(42);
    }

    #[tokio::test]
    async fn should_map_checkout_failures() {
        let cases = [
            (CartError::CartEmpty, StatusCode::BAD_REQUEST),
            (CartError::CartNotFound, StatusCode::NOT_FOUND),
            (
                CartError::OrderFailed { order_id: 7 },
                StatusCode::PRECONDITION_FAILED,
            ),
        ];

        for (err, expected) in cases {
            let mut mocks = Mocks::default();
            let message = err.to_string();
            mocks
                .checkout
                .expect_execute()
                .return_once(move |_| Err(err));

            let resp = mocks.client().post("/user/1001/checkout").send().await;

            resp.assert_status(expected);
            let json = resp.json().await;
            json.value().object().get("message").assert_string(&message);
        }
    }
}

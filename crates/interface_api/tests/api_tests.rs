//! HTTP API tests against the fixture portfolio

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use std::sync::Arc;

use core_kernel::{FundId, HoldingId, UserId};
use domain_fund::{Fund, FundPrice, FundTopHolding, Holding, PortfolioRepository, RealizedProfit};
use interface_api::{config::ApiConfig, create_router, AppState};
use test_utils::{DateFixtures, PortfolioFixtures, TestHoldingBuilder};

fn config() -> ApiConfig {
    ApiConfig {
        as_of: Some(DateFixtures::as_of()),
        ..ApiConfig::default()
    }
}

fn server() -> TestServer {
    server_over(PortfolioFixtures::repository())
}

fn server_over(repository: Arc<dyn PortfolioRepository>) -> TestServer {
    let state = AppState::new(repository, config());
    TestServer::new(create_router(state)).unwrap()
}

/// Repository whose only holding references a fund it does not know
struct DanglingHoldingRepository;

impl PortfolioRepository for DanglingHoldingRepository {
    fn funds(&self) -> Vec<Fund> {
        Vec::new()
    }

    fn fund(&self, _id: &FundId) -> Option<Fund> {
        None
    }

    fn holdings_for_user(&self, user_id: &UserId) -> Vec<Holding> {
        vec![TestHoldingBuilder::new()
            .with_id("h1")
            .with_fund("f9")
            .with_user(user_id.as_str())
            .build()]
    }

    fn price_history(&self, _fund_id: &FundId, _limit: usize) -> Vec<FundPrice> {
        Vec::new()
    }

    fn top_holdings(&self, _fund_id: &FundId) -> Vec<FundTopHolding> {
        Vec::new()
    }

    fn realized_profits(&self, _holding_id: &HoldingId) -> Vec<RealizedProfit> {
        Vec::new()
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = server().get("/api/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let response = server().get("/api/health").await;
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_chat_page_served() {
        let response = server().get("/").await;
        response.assert_status_ok();
        let page = response.text();
        for action in ["我的持仓情况", "今天赚了多少", "生成日报", "赎回费怎么算"] {
            assert!(page.contains(action), "missing quick action {}", action);
        }
    }
}

mod chat {
    use super::*;

    #[tokio::test]
    async fn test_holdings_message() {
        let response = server()
            .post("/api/chat/message")
            .json(&json!({ "message": "我的持仓情况" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"]["role"], "assistant");
        assert!(body["message"]["content"]
            .as_str()
            .unwrap()
            .starts_with("您目前持有以下基金："));
        assert_eq!(body["message"]["charts"][0]["type"], "pie");
        assert_eq!(body["data"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_day_profit_message() {
        let response = server()
            .post("/api/chat/message")
            .json(&json!({ "message": "今天赚了多少" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"]["content"], "今日总收益：120.00元，收益率1.64%");
        assert_eq!(body["intent"], json!({ "type": "query_profit", "params": { "period": "day" } }));
        assert!(body["message"].get("charts").is_none());
        assert_eq!(body["data"]["totalProfit"], 120.0);
    }

    #[tokio::test]
    async fn test_faq_message_has_no_data() {
        let response = server()
            .post("/api/chat/message")
            .json(&json!({ "message": "赎回费怎么算" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert!(body["message"]["content"].as_str().unwrap().contains("赎回费"));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_explicit_user() {
        let response = server()
            .post("/api/chat/message")
            .json(&json!({ "message": "我的持仓", "userId": "user2" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_user_has_no_holdings() {
        let response = server()
            .post("/api/chat/message")
            .json(&json!({ "message": "我的持仓", "userId": "nobody" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"]["content"], "您目前没有持仓记录。");
    }

    #[tokio::test]
    async fn test_missing_message_is_bad_request() {
        let response = server()
            .post("/api/chat/message")
            .json(&json!({ "userId": "user1" }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_non_string_message_is_bad_request() {
        let response = server()
            .post("/api/chat/message")
            .json(&json!({ "message": 42 }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_message_is_bad_request() {
        let response = server()
            .post("/api/chat/message")
            .json(&json!({ "message": "   " }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_history_is_empty() {
        let response = server().get("/api/chat/history").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "messages": [] }));
    }
}

mod report {
    use super::*;

    #[tokio::test]
    async fn test_daily_report() {
        let response = server().get("/api/report/daily").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["date"], "2024-06-28");
        assert_eq!(body["totalValue"], 7450.0);
        assert_eq!(body["holdings"].as_array().unwrap().len(), 5);
        assert_eq!(body["marketHighlights"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_daily_report_for_other_user() {
        let response = server()
            .get("/api/report/daily")
            .add_query_param("userId", "user2")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["holdings"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_alert_threshold_from_config() {
        let state = AppState::new(
            PortfolioFixtures::repository(),
            ApiConfig {
                alert_threshold: rust_decimal_macros::dec!(100),
                ..config()
            },
        );
        let server = TestServer::new(create_router(state)).unwrap();

        let body: Value = server.get("/api/report/daily").await.json();
        assert!(body["alerts"].as_array().unwrap().is_empty());
    }
}

mod funds {
    use super::*;

    #[tokio::test]
    async fn test_list_funds() {
        let response = server().get("/api/funds").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let funds = body.as_array().unwrap();
        assert_eq!(funds.len(), 4);
        assert_eq!(funds[0]["name"], "易方达消费精选");
        assert_eq!(funds[0]["latestNav"], 1.7);
        assert!(funds[2]["latestNav"].is_null());
    }

    #[tokio::test]
    async fn test_price_history_newest_first() {
        let response = server()
            .get("/api/funds/f1/prices")
            .add_query_param("days", 2)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let prices = body["prices"].as_array().unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0]["nav"], 1.7);
        assert_eq!(prices[1]["nav"], 1.62);
    }

    #[tokio::test]
    async fn test_price_history_default_days() {
        let body: Value = server().get("/api/funds/f1/prices").await.json();
        assert_eq!(body["prices"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_price_history_invalid_days() {
        let response = server()
            .get("/api/funds/f1/prices")
            .add_query_param("days", 0)
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_fund_is_not_found() {
        let server = server();
        for path in ["/api/funds/f99/prices", "/api/funds/f99/industries"] {
            let response = server.get(path).expect_failure().await;
            response.assert_status(StatusCode::NOT_FOUND);
            let body: Value = response.json();
            assert_eq!(body["error"], "not_found");
        }
    }

    #[tokio::test]
    async fn test_industries_heaviest_first() {
        let response = server().get("/api/funds/f1/industries").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["fundName"], "易方达消费精选");
        assert_eq!(body["industries"][0]["industry"], "白酒");
        assert_eq!(body["industries"][1]["industry"], "食品");
    }
}

mod failures {
    use super::*;

    fn broken_server() -> TestServer {
        server_over(Arc::new(DanglingHoldingRepository))
    }

    #[tokio::test]
    async fn test_chat_failure_is_generic_500() {
        let response = broken_server()
            .post("/api/chat/message")
            .json(&json!({ "message": "我的持仓情况" }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({
            "error": "internal_error",
            "message": "处理消息时发生错误"
        }));
    }

    #[tokio::test]
    async fn test_report_failure_is_generic_500() {
        let response = broken_server()
            .get("/api/report/daily")
            .expect_failure()
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({
            "error": "internal_error",
            "message": "生成日报时发生错误"
        }));
    }

    #[tokio::test]
    async fn test_faq_still_answers_over_broken_store() {
        let response = broken_server()
            .post("/api/chat/message")
            .json(&json!({ "message": "赎回费怎么算" }))
            .await;
        response.assert_status_ok();
    }
}

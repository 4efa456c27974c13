//! Assistant tests over the fixture portfolio

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{Period, UserId};
use domain_assistant::{Assistant, ChartKind, Intent, IntentClassifier, KnowledgeBase};
use test_utils::{keyword_free_text_strategy, suffixed_fund_name_strategy, DateFixtures, PortfolioFixtures};

fn assistant() -> Assistant {
    Assistant::new(PortfolioFixtures::repository())
}

fn ask(message: &str) -> domain_assistant::AssistantReply {
    assistant()
        .respond(message, &PortfolioFixtures::user(), DateFixtures::as_of())
        .unwrap()
}

#[test]
fn test_holdings_answer_lists_every_holding() {
    let reply = ask("我的持仓情况");

    assert_eq!(reply.intent, Intent::QueryHoldings);
    assert!(reply.answer.starts_with("您目前持有以下基金：\n"));
    assert!(reply.answer.contains("- 易方达消费精选：持仓1000份，当前价值1700.00元"));
    assert!(reply.answer.contains("- 招商中证白酒：持仓100份，当前价值0.00元"));
    assert_eq!(reply.answer.lines().count(), 6);

    let data = reply.data.unwrap();
    assert_eq!(data.as_array().unwrap().len(), 5);
}

#[test]
fn test_holdings_chart_groups_by_fund() {
    let reply = ask("我持有什么");
    assert_eq!(reply.charts.len(), 1);

    let chart = &reply.charts[0];
    assert_eq!(chart.kind, ChartKind::Pie);
    assert_eq!(chart.data.len(), 4);
    assert_eq!(chart.data[0].name, "易方达消费精选");
    assert_eq!(chart.data[0].value, dec!(2550));
}

#[test]
fn test_no_holdings() {
    let assistant = Assistant::new(PortfolioFixtures::empty_repository());
    let reply = assistant
        .respond("我的持仓", &UserId::default(), DateFixtures::as_of())
        .unwrap();

    assert_eq!(reply.answer, "您目前没有持仓记录。");
    assert!(reply.data.is_none());
    assert!(reply.charts.is_empty());
}

#[test]
fn test_day_profit_answer() {
    let reply = ask("今天赚了多少");
    assert_eq!(reply.intent, Intent::QueryProfit { period: Period::Day });
    assert_eq!(reply.answer, "今日总收益：120.00元，收益率1.64%");
    assert_eq!(reply.data.unwrap()["totalProfit"], 120.0);
}

#[test]
fn test_week_profit_answer() {
    let reply = ask("这周收益怎么样");
    assert_eq!(reply.answer, "本周总收益：50.00元，收益率0.68%");
}

#[test]
fn test_fund_answer_with_attribution() {
    let reply = ask("易方达消费精选今天收益多少");
    assert_eq!(
        reply.answer,
        "易方达消费精选今日收益：120.00元，收益率4.94%\n今日净值上涨4.94%，主要因重仓的白酒行业上涨，其中贵州茅台（权重15.0%）影响较大"
    );
}

#[test]
fn test_fund_not_found() {
    let reply = ask("银河创新成长");
    assert_eq!(reply.answer, "未找到基金\"银河创新成长\"的持仓记录。");
    assert!(reply.data.is_none());
}

#[test]
fn test_report_digest() {
    let reply = ask("生成日报");
    assert_eq!(reply.intent, Intent::QueryReport);
    assert!(reply.answer.starts_with("今日持仓日报：\n总资产：7450.00元\n总收益：120.00元（1.64%）"));
    assert!(reply.answer.contains("- 易方达消费精选：13.33%"));
    assert!(reply.answer.contains("异动提醒：\n- 易方达消费精选大幅上涨13.33%"));
    assert!(reply.answer.ends_with("明日要点：白酒板块今日表现强势，多只重仓白酒的基金净值上涨"));
    assert_eq!(reply.data.unwrap()["date"], "2024-06-28");
}

#[test]
fn test_faq_answer_verbatim() {
    let reply = ask("赎回费怎么算");
    let expected = KnowledgeBase::new().lookup("赎回费").unwrap().answer;
    assert_eq!(reply.answer, expected);
    assert!(reply.data.is_none());
}

#[test]
fn test_sample_store_answers_every_quick_action() {
    let assistant = Assistant::new(PortfolioFixtures::sample());
    for message in ["我的持仓情况", "今天赚了多少", "这周收益怎么样", "本月收益怎么样", "生成日报", "赎回费怎么算"] {
        let reply = assistant
            .respond(message, &UserId::default(), DateFixtures::as_of())
            .unwrap();
        assert!(!reply.answer.is_empty(), "empty answer for {}", message);
    }
}

proptest! {
    #[test]
    fn prop_keyword_free_text_is_qa(text in keyword_free_text_strategy()) {
        let intent = IntentClassifier::new().classify(&text);
        prop_assert_eq!(intent, Intent::Qa { question: text.clone() });
    }

    #[test]
    fn prop_fund_name_with_profit_keyword_is_fund_query(name in suffixed_fund_name_strategy()) {
        let intent = IntentClassifier::new().classify(&format!("{}本月收益", name));
        prop_assert_eq!(
            intent,
            Intent::QueryFund { fund_name: name.to_string(), period: Period::Month }
        );
    }

    #[test]
    fn prop_every_sample_fund_is_found(name in suffixed_fund_name_strategy()) {
        let assistant = Assistant::new(PortfolioFixtures::sample());
        let reply = assistant
            .respond(&format!("{}今天收益", name), &UserId::default(), DateFixtures::as_of())
            .unwrap();
        prop_assert!(reply.answer.starts_with(name), "{}", reply.answer);
    }
}

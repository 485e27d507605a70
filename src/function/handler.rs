// Request handler
// Verb dispatch: OPTIONS preflight, GET feed, everything else 405.

use chrono::NaiveDateTime;

use super::event::{InvocationContext, InvocationEvent};
use super::response::FunctionResponse;
use crate::feed::{self, time};
use crate::logger;

const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";

/// Entry point used by hosting surfaces
pub fn invoke(event: &InvocationEvent, context: &InvocationContext) -> FunctionResponse {
    logger::log_debug(&format!(
        "[{}] invocation {} method={}",
        context.function_name,
        context.request_id.as_deref().unwrap_or("-"),
        event.method()
    ));
    handle(event.method())
}

/// Handle a request at the current wall-clock time
pub fn handle(method: &str) -> FunctionResponse {
    handle_at(method, time::local_now())
}

/// Handle a request as if the clock read `now`
pub fn handle_at(method: &str, now: NaiveDateTime) -> FunctionResponse {
    match method {
        "OPTIONS" => preflight(),
        "GET" => news_feed(now),
        other => {
            logger::log_warning(&format!("Method not allowed: {other}"));
            method_not_allowed()
        }
    }
}

fn preflight() -> FunctionResponse {
    FunctionResponse::new(200, "")
        .header(ALLOW_ORIGIN, "*")
        .header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .header("Access-Control-Max-Age", "86400")
}

fn news_feed(now: NaiveDateTime) -> FunctionResponse {
    let envelope = feed::build_envelope(now);
    match serde_json::to_string(&envelope) {
        Ok(body) => FunctionResponse::new(200, body)
            .header(CONTENT_TYPE, JSON)
            .header(ALLOW_ORIGIN, "*")
            .header("Cache-Control", "max-age=3600"),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize news envelope: {e}"));
            FunctionResponse::new(500, r#"{"error":"Internal server error"}"#)
                .header(CONTENT_TYPE, JSON)
                .header(ALLOW_ORIGIN, "*")
        }
    }
}

fn method_not_allowed() -> FunctionResponse {
    FunctionResponse::new(405, r#"{"error": "Method not allowed"}"#)
        .header(CONTENT_TYPE, JSON)
        .header(ALLOW_ORIGIN, "*")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn body_json(resp: &FunctionResponse) -> Value {
        serde_json::from_str(&resp.body).unwrap()
    }

    #[test]
    fn test_options_preflight() {
        let resp = handle_at("OPTIONS", at(10, 0));
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, "");
        assert!(!resp.is_base64_encoded);
        assert_eq!(resp.header_value("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(resp.header_value("Access-Control-Allow-Methods"), Some("GET, OPTIONS"));
        assert_eq!(resp.header_value("Access-Control-Allow-Headers"), Some("Content-Type"));
        assert_eq!(resp.header_value("Access-Control-Max-Age"), Some("86400"));
    }

    #[test]
    fn test_get_headers() {
        let resp = handle_at("GET", at(10, 0));
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.header_value("Content-Type"), Some("application/json"));
        assert_eq!(resp.header_value("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(resp.header_value("Cache-Control"), Some("max-age=3600"));
    }

    #[test]
    fn test_get_news_ids_and_featured() {
        let body = body_json(&handle_at("GET", at(14, 23)));
        let news = body["news"].as_array().unwrap();
        assert_eq!(news.len(), 6);

        let ids: Vec<u64> = news.iter().map(|n| n["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let featured: Vec<&Value> = news.iter().filter(|n| n["featured"] == json!(true)).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0]["id"], json!(1));
    }

    #[test]
    fn test_get_body_keeps_cyrillic_unescaped() {
        let resp = handle_at("GET", at(14, 23));
        assert!(resp.body.contains("назад"));
        assert!(!resp.body.contains("\\u"));
    }

    #[test]
    fn test_same_hour_is_idempotent() {
        let first = body_json(&handle_at("GET", at(14, 23)));
        let second = body_json(&handle_at("GET", at(14, 59)));
        let titles = |v: &Value| {
            v["news"]
                .as_array()
                .unwrap()
                .iter()
                .map(|n| n["title"].clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(titles(&first), titles(&second));
        assert_eq!(first["weather"], second["weather"]);
        assert_eq!(first["lastUpdate"], json!("2024-06-01T14:23:00"));
        assert_eq!(second["lastUpdate"], json!("2024-06-01T14:59:00"));
    }

    #[test]
    fn test_next_update_is_one_hour_later() {
        let body = body_json(&handle_at("GET", at(8, 15)));
        assert_eq!(body["lastUpdate"], json!("2024-06-01T08:15:00"));
        assert_eq!(body["nextUpdate"], json!("2024-06-01T09:15:00"));
    }

    #[test]
    fn test_time_strings_follow_tiers() {
        let body = body_json(&handle_at("GET", at(14, 23)));
        let times: Vec<&str> = body["news"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["time"].as_str().unwrap())
            .collect();
        assert_eq!(
            times,
            vec![
                "1 час назад",
                "2 часа назад",
                "3 часа назад",
                "4 часа назад",
                "5 часов назад",
                "6 часов назад",
            ]
        );
    }

    #[test]
    fn test_other_methods_rejected() {
        for method in ["POST", "PUT", "DELETE", "PATCH", "HEAD", "get"] {
            let resp = handle_at(method, at(10, 0));
            assert_eq!(resp.status_code, 405, "{method}");
            assert_eq!(body_json(&resp), json!({"error": "Method not allowed"}));
            assert_eq!(resp.header_value("Access-Control-Allow-Origin"), Some("*"));
        }
    }

    #[test]
    fn test_invoke_defaults_to_get() {
        let resp = invoke(&InvocationEvent::default(), &InvocationContext::default());
        assert_eq!(resp.status_code, 200);
    }

    #[test]
    fn test_response_contract_field_names() {
        let value = serde_json::to_value(handle_at("DELETE", at(10, 0))).unwrap();
        assert_eq!(value["statusCode"], json!(405));
        assert_eq!(value["isBase64Encoded"], json!(false));
        assert!(value["headers"].is_object());
        assert!(value["body"].is_string());
    }

    #[test]
    fn test_invoke_null_method_rejected() {
        let event: InvocationEvent = serde_json::from_str(r#"{"httpMethod":null}"#).unwrap();
        let resp = invoke(&event, &InvocationContext::default());
        assert_eq!(resp.status_code, 405);
        assert_eq!(body_json(&resp), json!({"error": "Method not allowed"}));
    }
}

//! Integration tests for HTTP handlers
//!
//! The full stack runs against a mocked weather API: router, forecast
//! service, adapter and HTTP client.
#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

use application::{ForecastPort, ForecastService};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Local;
use infrastructure::WeatherAdapter;
use integration_weather::WeatherConfig;
use presentation_http::{AppState, DEFAULT_LOG_FILTER, create_router};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const POINTS_PATH: &str = "/points/38.8977,-77.0365";
const FORECAST_PATH: &str = "/gridpoints/LWX/97,71/forecast";

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn period(name: &str, start_time: &str, is_daytime: bool, temperature: i32, short: &str) -> Value {
    json!({
        "name": name,
        "startTime": start_time,
        "isDaytime": is_daytime,
        "temperature": temperature,
        "temperatureUnit": "F",
        "shortForecast": short
    })
}

fn server_for(base_url: String) -> TestServer {
    let adapter = WeatherAdapter::with_config(WeatherConfig {
        base_url,
        timeout_secs: 5,
        ..Default::default()
    })
    .expect("adapter");
    let forecasts: Arc<dyn ForecastPort> = Arc::new(adapter);
    let state = AppState::new(ForecastService::new(forecasts));

    TestServer::new(create_router(state)).expect("test server")
}

/// Mount both upstream endpoints, the forecast answering with `periods`
async fn mock_upstream(periods: Vec<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POINTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {
                "forecast": format!("{}{FORECAST_PATH}", mock_server.uri())
            }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "properties": { "periods": periods } })),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

mod weather_endpoint {
    use super::*;

    #[tokio::test]
    async fn classifies_todays_daytime_period() {
        let start = format!("{}T06:00:00-04:00", today());
        let mock_server = mock_upstream(vec![period("Today", &start, true, 85, "Sunny")]).await;
        let server = server_for(mock_server.uri());

        let response = server
            .get("/weather")
            .add_query_param("lat", "38.8977")
            .add_query_param("lon", "-77.0365")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "application/json");
        response.assert_json(&json!({
            "forecast": "Sunny",
            "temperature": 85,
            "classification": "hot"
        }));
    }

    #[tokio::test]
    async fn prefers_todays_daytime_over_earlier_periods() {
        let today = today();
        let mock_server = mock_upstream(vec![
            period("Overnight", &format!("{today}T00:00:00-04:00"), false, 45, "Clear"),
            period("Today", &format!("{today}T06:00:00-04:00"), true, 65, "Partly Sunny"),
        ])
        .await;
        let server = server_for(mock_server.uri());

        let response = server
            .get("/weather?lat=38.8977&lon=-77.0365")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "forecast": "Partly Sunny",
            "temperature": 65,
            "classification": "moderate"
        }));
    }

    #[tokio::test]
    async fn falls_back_to_first_period() {
        let mock_server = mock_upstream(vec![
            period("Tonight", "2001-01-01T18:00:00-05:00", false, 30, "Snow"),
            period("Tuesday", "2001-01-02T06:00:00-05:00", true, 40, "Cloudy"),
        ])
        .await;
        let server = server_for(mock_server.uri());

        let response = server
            .get("/weather?lat=38.8977&lon=-77.0365")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "forecast": "Snow",
            "temperature": 30,
            "classification": "cold"
        }));
    }

    #[tokio::test]
    async fn zero_periods_is_a_server_error() {
        let mock_server = mock_upstream(Vec::new()).await;
        let server = server_for(mock_server.uri());

        let response = server
            .get("/weather?lat=38.8977&lon=-77.0365")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Failed to fetch forecast");
    }

    #[tokio::test]
    async fn connection_refused_hides_details() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let server = server_for(format!("http://127.0.0.1:{port}"));

        let response = server
            .get("/weather?lat=38.8977&lon=-77.0365")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Failed to fetch forecast");
    }

    #[tokio::test]
    async fn upstream_outage_is_a_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(POINTS_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;
        let server = server_for(mock_server.uri());

        let response = server
            .get("/weather?lat=38.8977&lon=-77.0365")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Failed to fetch forecast");
    }
}

mod weather_validation {
    use super::*;

    /// Validation never reaches the upstream
    fn offline_server() -> TestServer {
        server_for("http://127.0.0.1:9".to_string())
    }

    #[tokio::test]
    async fn missing_lon() {
        let response = offline_server().get("/weather?lat=38.8977").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Missing lat or lon parameter");
    }

    #[tokio::test]
    async fn missing_both() {
        let response = offline_server().get("/weather").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Missing lat or lon parameter");
    }

    #[tokio::test]
    async fn empty_lat_counts_as_missing() {
        let response = offline_server().get("/weather?lat=&lon=-77.0365").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Missing lat or lon parameter");
    }

    #[tokio::test]
    async fn invalid_latitude() {
        let response = offline_server().get("/weather?lat=abc&lon=-77.0365").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Invalid latitude");
    }

    #[tokio::test]
    async fn invalid_longitude() {
        let response = offline_server().get("/weather?lat=38.8977&lon=west").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Invalid longitude");
    }

    #[tokio::test]
    async fn overflowing_latitude_is_invalid() {
        let response = offline_server().get("/weather?lat=1e400&lon=-77.0365").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Invalid latitude");
    }

    #[tokio::test]
    async fn latitude_checked_before_longitude() {
        let response = offline_server().get("/weather?lat=abc&lon=xyz").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Invalid latitude");
    }
}

mod ambient_routes {
    use super::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let server = server_for("http://127.0.0.1:9".to_string());

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let server = server_for("http://127.0.0.1:9".to_string());
        let request_id = "0190f5c2-7d3e-7a4b-9c1d-2e3f4a5b6c7d";

        let response = server
            .get("/health")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static(request_id),
            )
            .await;

        assert_eq!(response.header("x-request-id"), request_id);
    }

    #[tokio::test]
    async fn request_id_is_generated() {
        let server = server_for("http://127.0.0.1:9".to_string());

        let response = server.get("/weather").await;

        response.assert_status_bad_request();
        let header = response.header("x-request-id");
        let value = header.to_str().expect("ascii header");
        assert!(uuid::Uuid::parse_str(value).is_ok());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = server_for("http://127.0.0.1:9".to_string());

        server.get("/forecast").await.assert_status_not_found();
    }
}

mod request_logging {
    use super::*;

    /// Log sink shared between the subscriber and the assertions
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn default_filter_records_requests() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = server_for("http://127.0.0.1:9".to_string());
        server.get("/health").await.assert_status_ok();

        let output = logs.contents();
        assert!(
            output.contains("finished processing request"),
            "request was not logged: {output}"
        );
    }
}

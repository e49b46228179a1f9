use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// An address nothing listens on; used where no request may be sent.
const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Helper function to create a Command with --no-color flag for testing
fn tourmate_cmd(base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("tourmate").expect("Failed to find tourmate binary");
    cmd.env_remove("TOURMATE_API_BASE_URL");
    cmd.args(["--no-color", "--api-base-url", base_url]);
    cmd
}

#[test]
fn test_cli_summarize_without_text_fails_validation() {
    tourmate_cmd(UNREACHABLE)
        .arg("summarize")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please paste some text content to summarize.",
        ))
        .stderr(predicate::str::contains("Error:").not())
        .stderr(predicate::str::contains("Summarizing content...").not());
}

#[test]
fn test_cli_budget_missing_required_fields() {
    tourmate_cmd(UNREACHABLE)
        .args(["budget", "--destination", "Rome"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please fill in all required fields: Destination, Duration, Budget Level, and Travelers.",
        ));
}

#[test]
fn test_cli_unreachable_service_reports_error() {
    tourmate_cmd(UNREACHABLE)
        .args(["summarize", "--text", "A week in Crete."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Summarizing content..."))
        .stderr(predicate::str::contains("Error: "));
}

#[test]
fn test_cli_rejects_invalid_base_url() {
    tourmate_cmd("not-a-url")
        .args(["summarize", "--text", "Anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}

#[test]
fn test_cli_forms_catalog() {
    tourmate_cmd(UNREACHABLE)
        .arg("forms")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Forms"))
        .stdout(predicate::str::contains("- **packing**: Safety & Packing Navigator"))
        .stdout(predicate::str::contains("# Travel Content Summarizer"));
}

#[test]
fn test_cli_forms_single_form() {
    tourmate_cmd(UNREACHABLE)
        .args(["forms", "budget"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| --duration-days | number | yes | e.g. 7 |",
        ))
        .stdout(predicate::str::contains("- Vacation Rental (Airbnb)"))
        .stdout(predicate::str::contains("# Travel Itinerary Planner").not());
}

#[test]
fn test_cli_forms_unknown_form() {
    tourmate_cmd(UNREACHABLE)
        .args(["forms", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown form 'weather'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_itinerary_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate/generate-itinerary"))
        .and(body_json(json!({
            "country": "France",
            "city": "Paris",
            "destination": "Louvre",
            "start_date": "2025-06-01",
            "end_date": "2025-06-03",
            "travel_type": "adventure",
            "additional_info": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "itinerary_text": "## Day 1\n- Louvre in the morning\n"
        })))
        .expect(1)
        .mount(&server)
        .await;

    tourmate_cmd(&server.uri())
        .args([
            "itinerary",
            "--country",
            "France",
            "--city",
            "Paris",
            "--destination",
            "Louvre",
            "--start-date",
            "2025-06-01",
            "--end-date",
            "2025-06-03",
            "--travel-type",
            "adventure",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Day 1"))
        .stdout(predicate::str::contains("- Louvre in the morning"))
        .stderr(predicate::str::contains("Generating your plan..."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_itinerary_without_destination() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate/generate-itinerary"))
        .and(body_json(json!({
            "country": "Japan",
            "city": "Kyoto",
            "destination": "",
            "start_date": "2025-04-02",
            "end_date": "2025-04-04",
            "travel_type": "historical",
            "additional_info": "Travelling with grandparents"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "itinerary_text": "## Day 1\n- Kinkaku-ji\n"
        })))
        .expect(1)
        .mount(&server)
        .await;

    tourmate_cmd(&server.uri())
        .args([
            "itinerary",
            "--country",
            "Japan",
            "--state-city",
            "Kyoto",
            "--start-date",
            "2025-04-02",
            "--end-date",
            "2025-04-04",
            "--travel-type",
            "Historical",
            "--additional-info",
            "Travelling with grandparents",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kinkaku-ji"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_budget_fallback_on_empty_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/financial/budget-helper/"))
        .and(body_json(json!({
            "destination": "Rome, Italy",
            "duration_days": 7,
            "budget_level": "Luxury (High-End Experiences)",
            "travelers": "2 adults",
            "accommodation_preference": null,
            "dining_preference": null,
            "activities_interest": ["museums", "food tours"],
            "travel_month": "April"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"budget_details": ""})))
        .expect(1)
        .mount(&server)
        .await;

    tourmate_cmd(&server.uri())
        .args([
            "budget",
            "--destination",
            "Rome, Italy",
            "--duration-days",
            "7",
            "--budget-level",
            "Luxury (High-End Experiences)",
            "--travelers",
            "2 adults",
            "--activities",
            "museums, food tours",
            "--travel-month",
            "April",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Could not generate a budget guide. Please try again with different inputs.",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_server_error_banner() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/guide/packing-safety/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "server overloaded"})))
        .mount(&server)
        .await;

    tourmate_cmd(&server.uri())
        .args([
            "packing",
            "--destination",
            "Tokyo, Japan",
            "--travel-dates",
            "mid-October for 7 days",
            "--travel-style",
            "Solo Trip",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: server overloaded"))
        .stdout(predicate::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_summarize_from_stdin() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/content/summarize-travel-text/"))
        .and(body_json(json!({"text_content": "Two weeks hiking in Patagonia.\n"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "Windy but worth it."})))
        .expect(1)
        .mount(&server)
        .await;

    tourmate_cmd(&server.uri())
        .args(["summarize", "--file", "-"])
        .write_stdin("Two weeks hiking in Patagonia.\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("Windy but worth it.\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_summarize_from_file() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let notes = dir.path().join("diary.txt");
    std::fs::write(&notes, "Rain in Bergen, sun in Oslo.").expect("Failed to write diary");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/content/summarize-travel-text/"))
        .and(body_json(json!({"text_content": "Rain in Bergen, sun in Oslo."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "Mixed weather."})))
        .expect(1)
        .mount(&server)
        .await;

    tourmate_cmd(&server.uri())
        .arg("summarize")
        .arg("--file")
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::diff("Mixed weather.\n"));
}

#[test]
fn test_cli_summarize_missing_file() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    tourmate_cmd(UNREACHABLE)
        .arg("summarize")
        .arg("--file")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read travel content from"));
}

//! Integration tests for chatlens.
//!
//! These tests run whole transcripts through the parser and the analyzer
//! and check the resulting report.

use chatlens::core::{FilterConfig, basic_stats, most_active_time, most_active_users};
use chatlens::prelude::*;
use chatlens::service::{Upload, analyze_upload, respond};

// ============================================================================
// Fixtures
// ============================================================================

const ANDROID_12H: &str = "\
12/01/24, 9:15 AM - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
12/01/24, 9:15 AM - Alice: Good morning everyone!
12/01/24, 9:17 AM - Bob: morning 😀
12/01/24, 9:20 AM - Bob: <Media omitted>
13/01/24, 2:05 PM - Priya: lunch at the new pizza place?
13/01/24, 2:06 PM - Alice: pizza pizza 🍕🍕
13/01/24, 2:06 PM - Alice: https://maps.example.com/pizza
14/01/24, 11:45 PM - Bob: that was terrible, never again
02/02/24, 12:10 AM - Priya: happy february 🎉
";

const IOS_BRACKETED: &str = "\
[01/02/24, 09:00:00] Alice: Hi Bob
[01/02/24, 09:05:00] Bob: <Media omitted>
";

const DASHED_24H: &str = "\
25/12/2023, 23:59 - Alice: almost christmas
26/12/2023, 00:01 - Bob: merry christmas!
26/12/2023, 10:30 - Alice: lovely day
";

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_media_example() {
    let records = parse(IOS_BRACKETED);
    assert_eq!(records.len(), 2);

    let stats = basic_stats(&records);
    assert_eq!(stats.total_messages, 2);
    assert_eq!(stats.media_shared, 1);
    assert_eq!(stats.total_words, 2);
    assert_eq!(stats.links_shared, 0);
}

#[test]
fn test_single_sender_owns_everything() {
    let records = parse(
        "[01/02/24, 09:00:00] Alice: one\n\
         [01/02/24, 09:01:00] Alice: two\n\
         [01/02/24, 09:02:00] Alice: three\n",
    );
    let shares = most_active_users(&records);
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].name, "Alice");
    assert_eq!(shares[0].percent, 100.0);
}

#[test]
fn test_most_active_time_on_empty_set() {
    assert_eq!(most_active_time(&[]).label(), "N/A");
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn test_android_overall_report() {
    let analyzer = Analyzer::new();
    let report = analyzer
        .analyze_text(ANDROID_12H, &FilterConfig::new())
        .unwrap();

    // The encryption notice has no "Sender:" separator and is dropped
    assert_eq!(report.stats.total_messages, 8);
    assert_eq!(report.stats.media_shared, 1);
    assert_eq!(report.stats.links_shared, 1);
    assert_eq!(report.user_list, ["Overall", "Alice", "Bob", "Priya"]);

    let names: Vec<&str> = report
        .most_active_users_percent
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Priya"]);
    assert_eq!(report.most_active_users_percent[0].percent, 37.5);

    assert_eq!(report.common_words[0].word, "pizza");
    assert_eq!(report.emoji_stats[0].emoji, "🍕");
    assert_eq!(report.emoji_stats[0].count, 2);

    let months: Vec<&str> = report
        .monthly_timeline
        .iter()
        .map(|m| m.time.as_str())
        .collect();
    assert_eq!(months, ["January-2024", "February-2024"]);
    assert_eq!(report.daily_timeline.len(), 4);

    assert_eq!(report.most_active_time.label(), "9-10");
    assert!(report.activity_heatmap.get("Friday", "9-10").is_some());
    assert_eq!(report.activity_heatmap.total(), 8);

    assert!(
        report
            .wordcloud
            .as_deref()
            .is_some_and(|uri| uri.starts_with("data:image/svg+xml;base64,"))
    );
    assert_eq!(report.sentiment_timeline.len(), 2);
    assert_eq!(report.sentiment_timeline[0].month_year, "2024-01");
}

#[test]
fn test_android_single_user_report() {
    let analyzer = Analyzer::new();
    let filter = FilterConfig::new().with_user("Bob");
    let report = analyzer.analyze_text(ANDROID_12H, &filter).unwrap();

    assert_eq!(report.stats.total_messages, 3);
    assert_eq!(report.stats.media_shared, 1);
    // Most-active table still covers every sender
    assert_eq!(report.most_active_users_percent.len(), 3);
    assert_eq!(report.avg_message_length.len(), 1);
    assert_eq!(report.avg_message_length[0].user, "Bob");
    assert_eq!(report.avg_message_length[0].avg_length, 3.5);
    assert_eq!(report.user_list.len(), 4);
}

#[test]
fn test_dashed_24h_midnight_buckets() {
    let records = parse(DASHED_24H);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].hour_bucket().label(), "23-00");
    assert_eq!(records[1].hour_bucket().label(), "00-1");
    assert_eq!(records[2].hour_bucket().label(), "10-11");
}

#[test]
fn test_report_json_shape() {
    let report = Analyzer::new()
        .analyze_text(DASHED_24H, &FilterConfig::new())
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json(false).unwrap()).unwrap();

    assert_eq!(json["user_list"][0], "Overall");
    assert_eq!(json["stats"]["total_messages"], 3);
    assert_eq!(json["monthly_timeline"][0]["time"], "December-2023");
    assert_eq!(json["monthly_timeline"][0]["message"], 3);
    assert_eq!(json["daily_timeline"][0]["only_date"], "2023-12-25");
    assert_eq!(json["daily_timeline"][1]["message"], 2);
    assert_eq!(json["weekly_activity"][0]["day"], "Tuesday");
    assert_eq!(json["weekly_activity"][0]["count"], 2);
    assert_eq!(json["activity_heatmap"]["days"][0], "Monday");
    assert_eq!(json["activity_heatmap"]["buckets"][0], "00-1");
    assert_eq!(json["sentiment_timeline"][0]["month_year"], "2023-12");
    assert!(json["most_active_time"].is_string());
}

#[test]
fn test_custom_stop_words_empty_cloud() {
    let analyzer = Analyzer::new().with_stop_words(StopWords::from_text("hi bob"));
    let report = analyzer
        .analyze_text(IOS_BRACKETED, &FilterConfig::new())
        .unwrap();

    assert!(report.wordcloud.is_none());
    assert!(report.common_words.is_empty());
    assert_eq!(report.stats.total_words, 2);
}

#[test]
fn test_service_round_trip() {
    let analyzer = Analyzer::new();
    let upload = Upload::new("WhatsApp Chat with Bob.txt", ANDROID_12H);
    let report = analyze_upload(Some(upload), Some("Priya"), &analyzer).unwrap();
    assert_eq!(report.stats.total_messages, 2);

    let (status, body) = respond(
        Some(Upload::new("chat.txt", "not a chat")),
        None,
        &analyzer,
    );
    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        "Could not process the chat file. Please check if it's a valid WhatsApp export."
    );
}

#[test]
fn test_parser_options_through_analyzer() {
    let raw = "\
01/02/24, 09:00 - Alice: first line
second line
01/02/24, 09:01 - Bob joined using this group's invite link
01/02/24, 09:02 - Bob: hello
";
    let analyzer = Analyzer::new().with_parser_config(
        ParserConfig::new()
            .with_notifications(true)
            .with_merge_continuations(true),
    );
    let records = analyzer.parser().parse_str(raw);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].body, "first line\nsecond line");
    assert!(records[1].is_notification());

    let report = analyzer.analyze(&records, &FilterConfig::new()).unwrap();
    assert_eq!(report.user_list, ["Overall", "Alice", "Bob"]);
    assert_eq!(report.most_active_users_percent.len(), 3);
    assert_eq!(report.avg_message_length.len(), 2);
}

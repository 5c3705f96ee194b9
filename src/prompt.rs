//! Deterministic prompt assembly. Identical inputs produce byte-identical
//! prompts; the only free variable is the Colombo calendar date the caller
//! passes in.

use chrono::FixedOffset;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::feeds::FeedItem;

/// Prepended to the prompt for the single retry after a failed extraction.
pub const STRICT_JSON_PREFIX: &str = "Return ONLY JSON. No markdown. No extra text.\n\n";

// Sri Lanka has no DST; the offset is fixed year-round.
static COLOMBO_OFFSET: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("+05:30 is in range"));

/// Current calendar date in Colombo, `%Y-%m-%d`.
pub fn today_in_colombo() -> String {
    chrono::Utc::now()
        .with_timezone(&*COLOMBO_OFFSET)
        .format("%Y-%m-%d")
        .to_string()
}

/// The signal blob embedded verbatim in the prompt. Key names are part of
/// the model contract; field order is the serialized order.
#[derive(Serialize)]
struct InputBundle<'a> {
    date: &'a str,
    google_trends_lk_daily: &'a [FeedItem],
    google_news_lk: &'a [FeedItem],
}

// Shown to the model as a literal template; only the {date} slot is filled.
const REPORT_SCHEMA: &str = r#"{
  "date": "{date}",
  "summary": "",
  "trends": [
    {
      "name": "",
      "why_trending": "",
      "signals": "",
      "score": {"growth":0,"sl_relevance":0,"brand_fit":0,"feasibility":0,"risk":0,"total":0},
      "decision": "FOLLOW or SKIP",
      "groupA_campaign": {
        "big_idea": "",
        "post_ideas": ["","",""],
        "video_ideas": [
          {"hook":"","plot":"","script":"","shot_list":["","",""],"caption":"","hashtags":""},
          {"hook":"","plot":"","script":"","shot_list":["","",""],"caption":"","hashtags":""}
        ],
        "weekly_calendar": [
          {"day":"Mon","content":""}, {"day":"Tue","content":""}, {"day":"Wed","content":""},
          {"day":"Thu","content":""}, {"day":"Fri","content":""}, {"day":"Sat","content":""}, {"day":"Sun","content":""}
        ],
        "kpis": {"reach":"","saves":"","clicks":"","dm_inquiries":""}
      },
      "groupB_campaign": {
        "big_idea": "",
        "post_ideas": ["","",""],
        "video_ideas": [
          {"hook":"","plot":"","script":"","shot_list":["","",""],"caption":"","hashtags":""},
          {"hook":"","plot":"","script":"","shot_list":["","",""],"caption":"","hashtags":""}
        ],
        "weekly_calendar": [
          {"day":"Mon","content":""}, {"day":"Tue","content":""}, {"day":"Wed","content":""},
          {"day":"Thu","content":""}, {"day":"Fri","content":""}, {"day":"Sat","content":""}, {"day":"Sun","content":""}
        ],
        "kpis": {"reach":"","saves":"","store_visits":"","calls":""}
      }
    }
  ],
  "email_subject": "",
  "email_body": ""
}"#;

/// Assemble the full analysis prompt: persona, brand groups, scoring rubric
/// with the FOLLOW threshold, safety exclusions, the schema template and the
/// collected signals.
pub fn build_prompt(date: &str, trends_daily: &[FeedItem], news: &[FeedItem]) -> String {
    let bundle = InputBundle {
        date,
        google_trends_lk_daily: trends_daily,
        google_news_lk: news,
    };
    let signals = serde_json::to_string_pretty(&bundle).unwrap_or_else(|_| "{}".to_string());
    let schema = REPORT_SCHEMA.replace("{date}", date);

    format!(
        "
You are a Sri Lanka trend analyst and marketing strategist.

Brands
Group A combined: Studio Nalini + Nalini e shop
Group B separate: Nalini book shop

Goal
Create a Monday report of trends to follow for the coming week in Sri Lanka.

Scoring each trend 0 to 25
Growth 0-5
Sri Lanka relevance 0-5
Brand fit 0-5
Feasibility 0-5 (phone-friendly content)
Risk 0-5 (5 is safest)
Only FOLLOW if total >= 18
Avoid politics, tragedy, hate, misinformation.

Output ONLY valid JSON with this schema:
{schema}

Input signals:
{signals}
"
    )
}

//! Query routing and reply augmentation tests.

use crate::hub::{IntelligenceHub, ReplyKind};
use crate::news::NEWS_SOURCES;

#[tokio::test(start_paused = true)]
async fn test_news_route_embeds_summary_and_articles() {
    let mut hub = IntelligenceHub::with_seed(21);

    let reply = hub.handle("latest breaking news").await;
    assert_eq!(reply.kind, ReplyKind::News);
    assert_eq!(reply.articles.len(), 8);
    // Assistant content leads, digest summary follows.
    assert!(reply.content.starts_with(&reply.assistant.content));
    assert!(reply.content.contains("**Market Intelligence Report**"));
    assert!(reply.content.contains("**Featured Articles Below**"));
}

#[tokio::test(start_paused = true)]
async fn test_trends_route_lists_all_topics() {
    let mut hub = IntelligenceHub::with_seed(21);

    let reply = hub.handle("what's trending now?").await;
    assert_eq!(reply.kind, ReplyKind::Trends);
    assert_eq!(reply.trends.len(), 5);
    assert!(reply.content.contains("**Detailed Trend Analysis**"));
    assert!(reply.content.contains("1. AI Agent Automation"));
    assert!(reply.content.contains("5. Healthcare AI Breakthroughs"));
}

#[tokio::test(start_paused = true)]
async fn test_feed_route_reports_active_counts() {
    let mut hub = IntelligenceHub::with_seed(21);

    let reply = hub.handle("show me the live feed status").await;
    assert_eq!(reply.kind, ReplyKind::Feeds);
    assert_eq!(reply.feeds.len(), NEWS_SOURCES.len());
    assert!(reply
        .content
        .contains(&format!("/{} sources active", NEWS_SOURCES.len())));
}

#[tokio::test(start_paused = true)]
async fn test_email_route_schedules_digest() {
    let mut hub = IntelligenceHub::with_seed(21);

    let reply = hub.handle("send digest").await;
    assert_eq!(reply.kind, ReplyKind::Email);
    assert!(reply.content.contains("**Automated Email Digest Delivered!**"));
    assert!(reply.content.contains("Digest scheduled and sent to 2 users."));
    assert!(reply.content.contains("All 2 subscribers notified successfully!"));
}

#[tokio::test(start_paused = true)]
async fn test_search_route_strips_command_words() {
    let mut hub = IntelligenceHub::with_seed(21);

    let reply = hub.handle("search fintech").await;
    assert_eq!(reply.kind, ReplyKind::Search);
    assert!(reply.content.contains("**Smart Search Results: \"fintech\"**"));
    assert!(reply
        .articles
        .iter()
        .any(|article| article.title.contains("Fintech")));
}

#[tokio::test(start_paused = true)]
async fn test_news_outranks_trends_for_breaking_news() {
    let mut hub = IntelligenceHub::with_seed(21);

    // "breaking news" matches the news route before the trend route.
    let reply = hub.handle("breaking news").await;
    assert_eq!(reply.kind, ReplyKind::News);
}

#[tokio::test(start_paused = true)]
async fn test_conversational_query_stays_chat() {
    let mut hub = IntelligenceHub::with_seed(21);

    let reply = hub.handle("thanks!").await;
    assert_eq!(reply.kind, ReplyKind::Chat);
    assert!(reply.trends.is_empty());
    assert!(reply.feeds.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_hub_reset_clears_assistant_context() {
    let mut hub = IntelligenceHub::with_seed(21);

    hub.handle("latest news").await;
    hub.handle("trending now").await;
    assert_eq!(hub.assistant().context().len(), 2);

    hub.reset();
    assert!(hub.assistant().context().is_empty());
}

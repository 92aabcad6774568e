//! Mock news desk.
//!
//! Simulates the external news pipeline: canned articles, trending topics,
//! live feed status, digest summaries, and the varied canned replies the
//! front-end falls back to. Everything is generated in-process; the async
//! fetch surface is the external-service stub boundary.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::chat::Sentiment;

/// The premium sources the desk claims to monitor.
pub const NEWS_SOURCES: &[&str] = &[
    "TechCrunch",
    "VentureBeat",
    "Forbes",
    "Bloomberg",
    "Reuters",
    "Wired",
    "The Verge",
    "Hacker News",
    "Product Hunt",
    "First Round Review",
    "a16z",
    "Y Combinator",
    "Fast Company",
    "Harvard Business Review",
    "MIT Technology Review",
    "Ars Technica",
    "TechRadar",
    "Engadget",
    "Mashable",
    "The Next Web",
    "Business Insider",
    "Wall Street Journal",
    "Financial Times",
    "CNBC",
    "MarketWatch",
];

/// Digest summary openers.
pub const SUMMARY_OPENERS: &[&str] = &[
    "🔥 Breaking insights from the startup ecosystem!",
    "📊 Here's what's trending in the market right now:",
    "🚀 Fresh intelligence from top industry sources:",
    "💡 Latest developments that founders need to know:",
    "⚡ Real-time market pulse - just for you:",
    "🎯 Curated insights from 25+ premium sources:",
    "🌟 Today's most important business developments:",
    "📈 Market intelligence update - hot off the press:",
];

const TIME_AGO_LABELS: &[&str] = &[
    "2 min ago",
    "15 min ago",
    "1 hour ago",
    "3 hours ago",
    "6 hours ago",
    "just now",
    "30 min ago",
];

const MARKET_INSIGHTS: &[&str] = &[
    "AI automation is reshaping traditional business models across industries",
    "Sustainable tech investments are outperforming traditional sectors by 23%",
    "Remote-first companies report 40% higher employee satisfaction rates",
    "Fintech innovations are driving financial inclusion in emerging markets",
    "Healthcare AI is reducing diagnostic errors by up to 60%",
    "E-commerce personalization is increasing conversion rates by 35%",
    "Cybersecurity spending is projected to reach $300B by 2025",
    "Climate tech startups are attracting record venture capital funding",
];

/// A canned news article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub published_at: chrono::DateTime<Utc>,
    pub category: String,
    pub sentiment: Sentiment,
    pub author: Option<String>,
    pub read_time: Option<String>,
    pub image_url: Option<String>,
}

/// A canned trending topic with its analysis blurb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub topic: String,
    pub mentions: u32,
    pub growth: String,
    pub sentiment: String,
    pub key_points: Vec<String>,
    pub sources: Vec<String>,
    pub confidence: u8,
    pub related_topics: Vec<String>,
}

/// Simulated health of one live source feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Active,
    Updating,
    Error,
}

/// One entry in the live feed status board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveFeed {
    pub source: String,
    pub status: FeedStatus,
    pub last_update: String,
    pub articles_count: u32,
    pub category: String,
}

/// Which canned reply pool to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariedKind {
    Greeting,
    Help,
    Error,
    Success,
}

/// The mock producer behind the news surface. Holds its own seedable random
/// source so feed statuses and summary picks are reproducible.
pub struct NewsDesk {
    rng: StdRng,
}

impl Default for NewsDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsDesk {
    /// Create a desk with entropy-seeded randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a desk with a fixed seed, for deterministic output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Simulated status board: one entry per monitored source. Roughly 90%
    /// of sources report active; the rest split between updating and error.
    pub async fn live_feeds(&mut self) -> Vec<LiveFeed> {
        NEWS_SOURCES
            .iter()
            .map(|source| {
                let status = if self.rng.gen_bool(0.9) {
                    FeedStatus::Active
                } else if self.rng.gen_bool(0.5) {
                    FeedStatus::Updating
                } else {
                    FeedStatus::Error
                };
                LiveFeed {
                    source: source.to_string(),
                    status,
                    last_update: self.pick(TIME_AGO_LABELS),
                    articles_count: 5 + self.rng.gen_range(0..50),
                    category: source_category(source).to_string(),
                }
            })
            .collect()
    }

    /// The canned article set, freshly timestamped within the last day.
    pub async fn latest_articles(&mut self) -> Vec<NewsArticle> {
        article_templates()
            .into_iter()
            .enumerate()
            .map(|(index, template)| {
                let minutes_ago = self.rng.gen_range(0..1440);
                NewsArticle {
                    id: (index + 1).to_string(),
                    url: format!("https://example.com/article-{}", index + 1),
                    published_at: Utc::now() - Duration::minutes(minutes_ago),
                    image_url: Some(format!(
                        "https://images.unsplash.com/photo-{}?w=400&h=200&fit=crop",
                        1_500_000_000_000u64 + index as u64
                    )),
                    ..template
                }
            })
            .collect()
    }

    /// Substring search over title, description, and category. AI-flavored
    /// queries get the AI-specific exclusives prepended.
    pub async fn search(&mut self, query: &str) -> Vec<NewsArticle> {
        let needle = query.to_lowercase();
        let mut results: Vec<NewsArticle> = self
            .latest_articles()
            .await
            .into_iter()
            .filter(|article| {
                article.title.to_lowercase().contains(&needle)
                    || article.description.to_lowercase().contains(&needle)
                    || article.category.to_lowercase().contains(&needle)
            })
            .collect();

        if needle.contains("ai") || needle.contains("artificial intelligence") {
            let mut exclusives = ai_exclusive_articles();
            exclusives.append(&mut results);
            results = exclusives;
        }

        results
    }

    /// The 5 canned trending topics.
    pub async fn trending_topics(&mut self) -> Vec<TrendingTopic> {
        trending_topic_data()
    }

    /// Render a digest summary over a set of articles: random opener,
    /// per-category grouping, random insight lines, and a sentiment tally.
    pub fn digest_summary(&mut self, articles: &[NewsArticle]) -> String {
        let opener = self.pick(SUMMARY_OPENERS);

        let mut categories: Vec<&str> = Vec::new();
        for article in articles {
            if !categories.contains(&article.category.as_str()) {
                categories.push(article.category.as_str());
            }
        }

        let mut summary = format!("{opener}\n\n");
        summary.push_str(&format!(
            "📊 **Market Intelligence Report** ({} articles from {} sources)\n\n",
            articles.len(),
            NEWS_SOURCES.len()
        ));

        for category in categories {
            let in_category: Vec<&NewsArticle> = articles
                .iter()
                .filter(|article| article.category == category)
                .collect();
            summary.push_str(&format!(
                "{} **{}** ({} updates)\n",
                category_emoji(category),
                category.to_uppercase(),
                in_category.len()
            ));
            for article in in_category.iter().take(2) {
                summary.push_str(&format!("• {} - {}\n", article.title, article.source));
            }
            summary.push('\n');
        }

        summary.push_str("🎯 **Key Market Insights:**\n");
        for _ in 0..4 {
            summary.push_str(&format!("• {}\n", self.pick(MARKET_INSIGHTS)));
        }
        summary.push('\n');

        summary.push_str(&format!(
            "📈 **Sentiment Analysis:** {}\n",
            overall_sentiment(articles)
        ));
        summary.push_str(&format!(
            "🔄 **Live Updates:** Every 15 minutes from {} premium sources\n",
            NEWS_SOURCES.len()
        ));
        summary.push_str(&format!(
            "⏰ **Generated:** {}\n",
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));
        summary.push_str(&format!(
            "🎯 **Confidence Score:** {}%",
            85 + self.rng.gen_range(0..15)
        ));

        summary
    }

    /// A random reply from one of the fixed canned pools.
    pub fn varied_response(&mut self, kind: VariedKind) -> String {
        let pool = match kind {
            VariedKind::Greeting => GREETING_RESPONSES,
            VariedKind::Help => HELP_RESPONSES,
            VariedKind::Error => ERROR_RESPONSES,
            VariedKind::Success => SUCCESS_RESPONSES,
        };
        self.pick(pool)
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        pool.choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }
}

pub const GREETING_RESPONSES: &[&str] = &[
    "🚀 Welcome to your personal market intelligence hub! I'm analyzing trends from 25+ sources in real-time.",
    "👋 Hey there! Ready to dive into the latest market insights? I've got fresh data from top industry sources.",
    "💡 Hi! I'm your AI trend analyst. I can help you discover what's happening in your industry right now.",
    "🎯 Welcome! I'm monitoring the startup ecosystem 24/7. What market intelligence can I share with you today?",
];

pub const HELP_RESPONSES: &[&str] = &[
    "🤖 I'm your market intelligence assistant! Try these commands:\n\n📰 **'latest news'** - Real-time updates from 25+ sources\n📈 **'trending now'** - Hot topics with growth metrics\n🔍 **'search [topic]'** - Find specific industry news\n📧 **'send digest'** - Email summary to subscribers\n💼 **'industry analysis'** - Deep dive into market trends",
    "🔥 Here's what I can do for you:\n\n🌟 **Live News Feed** - Fresh updates every 15 minutes\n📊 **Trend Analysis** - AI-powered market insights\n🎯 **Smart Search** - Find exactly what you need\n📧 **Auto Digest** - Daily summaries via email\n💡 **Custom Alerts** - Never miss important developments",
    "⚡ Your personal market radar is active! Commands:\n\n📱 **'breaking news'** - Latest developments\n🚀 **'startup funding'** - Investment updates\n🤖 **'ai trends'** - Technology insights\n💰 **'market analysis'** - Financial trends\n📧 **'email update'** - Send digest to team",
];

pub const ERROR_RESPONSES: &[&str] = &[
    "🔄 Oops! I'm having trouble fetching the latest data. The market never sleeps, and neither do I - let me try again!",
    "⚠️ Hmm, seems like there's a hiccup in the data stream. Don't worry, I'm reconnecting to our premium sources now.",
    "🛠️ Technical glitch detected! I'm working on getting you the freshest market intelligence. Please try again in a moment.",
];

pub const SUCCESS_RESPONSES: &[&str] = &[
    "✅ Mission accomplished! Your market intelligence is ready.",
    "🎉 Done! Fresh insights delivered straight from the source.",
    "⚡ Success! Your personalized market update is complete.",
    "🚀 All set! Latest trends and insights are now available.",
];

fn source_category(source: &str) -> &'static str {
    match source {
        "TechCrunch" => "Technology",
        "VentureBeat" => "Startups",
        "Forbes" => "Business",
        "Bloomberg" => "Finance",
        "Reuters" => "News",
        "Wired" => "Technology",
        "The Verge" => "Technology",
        "Hacker News" => "Tech Community",
        "Product Hunt" => "Products",
        "First Round Review" => "Venture Capital",
        "a16z" => "Venture Capital",
        "Y Combinator" => "Startups",
        _ => "General",
    }
}

fn category_emoji(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "technology" => "🤖",
        "business" => "💼",
        "finance" => "💰",
        "healthcare" => "🏥",
        "environment" => "🌱",
        "security" => "🔒",
        "workplace" => "🏢",
        "ecommerce" => "🛒",
        _ => "📰",
    }
}

fn overall_sentiment(articles: &[NewsArticle]) -> String {
    let total = articles.len();
    if total == 0 {
        return "Balanced 📊 (Mixed sentiment across 0 sources)".to_string();
    }

    let positive = articles
        .iter()
        .filter(|a| a.sentiment == Sentiment::Positive)
        .count();
    let negative = articles
        .iter()
        .filter(|a| a.sentiment == Sentiment::Negative)
        .count();
    let neutral = total - positive - negative;

    let positive_percent = (positive * 100 + total / 2) / total;
    let negative_percent = (negative * 100 + total / 2) / total;

    if positive > negative && positive > neutral {
        format!("Bullish 📈 ({positive_percent}% positive sentiment)")
    } else if negative > positive && negative > neutral {
        format!("Bearish 📉 ({negative_percent}% negative sentiment)")
    } else {
        format!("Balanced 📊 (Mixed sentiment across {total} sources)")
    }
}

/// The canned article pool; ids, urls, and timestamps are filled in by the
/// desk per fetch.
fn article_templates() -> Vec<NewsArticle> {
    let blank = |title: &str,
                 description: &str,
                 source: &str,
                 category: &str,
                 sentiment: Sentiment,
                 author: &str,
                 read_time: &str| NewsArticle {
        id: String::new(),
        title: title.to_string(),
        description: description.to_string(),
        url: String::new(),
        source: source.to_string(),
        published_at: Utc::now(),
        category: category.to_string(),
        sentiment,
        author: Some(author.to_string()),
        read_time: Some(read_time.to_string()),
        image_url: None,
    };

    vec![
        blank(
            "OpenAI Unveils GPT-5 with Revolutionary Reasoning Capabilities",
            "The latest AI model demonstrates unprecedented logical reasoning and problem-solving abilities, potentially transforming enterprise applications across industries.",
            "TechCrunch",
            "technology",
            Sentiment::Positive,
            "Sarah Chen",
            "4 min read",
        ),
        blank(
            "Startup Funding Surge: $3.2B Raised This Week Despite Economic Headwinds",
            "Venture capital continues flowing into promising startups, with AI, healthcare, and climate tech leading investment rounds.",
            "VentureBeat",
            "business",
            Sentiment::Positive,
            "Michael Rodriguez",
            "6 min read",
        ),
        blank(
            "Remote Work Revolution: 85% of Companies Adopt Permanent Hybrid Models",
            "New research reveals the lasting impact of remote work on corporate culture, productivity, and real estate decisions.",
            "Harvard Business Review",
            "workplace",
            Sentiment::Neutral,
            "Dr. Jennifer Walsh",
            "8 min read",
        ),
        blank(
            "Climate Tech Boom: Green Startups Raise Record $2.1B in Q4",
            "Sustainable technology companies attract unprecedented investment as climate concerns drive innovation and regulatory changes.",
            "Bloomberg",
            "environment",
            Sentiment::Positive,
            "David Kim",
            "5 min read",
        ),
        blank(
            "Cybersecurity Alert: 70% Increase in AI-Powered Attacks",
            "Security experts warn of sophisticated new threats as cybercriminals leverage artificial intelligence for more effective attacks.",
            "Wired",
            "security",
            Sentiment::Negative,
            "Alex Thompson",
            "7 min read",
        ),
        blank(
            "Fintech Disruption: Digital Banks Capture 40% Market Share",
            "Traditional banking faces unprecedented competition as digital-first financial services gain mainstream adoption.",
            "Financial Times",
            "finance",
            Sentiment::Neutral,
            "Emma Watson",
            "6 min read",
        ),
        blank(
            "Healthcare AI Breakthrough: 98% Accuracy in Early Cancer Detection",
            "Revolutionary AI system outperforms human radiologists in detecting early-stage cancers, promising to save thousands of lives.",
            "MIT Technology Review",
            "healthcare",
            Sentiment::Positive,
            "Dr. Robert Chang",
            "9 min read",
        ),
        blank(
            "E-commerce Evolution: Social Commerce Drives 60% of Online Sales",
            "Social media platforms become primary shopping destinations as consumers embrace integrated shopping experiences.",
            "Fast Company",
            "ecommerce",
            Sentiment::Positive,
            "Lisa Park",
            "5 min read",
        ),
    ]
}

/// Extra exclusives surfaced only for AI-flavored searches.
fn ai_exclusive_articles() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: "ai-1".to_string(),
            title: "Google DeepMind Achieves Breakthrough in Protein Folding Prediction".to_string(),
            description: "AlphaFold 3 demonstrates 99.5% accuracy in predicting protein structures, accelerating drug discovery timelines.".to_string(),
            url: "https://example.com/deepmind-protein".to_string(),
            source: "Nature".to_string(),
            published_at: Utc::now() - Duration::hours(3),
            category: "technology".to_string(),
            sentiment: Sentiment::Positive,
            author: Some("Dr. Maria Gonzalez".to_string()),
            read_time: Some("12 min read".to_string()),
            image_url: None,
        },
        NewsArticle {
            id: "ai-2".to_string(),
            title: "Enterprise AI Adoption Reaches 78% Among Fortune 500 Companies".to_string(),
            description: "New survey reveals rapid AI integration across industries, with productivity gains averaging 35% in early adopters.".to_string(),
            url: "https://example.com/enterprise-ai".to_string(),
            source: "McKinsey".to_string(),
            published_at: Utc::now() - Duration::hours(5),
            category: "business".to_string(),
            sentiment: Sentiment::Positive,
            author: Some("James Liu".to_string()),
            read_time: Some("7 min read".to_string()),
            image_url: None,
        },
    ]
}

fn trending_topic_data() -> Vec<TrendingTopic> {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        TrendingTopic {
            topic: "AI Agent Automation".to_string(),
            mentions: 456,
            growth: "+34%".to_string(),
            sentiment: "very positive".to_string(),
            key_points: strings(&[
                "Enterprise AI agents reducing operational costs by 40%",
                "New funding rounds for AI automation startups exceed $500M",
                "Microsoft and Google expanding AI agent capabilities",
            ]),
            sources: strings(&["TechCrunch", "VentureBeat", "a16z", "First Round"]),
            confidence: 94,
            related_topics: strings(&["Machine Learning", "Enterprise Software", "Productivity Tools"]),
        },
        TrendingTopic {
            topic: "Sustainable Tech Investment".to_string(),
            mentions: 342,
            growth: "+28%".to_string(),
            sentiment: "positive".to_string(),
            key_points: strings(&[
                "Climate tech funding reaches record $8.1B in Q4",
                "Carbon capture startups gaining enterprise traction",
                "ESG compliance driving green tech adoption",
            ]),
            sources: strings(&["Bloomberg", "Reuters", "Financial Times"]),
            confidence: 89,
            related_topics: strings(&["Climate Tech", "ESG", "Clean Energy"]),
        },
        TrendingTopic {
            topic: "Remote Work Infrastructure".to_string(),
            mentions: 298,
            growth: "+22%".to_string(),
            sentiment: "neutral".to_string(),
            key_points: strings(&[
                "Hybrid work models becoming permanent for 70% of companies",
                "Virtual collaboration tools see sustained growth",
                "Office real estate market continues transformation",
            ]),
            sources: strings(&["Harvard Business Review", "Fast Company", "Wired"]),
            confidence: 87,
            related_topics: strings(&["Future of Work", "PropTech", "Collaboration Tools"]),
        },
        TrendingTopic {
            topic: "Fintech Regulation Changes".to_string(),
            mentions: 267,
            growth: "+19%".to_string(),
            sentiment: "mixed".to_string(),
            key_points: strings(&[
                "New crypto regulations creating compliance challenges",
                "Open banking initiatives expanding globally",
                "Digital payment security requirements tightening",
            ]),
            sources: strings(&["Wall Street Journal", "CNBC", "Financial Times"]),
            confidence: 82,
            related_topics: strings(&["Cryptocurrency", "Digital Payments", "RegTech"]),
        },
        TrendingTopic {
            topic: "Healthcare AI Breakthroughs".to_string(),
            mentions: 234,
            growth: "+41%".to_string(),
            sentiment: "very positive".to_string(),
            key_points: strings(&[
                "AI diagnostics showing 95% accuracy in clinical trials",
                "Drug discovery timelines reduced by 60% with AI",
                "Telemedicine platforms integrating advanced AI features",
            ]),
            sources: strings(&["MIT Technology Review", "Nature", "Forbes"]),
            confidence: 91,
            related_topics: strings(&["Medical AI", "Drug Discovery", "Telemedicine"]),
        },
    ]
}

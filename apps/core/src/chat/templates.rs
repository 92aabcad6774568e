//! Fixed template and suggestion pools.
//!
//! All assistant copy lives here as static tables; the composer only ever
//! selects, interpolates, and concatenates.

use super::intent::Intent;

/// Session-opening greetings, one chosen at random per `greeting` call.
pub const GREETINGS: &[&str] = &[
    "👋 Hey there! I'm your AI market intelligence assistant. I've been analyzing trends from 25+ premium sources in real-time. What market insights can I help you discover today?",
    "🚀 Welcome back! I'm continuously monitoring the startup ecosystem and have fresh insights ready. What would you like to explore - trending topics, breaking news, or specific industry analysis?",
    "💡 Hi! I'm your personal trend analyst powered by AI. I've processed thousands of articles today and can provide instant insights on any market topic. How can I assist you?",
    "🎯 Hello! I'm here to help you stay ahead of market trends. I'm connected to live feeds from TechCrunch, Bloomberg, a16z, and 22 other premium sources. What intelligence do you need?",
    "⚡ Great to see you! I'm your AI-powered market radar, constantly scanning for emerging trends and opportunities. Ready to dive into some market intelligence?",
];

/// Replies for the thanks shortcut.
pub const THANKS_REPLIES: &[&str] = &[
    "You're absolutely welcome! 😊 I'm here 24/7 to keep you informed about market trends. Is there anything else you'd like to explore?",
    "Happy to help! 🎉 That's what I'm here for - making market intelligence accessible and actionable. Any other trends catching your interest?",
    "My pleasure! 💫 I love helping founders and PMs stay ahead of the curve. Feel free to ask me about any industry or trend you're curious about!",
];

/// Replies for the goodbye shortcut.
pub const GOODBYE_REPLIES: &[&str] = &[
    "👋 Thanks for using TrendDigest! I'll keep monitoring the markets for you. Come back anytime for fresh insights!",
    "🚀 See you later! I'll be here analyzing trends 24/7. Don't forget to check your email for the daily digest!",
    "💡 Goodbye for now! I'll continue tracking market intelligence and have new insights ready when you return.",
];

/// Openers for funding-intent responses.
pub const FUNDING_OPENERS: &[&str] = &[
    "💰 **Funding Intelligence Alert!** Based on my analysis of recent funding rounds, here are the hottest sectors attracting investment:",
    "🎯 **Investment Trend Analysis:** I've identified significant funding patterns across multiple sectors. Here's what VCs are betting on:",
    "📈 **Funding Landscape Update:** My real-time analysis shows these sectors are experiencing unprecedented investment activity:",
];

/// Openers for competition-intent responses.
pub const COMPETITION_OPENERS: &[&str] = &[
    "🔍 **Competitive Intelligence Report:** I've analyzed competitor movements across your industry. Here's what you need to know:",
    "⚔️ **Market Competition Analysis:** Based on my monitoring of industry sources, here are the key competitive developments:",
    "🎯 **Competitor Tracking Update:** My AI analysis has detected significant moves in your competitive landscape:",
];

/// Fixed suggestion list attached to thanks replies.
pub const THANKS_SUGGESTIONS: &[&str] = &["Latest trends", "Send digest", "Market analysis"];

/// Fixed follow-up list attached to thanks replies.
pub const THANKS_FOLLOW_UPS: &[&str] = &[
    "What industry interests you most?",
    "Would you like a custom trend report?",
];

/// Bonus suggestions added when the "ai" entity is present.
pub const AI_BONUS_SUGGESTIONS: &[&str] = &["AI adoption trends", "Machine learning funding"];

/// Bonus suggestions added when the "fintech" entity is present.
pub const FINTECH_BONUS_SUGGESTIONS: &[&str] = &["Digital banking trends", "Payment innovations"];

/// Banner prepended to high-urgency responses.
pub const URGENT_BANNER: &str = "🚨 **URGENT MARKET ALERT** 🚨\n\n";

/// Banner prepended to medium-urgency responses.
pub const PRIORITY_BANNER: &str = "⚡ **Priority Intelligence** \n\n";

/// Base suggestion list for an intent.
pub fn base_suggestions(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Funding => &["Recent funding rounds", "VC investment trends", "Startup valuations"],
        Intent::Trends => &[
            "Emerging technologies",
            "Market disruptions",
            "Consumer behavior shifts",
        ],
        Intent::News => &["Breaking developments", "Industry updates", "Competitive moves"],
        Intent::Competition => &["Competitor analysis", "Market positioning", "Strategic moves"],
        Intent::Email => &["Schedule digest", "Customize preferences", "View subscribers"],
        Intent::Help | Intent::General => &[
            "Latest trends",
            "Send digest",
            "Market analysis",
            "Industry insights",
        ],
    }
}

/// Follow-up question pool for an intent. Intents without a dedicated pool
/// fall back to the general list.
pub fn follow_up_pool(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Funding => &[
            "Which funding stage interests you most?",
            "Are you looking at specific geographic regions?",
            "Would you like to see investor sentiment analysis?",
        ],
        Intent::Trends => &[
            "Which industry vertical should I focus on?",
            "Are you interested in short-term or long-term trends?",
            "Would you like competitive trend analysis?",
        ],
        Intent::News => &[
            "Should I filter by specific news categories?",
            "Are you tracking any particular companies?",
            "Would you like sentiment analysis on the news?",
        ],
        _ => &[
            "What specific market segment interests you?",
            "Are you looking for investment opportunities?",
            "Would you like me to set up custom alerts?",
        ],
    }
}

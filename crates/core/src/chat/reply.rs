/// Topic the canned reply is chosen for, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTopic {
    Sales,
    Support,
    Knowledge,
    Pricing,
    Compliance,
    Greeting,
    Fallback,
}

const SALES_KEYWORDS: &[&str] =
    &["sdr", "sales", "outbound", "prospecting", "pipeline", "meetings booked"];
const SUPPORT_KEYWORDS: &[&str] =
    &["support", "helpdesk", "help desk", "ticket", "customer service"];
const KNOWLEDGE_KEYWORDS: &[&str] = &["knowledge", "docs", "documentation", "faq", "wiki"];
const PRICING_KEYWORDS: &[&str] = &["pricing", "price", "cost", "how much", "budget", "quote"];
const COMPLIANCE_KEYWORDS: &[&str] = &["compliance", "security", "soc 2", "soc2", "gdpr", "hipaa"];
/// Matched as whole words; "hi" would otherwise fire on "this".
const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "howdy", "greetings"];

const SALES_REPLY: &str = "Our AI SDR agents research prospects, write personalized outreach and book qualified meetings straight onto your team's calendar. Want me to set up a quick walkthrough?";
const SUPPORT_REPLY: &str = "Our support agents resolve common helpdesk tickets around the clock and hand anything tricky to your team with full context. Which helpdesk are you using today?";
const KNOWLEDGE_REPLY: &str = "We turn your docs, FAQs and internal wikis into an assistant that answers questions with citations. Where does your documentation live right now?";
const PRICING_REPLY: &str = "Pricing depends on the agents you deploy and your monthly volume. Most teams start with a pilot. Share your email and a rough volume and we'll send a tailored quote.";
const COMPLIANCE_REPLY: &str = "Security is built in: data is encrypted in transit and at rest, access is role-based and every action lands in an audit log. Happy to share our compliance documentation.";
const GREETING_REPLY: &str = "Hi there! I can help with sales development, customer support or knowledge automation. What brings you here today?";
const FALLBACK_REPLY: &str = "Thanks for reaching out! Tell me a bit about your use case and I'll point you to the right solution, or leave your name and email and our team will follow up.";

impl ReplyTopic {
    /// Classify a message by keyword, first match wins.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if contains_any(SALES_KEYWORDS) {
            Self::Sales
        } else if contains_any(SUPPORT_KEYWORDS) {
            Self::Support
        } else if contains_any(KNOWLEDGE_KEYWORDS) {
            Self::Knowledge
        } else if contains_any(PRICING_KEYWORDS) {
            Self::Pricing
        } else if contains_any(COMPLIANCE_KEYWORDS) {
            Self::Compliance
        } else if lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| GREETING_WORDS.contains(&word))
        {
            Self::Greeting
        } else {
            Self::Fallback
        }
    }

    #[must_use]
    pub const fn reply(&self) -> &'static str {
        match *self {
            Self::Sales => SALES_REPLY,
            Self::Support => SUPPORT_REPLY,
            Self::Knowledge => KNOWLEDGE_REPLY,
            Self::Pricing => PRICING_REPLY,
            Self::Compliance => COMPLIANCE_REPLY,
            Self::Greeting => GREETING_REPLY,
            Self::Fallback => FALLBACK_REPLY,
        }
    }
}

/// Canned reply for a chat message.
#[must_use]
pub fn generate_reply(message: &str) -> &'static str {
    ReplyTopic::classify(message).reply()
}

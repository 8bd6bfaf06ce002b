use crate::config::NoteMarkConfig;
use crate::gateway::Quiz;
use crate::group::CategoryGroup;
use crate::model::Topic;

pub mod categories;
pub mod config;
pub mod demo;
pub mod domains;
pub mod list;
pub mod search;
pub mod study;
pub mod view;

pub use self::categories::CategoryCount;
pub use self::demo::DemoFrame;
pub use self::domains::DomainCount;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of a command, for the UI layer to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_topics: Vec<Topic>,
    pub groups: Vec<CategoryGroup>,
    pub category_counts: Vec<CategoryCount>,
    pub domain_counts: Vec<DomainCount>,
    pub transcript: Vec<DemoFrame>,
    pub outline: Vec<String>,
    pub quiz: Option<Quiz>,
    pub answer: Option<String>,
    pub config: Option<NoteMarkConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_topics(mut self, topics: Vec<Topic>) -> Self {
        self.listed_topics = topics;
        self
    }

    pub fn with_groups(mut self, groups: Vec<CategoryGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_category_counts(mut self, counts: Vec<CategoryCount>) -> Self {
        self.category_counts = counts;
        self
    }

    pub fn with_domain_counts(mut self, counts: Vec<DomainCount>) -> Self {
        self.domain_counts = counts;
        self
    }

    pub fn with_transcript(mut self, transcript: Vec<DemoFrame>) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn with_outline(mut self, outline: Vec<String>) -> Self {
        self.outline = outline;
        self
    }

    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quiz = Some(quiz);
        self
    }

    pub fn with_answer(mut self, answer: String) -> Self {
        self.answer = Some(answer);
        self
    }

    pub fn with_config(mut self, config: NoteMarkConfig) -> Self {
        self.config = Some(config);
        self
    }
}

//! # Rendering Module
//!
//! Styled terminal output via the `outstanding` crate. Templates are
//! defined in `templates/` and rendered with automatic terminal color
//! detection.
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust
//! because they require Unicode-aware processing. Templates handle
//! presentation: style application, section separators, and branching on
//! which sections exist.

use super::styles::{names, NOTEMARK_THEME};
use super::templates::{
    DEMO_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, TEXT_LIST_TEMPLATE, TOPIC_TEMPLATE,
};
use notemark::api::{CategoryCount, CmdMessage, DemoFrame, DomainCount, MessageLevel};
use notemark::group::CategoryGroup;
use notemark::model::Topic;
use notemark::slug::to_slug;
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 100;
const COLUMN_GAP: usize = 2;
const RULE: &str = "--------------------------------";
const SEPARATOR: &str = "================================";

#[derive(Serialize)]
struct TopicLineData {
    // Pre-computed layout components (Rust handles width calculations)
    left_pad: String,
    name: String,
    name_pad: String,
    slug: String,
    slug_pad: String,
    description: String,
}

#[derive(Serialize)]
struct GroupData {
    category: String,
    topics: Vec<TopicLineData>,
}

#[derive(Serialize)]
struct ListData {
    groups: Vec<GroupData>,
    empty: bool,
}

#[derive(Serialize)]
struct StepData {
    no: String,
    text: String,
}

#[derive(Serialize)]
struct ExampleData {
    code: String,
    indent: String,
    text: String,
}

#[derive(Serialize)]
struct FullTopicData {
    name: String,
    gap: String,
    slug: String,
    category: String,
    rule: String,
    description: String,
    has_steps: bool,
    steps: Vec<StepData>,
    has_examples: bool,
    examples: Vec<ExampleData>,
    has_real_world: bool,
    real_world: String,
    separator: String,
}

#[derive(Serialize)]
struct TopicsData {
    topics: Vec<FullTopicData>,
}

#[derive(Serialize)]
struct TextLineData {
    text: String,
    pad: String,
    suffix: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<TextLineData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct FrameData {
    label: String,
    output: String,
}

#[derive(Serialize)]
struct DemoData {
    title: String,
    frames: Vec<FrameData>,
}

/// Renders a grouped topic listing to a string.
pub fn render_topic_groups(groups: &[CategoryGroup]) -> String {
    render_topic_groups_internal(groups, None)
}

fn render_topic_groups_internal(groups: &[CategoryGroup], use_color: Option<bool>) -> String {
    if groups.is_empty() {
        let data = ListData {
            groups: vec![],
            empty: true,
        };
        return render_list(&data, use_color);
    }

    // Columns align across the whole listing, not per group.
    let all: Vec<&Topic> = groups.iter().flat_map(|g| g.topics.iter()).collect();
    let name_width = all.iter().map(|t| t.name.width()).max().unwrap_or(0);
    let slug_width = all
        .iter()
        .map(|t| to_slug(&t.name).width())
        .max()
        .unwrap_or(0);

    let fixed = COLUMN_GAP + name_width + COLUMN_GAP + slug_width + COLUMN_GAP;
    let available = LINE_WIDTH.saturating_sub(fixed);

    let group_data = groups
        .iter()
        .map(|group| GroupData {
            category: group.category.clone(),
            topics: group
                .topics
                .iter()
                .map(|topic| {
                    let slug = to_slug(&topic.name);
                    TopicLineData {
                        left_pad: " ".repeat(COLUMN_GAP),
                        name_pad: " ".repeat(COLUMN_GAP + name_width - topic.name.width()),
                        slug_pad: " ".repeat(COLUMN_GAP + slug_width - slug.width()),
                        name: topic.name.clone(),
                        slug,
                        description: truncate_to_width(&topic.description, available),
                    }
                })
                .collect(),
        })
        .collect();

    let data = ListData {
        groups: group_data,
        empty: false,
    };
    render_list(&data, use_color)
}

fn render_list(data: &ListData, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(LIST_TEMPLATE, data, ThemeChoice::from(&*NOTEMARK_THEME), c),
        None => render(LIST_TEMPLATE, data, ThemeChoice::from(&*NOTEMARK_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders full topic pages, one per resolved slug.
pub fn render_full_topics(topics: &[Topic]) -> String {
    render_full_topics_internal(topics, None)
}

fn render_full_topics_internal(topics: &[Topic], use_color: Option<bool>) -> String {
    let entries = topics
        .iter()
        .map(|topic| FullTopicData {
            name: topic.name.clone(),
            gap: " ".repeat(COLUMN_GAP),
            slug: to_slug(&topic.name),
            category: topic.category.clone(),
            rule: RULE.to_string(),
            description: topic.description.clone(),
            has_steps: !topic.how_it_works.is_empty(),
            steps: topic
                .how_it_works
                .iter()
                .enumerate()
                .map(|(i, text)| StepData {
                    no: format!("{}.", i + 1),
                    text: text.clone(),
                })
                .collect(),
            has_examples: !topic.examples.is_empty(),
            examples: topic
                .examples
                .iter()
                .map(|e| ExampleData {
                    code: format!("$ {}", e.code),
                    indent: " ".repeat(COLUMN_GAP),
                    text: e.text.clone(),
                })
                .collect(),
            has_real_world: topic.real_world.is_some(),
            real_world: topic.real_world.clone().unwrap_or_default(),
            separator: SEPARATOR.to_string(),
        })
        .collect();

    let data = TopicsData { topics: entries };

    match use_color {
        Some(c) => render_with_color(TOPIC_TEMPLATE, &data, ThemeChoice::from(&*NOTEMARK_THEME), c),
        None => render(TOPIC_TEMPLATE, &data, ThemeChoice::from(&*NOTEMARK_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders categories with their topic counts.
pub fn render_categories(counts: &[CategoryCount]) -> String {
    let lines: Vec<TextLineData> = counts
        .iter()
        .map(|c| TextLineData {
            text: c.name.clone(),
            pad: "  ".to_string(),
            suffix: format!("({})", c.count),
        })
        .collect();
    render_text_list_internal(lines, "No categories found.", None)
}

/// Renders the domain index with topic counts.
pub fn render_domains(counts: &[DomainCount]) -> String {
    let key_width = counts
        .iter()
        .map(|c| c.domain.key().width())
        .max()
        .unwrap_or(0);

    let lines: Vec<TextLineData> = counts
        .iter()
        .map(|c| TextLineData {
            pad: " ".repeat(COLUMN_GAP + key_width - c.domain.key().width()),
            text: c.domain.key().to_string(),
            suffix: format!("{} ({} topics)", c.title, c.count),
        })
        .collect();
    render_text_list_internal(lines, "No domains found.", None)
}

fn render_text_list_internal(
    lines: Vec<TextLineData>,
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        empty: lines.is_empty(),
        lines,
        empty_message: empty_message.to_string(),
    };

    match use_color {
        Some(c) => render_with_color(
            TEXT_LIST_TEMPLATE,
            &data,
            ThemeChoice::from(&*NOTEMARK_THEME),
            c,
        ),
        None => render(TEXT_LIST_TEMPLATE, &data, ThemeChoice::from(&*NOTEMARK_THEME)),
    }
    .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders a demo transcript: initial state, then one block per event.
pub fn render_transcript(name: &str, frames: &[DemoFrame]) -> String {
    render_transcript_internal(name, frames, None)
}

fn render_transcript_internal(
    name: &str,
    frames: &[DemoFrame],
    use_color: Option<bool>,
) -> String {
    let frame_data = frames
        .iter()
        .map(|f| FrameData {
            label: if f.event.is_empty() {
                format!("[{}]", f.state)
            } else {
                format!("[{} → {}]", f.event, f.state)
            },
            output: f.output.clone(),
        })
        .collect();

    let data = DemoData {
        title: format!("demo: {}", name),
        frames: frame_data,
    };

    match use_color {
        Some(c) => render_with_color(DEMO_TEMPLATE, &data, ThemeChoice::from(&*NOTEMARK_THEME), c),
        None => render(DEMO_TEMPLATE, &data, ThemeChoice::from(&*NOTEMARK_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*NOTEMARK_THEME)).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use notemark::group;

    fn groups_of(topics: Vec<Topic>) -> Vec<CategoryGroup> {
        group::by_category(&topics)
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_topic_groups_internal(&[], Some(false));
        assert_eq!(output.trim(), "No topics found.");
    }

    #[test]
    fn test_render_single_group() {
        let groups = groups_of(vec![Topic::new(
            "grep",
            "Text Processing",
            "search text using patterns",
        )]);

        let output = render_topic_groups_internal(&groups, Some(false));

        assert!(output.contains("Text Processing"));
        assert!(output.contains("grep"));
        assert!(output.contains("search text using patterns"));
    }

    #[test]
    fn test_columns_align_across_groups() {
        let groups = groups_of(vec![
            Topic::new("ls", "Files", "list directory contents"),
            Topic::new("git rebase", "History", "replay commits"),
        ]);

        let output = render_topic_groups_internal(&groups, Some(false));
        let lines: Vec<&str> = output.lines().collect();

        let ls_line = lines.iter().find(|l| l.contains("ls")).unwrap();
        let rebase_line = lines.iter().find(|l| l.contains("git rebase")).unwrap();

        // Descriptions start at the same column.
        let ls_col = ls_line.find("list directory").unwrap();
        let rebase_col = rebase_line.find("replay commits").unwrap();
        assert_eq!(ls_col, rebase_col);
    }

    #[test]
    fn test_groups_separated_by_blank_line() {
        let groups = groups_of(vec![
            Topic::new("ls", "Files", "list"),
            Topic::new("ps", "Processes", "snapshot"),
        ]);

        let output = render_topic_groups_internal(&groups, Some(false));
        assert!(output.contains("\n\nProcesses"));
    }

    #[test]
    fn test_render_full_topic_with_all_sections() {
        let topic = Topic::new("gzip", "Archiving", "compress files")
            .steps(["read input", "deflate", "write .gz"])
            .example("gzip -k app.log", "keep the original")
            .real_world("Log rotation compresses with gzip.");

        let output = render_full_topics_internal(&[topic], Some(false));

        assert!(output.contains("gzip"));
        assert!(output.contains("How it works"));
        assert!(output.contains("1. read input"));
        assert!(output.contains("Examples"));
        assert!(output.contains("$ gzip -k app.log"));
        assert!(output.contains("Real world"));
    }

    #[test]
    fn test_render_full_topic_skips_absent_sections() {
        let topic = Topic::new("cd", "Files", "change directory");
        let output = render_full_topics_internal(&[topic], Some(false));

        assert!(!output.contains("How it works"));
        assert!(!output.contains("Examples"));
        assert!(!output.contains("Real world"));
    }

    #[test]
    fn test_multiple_topics_get_a_separator() {
        let topics = vec![
            Topic::new("cd", "Files", "change directory"),
            Topic::new("ls", "Files", "list contents"),
        ];
        let output = render_full_topics_internal(&topics, Some(false));
        assert!(output.contains(SEPARATOR));
    }

    #[test]
    fn test_render_categories() {
        let counts = vec![
            CategoryCount {
                name: "Text Processing".to_string(),
                count: 4,
            },
            CategoryCount {
                name: "Permissions".to_string(),
                count: 2,
            },
        ];

        let output = render_categories(&counts);
        assert!(output.contains("Text Processing"));
        assert!(output.contains("(4)"));
    }

    #[test]
    fn test_render_transcript_labels_events() {
        let frames = vec![
            DemoFrame {
                event: String::new(),
                state: "original".to_string(),
                output: "$ ls".to_string(),
            },
            DemoFrame {
                event: "compress".to_string(),
                state: "compressed".to_string(),
                output: "$ gzip".to_string(),
            },
        ];

        let output = render_transcript_internal("gzip", &frames, Some(false));
        assert!(output.contains("demo: gzip"));
        assert!(output.contains("[original]"));
        assert!(output.contains("[compress → compressed]"));
    }

    #[test]
    fn test_render_messages_empty() {
        let output = render_messages(&[]);
        assert!(output.is_empty());
    }

    #[test]
    fn test_render_messages_multiple() {
        let messages = vec![
            CmdMessage::info("Info message"),
            CmdMessage::warning("Warning message"),
            CmdMessage::error("Error message"),
        ];
        let output = render_messages(&messages);
        assert!(output.contains("Info message"));
        assert!(output.contains("Warning message"));
        assert!(output.contains("Error message"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 20), "short");
        let truncated = truncate_to_width("a very long description indeed", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 10);
    }
}

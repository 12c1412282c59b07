//! Terminal rendering of the task list.

use colored::{Color, Colorize};

use tasklist::domain::{Priority, Task, TaskStats};
use tasklist::theme::Theme;

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub high: Color,
    pub medium: Color,
    pub low: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                high: Color::Red,
                medium: Color::Yellow,
                low: Color::Green,
                muted: Color::BrightBlack,
            },
            Theme::Dark => Self {
                high: Color::BrightRed,
                medium: Color::BrightYellow,
                low: Color::BrightGreen,
                muted: Color::White,
            },
        }
    }

    pub fn priority(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// One line per task, numbered from 1.
pub fn render_tasks(tasks: &[Task], theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    if tasks.is_empty() {
        return format!("{}\n", "No tasks yet".color(palette.muted));
    }

    let width = tasks.len().to_string().len();
    let mut out = String::new();
    for (i, task) in tasks.iter().enumerate() {
        let check = if task.completed { "[x]" } else { "[ ]" };
        let label = format!("{:<6}", task.priority.label()).color(palette.priority(task.priority));
        let name = if task.completed {
            task.name.color(palette.muted).strikethrough()
        } else {
            task.name.normal()
        };
        out.push_str(&format!("{:>width$}. {} {} {}\n", i + 1, check, label, name, width = width));
    }
    out
}

pub fn render_stats(stats: TaskStats, theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    format!("{} done, {} pending", stats.completed, stats.pending)
        .color(palette.muted)
        .to_string()
}

use crate::state::Memory;
use unicode_width::UnicodeWidthStr;

pub const MENU_WIDTH: usize = 54;
pub const MAIN_MENU_CHOICES: usize = 5;

const MAIN_MENU_TITLE: &str = "Advanced Calculator Options";
const MAIN_MENU_ENTRIES: [&str; MAIN_MENU_CHOICES] = [
    "Mathematical Operations (+, -, x, /, %, exp, log, |x|, x^y, n!)",
    "Trigonometric Operations (sin, cos, tan, cot, hyp)",
    "Number System Conversions (Dec/Bin/Hex)",
    "Clear/Restart Calculator",
    "Exit Program",
];
const BACK_LABEL: &str = "Back to Previous Operation/Main Menu";

/// Static description of one handler's choice list.
///
/// The handler's valid range is `1..=entries.len() + 1`, the last number
/// being "back".
pub struct SubMenu {
    pub title: &'static str,
    pub notes: &'static [&'static str],
    pub entries: &'static [&'static str],
}

impl SubMenu {
    pub fn back_choice(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn render(&self) -> String {
        let mut out = format!("\n--- {} ---\n", self.title);
        for note in self.notes {
            out.push_str(note);
            out.push('\n');
        }
        for (index, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}. {entry}\n", index + 1));
        }
        out.push_str(&format!("{}. {BACK_LABEL}\n", self.back_choice()));
        out.push_str(&format!("Enter choice (1-{}): ", self.back_choice()));
        out
    }
}

pub fn center_title(title: &str, width: usize) -> String {
    let pad = width.saturating_sub(title.width()) / 2;
    format!("{}{title}", " ".repeat(pad))
}

pub fn render_main_menu(memory: &Memory) -> String {
    let rule = "=".repeat(MENU_WIDTH);
    let mut out = format!(
        "\n{rule}\n{}\n{rule}\n",
        center_title(MAIN_MENU_TITLE, MENU_WIDTH)
    );
    out.push_str(&format!(
        "Last Result (R): {:.4} | Previous Result (P): {:.4}\n",
        memory.last(),
        memory.previous()
    ));
    for (index, entry) in MAIN_MENU_ENTRIES.iter().enumerate() {
        out.push_str(&format!("{}. {entry}\n", index + 1));
    }
    out.push_str(&"-".repeat(MENU_WIDTH));
    out.push_str(&format!("\nEnter your choice (1-{MAIN_MENU_CHOICES}): "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: SubMenu = SubMenu {
        title: "Sample Operations",
        notes: &["NOTE: sample."],
        entries: &["First", "Second"],
    };

    #[test]
    fn test_center_title_uses_display_width() {
        assert_eq!(center_title("abcd", 10), "   abcd");
        assert_eq!(center_title("°°", 6), "  °°");
        assert_eq!(center_title("too wide", 4), "too wide");
    }

    #[test]
    fn test_submenu_numbers_back_after_entries() {
        let rendered = SAMPLE.render();
        assert_eq!(SAMPLE.back_choice(), 3);
        assert!(rendered.starts_with("\n--- Sample Operations ---\nNOTE: sample.\n1. First\n"));
        assert!(rendered.contains("3. Back to Previous Operation/Main Menu\n"));
        assert!(rendered.ends_with("Enter choice (1-3): "));
    }

    #[test]
    fn test_main_menu_shows_memory_slots() {
        let mut memory = Memory::new();
        memory.update(5.0);
        memory.update(12.5);
        let rendered = render_main_menu(&memory);
        assert!(rendered.contains("Last Result (R): 12.5000 | Previous Result (P): 5.0000"));
        assert!(rendered.contains("5. Exit Program"));
        assert!(rendered.ends_with("Enter your choice (1-5): "));
    }
}

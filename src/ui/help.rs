//! The `--list_commands` listing.

/// One titled group of key bindings.
struct Section {
    title: &'static str,
    commands: &'static [(&'static str, &'static str)],
}

const SECTIONS: [Section; 2] = [
    Section {
        title: "Commands available during run time:",
        commands: &[
            ("q  Q", "Quit"),
            ("c", "Change color mode"),
            ("s", "Toggle show seconds"),
            ("e", "Toggle show date"),
            ("E", "Cycle date formats"),
            ("b", "Toggle blink colon"),
            ("m", "Toggle military time"),
            ("n", "Toggle colon off and on"),
            ("d", "Reset settings to defaults"),
            (
                "1,2,3",
                "Color cycle timing 1-every second, 2-every minute, 3-every hour",
            ),
            (
                "r,t,y,u,i,o,p,[",
                "Select color: Red, Green, Blue, Yellow, Magenta, Cyan, White, Black",
            ),
            (
                "R,T,Y,U,I,O,P,{",
                "Change background color: Red, Green, Blue, Yellow, Magenta, Cyan, White, Black",
            ),
        ],
    },
    Section {
        title: "STOP WATCH Commands:",
        commands: &[
            ("q  Q", "Quit"),
            ("g", "Start or pause stop watch"),
            ("h", "Reset stop watch to 00:00:00"),
            (
                "r,t,y,u,i,o,p,[",
                "Select color: Red, Green, Blue, Yellow, Magenta, Cyan, White, Black",
            ),
        ],
    },
];

/// Keys wider than this go on their own line.
const KEY_COLUMN: usize = 8;

/// Returns the full listing of interactive commands.
pub fn running_commands() -> String {
    let mut out = String::new();
    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(section.title);
        out.push('\n');
        for (key, desc) in section.commands {
            if key.len() < KEY_COLUMN {
                out.push_str(&format!(" {key:<width$}{desc}\n", width = KEY_COLUMN));
            } else {
                out.push_str(&format!(" {key}\n {:width$}{desc}\n", "", width = KEY_COLUMN));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_header() {
        assert!(running_commands().starts_with("Commands available during run time"));
    }

    #[test]
    fn test_listing_covers_both_modes() {
        let text = running_commands();
        assert!(text.contains("STOP WATCH Commands:"));
        assert!(text.contains(" g       Start or pause stop watch"));
        assert!(text.contains(" s       Toggle show seconds"));
    }

    #[test]
    fn test_long_keys_wrap() {
        let text = running_commands();
        assert!(text.contains(" r,t,y,u,i,o,p,[\n         Select color"));
    }
}

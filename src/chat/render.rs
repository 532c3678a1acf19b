//! Output rendering for the chat application.
//!
//! Renderers draw a [`ChatView`]; they never talk to the server. The default
//! implementation prints to the terminal and uses ANSI escape codes to tell
//! user lines from bot lines.

use std::io::{self, Stdout, Write};

use crate::chat::view::ChatView;
use crate::types::{Message, Role};

/// ANSI escape code for dim text (used for the modal frame).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for user messages).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for green text (used for bot messages).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - In-memory capture for tests
pub trait Renderer: Send {
    /// Print one entry of the visual log.
    fn print_message(&mut self, message: &Message);

    /// Print an error message that is not part of the visual log.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Print the body of an open modal.
    fn print_modal(&mut self, body: &str);

    /// Called when the page was reloaded.
    fn print_new_page(&mut self, location: &str);
}

/// Tracks how much of a view has been rendered.
///
/// Front-ends call [`LogCursor::render`] after every interaction; it prints
/// the messages appended since the last call and notices page reloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogCursor {
    page: u64,
    rendered: usize,
}

impl LogCursor {
    /// Creates a cursor at the start of the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders everything new in `view`.
    pub fn render(&mut self, view: &ChatView, renderer: &mut dyn Renderer) {
        if view.page() != self.page {
            self.page = view.page();
            self.rendered = 0;
            renderer.print_new_page(view.location());
        }
        for message in view.since(self.rendered) {
            renderer.print_message(message);
        }
        self.rendered = view.log().len();
    }

    /// Renders the entire log of the current page.
    pub fn render_all(&mut self, view: &ChatView, renderer: &mut dyn Renderer) {
        self.page = view.page();
        self.rendered = 0;
        self.render(view, renderer);
    }
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_message(&mut self, message: &Message) {
        let (label, color) = match message.role {
            Role::User => ("You", ANSI_CYAN),
            Role::Bot => ("Bot", ANSI_GREEN),
        };
        if self.use_color {
            println!("{color}{label}:{ANSI_RESET} {}", message.text);
        } else {
            println!("{label}: {}", message.text);
        }
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        if self.use_color {
            eprintln!("{ANSI_RED}Error:{ANSI_RESET} {error}");
        } else {
            eprintln!("Error: {error}");
        }
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
        self.flush();
    }

    fn print_modal(&mut self, body: &str) {
        let rule = "-".repeat(60);
        if self.use_color {
            println!("{ANSI_DIM}{rule}{ANSI_RESET}");
        } else {
            println!("{rule}");
        }
        for line in body.lines() {
            println!("  {line}");
        }
        if self.use_color {
            println!("{ANSI_DIM}{rule}{ANSI_RESET}");
        } else {
            println!("{rule}");
        }
        self.flush();
    }

    fn print_new_page(&mut self, location: &str) {
        println!("-- page reloaded ({location}) --");
        self.flush();
    }
}

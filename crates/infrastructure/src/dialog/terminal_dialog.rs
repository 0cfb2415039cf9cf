use async_trait::async_trait;
use outbound_guard_application::ports::ConfirmationDialog;
use outbound_guard_domain::{ButtonRole, DialogChoice, DialogIcon, DialogPrompt, DismissReason};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{debug, warn};

type Input = Box<dyn AsyncBufRead + Send + Unpin>;
type Output = Box<dyn AsyncWrite + Send + Unpin>;

/// Confirmation dialog rendered on a terminal.
///
/// The terminal is one shared surface, so dialogs are shown one at a time;
/// each call still reads its own answer and returns its own choice.
///
/// Answers:
///   `y`, `yes` or the confirm text → Confirmed
///   `esc`, `q`                    → Dismissed (escape)
///   end of input                  → Dismissed (input closed)
///   anything else                 → Cancelled
pub struct TerminalDialog {
    terminal: Mutex<(Input, Output)>,
    use_color: bool,
}

impl TerminalDialog {
    pub fn new(
        input: impl AsyncBufRead + Send + Unpin + 'static,
        output: impl AsyncWrite + Send + Unpin + 'static,
    ) -> Self {
        Self {
            terminal: Mutex::new((Box::new(input), Box::new(output))),
            use_color: false,
        }
    }

    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }
}

#[async_trait]
impl ConfirmationDialog for TerminalDialog {
    async fn present(&self, prompt: &DialogPrompt) -> DialogChoice {
        let mut terminal = self.terminal.lock().await;
        let (input, output) = &mut *terminal;

        let rendered = render_prompt(prompt, self.use_color);
        if let Err(e) = write_all_flush(output, rendered.as_bytes()).await {
            warn!(error = %e, "Failed to render confirmation dialog");
            return DialogChoice::Dismissed(DismissReason::InputClosed);
        }

        let mut answer = String::new();
        let choice = match input.read_line(&mut answer).await {
            Ok(0) => DialogChoice::Dismissed(DismissReason::InputClosed),
            Ok(_) => interpret_answer(&answer, prompt),
            Err(e) => {
                warn!(error = %e, "Failed to read dialog answer");
                DialogChoice::Dismissed(DismissReason::InputClosed)
            }
        };

        debug!(?choice, "Terminal dialog answered");
        choice
    }
}

async fn write_all_flush(output: &mut Output, bytes: &[u8]) -> std::io::Result<()> {
    output.write_all(bytes).await?;
    output.flush().await
}

/// Text shown for a prompt; buttons follow the prompt's layout order.
pub fn render_prompt(prompt: &DialogPrompt, use_color: bool) -> String {
    let icon = match prompt.icon {
        DialogIcon::Warning => "⚠",
    };

    let buttons: Vec<String> = prompt
        .buttons()
        .iter()
        .map(|button| {
            let key = match button.role {
                ButtonRole::Confirm => "y",
                ButtonRole::Cancel => "n",
            };
            let label = format!("[{key}] {}", button.text);
            if use_color {
                paint(&label, button.color)
            } else {
                label
            }
        })
        .collect();

    format!(
        "\n{icon}  {}\n{}\n\n{}\n> ",
        prompt.title,
        prompt.message,
        buttons.join("   ")
    )
}

fn interpret_answer(answer: &str, prompt: &DialogPrompt) -> DialogChoice {
    let answer = answer.trim().to_lowercase();

    if answer == "y" || answer == "yes" || answer == prompt.confirm_text.to_lowercase() {
        DialogChoice::Confirmed
    } else if answer == "esc" || answer == "q" {
        DialogChoice::Dismissed(DismissReason::EscapeKey)
    } else {
        DialogChoice::Cancelled
    }
}

/// Wraps `text` in a 24-bit ANSI foreground color; unknown colors leave it plain.
fn paint(text: &str, hex: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => format!("\x1b[1;38;2;{r};{g};{b}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match digits.len() {
        3 => {
            let mut expanded = digits.chars().map(|c| channel(&format!("{c}{c}")));
            Some((expanded.next()??, expanded.next()??, expanded.next()??))
        }
        6 => Some((
            channel(digits.get(0..2)?)?,
            channel(digits.get(2..4)?)?,
            channel(digits.get(4..6)?)?,
        )),
        _ => None,
    }
}

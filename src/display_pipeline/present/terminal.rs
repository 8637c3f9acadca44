//! Inline terminal figure display
//!
//! Figures are PNG-encoded and written to stdout through the Kitty graphics
//! protocol or the iTerm2 inline-image protocol, depending on the terminal.
//! Terminals without inline-image support get a stable text placeholder, so
//! interactive display degrades rather than errors.

use std::io::Write;
use std::sync::OnceLock;

use base64::Engine as _;
use tracing::debug;

use crate::display_pipeline::common::error::Result;
use crate::display_pipeline::present::presenter::FigurePresenter;
use crate::display_pipeline::surface::FigureImage;

/// The inline-image protocol supported by the user's terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageProtocol {
    /// Kitty graphics protocol (Kitty, WezTerm, Ghostty, Konsole 22+).
    Kitty,
    /// iTerm2 inline image protocol.
    Iterm2,
    /// No inline image support.
    Unsupported,
}

/// Detect which inline-image protocol the current terminal supports.
///
/// Detection is cached for the lifetime of the process.
pub fn detect_protocol() -> ImageProtocol {
    static CACHED: OnceLock<ImageProtocol> = OnceLock::new();
    *CACHED.get_or_init(|| {
        protocol_from_env(
            std::env::var("TERM_PROGRAM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
            std::env::var("KITTY_WINDOW_ID").is_ok(),
            std::env::var("GHOSTTY_RESOURCES_DIR").is_ok(),
        )
    })
}

/// Protocol heuristics over the relevant environment values.
fn protocol_from_env(
    term_program: Option<&str>,
    term: Option<&str>,
    kitty_window_id: bool,
    ghostty: bool,
) -> ImageProtocol {
    if let Some(prog) = term_program {
        let lower = prog.to_ascii_lowercase();
        if lower == "iterm.app" || lower == "iterm2" {
            return ImageProtocol::Iterm2;
        }
        // WezTerm supports Kitty
        if lower == "wezterm" {
            return ImageProtocol::Kitty;
        }
    }

    if ghostty {
        return ImageProtocol::Kitty;
    }

    if let Some(term) = term {
        if term.to_ascii_lowercase().contains("kitty") {
            return ImageProtocol::Kitty;
        }
    }

    if kitty_window_id {
        return ImageProtocol::Kitty;
    }

    ImageProtocol::Unsupported
}

/// Maximum bytes per Kitty chunk payload.
const KITTY_CHUNK_SIZE: usize = 4096;

/// Escape sequence displaying PNG bytes through the Kitty graphics protocol.
fn encode_kitty(png_bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png_bytes);
    let mut out = String::with_capacity(b64.len() + 256);

    let chunks: Vec<&str> = b64
        .as_bytes()
        .chunks(KITTY_CHUNK_SIZE)
        .map(|c| std::str::from_utf8(c).unwrap_or(""))
        .collect();

    for (i, chunk) in chunks.iter().enumerate() {
        let is_last = i == chunks.len() - 1;
        let more = u8::from(!is_last);

        if i == 0 {
            // First chunk carries action=transmit+display, format=100 (PNG)
            write_kitty_chunk(&mut out, &format!("a=T,f=100,m={more}"), chunk);
        } else {
            write_kitty_chunk(&mut out, &format!("m={more}"), chunk);
        }
    }

    out
}

fn write_kitty_chunk(out: &mut String, control: &str, payload: &str) {
    // Kitty uses APC: ESC _ G <control> ; <payload> ESC \
    out.push_str("\x1b_G");
    out.push_str(control);
    out.push(';');
    out.push_str(payload);
    out.push_str("\x1b\\");
}

/// Escape sequence displaying PNG bytes through the iTerm2 inline-image
/// protocol.
fn encode_iterm2(png_bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png_bytes);
    let size = png_bytes.len();
    // OSC 1337 ; File=<params> : <base64> BEL
    format!("\x1b]1337;File=size={size};inline=1:{b64}\x07")
}

/// Stable text placeholder for terminals without inline-image support.
fn placeholder(width: u32, height: u32) -> String {
    format!("[figure: image/png, {width}x{height}]")
}

/// Presents figures inline on the controlling terminal.
pub struct TerminalPresenter {
    protocol: ImageProtocol,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            protocol: detect_protocol(),
        }
    }

    pub fn with_protocol(protocol: ImageProtocol) -> Self {
        Self { protocol }
    }

    pub fn protocol(&self) -> ImageProtocol {
        self.protocol
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FigurePresenter for TerminalPresenter {
    fn present(&mut self, figure: &FigureImage) -> Result<()> {
        let output = match self.protocol {
            ImageProtocol::Kitty => encode_kitty(&figure.encode_png()?),
            ImageProtocol::Iterm2 => encode_iterm2(&figure.encode_png()?),
            ImageProtocol::Unsupported => {
                debug!("Terminal has no inline-image support, printing placeholder");
                placeholder(figure.width(), figure.height())
            }
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }
}
